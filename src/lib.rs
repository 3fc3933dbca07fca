//! # quadcalc
//!
//! quadcalc is a four-function command line calculator written in Rust.
//! It validates free-form calculation lines, dispatches them to the matching
//! arithmetic operation, and renders results or category-labeled errors, with
//! an interactive REPL mode on top.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{calculator::Calculator, error::CalcResult, number::Number};

/// Dispatches validated calculations to registered operations.
///
/// This module declares the `Calculator` facade that owns the operation
/// registry. It looks up operations by their symbol, reports the valid set
/// when a symbol is unknown, and exposes a one-call entry point that runs the
/// whole validate-dispatch-compute pipeline on a line of text.
///
/// # Responsibilities
/// - Registers the four standard operations in a fixed order.
/// - Dispatches `(number, symbol, number)` requests to the matching
///   operation.
/// - Lists the registered operations for display and error messages.
pub mod calculator;
/// Provides the unified error type for validation and arithmetic.
///
/// This module defines every failure a calculation can produce, from
/// malformed input text to a zero divisor or an overflowing result. Each kind
/// carries the details its message needs and maps to the category label shown
/// to the user.
///
/// # Responsibilities
/// - Defines the error enum covering input, dispatch, and arithmetic
///   failures.
/// - Renders exact user-facing messages through `Display`.
/// - Maps each error kind to its display category.
pub mod error;
/// Defines the operand value representation.
///
/// Numbers are either exact 64-bit integers or double precision floats, and
/// carry the conversion and inspection helpers the operations need.
pub mod number;
/// Implements the arithmetic operations.
///
/// This module declares the `Operation` trait and one implementation per
/// supported operation. Integer arithmetic stays exact while it fits and
/// widens to floats when it would not, and every result passes a shared
/// magnitude guard before it is returned.
///
/// # Responsibilities
/// - Defines the operation seam the calculator dispatches through.
/// - Implements addition, subtraction, multiplication, and division.
/// - Enforces the overflow limit on every finished result.
pub mod operations;
/// Defines the operator symbol vocabulary.
///
/// A small closed enum of the four supported symbols with text conversions in
/// both directions.
pub mod operator;
/// Drives the read-eval-print loop.
///
/// This module wraps the calculator in a line-oriented front end: it
/// recognizes the control tokens, renders results and category-labeled
/// errors, and runs either an interactive rustyline session or a plain batch
/// reader over piped input.
///
/// # Responsibilities
/// - Processes single lines into quit, help, or calculation outcomes.
/// - Runs the interactive loop with prompt, history, and farewells.
/// - Replays files and piped input through the same line processing.
pub mod shell;
/// Validates and parses raw input text.
///
/// This module turns untrusted text into typed values: standalone number
/// validation, operator validation, and the calculation line parser that
/// splits a line into two operands and an operator. Each validator reports
/// a precise message describing what was wrong.
///
/// # Responsibilities
/// - Defines the two lexer grammars input is checked against.
/// - Converts literals to exact integers or floats.
/// - Splits calculation lines and re-validates every piece.
pub mod validator;

/// Evaluates a single calculation line.
///
/// This function builds a calculator, validates and parses the line, and
/// performs the calculation it describes. It is the one-call entry point for
/// callers that do not need to keep a calculator around.
///
/// # Errors
/// Returns an error if the line fails validation or the operation fails, for
/// example on division by zero.
///
/// # Examples
/// ```
/// use quadcalc::{evaluate_line, number::Number};
///
/// let result = evaluate_line("5 + 3");
/// assert_eq!(result.unwrap(), Number::Integer(8));
///
/// // Division by zero is reported as an error, not a panic.
/// let result = evaluate_line("5 / 0");
/// assert!(result.is_err());
/// ```
pub fn evaluate_line(line: &str) -> CalcResult<Number> {
    Calculator::new().evaluate(line)
}
