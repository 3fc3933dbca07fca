/// Calculation errors.
///
/// Defines the single error taxonomy shared by validation, dispatch, and the
/// arithmetic operations. Every failure a calculation can produce is one of
/// its kinds, so callers can match on a broad category or a specific variant.
pub mod calculator_error;

pub use calculator_error::{CalcResult, CalculatorError};
