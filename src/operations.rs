/// The addition operation.
///
/// Adds two numbers, widening to floats when an integer sum would not fit.
pub mod add;
/// Shared operation machinery.
///
/// Declares the [`Operation`](core::Operation) trait, the overflow limit, and
/// the magnitude guard every operation applies to its result.
pub mod core;
/// The division operation.
///
/// Divides two numbers, rejecting a zero divisor before computing.
pub mod div;
/// The multiplication operation.
///
/// Multiplies two numbers, widening to floats when an integer product would
/// not fit.
pub mod mul;
/// The subtraction operation.
///
/// Subtracts two numbers, widening to floats when an integer difference would
/// not fit.
pub mod sub;
