use crate::{
    error::{CalcResult, CalculatorError},
    number::Number,
    operator::OperatorSymbol,
};

/// Largest result magnitude any operation may produce.
///
/// Results beyond this bound are reported as overflow. The check is a coarse
/// magnitude guard on the finished result, not IEEE 754 overflow detection,
/// so an infinite float result trips it as well.
pub const OVERFLOW_LIMIT: f64 = 1e308;

/// A pure arithmetic operation over two numbers.
///
/// Implementations are stateless unit structs, registered once at startup and
/// shared for the process lifetime. A single instance may serve concurrent
/// callers.
pub trait Operation: Send + Sync {
    /// Computes the operation on two operands.
    ///
    /// # Errors
    /// Returns a typed failure when the operation cannot produce an in-range
    /// result, such as division by zero or an overflowing magnitude.
    fn compute(&self, a: Number, b: Number) -> CalcResult<Number>;

    /// Returns the symbol that selects this operation.
    fn symbol(&self) -> OperatorSymbol;

    /// Returns the lowercase display name of this operation.
    fn name(&self) -> &'static str;
}

/// Applies the overflow guard to a finished result.
///
/// # Parameters
/// - `operation`: Capitalized operation name for the error message.
/// - `first`: The first operand.
/// - `symbol`: The symbol of the operation.
/// - `second`: The second operand.
/// - `result`: The computed result to check.
///
/// # Returns
/// - `Ok(Number)`: The result, when its magnitude stays within bounds.
/// - `Err(CalculatorError::Overflow)`: When the magnitude exceeds
///   [`OVERFLOW_LIMIT`].
pub(crate) fn guard_magnitude(operation: &'static str,
                              first: Number,
                              symbol: OperatorSymbol,
                              second: Number,
                              result: Number)
                              -> CalcResult<Number> {
    if result.magnitude() > OVERFLOW_LIMIT {
        return Err(CalculatorError::Overflow { operation,
                                               first,
                                               symbol,
                                               second });
    }

    Ok(result)
}
