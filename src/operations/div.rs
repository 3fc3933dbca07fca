use crate::{
    error::{CalcResult, CalculatorError},
    number::Number,
    operations::core::{Operation, guard_magnitude},
    operator::OperatorSymbol,
};

/// The division operation: `a / b`.
#[derive(Debug, Clone, Copy)]
pub struct Division;

impl Operation for Division {
    /// Divides the first operand by the second.
    ///
    /// A zero divisor is rejected before computing, whichever representation
    /// it arrives in. The quotient is always a float, and the result passes
    /// through the shared overflow guard.
    fn compute(&self, a: Number, b: Number) -> CalcResult<Number> {
        if b.is_zero() {
            return Err(CalculatorError::DivisionByZero);
        }

        let result = Number::Real(a.as_real() / b.as_real());

        guard_magnitude("Division", a, self.symbol(), b, result)
    }

    fn symbol(&self) -> OperatorSymbol {
        OperatorSymbol::Div
    }

    fn name(&self) -> &'static str {
        "division"
    }
}
