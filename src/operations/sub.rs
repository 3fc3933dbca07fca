use crate::{
    error::CalcResult,
    number::Number,
    operations::core::{Operation, guard_magnitude},
    operator::OperatorSymbol,
};

/// The subtraction operation: `a - b`.
#[derive(Debug, Clone, Copy)]
pub struct Subtraction;

impl Operation for Subtraction {
    /// Subtracts the second operand from the first.
    ///
    /// Integer operands stay exact while the difference fits in 64 bits;
    /// otherwise the operands widen to floats before subtracting. The result
    /// passes through the shared overflow guard.
    fn compute(&self, a: Number, b: Number) -> CalcResult<Number> {
        let result = match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => match x.checked_sub(y) {
                Some(difference) => Number::Integer(difference),
                None => Number::Real(a.as_real() - b.as_real()),
            },
            _ => Number::Real(a.as_real() - b.as_real()),
        };

        guard_magnitude("Subtraction", a, self.symbol(), b, result)
    }

    fn symbol(&self) -> OperatorSymbol {
        OperatorSymbol::Sub
    }

    fn name(&self) -> &'static str {
        "subtraction"
    }
}
