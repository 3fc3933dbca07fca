use crate::{
    error::CalcResult,
    number::Number,
    operations::core::{Operation, guard_magnitude},
    operator::OperatorSymbol,
};

/// The addition operation: `a + b`.
#[derive(Debug, Clone, Copy)]
pub struct Addition;

impl Operation for Addition {
    /// Adds two numbers.
    ///
    /// Integer operands stay exact while the sum fits in 64 bits; otherwise
    /// the operands widen to floats before adding. The result passes through
    /// the shared overflow guard.
    fn compute(&self, a: Number, b: Number) -> CalcResult<Number> {
        let result = match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => match x.checked_add(y) {
                Some(sum) => Number::Integer(sum),
                None => Number::Real(a.as_real() + b.as_real()),
            },
            _ => Number::Real(a.as_real() + b.as_real()),
        };

        guard_magnitude("Addition", a, self.symbol(), b, result)
    }

    fn symbol(&self) -> OperatorSymbol {
        OperatorSymbol::Add
    }

    fn name(&self) -> &'static str {
        "addition"
    }
}
