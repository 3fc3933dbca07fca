use crate::{
    error::CalcResult,
    number::Number,
    operations::core::{Operation, guard_magnitude},
    operator::OperatorSymbol,
};

/// The multiplication operation: `a * b`.
#[derive(Debug, Clone, Copy)]
pub struct Multiplication;

impl Operation for Multiplication {
    /// Multiplies two numbers.
    ///
    /// Integer operands stay exact while the product fits in 64 bits;
    /// otherwise the operands widen to floats before multiplying. The result
    /// passes through the shared overflow guard.
    fn compute(&self, a: Number, b: Number) -> CalcResult<Number> {
        let result = match (a, b) {
            (Number::Integer(x), Number::Integer(y)) => match x.checked_mul(y) {
                Some(product) => Number::Integer(product),
                None => Number::Real(a.as_real() * b.as_real()),
            },
            _ => Number::Real(a.as_real() * b.as_real()),
        };

        guard_magnitude("Multiplication", a, self.symbol(), b, result)
    }

    fn symbol(&self) -> OperatorSymbol {
        OperatorSymbol::Mul
    }

    fn name(&self) -> &'static str {
        "multiplication"
    }
}
