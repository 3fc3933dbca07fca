/// Represents a validated operand value.
///
/// A number is either an exact integer or a double precision float. The
/// variant is chosen during validation: literals without a fractional part or
/// exponent marker become [`Integer`](Self::Integer), everything else becomes
/// [`Real`](Self::Real).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Number {
    /// Converts the number to an `f64` for floating-point arithmetic.
    ///
    /// Integers beyond 2^53 lose precision in the conversion, matching the
    /// usual widening rules for mixed arithmetic.
    ///
    /// # Returns
    /// The value as a double precision float.
    ///
    /// ## Example
    /// ```
    /// use quadcalc::number::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    /// Returns `true` if the value equals zero, including negative zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(value) => value == 0,
            Self::Real(value) => value == 0.0,
        }
    }

    /// Returns the absolute magnitude of the value as an `f64`.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.as_real().abs()
    }

    /// Returns `true` if the number is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the number is [`Real`](Self::Real).
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real(..))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            // The Debug form keeps the trailing `.0`, so a float result stays
            // visibly a float.
            Self::Real(value) => write!(f, "{value:?}"),
        }
    }
}
