use crate::{number::Number, operator::OperatorSymbol};

/// Result type for validation, dispatch, and arithmetic.
pub type CalcResult<T> = Result<T, CalculatorError>;

#[derive(Debug)]
/// Represents all errors that a calculation can produce.
pub enum CalculatorError {
    /// The input text is not a well-formed number, operator, or calculation.
    InvalidInput {
        /// Details about why the input was rejected.
        details: String,
    },
    /// An operator symbol outside the registered set reached the dispatcher.
    InvalidOperation {
        /// The rejected symbol text.
        symbol: String,
        /// The registered symbols, in registration order.
        valid:  String,
    },
    /// The second operand of a division was zero.
    DivisionByZero,
    /// A result magnitude exceeded the representable range guard.
    Overflow {
        /// Display name of the operation that overflowed.
        operation: &'static str,
        /// The first operand.
        first:     Number,
        /// The symbol of the operation.
        symbol:    OperatorSymbol,
        /// The second operand.
        second:    Number,
    },
}

impl CalculatorError {
    /// Returns the category label shown before this error's message.
    ///
    /// ## Example
    /// ```
    /// use quadcalc::error::CalculatorError;
    ///
    /// assert_eq!(CalculatorError::DivisionByZero.category(), "Math Error");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "Input Error",
            Self::InvalidOperation { .. } => "Operation Error",
            Self::DivisionByZero => "Math Error",
            Self::Overflow { .. } => "Overflow Error",
        }
    }
}

impl std::fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { details } => write!(f, "{details}"),

            Self::InvalidOperation { symbol, valid } => {
                write!(f, "Invalid operation '{symbol}'. Valid operations: {valid}")
            },

            Self::DivisionByZero => write!(f, "Division by zero is not allowed"),

            Self::Overflow { operation,
                             first,
                             symbol,
                             second, } => {
                write!(f, "{operation} overflow: {first} {symbol} {second}")
            },
        }
    }
}

impl std::error::Error for CalculatorError {}
