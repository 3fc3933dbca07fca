use logos::Logos;

use crate::{
    error::{CalcResult, CalculatorError},
    number::Number,
    operator::OperatorSymbol,
    validator::lexer::{LineToken, NumberToken},
};

/// A parsed calculation, ready for dispatch.
///
/// Produced by [`parse_calculation_input`] from one line of input and handed
/// to the calculator, which consumes it immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    /// The first operand.
    pub first:    Number,
    /// The operator between the operands.
    pub operator: OperatorSymbol,
    /// The second operand.
    pub second:   Number,
}

/// Validates and converts text to a number.
///
/// The text is trimmed and then matched against the standalone literal
/// grammar: an optional sign followed by one integer or real literal, with
/// nothing else around it. Literals without a dot or exponent marker convert
/// to an exact integer; all others convert to a float.
///
/// # Parameters
/// - `text`: Raw operand text from the user.
///
/// # Returns
/// - `Ok(Number)`: The converted value.
/// - `Err(CalculatorError::InvalidInput)`: If the text is empty, malformed,
///   out of the representable range, or not convertible.
///
/// ## Example
/// ```
/// use quadcalc::{number::Number, validator::core::validate_number};
///
/// assert_eq!(validate_number("  42  ").unwrap(), Number::Integer(42));
/// assert_eq!(validate_number("-2.5").unwrap(), Number::Real(-2.5));
/// assert!(validate_number("5a").is_err());
/// ```
pub fn validate_number(text: &str) -> CalcResult<Number> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(CalculatorError::InvalidInput { details: "Empty input is not a valid number".to_string(), });
    }

    let tokens: Vec<_> = NumberToken::lexer(trimmed).collect();
    let literal = match tokens.as_slice() {
        [Ok(literal @ (NumberToken::Integer | NumberToken::Real))] => *literal,

        [Ok(NumberToken::Plus | NumberToken::Minus),
         Ok(literal @ (NumberToken::Integer | NumberToken::Real))] => *literal,

        _ => {
            return Err(CalculatorError::InvalidInput { details: format!("'{trimmed}' is not a valid number format"), })
        },
    };

    if literal == NumberToken::Integer {
        trimmed.parse()
               .map(Number::Integer)
               .map_err(|_| CalculatorError::InvalidInput { details: format!("'{trimmed}' is not a valid number"), })
    } else {
        let value: f64 =
            trimmed.parse()
                   .map_err(|_| CalculatorError::InvalidInput { details: format!("'{trimmed}' is not a valid number"), })?;

        if value.is_finite() {
            Ok(Number::Real(value))
        } else {
            Err(CalculatorError::InvalidInput { details: format!("Number '{trimmed}' is out of range"), })
        }
    }
}

/// Validates an operator symbol.
///
/// # Parameters
/// - `text`: Raw operator text from the user.
///
/// # Returns
/// - `Ok(OperatorSymbol)`: The matching symbol.
/// - `Err(CalculatorError::InvalidInput)`: If the text is empty or not one of
///   the supported symbols. The message lists the supported set in sorted
///   order.
///
/// ## Example
/// ```
/// use quadcalc::{operator::OperatorSymbol, validator::core::validate_operator};
///
/// assert_eq!(validate_operator("  *  ").unwrap(), OperatorSymbol::Mul);
/// assert!(validate_operator("%").is_err());
/// ```
pub fn validate_operator(text: &str) -> CalcResult<OperatorSymbol> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(CalculatorError::InvalidInput { details: "Empty operation is not valid".to_string(), });
    }

    OperatorSymbol::from_symbol(trimmed).ok_or_else(|| {
                                            CalculatorError::InvalidInput { details:
                                                format!("'{trimmed}' is not a valid operation. Valid operations: {}",
                                                        sorted_symbols()), }
                                        })
}

/// Parses one line of input into a calculation request.
///
/// The line must have the shape `number operator number`. Number literals use
/// the stricter line grammar: a fractional part needs digits on both sides of
/// the dot, and a sign counts as part of a literal only when written directly
/// against its first digit. The matched pieces are then re-validated through
/// [`validate_number`] and [`validate_operator`].
///
/// # Parameters
/// - `line`: One full line of user input.
///
/// # Returns
/// - `Ok(CalculationRequest)`: The parsed operands and operator.
/// - `Err(CalculatorError::InvalidInput)`: If the line is empty, does not
///   match the expected shape, or holds an operand that fails validation.
///
/// ## Example
/// ```
/// use quadcalc::{number::Number, operator::OperatorSymbol,
///                validator::core::parse_calculation_input};
///
/// let request = parse_calculation_input("10-2").unwrap();
///
/// assert_eq!(request.first, Number::Integer(10));
/// assert_eq!(request.operator, OperatorSymbol::Sub);
/// assert_eq!(request.second, Number::Integer(2));
/// ```
pub fn parse_calculation_input(line: &str) -> CalcResult<CalculationRequest> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Err(CalculatorError::InvalidInput { details: "Empty input".to_string(), });
    }

    let mut tokens = Vec::new();

    for (token, span) in LineToken::lexer(trimmed).spanned() {
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(format_error()),
        }
    }

    let (first, operator, second) = match tokens.as_slice() {
        [(LineToken::Number, first_span), (op, op_span), (LineToken::Number, second_span)]
            if is_operator(*op) =>
        {
            (first_span.clone(), op_span.clone(), second_span.clone())
        },

        [(sign, sign_span),
         (LineToken::Number, first_span),
         (op, op_span),
         (LineToken::Number, second_span)]
            if is_sign(*sign) && sign_span.end == first_span.start && is_operator(*op) =>
        {
            (sign_span.start..first_span.end, op_span.clone(), second_span.clone())
        },

        [(LineToken::Number, first_span),
         (op, op_span),
         (sign, sign_span),
         (LineToken::Number, second_span)]
            if is_operator(*op) && is_sign(*sign) && sign_span.end == second_span.start =>
        {
            (first_span.clone(), op_span.clone(), sign_span.start..second_span.end)
        },

        [(lead, lead_span),
         (LineToken::Number, first_span),
         (op, op_span),
         (trail, trail_span),
         (LineToken::Number, second_span)]
            if is_sign(*lead)
               && lead_span.end == first_span.start
               && is_operator(*op)
               && is_sign(*trail)
               && trail_span.end == second_span.start =>
        {
            (lead_span.start..first_span.end, op_span.clone(), trail_span.start..second_span.end)
        },

        _ => return Err(format_error()),
    };

    Ok(CalculationRequest { first:    validate_number(&trimmed[first])?,
                            operator: validate_operator(&trimmed[operator])?,
                            second:   validate_number(&trimmed[second])?, })
}

/// Builds the supported symbol list in sorted order for error messages.
fn sorted_symbols() -> String {
    let mut symbols: Vec<_> = OperatorSymbol::ALL.iter()
                                                 .map(|symbol| symbol.as_str())
                                                 .collect();
    symbols.sort_unstable();
    symbols.join(", ")
}

/// Builds the error for lines that do not match `number operation number`.
fn format_error() -> CalculatorError {
    CalculatorError::InvalidInput { details:
                                        "Invalid input format. Use: 'number operation number' (e.g., '5 + 3')".to_string(), }
}

/// Tests whether the token can act as the operator of a calculation.
const fn is_operator(token: LineToken) -> bool {
    matches!(token,
             LineToken::Plus | LineToken::Minus | LineToken::Star | LineToken::Slash)
}

/// Tests whether the token can act as the sign of a literal.
const fn is_sign(token: LineToken) -> bool {
    matches!(token, LineToken::Plus | LineToken::Minus)
}
