use crate::{
    error::{CalcResult, CalculatorError},
    number::Number,
    operations::{add::Addition, core::Operation, div::Division, mul::Multiplication,
                 sub::Subtraction},
    operator::OperatorSymbol,
    validator::core::parse_calculation_input,
};

/// The calculator facade owning the operation registry.
///
/// The registry maps each supported symbol to its operation. It is built once
/// and never changes afterwards, so `+`, `-`, `*`, `/` keep their
/// registration order everywhere the registry is listed or reported.
pub struct Calculator {
    operations: Vec<Box<dyn Operation>>,
}

impl Calculator {
    /// Creates a calculator with the four standard operations registered.
    #[must_use]
    pub fn new() -> Self {
        Self { operations: vec![Box::new(Addition),
                                Box::new(Subtraction),
                                Box::new(Multiplication),
                                Box::new(Division)], }
    }

    /// Tests whether a symbol selects a registered operation.
    ///
    /// ## Example
    /// ```
    /// use quadcalc::calculator::Calculator;
    ///
    /// let calculator = Calculator::new();
    ///
    /// assert!(calculator.is_valid_operation("*"));
    /// assert!(!calculator.is_valid_operation("%"));
    /// ```
    #[must_use]
    pub fn is_valid_operation(&self, symbol: &str) -> bool {
        self.find_operation(symbol).is_some()
    }

    /// Performs one calculation.
    ///
    /// # Parameters
    /// - `first`: The first operand.
    /// - `symbol`: Text form of the operator symbol.
    /// - `second`: The second operand.
    ///
    /// # Returns
    /// - `Ok(Number)`: The result of the operation.
    /// - `Err(CalculatorError::InvalidOperation)`: If the symbol is not
    ///   registered. The message lists the valid symbols in registration
    ///   order.
    /// - Any failure of the operation itself, propagated unchanged.
    pub fn calculate(&self, first: Number, symbol: &str, second: Number) -> CalcResult<Number> {
        let Some(operation) = self.find_operation(symbol) else {
            return Err(CalculatorError::InvalidOperation { symbol: symbol.to_string(),
                                                           valid:  self.symbol_list(), });
        };

        operation.compute(first, second)
    }

    /// Returns the registered `(symbol, name)` pairs in registration order.
    #[must_use]
    pub fn available_operations(&self) -> Vec<(OperatorSymbol, &'static str)> {
        self.operations
            .iter()
            .map(|operation| (operation.symbol(), operation.name()))
            .collect()
    }

    /// Parses a line and performs the calculation it describes.
    ///
    /// # Errors
    /// Propagates validation failures from parsing and any failure of the
    /// dispatched operation.
    ///
    /// ## Example
    /// ```
    /// use quadcalc::{calculator::Calculator, number::Number};
    ///
    /// let calculator = Calculator::new();
    ///
    /// assert_eq!(calculator.evaluate("5 + 3").unwrap(), Number::Integer(8));
    /// assert_eq!(calculator.evaluate("15 / 3").unwrap(), Number::Real(5.0));
    /// ```
    pub fn evaluate(&self, line: &str) -> CalcResult<Number> {
        let request = parse_calculation_input(line)?;

        self.calculate(request.first, request.operator.as_str(), request.second)
    }

    fn find_operation(&self, symbol: &str) -> Option<&dyn Operation> {
        self.operations
            .iter()
            .find(|operation| operation.symbol().as_str() == symbol)
            .map(|operation| &**operation)
    }

    fn symbol_list(&self) -> String {
        self.operations
            .iter()
            .map(|operation| operation.symbol().as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
