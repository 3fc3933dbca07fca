/// One of the four supported operator symbols.
///
/// A symbol selects an arithmetic operation and carries no state of its own.
/// [`ALL`](Self::ALL) lists the symbols in the order the calculator registers
/// them: `+`, `-`, `*`, `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorSymbol {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl OperatorSymbol {
    /// Every supported symbol, in registration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the one-character text form of the symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Looks up the symbol matching the given text.
    ///
    /// # Parameters
    /// - `text`: Candidate symbol text, already trimmed.
    ///
    /// # Returns
    /// - `Some(OperatorSymbol)`: If the text is exactly one of `+ - * /`.
    /// - `None`: For any other text.
    #[must_use]
    pub fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperatorSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
