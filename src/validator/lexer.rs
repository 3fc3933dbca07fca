use logos::Logos;

/// Represents a lexical token in a standalone number literal.
/// This grammar accepts every literal form a number may take on its own:
/// integers, fractional forms including a bare leading or trailing dot, and
/// exponent notation.
///
/// There is no whitespace rule here. Interior whitespace fails to lex, which
/// makes the containing literal invalid.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum NumberToken {
    /// Fractional or exponent literals, such as `3.14`, `.5`, `5.` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Real,
    /// Integer literals, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
}

/// Represents a lexical token in a whole calculation line.
/// The line grammar is stricter about number forms than [`NumberToken`]: a
/// fractional part must have digits on both sides of the dot, so `.5` and
/// `5.` do not lex as numbers here.
///
/// Signs are separate tokens. The parser attaches one to a literal only when
/// it is written directly against the first digit.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum LineToken {
    /// Unsigned numeric literals, such as `42`, `3.14` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// Tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}
