use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    ReservedWord,
    DataType,
    Operator,
    Value,
    Boolean,
    Punctuation,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::ReservedWord => "Reserved Word",
            TokenKind::DataType => "Data Type",
            TokenKind::Operator => "Operator",
            TokenKind::Value => "Value",
            TokenKind::Boolean => "Boolean",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact lexeme, quotes included for string literals.
    pub text: String,
    /// Line in effect when the token was emitted, 1-based.
    pub line: usize,
}

/// Tokens in source order. Insertion order is the only ordering guarantee
/// consumers may rely on.
pub type TokenStream = Vec<Token>;

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line no: {}, Token: {}, Type: {}",
            self.line, self.text, self.kind
        )
    }
}
