//! FILENAME: parser/src/token.rs
//! PURPOSE: Token definitions for the CalcString lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.
//! Symbols keep their text (`"<="`, `"?"`) so the parser can look them up in
//! the operator tables directly.

/// The class of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// An identifier such as `skill`, `lvl` or `par1`.
    Name,
    /// A single-quoted string such as `'Sacrifice'`, without the quotes.
    String,
    /// An operator or punctuation: `^ == != > >= < <= + - / * . , : ? ( )`.
    Symbol,
    /// An unsigned decimal integer.
    Number,
    EndOfInput,
}

/// A lexical token of a CalcString.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput, "")
    }

    /// True if this is the symbol `symbol`.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == symbol
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Name => write!(f, "Name"),
            TokenKind::String => write!(f, "String"),
            TokenKind::Symbol => write!(f, "Symbol"),
            TokenKind::Number => write!(f, "Number"),
            TokenKind::EndOfInput => write!(f, "EndOfInput"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::String => write!(f, "String '{}'", self.text),
            kind => write!(f, "{} {:?}", kind, self.text),
        }
    }
}
