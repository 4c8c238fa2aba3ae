//! FILENAME: parser/src/error.rs
//! PURPOSE: Lexical and syntax faults raised while parsing a CalcString.
//! CONTEXT: Every lex/parse function returns ParseResult and propagates with `?`.
//! The lenient `Parser::parse` entry point is the only place these are
//! caught; it logs them and falls back to a zero constant.

use crate::token::Token;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("invalid operator '{op}' at index {position}, expected '{op}='")]
    InvalidOperator { op: char, position: usize },

    #[error("invalid character {ch:?} at index {position}")]
    InvalidCharacter { ch: char, position: usize },

    #[error("unterminated string starting at index {position}")]
    UnterminatedString { position: usize },

    #[error("expected {expected}, found {found}")]
    Expected { expected: &'static str, found: Token },

    #[error("parenthesis not closed, found {found}")]
    UnclosedParenthesis { found: Token },

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("expected parenthesis, unary operator, function or value, found {found}")]
    UnexpectedToken { found: Token },

    #[error("{0} is not a function, property, or number")]
    NotAValue(Token),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("formula nested deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("unexpected {found} after expression")]
    TrailingInput { found: Token },
}

pub type ParseResult<T> = Result<T, ParseError>;
