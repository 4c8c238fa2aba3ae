//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the CalcString formula parser.
//! CONTEXT: This crate exposes the lexer, operator tables, and parser
//! needed to convert formulas from the skill, missile and item data tables
//! into Calculation trees (see the calculation crate).
//!
//! PIPELINE: CalcString --> Lexer --> Tokens --> Parser --> Calculation --> eval()
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /, ^ (power, right-associative)
//! - Comparison: ==, !=, <, >, <=, >=
//! - Conditionals: c ? a : b (right-associative)
//! - Unary prefix: +, -
//! - Functions: min(a, b), max(a, b), rand(a, b)
//! - Property references: skill('Sacrifice'.blvl), miss('Fire Wall'.range), stat('x'.y)
//! - Bare qualifiers (lvl, ln12) resolved against the current record
//! - Parentheses for grouping

pub mod config;
pub mod context;
pub mod error;
pub mod lexer;
pub mod operators;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use config::ParserConfig;
pub use context::ReferenceContext;
pub use error::{ParseError, ParseResult};
pub use lexer::Lexer;
pub use parser::{parse, Parser};
pub use token::{Token, TokenKind};
