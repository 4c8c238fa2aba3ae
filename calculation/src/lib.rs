//! FILENAME: calculation/src/lib.rs
//! PURPOSE: Library root for skill and missile calculation trees.
//! CONTEXT: The parser crate builds these trees from CalcStrings found in
//! the data tables; game code stores them on the owning record and
//! evaluates them whenever a value is needed.
//!
//! PIPELINE: CalcString --> Lexer --> Tokens --> Parser --> Calculation --> eval()
//!
//! SUPPORTED FEATURES:
//! - Integer arithmetic: +, -, *, / (truncating), ^ (power)
//! - Comparison: ==, !=, <, >, <=, >= (1 or 0)
//! - Conditionals: c ? a : b (short-circuit)
//! - Functions: min(a, b), max(a, b), rand(a, b)
//! - Property references: skill('Name'.lvl), miss('Name'.range), stat('Name'.accr)

pub mod ast;
pub mod calc_string;
pub mod evaluator;
pub mod operators;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use ast::{Calculation, PropertyReference};
pub use calc_string::CalcString;
pub use evaluator::{EvalError, EvalResult};
pub use operators::{BinaryOperator, Branch, TernaryOperator, UnaryOperator};
