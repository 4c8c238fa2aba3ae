//! FILENAME: parser/src/config.rs
//! PURPOSE: Parser options that a data loader can set from its own config.
//! CONTEXT: Defaults match how the shipped data tables are written. Every
//! field has a serde default, so a loader config may name only the options
//! it changes.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Accept a formula whose last `(` is never closed, e.g. `(3+2)*(6/3`.
    /// The Fire Wall missile data depends on this.
    pub allow_unclosed_final_paren: bool,

    /// Fail when tokens remain after a complete expression, e.g. `1 2` or `1)`.
    pub reject_trailing: bool,

    /// Deepest nesting a formula may have, counting parentheses, unary
    /// operators and operator chains. Deeper formulas are rejected before
    /// they can exhaust the stack.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            allow_unclosed_final_paren: true,
            reject_trailing: true,
            max_depth: 128,
        }
    }
}
