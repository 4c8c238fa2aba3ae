//! FILENAME: calculation/src/calc_string.rs
//! PURPOSE: A raw formula exactly as it appears in a data table column.
//! CONTEXT: Some records only display a formula (item descriptions, unique
//! item parameters) and never evaluate it, so they keep the text unparsed.
//! Records that evaluate a formula hand the CalcString to the parser.

use serde::{Deserialize, Serialize};

/// Unparsed formula text.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalcString(String);

impl CalcString {
    pub fn new(text: impl Into<String>) -> Self {
        CalcString(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for empty or whitespace-only columns, which parse to zero.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for CalcString {
    fn from(text: &str) -> Self {
        CalcString(text.to_string())
    }
}

impl From<String> for CalcString {
    fn from(text: String) -> Self {
        CalcString(text)
    }
}

impl AsRef<str> for CalcString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CalcString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
