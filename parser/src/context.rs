//! FILENAME: parser/src/context.rs
//! PURPOSE: The record a batch of formulas belongs to.
//! CONTEXT: Inside a skill's row, a bare name such as `lvl` means
//! `skill('<that skill>'.lvl)`. The context supplies the kind and name for
//! those bare qualifiers and is passed explicitly to every parse call.

use calculation::Calculation;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ReferenceContext {
    pub kind: String,
    pub name: String,
}

impl ReferenceContext {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ReferenceContext {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Builds the property reference for a bare qualifier.
    pub fn reference(&self, qualifier: impl Into<String>) -> Calculation {
        Calculation::property(self.kind.clone(), self.name.clone(), qualifier)
    }
}
