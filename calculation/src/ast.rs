//! FILENAME: calculation/src/ast.rs
//! PURPOSE: Defines the Calculation tree built from a CalcString.
//! CONTEXT: The parser converts a formula such as
//! `skill('Sacrifice'.blvl) > 3 ? min(50, lvl) : 10` into this structure
//! once, at data-load time. The tree is then stored next to the owning
//! skill or missile record and evaluated on demand (see evaluator.rs).
//!
//! SUPPORTED NODES:
//! - Constants: 0, 455
//! - Unary prefix operations: +, -
//! - Binary operations: + - * / ^ == != < > <= >=, and min/max/rand calls
//! - Ternary conditionals: c ? a : b
//! - Property references: skill('Name'.qualifier), or a bare qualifier
//!   resolved against the record being loaded

use crate::operators::{BinaryOperator, TernaryOperator, UnaryOperator};
use serde::Serialize;

/// A parsed formula. Trees are immutable once built and contain no
/// back-references, so they can be evaluated from any number of threads.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Calculation {
    /// An integer literal.
    Constant(i64),

    /// A prefix operation: op child (e.g., -5).
    Unary {
        op: UnaryOperator,
        child: Box<Calculation>,
    },

    /// A binary operation or built-in function call: left op right
    /// (e.g., 5 + 3, min(lvl, 20)).
    Binary {
        op: BinaryOperator,
        left: Box<Calculation>,
        right: Box<Calculation>,
    },

    /// A conditional: condition ? then : otherwise.
    Ternary {
        op: TernaryOperator,
        condition: Box<Calculation>,
        then: Box<Calculation>,
        otherwise: Box<Calculation>,
    },

    /// A reference to a game value this crate does not resolve.
    Property(PropertyReference),
}

/// Names an external value, e.g. `skill('Sacrifice'.blvl)` is
/// kind `skill`, name `Sacrifice`, qualifier `blvl`.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize)]
pub struct PropertyReference {
    pub kind: String,
    pub name: String,
    pub qualifier: String,
}

impl PropertyReference {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        PropertyReference {
            kind: kind.into(),
            name: name.into(),
            qualifier: qualifier.into(),
        }
    }
}

impl Default for Calculation {
    fn default() -> Self {
        Calculation::Constant(0)
    }
}

impl Calculation {
    pub fn unary(op: UnaryOperator, child: Calculation) -> Self {
        Calculation::Unary {
            op,
            child: Box::new(child),
        }
    }

    pub fn binary(op: BinaryOperator, left: Calculation, right: Calculation) -> Self {
        Calculation::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ternary(
        op: TernaryOperator,
        condition: Calculation,
        then: Calculation,
        otherwise: Calculation,
    ) -> Self {
        Calculation::Ternary {
            op,
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }

    pub fn property(
        kind: impl Into<String>,
        name: impl Into<String>,
        qualifier: impl Into<String>,
    ) -> Self {
        Calculation::Property(PropertyReference::new(kind, name, qualifier))
    }

    /// Returns every property reference in the tree, in source order.
    /// Loaders use this to check what a formula depends on before the
    /// stat system is available.
    pub fn references(&self) -> Vec<&PropertyReference> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a PropertyReference>) {
        match self {
            Calculation::Constant(_) => {}
            Calculation::Unary { child, .. } => child.collect_references(refs),
            Calculation::Binary { left, right, .. } => {
                left.collect_references(refs);
                right.collect_references(refs);
            }
            Calculation::Ternary {
                condition,
                then,
                otherwise,
                ..
            } => {
                condition.collect_references(refs);
                then.collect_references(refs);
                otherwise.collect_references(refs);
            }
            Calculation::Property(reference) => refs.push(reference),
        }
    }

    /// True if the tree reads no game state and draws no random numbers,
    /// i.e. every evaluation yields the same result.
    pub fn is_constant(&self) -> bool {
        match self {
            Calculation::Constant(_) => true,
            Calculation::Unary { child, .. } => child.is_constant(),
            Calculation::Binary { op, left, right } => {
                !op.is_random() && left.is_constant() && right.is_constant()
            }
            Calculation::Ternary {
                condition,
                then,
                otherwise,
                ..
            } => condition.is_constant() && then.is_constant() && otherwise.is_constant(),
            Calculation::Property(_) => false,
        }
    }

    /// Returns the value of a constant tree, or None if the tree depends on
    /// game state, uses `rand`, or fails to evaluate.
    pub fn fold(&self) -> Option<i64> {
        if !self.is_constant() {
            return None;
        }
        self.eval().ok()
    }
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Calculation::Constant(value) => write!(f, "Constant({})", value),
            Calculation::Unary { op, child } => write!(f, "Unary({}, {})", op, child),
            Calculation::Binary { op, left, right } if op.is_function() => {
                write!(f, "Call({}, {}, {})", op, left, right)
            }
            Calculation::Binary { op, left, right } => {
                write!(f, "Binary({}, {}, {})", op, left, right)
            }
            Calculation::Ternary {
                condition,
                then,
                otherwise,
                ..
            } => write!(f, "Ternary({}, {}, {})", condition, then, otherwise),
            Calculation::Property(reference) => write!(f, "{}", reference),
        }
    }
}

impl std::fmt::Display for PropertyReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Property({}, '{}', {})",
            self.kind, self.name, self.qualifier
        )
    }
}
