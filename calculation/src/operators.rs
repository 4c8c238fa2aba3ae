//! FILENAME: calculation/src/operators.rs
//! PURPOSE: The integer functions carried by Unary, Binary and Ternary nodes.
//! CONTEXT: The parser maps symbols (`+`, `>=`, `?`) and built-in function
//! names (`min`, `max`, `rand`) onto these enums. Evaluation calls `apply`
//! with already-evaluated operands, so every operator here is a plain
//! function of integers. `rand` is the only one that needs a random source.
//!
//! ARITHMETIC:
//! - `+ - *` and negation wrap on overflow
//! - `/` truncates toward zero; a zero divisor is an error, never a value
//! - `^` goes through f64 and truncates back to an integer
//! - comparisons yield 1 for true and 0 for false

use crate::evaluator::{EvalError, EvalResult};
use rand::Rng;
use serde::Serialize;

/// Prefix operators.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum UnaryOperator {
    Plus,   // +
    Negate, // -
}

impl UnaryOperator {
    pub fn apply(self, value: i64) -> i64 {
        match self {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => value.wrapping_neg(),
        }
    }
}

/// Two-operand operators, including the built-in two-argument functions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum BinaryOperator {
    // Comparison operators (lowest precedence)
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=

    // Arithmetic operators
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Power,    // ^

    // Built-in functions, called as name(a, b)
    Min,
    Max,
    Rand,
}

impl BinaryOperator {
    /// Applies the operator to two evaluated operands.
    /// `rng` is only consulted by `Rand`.
    pub fn apply<R: Rng + ?Sized>(self, left: i64, right: i64, rng: &mut R) -> EvalResult<i64> {
        let value = match self {
            BinaryOperator::Equal => (left == right) as i64,
            BinaryOperator::NotEqual => (left != right) as i64,
            BinaryOperator::Less => (left < right) as i64,
            BinaryOperator::Greater => (left > right) as i64,
            BinaryOperator::LessEqual => (left <= right) as i64,
            BinaryOperator::GreaterEqual => (left >= right) as i64,
            BinaryOperator::Add => left.wrapping_add(right),
            BinaryOperator::Subtract => left.wrapping_sub(right),
            BinaryOperator::Multiply => left.wrapping_mul(right),
            BinaryOperator::Divide => divide(left, right)?,
            BinaryOperator::Power => (left as f64).powf(right as f64) as i64,
            BinaryOperator::Min => left.min(right),
            BinaryOperator::Max => left.max(right),
            BinaryOperator::Rand => {
                if rng.gen_bool(0.5) {
                    left
                } else {
                    right
                }
            }
        };
        Ok(value)
    }

    /// True for operators that are written as `name(a, b)` rather than infix.
    pub fn is_function(self) -> bool {
        matches!(
            self,
            BinaryOperator::Min | BinaryOperator::Max | BinaryOperator::Rand
        )
    }

    /// True if repeated evaluation with the same operands can differ.
    pub fn is_random(self) -> bool {
        self == BinaryOperator::Rand
    }
}

fn divide(left: i64, right: i64) -> EvalResult<i64> {
    if right == 0 {
        return Err(EvalError::DivisionByZero { dividend: left });
    }
    left.checked_div(right).ok_or(EvalError::Overflow {
        op: BinaryOperator::Divide,
        left,
        right,
    })
}

/// The conditional operator `c ? a : b`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TernaryOperator {
    Conditional,
}

/// Which branch of a ternary node to evaluate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Branch {
    Then,
    Else,
}

impl TernaryOperator {
    /// Picks a branch from the evaluated condition. Only the chosen branch
    /// is evaluated afterwards.
    pub fn select(self, condition: i64) -> Branch {
        match self {
            TernaryOperator::Conditional => {
                if condition != 0 {
                    Branch::Then
                } else {
                    Branch::Else
                }
            }
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Plus => write!(f, "+"),
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Equal => write!(f, "=="),
            BinaryOperator::NotEqual => write!(f, "!="),
            BinaryOperator::Less => write!(f, "<"),
            BinaryOperator::Greater => write!(f, ">"),
            BinaryOperator::LessEqual => write!(f, "<="),
            BinaryOperator::GreaterEqual => write!(f, ">="),
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Power => write!(f, "^"),
            BinaryOperator::Min => write!(f, "min"),
            BinaryOperator::Max => write!(f, "max"),
            BinaryOperator::Rand => write!(f, "rand"),
        }
    }
}

impl std::fmt::Display for TernaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TernaryOperator::Conditional => write!(f, "?:"),
        }
    }
}
