//! FILENAME: calculation/src/evaluator.rs
//! PURPOSE: Evaluates Calculation trees to integers.
//! CONTEXT: Trees are built once when the data tables load and evaluated
//! many times afterwards, whenever the game needs a formula's current value.
//! Evaluation is synchronous and allocation-free. The only source of
//! non-determinism is `rand`, which draws from a caller-supplied generator
//! (`eval_with`) or the thread-local one (`eval`).
//!
//! RULES:
//! - Ternary nodes evaluate the condition, then only the selected branch
//! - Property references evaluate to 1; resolving them is the stat system's job
//! - Division by zero is reported as an error and never turned into a number

use crate::ast::Calculation;
use crate::operators::{BinaryOperator, Branch};
use rand::Rng;
use thiserror::Error;

/// Arithmetic faults raised while evaluating a tree.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EvalError {
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    #[error("integer overflow: {left} {op} {right}")]
    Overflow {
        op: BinaryOperator,
        left: i64,
        right: i64,
    },
}

pub type EvalResult<T> = Result<T, EvalError>;

impl Calculation {
    /// Evaluates the tree, drawing `rand` results from the thread-local
    /// generator.
    pub fn eval(&self) -> EvalResult<i64> {
        self.eval_with(&mut rand::thread_rng())
    }

    /// Evaluates the tree with an injected random source. Seeding the
    /// source identically makes `rand` sequences reproducible.
    pub fn eval_with<R: Rng + ?Sized>(&self, rng: &mut R) -> EvalResult<i64> {
        match self {
            Calculation::Constant(value) => Ok(*value),

            Calculation::Unary { op, child } => Ok(op.apply(child.eval_with(rng)?)),

            Calculation::Binary { op, left, right } => {
                let left = left.eval_with(rng)?;
                let right = right.eval_with(rng)?;
                op.apply(left, right, rng)
            }

            Calculation::Ternary {
                op,
                condition,
                then,
                otherwise,
            } => match op.select(condition.eval_with(rng)?) {
                Branch::Then => then.eval_with(rng),
                Branch::Else => otherwise.eval_with(rng),
            },

            Calculation::Property(_) => Ok(1),
        }
    }
}
