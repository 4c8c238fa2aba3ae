//! FILENAME: parser/src/operators.rs
//! PURPOSE: Static operator, function and property-kind tables.
//! CONTEXT: The parser looks symbols and names up here. The tables are
//! plain immutable data shared by every Parser in the process.
//!
//! PRECEDENCE (low to high):
//!   0  ? :            right
//!   1  == !=          left
//!   2  < > <= >=      left
//!   3  + - (binary)   left
//!   4  + - (unary)
//!   5  * /            left
//!   6  ^              right

use calculation::{BinaryOperator, TernaryOperator, UnaryOperator};

pub const TERNARY: u8 = 0;
pub const EQUALITY: u8 = 1;
pub const RELATIONAL: u8 = 2;
pub const ADDITIVE: u8 = 3;
pub const UNARY: u8 = 4;
pub const MULTIPLICATIVE: u8 = 5;
pub const POWER: u8 = 6;

/// An infix operator.
#[derive(Debug)]
pub struct BinaryOperation {
    pub symbol: &'static str,
    pub precedence: u8,
    pub right_associative: bool,
    pub operator: BinaryOperator,
}

/// A prefix operator.
#[derive(Debug)]
pub struct UnaryOperation {
    pub symbol: &'static str,
    pub precedence: u8,
    pub operator: UnaryOperator,
}

/// A mixfix operator: `symbol` opens it and `marker` separates the branches.
#[derive(Debug)]
pub struct TernaryOperation {
    pub symbol: &'static str,
    pub marker: &'static str,
    pub precedence: u8,
    pub right_associative: bool,
    pub operator: TernaryOperator,
}

/// A built-in two-argument function.
#[derive(Debug)]
pub struct Function {
    pub name: &'static str,
    pub operator: BinaryOperator,
}

pub static BINARY_OPERATIONS: [BinaryOperation; 11] = [
    binary("==", EQUALITY, false, BinaryOperator::Equal),
    binary("!=", EQUALITY, false, BinaryOperator::NotEqual),
    binary("<", RELATIONAL, false, BinaryOperator::Less),
    binary(">", RELATIONAL, false, BinaryOperator::Greater),
    binary("<=", RELATIONAL, false, BinaryOperator::LessEqual),
    binary(">=", RELATIONAL, false, BinaryOperator::GreaterEqual),
    binary("+", ADDITIVE, false, BinaryOperator::Add),
    binary("-", ADDITIVE, false, BinaryOperator::Subtract),
    binary("*", MULTIPLICATIVE, false, BinaryOperator::Multiply),
    binary("/", MULTIPLICATIVE, false, BinaryOperator::Divide),
    binary("^", POWER, true, BinaryOperator::Power),
];

pub static UNARY_OPERATIONS: [UnaryOperation; 2] = [
    UnaryOperation {
        symbol: "+",
        precedence: UNARY,
        operator: UnaryOperator::Plus,
    },
    UnaryOperation {
        symbol: "-",
        precedence: UNARY,
        operator: UnaryOperator::Negate,
    },
];

pub static TERNARY_OPERATIONS: [TernaryOperation; 1] = [TernaryOperation {
    symbol: "?",
    marker: ":",
    precedence: TERNARY,
    right_associative: true,
    operator: TernaryOperator::Conditional,
}];

pub static FUNCTIONS: [Function; 3] = [
    Function {
        name: "min",
        operator: BinaryOperator::Min,
    },
    Function {
        name: "max",
        operator: BinaryOperator::Max,
    },
    Function {
        name: "rand",
        operator: BinaryOperator::Rand,
    },
];

/// Names that start a `kind('Name'.qualifier)` property reference.
pub const PROPERTY_KINDS: [&str; 3] = ["skill", "miss", "stat"];

const fn binary(
    symbol: &'static str,
    precedence: u8,
    right_associative: bool,
    operator: BinaryOperator,
) -> BinaryOperation {
    BinaryOperation {
        symbol,
        precedence,
        right_associative,
        operator,
    }
}

/// Minimum precedence for the operand that follows an operator: the same
/// level for right-associative operators, one higher otherwise.
fn operand_precedence(precedence: u8, right_associative: bool) -> u8 {
    if right_associative {
        precedence
    } else {
        precedence + 1
    }
}

impl BinaryOperation {
    pub fn operand_precedence(&self) -> u8 {
        operand_precedence(self.precedence, self.right_associative)
    }
}

impl TernaryOperation {
    pub fn operand_precedence(&self) -> u8 {
        operand_precedence(self.precedence, self.right_associative)
    }
}

pub fn binary_operation(symbol: &str) -> Option<&'static BinaryOperation> {
    BINARY_OPERATIONS.iter().find(|op| op.symbol == symbol)
}

pub fn unary_operation(symbol: &str) -> Option<&'static UnaryOperation> {
    UNARY_OPERATIONS.iter().find(|op| op.symbol == symbol)
}

pub fn ternary_operation(symbol: &str) -> Option<&'static TernaryOperation> {
    TERNARY_OPERATIONS.iter().find(|op| op.symbol == symbol)
}

pub fn function(name: &str) -> Option<&'static Function> {
    FUNCTIONS.iter().find(|f| f.name == name)
}

pub fn is_property_kind(name: &str) -> bool {
    PROPERTY_KINDS.contains(&name)
}
