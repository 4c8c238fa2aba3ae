//! FILENAME: parser/src/parser.rs
//! PURPOSE: Precedence-climbing parser that converts a CalcString into a
//! Calculation tree.
//! CONTEXT: This is the second stage of the parsing pipeline. A Parser is
//! created once per loading context and reused for every formula; each
//! call builds a short-lived FormulaParser that owns the lexer for that
//! one formula.
//!
//! GRAMMAR:
//!   expr(min)   --> production ( BINOP expr(next) )* ( "?" expr(next) ":" expr(next) )*
//!                   where only operators with precedence >= min are taken
//!   production  --> "(" expr(0) ")"      // a missing final ")" is tolerated
//!               |   UNOP expr(UNARY)
//!               |   leaf
//!   leaf        --> NUMBER
//!               |   KIND "(" STRING "." NAME ")"    // KIND: skill | miss | stat
//!               |   FUNC "(" expr(0) "," expr(0) ")"  // FUNC: min | max | rand
//!               |   NAME                             // qualifier of the current record

use crate::config::ParserConfig;
use crate::context::ReferenceContext;
use crate::error::{ParseError, ParseResult};
use crate::lexer::Lexer;
use crate::operators::{
    binary_operation, function, is_property_kind, ternary_operation, unary_operation,
    BinaryOperation, Function, TernaryOperation,
};
use crate::token::TokenKind;
use calculation::{CalcString, Calculation};
use log::{debug, warn};

/// Reusable formula parser. Holds the options and the default reference
/// context; the operator tables are process-wide statics.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
    reference: ReferenceContext,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Parser {
            config,
            reference: ReferenceContext::default(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Sets the record that bare qualifiers refer to in later `parse` and
    /// `try_parse` calls, e.g. ("skill", "Sacrifice").
    pub fn set_current_reference(&mut self, kind: impl Into<String>, name: impl Into<String>) {
        self.reference = ReferenceContext::new(kind, name);
    }

    pub fn current_reference(&self) -> &ReferenceContext {
        &self.reference
    }

    /// Parses a formula against the current reference context. Never
    /// fails: a malformed formula is logged and becomes `Constant(0)`.
    pub fn parse(&self, text: &str) -> Calculation {
        self.parse_in(text, &self.reference)
    }

    /// Lenient parse with an explicit reference context.
    pub fn parse_in(&self, text: &str, context: &ReferenceContext) -> Calculation {
        match self.try_parse_in(text, context) {
            Ok(calc) => calc,
            Err(err) => {
                warn!("Error parsing calculation {:?}: {}", text, err);
                Calculation::Constant(0)
            }
        }
    }

    /// Lenient parse of a raw data table column.
    pub fn parse_calc_string(&self, calc: &CalcString) -> Calculation {
        self.parse(calc.as_str())
    }

    /// Parses a formula against the current reference context and reports
    /// the first fault. Blank input is `Constant(0)`.
    pub fn try_parse(&self, text: &str) -> ParseResult<Calculation> {
        self.try_parse_in(text, &self.reference)
    }

    /// Strict parse with an explicit reference context.
    pub fn try_parse_in(&self, text: &str, context: &ReferenceContext) -> ParseResult<Calculation> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Calculation::Constant(0));
        }

        let mut formula = FormulaParser::new(text, context, &self.config);
        let calc = formula.expr(0)?.calc;

        if self.config.reject_trailing {
            let next = formula.lexer.peek()?;
            if !next.is_end() {
                return Err(ParseError::TrailingInput {
                    found: next.clone(),
                });
            }
        }

        debug!("Parsed calculation {:?}: {}", text, calc);
        Ok(calc)
    }
}

/// Convenience function to strictly parse a formula with default options
/// and an empty reference context.
pub fn parse(input: &str) -> ParseResult<Calculation> {
    Parser::new().try_parse(input)
}

/// Parsing state for a single formula.
struct FormulaParser<'a> {
    lexer: Lexer<'a>,
    context: &'a ReferenceContext,
    config: &'a ParserConfig,
    /// Number of `expr` calls currently on the stack.
    depth: usize,
}

/// A parsed subtree together with its height. Both the recursion depth and
/// the height of every subtree stay within `ParserConfig::max_depth`, so
/// evaluating or dropping a parsed tree never recurses deeper than that.
struct Subtree {
    calc: Calculation,
    height: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(text: &'a str, context: &'a ReferenceContext, config: &'a ParserConfig) -> Self {
        FormulaParser {
            lexer: Lexer::new(text),
            context,
            config,
            depth: 0,
        }
    }

    fn too_deep(&self) -> ParseError {
        ParseError::TooDeep {
            limit: self.config.max_depth,
        }
    }

    fn leaf_node(&self, calc: Calculation) -> Subtree {
        Subtree { calc, height: 1 }
    }

    /// Wraps `calc` one level above its tallest child.
    fn node(&self, calc: Calculation, child_height: usize) -> ParseResult<Subtree> {
        let height = child_height + 1;
        if height > self.config.max_depth {
            return Err(self.too_deep());
        }
        Ok(Subtree { calc, height })
    }

    /// Parses an expression, taking only operators whose precedence is at
    /// least `min_precedence`.
    fn expr(&mut self, min_precedence: u8) -> ParseResult<Subtree> {
        if self.depth >= self.config.max_depth {
            return Err(self.too_deep());
        }
        self.depth += 1;
        let result = self.expr_operators(min_precedence);
        self.depth -= 1;
        result
    }

    fn expr_operators(&mut self, min_precedence: u8) -> ParseResult<Subtree> {
        let mut node = self.production()?;

        while let Some(op) = self.peek_binary(min_precedence)? {
            self.lexer.next_token()?;
            let right = self.expr(op.operand_precedence())?;
            let height = node.height.max(right.height);
            node = self.node(Calculation::binary(op.operator, node.calc, right.calc), height)?;
        }

        while let Some(op) = self.peek_ternary(min_precedence)? {
            self.lexer.next_token()?;
            let next = op.operand_precedence();

            let then = self.expr(next)?;
            self.expect_symbol(op.marker, "':' in conditional")?;
            let otherwise = self.expr(next)?;

            let height = node.height.max(then.height).max(otherwise.height);
            node = self.node(
                Calculation::ternary(op.operator, node.calc, then.calc, otherwise.calc),
                height,
            )?;
        }

        Ok(node)
    }

    fn peek_binary(&mut self, min_precedence: u8) -> ParseResult<Option<&'static BinaryOperation>> {
        let token = self.lexer.peek()?;
        if token.kind != TokenKind::Symbol {
            return Ok(None);
        }
        Ok(binary_operation(&token.text).filter(|op| op.precedence >= min_precedence))
    }

    fn peek_ternary(&mut self, min_precedence: u8) -> ParseResult<Option<&'static TernaryOperation>> {
        let token = self.lexer.peek()?;
        if token.kind != TokenKind::Symbol {
            return Ok(None);
        }
        Ok(ternary_operation(&token.text).filter(|op| op.precedence >= min_precedence))
    }

    /// Parses a parenthesized expression, a unary operation, or a leaf.
    fn production(&mut self) -> ParseResult<Subtree> {
        let token = self.lexer.peek()?.clone();

        match token.kind {
            TokenKind::Symbol if token.text == "(" => {
                self.lexer.next_token()?;
                let node = self.expr(0)?;

                let next = self.lexer.peek()?;
                if next.is_symbol(")") {
                    self.lexer.next_token()?;
                    return Ok(node);
                }
                if next.is_end() && self.config.allow_unclosed_final_paren {
                    return Ok(node);
                }
                Err(ParseError::UnclosedParenthesis {
                    found: next.clone(),
                })
            }

            TokenKind::Symbol => match unary_operation(&token.text) {
                Some(op) => {
                    self.lexer.next_token()?;
                    let child = self.expr(op.precedence)?;
                    self.node(Calculation::unary(op.operator, child.calc), child.height)
                }
                None => Err(ParseError::UnexpectedToken { found: token }),
            },

            TokenKind::Number | TokenKind::Name => self.leaf(),

            _ => Err(ParseError::UnexpectedToken { found: token }),
        }
    }

    /// Parses a number, a property reference, a function call, or a bare
    /// qualifier.
    fn leaf(&mut self) -> ParseResult<Subtree> {
        let token = self.lexer.next_token()?;

        match token.kind {
            TokenKind::Number => match token.text.parse::<i64>() {
                Ok(value) => Ok(self.leaf_node(Calculation::Constant(value))),
                Err(_) => Err(ParseError::InvalidNumber(token.text)),
            },

            TokenKind::Name if is_property_kind(&token.text) => self.property(token.text),

            TokenKind::Name => match function(&token.text) {
                Some(func) => self.function_call(func),
                None => {
                    // A name followed by '(' is a call to something that is not a built-in
                    if self.lexer.peek()?.is_symbol("(") {
                        return Err(ParseError::UnknownFunction(token.text));
                    }
                    Ok(self.leaf_node(self.context.reference(token.text)))
                }
            },

            _ => Err(ParseError::NotAValue(token)),
        }
    }

    /// Parses `kind('Name'.qualifier)` after the kind has been consumed.
    fn property(&mut self, kind: String) -> ParseResult<Subtree> {
        self.expect_symbol("(", "'(' after property kind")?;
        let name = self.expect_kind(TokenKind::String, "quoted property name")?;
        self.expect_symbol(".", "'.' after property name")?;
        let qualifier = self.expect_kind(TokenKind::Name, "property qualifier")?;
        self.expect_symbol(")", "')' to close property reference")?;

        Ok(self.leaf_node(Calculation::property(kind, name, qualifier)))
    }

    /// Parses `func(a, b)` after the name has been consumed.
    fn function_call(&mut self, func: &'static Function) -> ParseResult<Subtree> {
        self.expect_symbol("(", "'(' after function name")?;
        let first = self.expr(0)?;
        self.expect_symbol(",", "',' between function arguments")?;
        let second = self.expr(0)?;
        self.expect_symbol(")", "')' to close function call")?;

        let height = first.height.max(second.height);
        self.node(Calculation::binary(func.operator, first.calc, second.calc), height)
    }

    fn expect_symbol(&mut self, symbol: &str, expected: &'static str) -> ParseResult<()> {
        let token = self.lexer.next_token()?;
        if token.is_symbol(symbol) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected,
                found: token,
            })
        }
    }

    /// Consumes a token of the given kind and returns its text.
    fn expect_kind(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<String> {
        let token = self.lexer.next_token()?;
        if token.kind == kind {
            Ok(token.text)
        } else {
            Err(ParseError::Expected {
                expected,
                found: token,
            })
        }
    }
}
