//! FILENAME: calculation/src/tests.rs
//! PURPOSE: Unit tests for calculation trees and their evaluation.

use crate::ast::{Calculation, PropertyReference};
use crate::calc_string::CalcString;
use crate::evaluator::EvalError;
use crate::operators::{BinaryOperator, Branch, TernaryOperator, UnaryOperator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn num(value: i64) -> Calculation {
    Calculation::Constant(value)
}

fn bin(op: BinaryOperator, left: Calculation, right: Calculation) -> Calculation {
    Calculation::binary(op, left, right)
}

// ========================================
// OPERATORS
// ========================================

#[test]
fn unary_operators_apply() {
    assert_eq!(UnaryOperator::Plus.apply(455), 455);
    assert_eq!(UnaryOperator::Negate.apply(455), -455);
    assert_eq!(UnaryOperator::Negate.apply(0), 0);
}

#[test]
fn comparisons_yield_one_or_zero() {
    let mut rng = StdRng::seed_from_u64(0);
    let cases = [
        (BinaryOperator::Less, 1, 2, 1),
        (BinaryOperator::Less, 1, -5, 0),
        (BinaryOperator::LessEqual, 1, 1, 1),
        (BinaryOperator::Greater, 5, 10, 0),
        (BinaryOperator::GreaterEqual, 45, 45, 1),
        (BinaryOperator::Equal, 10, 10, 1),
        (BinaryOperator::NotEqual, 10, 10, 0),
    ];
    for (op, left, right, expected) in cases {
        assert_eq!(op.apply(left, right, &mut rng), Ok(expected), "{left} {op} {right}");
    }
}

#[test]
fn division_truncates_toward_zero() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(BinaryOperator::Divide.apply(10, 9, &mut rng), Ok(1));
    assert_eq!(BinaryOperator::Divide.apply(-7, 2, &mut rng), Ok(-3));
    assert_eq!(BinaryOperator::Divide.apply(99 - 98, 2, &mut rng), Ok(0));
}

#[test]
fn division_by_zero_is_an_error() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        BinaryOperator::Divide.apply(7, 0, &mut rng),
        Err(EvalError::DivisionByZero { dividend: 7 })
    );
}

#[test]
fn division_overflow_is_an_error() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        BinaryOperator::Divide.apply(i64::MIN, -1, &mut rng),
        Err(EvalError::Overflow { .. })
    ));
}

#[test]
fn power_truncates_float_result() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(BinaryOperator::Power.apply(2, 9, &mut rng), Ok(512));
    assert_eq!(BinaryOperator::Power.apply(4, 6, &mut rng), Ok(4096));
    // 2^-1 = 0.5 truncates to 0
    assert_eq!(BinaryOperator::Power.apply(2, -1, &mut rng), Ok(0));
}

#[test]
fn min_and_max() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(BinaryOperator::Min.apply(4096, 15, &mut rng), Ok(15));
    assert_eq!(BinaryOperator::Max.apply(48, 47, &mut rng), Ok(48));
}

#[test]
fn rand_returns_one_of_its_operands() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let value = BinaryOperator::Rand.apply(1, 5, &mut rng).unwrap();
        assert!(value == 1 || value == 5, "unexpected rand result {value}");
    }
}

#[test]
fn ternary_selects_branch() {
    assert_eq!(TernaryOperator::Conditional.select(1), Branch::Then);
    assert_eq!(TernaryOperator::Conditional.select(-3), Branch::Then);
    assert_eq!(TernaryOperator::Conditional.select(0), Branch::Else);
}

#[test]
fn function_operators_are_flagged() {
    assert!(BinaryOperator::Min.is_function());
    assert!(BinaryOperator::Rand.is_function());
    assert!(!BinaryOperator::Add.is_function());
    assert!(BinaryOperator::Rand.is_random());
    assert!(!BinaryOperator::Max.is_random());
}

// ========================================
// EVALUATION
// ========================================

#[test]
fn constant_evaluates_to_itself() {
    assert_eq!(num(45454).eval(), Ok(45454));
    assert_eq!(Calculation::default().eval(), Ok(0));
}

#[test]
fn nested_arithmetic_evaluates() {
    // 4^2*2+1
    let calc = bin(
        BinaryOperator::Add,
        bin(
            BinaryOperator::Multiply,
            bin(BinaryOperator::Power, num(4), num(2)),
            num(2),
        ),
        num(1),
    );
    assert_eq!(calc.eval(), Ok(33));
}

#[test]
fn property_reference_evaluates_to_one() {
    let calc = Calculation::property("skill", "Sacrifice", "blvl");
    assert_eq!(calc.eval(), Ok(1));
}

#[test]
fn ternary_does_not_evaluate_unselected_branch() {
    let poisoned = bin(BinaryOperator::Divide, num(1), num(0));

    let calc = Calculation::ternary(TernaryOperator::Conditional, num(1), num(43), poisoned.clone());
    assert_eq!(calc.eval(), Ok(43));

    let calc = Calculation::ternary(TernaryOperator::Conditional, num(0), poisoned, num(2));
    assert_eq!(calc.eval(), Ok(2));
}

#[test]
fn division_by_zero_propagates_through_tree() {
    let calc = bin(
        BinaryOperator::Add,
        num(1),
        bin(BinaryOperator::Divide, num(5), bin(BinaryOperator::Subtract, num(3), num(3))),
    );
    assert_eq!(calc.eval(), Err(EvalError::DivisionByZero { dividend: 5 }));
}

#[test]
fn deterministic_tree_is_idempotent() {
    let calc = bin(BinaryOperator::Max, num(50 - 2), num(50 - 3));
    assert_eq!(calc.eval(), calc.eval());
    assert_eq!(calc.eval(), Ok(48));
}

#[test]
fn rand_is_reproducible_with_same_seed() {
    let calc = bin(BinaryOperator::Rand, num(1), num(5));

    let mut rng = StdRng::seed_from_u64(1);
    let first: Vec<i64> = (0..16).map(|_| calc.eval_with(&mut rng).unwrap()).collect();

    let mut rng = StdRng::seed_from_u64(1);
    let second: Vec<i64> = (0..16).map(|_| calc.eval_with(&mut rng).unwrap()).collect();

    assert_eq!(first, second);
    assert!(first.iter().all(|v| *v == 1 || *v == 5));
}

#[test]
fn rand_produces_both_values_over_many_draws() {
    let calc = bin(BinaryOperator::Rand, num(1), num(5));
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<i64> = (0..200).map(|_| calc.eval_with(&mut rng).unwrap()).collect();
    assert!(values.contains(&1));
    assert!(values.contains(&5));
}

// ========================================
// REFERENCES AND FOLDING
// ========================================

#[test]
fn references_are_collected_in_source_order() {
    let calc = Calculation::ternary(
        TernaryOperator::Conditional,
        bin(
            BinaryOperator::Greater,
            Calculation::property("skill", "Sacrifice", "blvl"),
            num(3),
        ),
        bin(BinaryOperator::Min, num(50), Calculation::property("skill", "Zeal", "lvl")),
        Calculation::property("skill", "Sacrifice", "lvl"),
    );

    let refs = calc.references();
    assert_eq!(
        refs,
        vec![
            &PropertyReference::new("skill", "Sacrifice", "blvl"),
            &PropertyReference::new("skill", "Zeal", "lvl"),
            &PropertyReference::new("skill", "Sacrifice", "lvl"),
        ]
    );
}

#[test]
fn constant_trees_fold() {
    let calc = bin(BinaryOperator::Min, bin(BinaryOperator::Power, num(4), num(6)), num(15));
    assert!(calc.is_constant());
    assert_eq!(calc.fold(), Some(15));
}

#[test]
fn trees_with_state_or_rand_do_not_fold() {
    let with_property = bin(
        BinaryOperator::Add,
        num(1),
        Calculation::property("stat", "strength", "value"),
    );
    assert!(!with_property.is_constant());
    assert_eq!(with_property.fold(), None);

    let with_rand = bin(BinaryOperator::Rand, num(1), num(5));
    assert!(!with_rand.is_constant());
    assert_eq!(with_rand.fold(), None);
}

#[test]
fn failing_constant_tree_does_not_fold() {
    let calc = bin(BinaryOperator::Divide, num(1), num(0));
    assert!(calc.is_constant());
    assert_eq!(calc.fold(), None);
}

// ========================================
// DIAGNOSTICS
// ========================================

#[test]
fn display_renders_nested_nodes() {
    let calc = bin(
        BinaryOperator::Add,
        Calculation::unary(UnaryOperator::Negate, num(5)),
        num(3),
    );
    assert_eq!(calc.to_string(), "Binary(+, Unary(-, Constant(5)), Constant(3))");

    let calc = Calculation::property("miss", "Fire Wall", "range");
    assert_eq!(calc.to_string(), "Property(miss, 'Fire Wall', range)");
}

#[test]
fn display_renders_function_calls() {
    let calc = bin(BinaryOperator::Min, num(4), bin(BinaryOperator::Rand, num(1), num(2)));
    assert_eq!(
        calc.to_string(),
        "Call(min, Constant(4), Call(rand, Constant(1), Constant(2)))"
    );
}

#[test]
fn calculation_serializes_to_json() {
    let calc = bin(BinaryOperator::Add, num(1), Calculation::property("skill", "Zeal", "lvl"));
    let json = serde_json::to_value(&calc).unwrap();
    assert_eq!(json["Binary"]["op"], "Add");
    assert_eq!(json["Binary"]["left"]["Constant"], 1);
    assert_eq!(json["Binary"]["right"]["Property"]["name"], "Zeal");
}

// ========================================
// CALC STRINGS
// ========================================

#[test]
fn calc_string_blank_detection() {
    assert!(CalcString::from("").is_blank());
    assert!(CalcString::from(" \t ").is_blank());
    assert!(!CalcString::from("ln12").is_blank());
}

#[test]
fn calc_string_is_transparent_in_serde() {
    let calc: CalcString = serde_json::from_str("\"min(lvl, 20)\"").unwrap();
    assert_eq!(calc.as_str(), "min(lvl, 20)");
    assert_eq!(serde_json::to_string(&calc).unwrap(), "\"min(lvl, 20)\"");
}
