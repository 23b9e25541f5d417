use std::sync::Arc;

use crate::expression::{Expression, ExpressionError, Operator};

fn leaf(value: u64) -> Arc<Expression> {
    Arc::new(Expression::leaf(value, Vec::new()))
}

fn combined(op: Operator, left: Arc<Expression>, right: Arc<Expression>) -> Arc<Expression> {
    match Expression::combine(op, left, right) {
        Some(expr) => Arc::new(expr),
        None => panic!("combination overflowed"),
    }
}

#[test]
fn test_operator_table_order() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-*/");
}

#[test]
fn test_operator_apply() {
    assert_eq!(Operator::Add.apply(3, 2), Some(5));
    assert_eq!(Operator::Sub.apply(3, 2), Some(1));
    assert_eq!(Operator::Mul.apply(3, 2), Some(6));
    assert_eq!(Operator::Div.apply(7, 2), Some(3));
    assert_eq!(Operator::Div.apply(7, 0), None);
    assert_eq!(Operator::Sub.apply(2, 3), None);
    assert_eq!(Operator::Mul.apply(u64::MAX, 2), None);
}

#[test]
fn test_validity_division() {
    assert!(Operator::Div.is_valid(6, 3));
    assert!(!Operator::Div.is_valid(7, 3));
    assert!(!Operator::Div.is_valid(7, 1));
    assert!(!Operator::Div.is_valid(7, 0));
}

#[test]
fn test_validity_identity_and_zero() {
    assert!(!Operator::Mul.is_valid(9, 1));
    assert!(Operator::Mul.is_valid(9, 2));
    assert!(!Operator::Sub.is_valid(4, 4));
    assert!(Operator::Sub.is_valid(5, 4));
    assert!(Operator::Add.is_valid(4, 4));
    assert!(Operator::Add.is_valid(1, 1));
}

#[test]
fn test_leaf_accessors() {
    let expr = Expression::leaf(7, vec![1, 2]);
    assert_eq!(expr.value(), 7);
    assert_eq!(expr.remaining(), &[1, 2]);
    assert!(matches!(expr, Expression::Leaf { .. }));
    assert_eq!(expr.source_count(), 1);
}

#[test]
fn test_combine_takes_right_remaining() {
    let left = Arc::new(Expression::leaf(6, vec![3, 4]));
    let right = Arc::new(Expression::leaf(3, vec![4]));
    let expr = Expression::combine(Operator::Div, left, right);
    assert!(expr.is_some());
    if let Some(expr) = expr {
        assert_eq!(expr.value(), 2);
        assert_eq!(expr.remaining(), &[4]);
        assert_eq!(expr.sources(), vec![6, 3]);
        assert!(matches!(expr, Expression::Combined { .. }));
    }
}

#[test]
fn test_combine_overflow_is_none() {
    let expr = Expression::combine(Operator::Add, leaf(u64::MAX), leaf(1));
    assert!(expr.is_none());
}

#[test]
fn test_shared_child() {
    let shared = leaf(5);
    let a = combined(Operator::Add, shared.clone(), leaf(2));
    let b = combined(Operator::Mul, shared.clone(), leaf(3));
    assert_eq!(Arc::strong_count(&shared), 3);
    assert_eq!(a.value(), 7);
    assert_eq!(b.value(), 15);
    drop(a);
    drop(b);
    assert_eq!(Arc::strong_count(&shared), 1);
}

#[test]
fn test_display() {
    let expr = combined(
        Operator::Add,
        combined(Operator::Div, leaf(6), leaf(3)),
        leaf(1),
    );
    assert_eq!(format!("{}", expr), "((6/3)+1)");
    assert_eq!(format!("{}", leaf(42)), "42");
}

#[test]
fn test_evaluate_nested() {
    let expr = combined(
        Operator::Sub,
        combined(Operator::Mul, leaf(25), leaf(4)),
        combined(Operator::Add, leaf(2), leaf(1)),
    );
    assert_eq!(expr.evaluate(), Ok(97));
}

#[test]
fn test_evaluate_detects_bad_cache() {
    let expr = Expression::Combined {
        op: Operator::Add,
        left: leaf(2),
        right: leaf(2),
        value: 5,
        remaining: Vec::new(),
    };
    assert_eq!(
        expr.evaluate(),
        Err(ExpressionError::ValueMismatch {
            cached: 5,
            evaluated: 4
        })
    );
}

#[test]
fn test_evaluate_inexact_division() {
    let expr = Expression::Combined {
        op: Operator::Div,
        left: leaf(7),
        right: leaf(2),
        value: 3,
        remaining: Vec::new(),
    };
    assert_eq!(
        expr.evaluate(),
        Err(ExpressionError::InexactDivision { left: 7, right: 2 })
    );
}

#[test]
fn test_latex() {
    let expr = combined(
        Operator::Mul,
        combined(Operator::Add, leaf(3), leaf(2)),
        combined(Operator::Div, leaf(8), leaf(4)),
    );
    assert_eq!(
        expr.to_latex(),
        "\\left(3 + 2\\right) \\cdot \\frac{8}{4}"
    );

    let expr = combined(
        Operator::Sub,
        leaf(10),
        combined(Operator::Sub, leaf(5), leaf(2)),
    );
    assert_eq!(expr.to_latex(), "10 - \\left(5 - 2\\right)");
}
