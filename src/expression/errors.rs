use thiserror::Error;

use crate::expression::operator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Inexact division: {left} / {right}")]
    InexactDivision { left: u64, right: u64 },
    #[error("Negative intermediate result: {left} - {right}")]
    NegativeResult { left: u64, right: u64 },
    #[error("Overflow evaluating {left} {op} {right}")]
    Overflow { op: Operator, left: u64, right: u64 },
    #[error("Cached value {cached} does not match evaluated value {evaluated}")]
    ValueMismatch { cached: u64, evaluated: u64 },
}
