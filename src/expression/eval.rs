use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

fn apply_checked(op: Operator, left: u64, right: u64) -> Result<u64, ExpressionError> {
    match op {
        Operator::Div if right == 0 => Err(ExpressionError::DivisionByZero),
        Operator::Div if left % right != 0 => {
            Err(ExpressionError::InexactDivision { left, right })
        }
        Operator::Sub if left < right => Err(ExpressionError::NegativeResult { left, right }),
        _ => op
            .apply(left, right)
            .ok_or(ExpressionError::Overflow { op, left, right }),
    }
}

impl Expression {
    /// Recompute the value of the tree from its leaves.
    ///
    /// # Errors
    ///
    /// Returns an error when a step divides by zero or inexactly, subtracts to
    /// below zero, overflows, or when a node's cached value disagrees with the
    /// recomputed one.
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        let result = match self {
            Expression::Leaf { value, .. } => Ok(*value),
            Expression::Combined {
                op,
                left,
                right,
                value,
                ..
            } => {
                let evaluated = apply_checked(*op, left.evaluate()?, right.evaluate()?)?;
                if evaluated == *value {
                    Ok(evaluated)
                } else {
                    Err(ExpressionError::ValueMismatch {
                        cached: *value,
                        evaluated,
                    })
                }
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::apply_checked;
    use crate::expression::{ExpressionError, Operator};

    #[test]
    fn test_apply_checked_division() {
        assert_eq!(apply_checked(Operator::Div, 12, 4), Ok(3));
        assert_eq!(
            apply_checked(Operator::Div, 12, 0),
            Err(ExpressionError::DivisionByZero)
        );
        assert_eq!(
            apply_checked(Operator::Div, 12, 5),
            Err(ExpressionError::InexactDivision { left: 12, right: 5 })
        );
    }

    #[test]
    fn test_apply_checked_subtraction() {
        assert_eq!(apply_checked(Operator::Sub, 7, 7), Ok(0));
        assert_eq!(
            apply_checked(Operator::Sub, 3, 7),
            Err(ExpressionError::NegativeResult { left: 3, right: 7 })
        );
    }

    #[test]
    fn test_apply_checked_overflow() {
        assert!(matches!(
            apply_checked(Operator::Mul, u64::MAX, 2),
            Err(ExpressionError::Overflow { .. })
        ));
        assert!(matches!(
            apply_checked(Operator::Add, u64::MAX, 1),
            Err(ExpressionError::Overflow { .. })
        ));
    }
}
