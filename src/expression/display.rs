use std::fmt;

use crate::expression::ast::Expression;

/// Fully parenthesized form, e.g. `((6/3)+4)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Leaf { value, .. } => write!(f, "{}", value),
            Expression::Combined {
                op, left, right, ..
            } => write!(f, "({}{}{})", left, op, right),
        }
    }
}
