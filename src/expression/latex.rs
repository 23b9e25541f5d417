use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division
    /// - Only parenthesizes where precedence requires it
    pub fn to_latex(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Combined {
                    op: Operator::Add | Operator::Sub,
                    ..
                } => 1,
                Expression::Combined {
                    op: Operator::Mul, ..
                } => 2,
                // \frac groups itself
                Expression::Combined {
                    op: Operator::Div, ..
                }
                | Expression::Leaf { .. } => 3,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Leaf { value, .. } => value.to_string(),
                Expression::Combined {
                    op, left, right, ..
                } => {
                    let lp = precedence(left);
                    let rp = precedence(right);
                    let ls = fmt(left);
                    let rs = fmt(right);
                    match op {
                        Operator::Add => format!("{} + {}", ls, rs),
                        Operator::Sub => {
                            let rs = if rp <= 1 { wrap_parens(rs) } else { rs };
                            format!("{} - {}", ls, rs)
                        }
                        Operator::Mul => {
                            let ls = if lp < 2 { wrap_parens(ls) } else { ls };
                            let rs = if rp < 2 { wrap_parens(rs) } else { rs };
                            format!("{} \\cdot {}", ls, rs)
                        }
                        Operator::Div => format!("\\frac{{{}}}{{{}}}", ls, rs),
                    }
                }
            }
        }

        fmt(self)
    }
}
