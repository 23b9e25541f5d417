use std::fmt;

/// The four arithmetic operators, in search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Iteration order is fixed so output is reproducible.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Apply the operator with checked arithmetic.
    ///
    /// Returns `None` on overflow, on a negative difference and on division by
    /// zero. Division truncates.
    pub fn apply(self, left: u64, right: u64) -> Option<u64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => left.checked_div(right),
        }
    }

    /// Whether `left <op> right` may appear in a search result, given `left >= right`.
    ///
    /// Rejects inexact or by-zero division, multiplying or dividing by one and
    /// subtraction down to zero. Overflow is not checked here.
    pub fn is_valid(self, left: u64, right: u64) -> bool {
        match self {
            Operator::Add => true,
            Operator::Sub => left != right,
            Operator::Mul => right != 1,
            Operator::Div => right > 1 && left % right == 0,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
