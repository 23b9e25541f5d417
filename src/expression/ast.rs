use std::sync::Arc;

use crate::expression::operator::Operator;

/// A node of the search graph.
///
/// Nodes are shared between every parent that combines them, so children are
/// held behind an [`Arc`] and never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A single source number.
    Leaf {
        value: u64,
        /// Sources left over after consuming this one.
        remaining: Vec<u64>,
    },
    /// Two sub-expressions joined by an operator, `left.value() >= right.value()`.
    Combined {
        op: Operator,
        left: Arc<Expression>,
        right: Arc<Expression>,
        value: u64,
        remaining: Vec<u64>,
    },
}

impl Expression {
    pub fn leaf(value: u64, remaining: Vec<u64>) -> Self {
        Expression::Leaf { value, remaining }
    }

    /// Combine two nodes, returning `None` when the result does not fit in a `u64`.
    ///
    /// The caller is responsible for the validity predicate; this only computes
    /// the value and takes over the right child's remaining sources.
    pub fn combine(op: Operator, left: Arc<Expression>, right: Arc<Expression>) -> Option<Self> {
        let value = op.apply(left.value(), right.value())?;
        let remaining = right.remaining().to_vec();
        Some(Expression::Combined {
            op,
            left,
            right,
            value,
            remaining,
        })
    }

    pub fn value(&self) -> u64 {
        match self {
            Expression::Leaf { value, .. } | Expression::Combined { value, .. } => *value,
        }
    }

    pub fn remaining(&self) -> &[u64] {
        match self {
            Expression::Leaf { remaining, .. } | Expression::Combined { remaining, .. } => {
                remaining
            }
        }
    }

    /// Number of sources consumed by this sub-tree.
    pub fn source_count(&self) -> usize {
        match self {
            Expression::Leaf { .. } => 1,
            Expression::Combined { left, right, .. } => left.source_count() + right.source_count(),
        }
    }

    /// Source values in left-to-right order.
    pub fn sources(&self) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.source_count());
        self.collect_sources(&mut out);
        out
    }

    fn collect_sources(&self, out: &mut Vec<u64>) {
        match self {
            Expression::Leaf { value, .. } => out.push(*value),
            Expression::Combined { left, right, .. } => {
                left.collect_sources(out);
                right.collect_sources(out);
            }
        }
    }
}
