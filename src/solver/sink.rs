use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;

use crate::expression::Expression;

/// Receives every expression that hits the target.
///
/// Returning [`ControlFlow::Break`] stops the search.
pub trait MatchSink {
    fn on_match(&mut self, expression: &Arc<Expression>) -> ControlFlow<()>;
}

impl<F> MatchSink for F
where
    F: FnMut(&Arc<Expression>) -> ControlFlow<()>,
{
    fn on_match(&mut self, expression: &Arc<Expression>) -> ControlFlow<()> {
        self(expression)
    }
}

/// A matching expression and the value it evaluates to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub expression: Arc<Expression>,
    pub value: u64,
}

impl Solution {
    pub fn new(expression: Arc<Expression>) -> Self {
        let value = expression.value();
        Self { expression, value }
    }

    pub fn to_latex(&self) -> String {
        format!("{} = {}", self.expression.to_latex(), self.value)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Sink that keeps every match in search order.
#[derive(Debug, Default)]
pub struct SolutionCollector {
    solutions: Vec<Solution>,
}

impl SolutionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

impl MatchSink for SolutionCollector {
    fn on_match(&mut self, expression: &Arc<Expression>) -> ControlFlow<()> {
        self.solutions.push(Solution::new(Arc::clone(expression)));
        ControlFlow::Continue(())
    }
}
