//! Countdown - A library for solving the Countdown numbers game
//!
//! Given a target and a multiset of source numbers, this library enumerates every
//! expression built from `+`, `-`, `*` and exact `/` over a subset of the sources
//! (each used at most once) that evaluates to the target.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use solver::{
    ExpressionSolver, MatchSink, SearchStats, Solution, SolutionCollector, SolverConfig,
    SolverError,
};
pub use utils::{UtilsError, parse_number};

/// Find every expression over `sources` that evaluates to `target`
///
/// This is a convenience function that runs a default solver and collects the
/// matches in search order.
///
/// # Arguments
///
/// * `target` - The value every returned expression must evaluate to
/// * `sources` - The numbers available; duplicates count as separate sources
///
/// # Errors
///
/// This function will return an error if there are more sources than the
/// default solver accepts.
///
/// # Examples
///
/// ```
/// use countdown::find_expressions;
///
/// let solutions = find_expressions(5, &[2, 3]).unwrap_or_default();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].to_string(), "(3+2) = 5");
/// ```
pub fn find_expressions(target: u64, sources: &[u64]) -> Result<Vec<Solution>, SolverError> {
    let solver = ExpressionSolver::default();
    let mut collector = SolutionCollector::new();
    solver.search(target, sources, &mut collector)?;
    Ok(collector.into_solutions())
}
