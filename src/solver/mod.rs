pub mod constants;
mod config;
mod core;
mod errors;
mod sink;
mod stats;

pub use config::SolverConfig;
pub use self::core::ExpressionSolver;
pub use errors::SolverError;
pub use sink::{MatchSink, Solution, SolutionCollector};
pub use stats::SearchStats;
