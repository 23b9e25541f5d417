/// Configuration for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Report a bare source equal to the target as a solution.
    pub report_single_sources: bool,
    /// Distribute the top-level left candidates across the rayon pool.
    pub parallel: bool,
    /// Stop after this many matches.
    pub max_solutions: Option<usize>,
    /// Reject source lists longer than this. Unlimited by default.
    pub max_sources: Option<usize>,
    /// Re-evaluate every match from its leaves before reporting it.
    pub verify_matches: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            report_single_sources: true,
            parallel: false,
            max_solutions: None,
            max_sources: None,
            verify_matches: false,
        }
    }
}
