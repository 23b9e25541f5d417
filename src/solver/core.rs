use std::ops::ControlFlow;
use std::sync::Arc;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::expression::{Expression, Operator};
use crate::solver::config::SolverConfig;
use crate::solver::constants::PARALLEL_CHUNK_SIZE;
use crate::solver::errors::SolverError;
use crate::solver::sink::MatchSink;
use crate::solver::stats::SearchStats;
use crate::utils::{validate_sources, without_position};

/// Shared candidate list produced by one recursion level.
type Candidates = Vec<Arc<Expression>>;

/// Main solver for finding expressions that match a target value
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    config: SolverConfig,
}

/// Top-level bookkeeping: compares nodes with the target and forwards matches.
struct Reporter<'a, S: MatchSink + ?Sized> {
    target: u64,
    sink: &'a mut S,
    config: &'a SolverConfig,
    stats: SearchStats,
}

impl<S: MatchSink + ?Sized> Reporter<'_, S> {
    fn limit_reached(&self) -> bool {
        self.config
            .max_solutions
            .is_some_and(|max| self.stats.matches >= max)
    }

    fn report(&mut self, expr: &Arc<Expression>) -> Result<ControlFlow<()>, SolverError> {
        if expr.value() != self.target {
            return Ok(ControlFlow::Continue(()));
        }
        if self.limit_reached() {
            self.stats.stopped = true;
            return Ok(ControlFlow::Break(()));
        }
        if self.config.verify_matches {
            expr.evaluate()?;
        }

        self.stats.matches += 1;
        debug!("Match #{}: {} = {}", self.stats.matches, expr, self.target);

        if self.sink.on_match(expr).is_break() || self.limit_reached() {
            self.stats.stopped = true;
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    }
}

impl ExpressionSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Report every expression over `sources` that evaluates to `target`.
    ///
    /// Matches reach the sink in a fixed order that does not depend on
    /// [`SolverConfig::parallel`].
    ///
    /// # Errors
    ///
    /// Returns an error if a source limit is configured and exceeded, or if match verification is enabled and a match fails to re-evaluate.
    pub fn search<S: MatchSink + ?Sized>(
        &self,
        target: u64,
        sources: &[u64],
        sink: &mut S,
    ) -> Result<SearchStats, SolverError> {
        if let Some(max) = self.config.max_sources {
            validate_sources(sources, max)?;
        }
        info!(
            "Searching for {} using sources {:?}{}",
            target,
            sources,
            if self.config.parallel {
                " (parallel)"
            } else {
                ""
            }
        );

        let mut reporter = Reporter {
            target,
            sink,
            config: &self.config,
            stats: SearchStats::default(),
        };

        // Bare sources are never combined further at the top level.
        let leaves = Self::leaves(sources, &mut reporter.stats);
        if self.config.report_single_sources {
            for leaf in &leaves {
                if reporter.report(leaf)?.is_break() {
                    return Ok(Self::finish(reporter.stats));
                }
            }
        }
        drop(leaves);

        if sources.len() >= 2 {
            let lefts = Self::generate(sources, 1, 1, &mut reporter.stats);
            debug!("Top level: {} left candidates", lefts.len());

            if self.config.parallel {
                Self::combine_top_level_parallel(&lefts, &mut reporter)?;
            } else {
                Self::combine_top_level(&lefts, &mut reporter)?;
            }
        }

        Ok(Self::finish(reporter.stats))
    }

    fn finish(stats: SearchStats) -> SearchStats {
        info!(
            "Search finished: {} matches, {} nodes built",
            stats.matches,
            stats.nodes()
        );
        stats
    }

    fn combine_top_level<S: MatchSink + ?Sized>(
        lefts: &[Arc<Expression>],
        reporter: &mut Reporter<'_, S>,
    ) -> Result<(), SolverError> {
        let mut combos = Vec::new();
        for left in lefts {
            combos.clear();
            Self::combine_left(left, 0, 1, &mut reporter.stats, &mut combos);
            for expr in &combos {
                if reporter.report(expr)?.is_break() {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Left candidates are handed to the rayon pool in ordered chunks. Each
    /// worker only reads its left candidate and builds its own right
    /// candidates; matches are replayed through the reporter in left order and
    /// no further chunk starts once the reporter stops.
    fn combine_top_level_parallel<S: MatchSink + ?Sized>(
        lefts: &[Arc<Expression>],
        reporter: &mut Reporter<'_, S>,
    ) -> Result<(), SolverError> {
        let target = reporter.target;
        for chunk in lefts.chunks(PARALLEL_CHUNK_SIZE) {
            let per_left: Vec<(Candidates, SearchStats)> = chunk
                .par_iter()
                .map(|left| {
                    let mut stats = SearchStats::default();
                    let mut combos = Vec::new();
                    Self::combine_left(left, 0, 1, &mut stats, &mut combos);
                    combos.retain(|expr| expr.value() == target);
                    (combos, stats)
                })
                .collect();

            let mut stopped = false;
            for (matches, stats) in per_left {
                reporter.stats += stats;
                if stopped {
                    continue;
                }
                for expr in &matches {
                    if reporter.report(expr)?.is_break() {
                        stopped = true;
                        break;
                    }
                }
            }
            if stopped {
                debug!("Parallel search stopped after a chunk of {}", chunk.len());
                break;
            }
        }
        Ok(())
    }

    /// One leaf per source position, each owning the other positions.
    fn leaves(sources: &[u64], stats: &mut SearchStats) -> Candidates {
        stats.leaves += sources.len();
        sources
            .iter()
            .enumerate()
            .map(|(i, &value)| Arc::new(Expression::leaf(value, without_position(sources, i))))
            .collect()
    }

    /// Build every candidate over `sources` for a nested level.
    ///
    /// `min_partition_size` is the number of sources the left operand at this
    /// level must leave room for; it grows by one for the left recursion so
    /// each split of the multiset is visited in exactly one association order.
    fn generate(
        sources: &[u64],
        min_partition_size: usize,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Candidates {
        let mut candidates = Self::leaves(sources, stats);

        if sources.len() >= min_partition_size + 2 {
            let lefts = Self::generate(sources, min_partition_size + 1, depth + 1, stats);
            for left in &lefts {
                Self::combine_left(left, min_partition_size, depth + 1, stats, &mut candidates);
            }
        }

        trace!(
            "depth {} floor {} over {:?}: {} candidates",
            depth,
            min_partition_size,
            sources,
            candidates.len()
        );
        candidates
    }

    /// Build the right candidates over `left`'s remaining sources and push
    /// every valid combination with `left` onto `out`.
    fn combine_left(
        left: &Arc<Expression>,
        min_partition_size: usize,
        depth: usize,
        stats: &mut SearchStats,
        out: &mut Candidates,
    ) {
        let rights = Self::generate(left.remaining(), min_partition_size, depth, stats);
        for right in &rights {
            Self::combine_pair(left, right, stats, out);
        }
    }

    /// Push every valid `left <op> right` onto `out`, in operator-table order.
    fn combine_pair(
        left: &Arc<Expression>,
        right: &Arc<Expression>,
        stats: &mut SearchStats,
        out: &mut Candidates,
    ) {
        let (l, r) = (left.value(), right.value());
        if l < r {
            stats.ordering_skipped += 1;
            return;
        }

        for op in Operator::ALL {
            if !op.is_valid(l, r) {
                stats.invalid_skipped += 1;
                continue;
            }
            match Expression::combine(op, Arc::clone(left), Arc::clone(right)) {
                Some(expr) => {
                    stats.combined += 1;
                    out.push(Arc::new(expr));
                }
                None => {
                    trace!("Discarding overflowing {} {} {}", l, op, r);
                    stats.overflowed += 1;
                }
            }
        }
    }
}
