use std::fmt;
use std::ops::AddAssign;

/// Counters collected during one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub leaves: usize,
    pub combined: usize,
    /// Pairs skipped because the left value was smaller than the right.
    pub ordering_skipped: usize,
    /// Combinations rejected by an operator's validity rule.
    pub invalid_skipped: usize,
    pub overflowed: usize,
    pub matches: usize,
    /// The sink or the solution limit ended the search early.
    pub stopped: bool,
}

impl SearchStats {
    /// Total nodes built.
    pub fn nodes(&self) -> usize {
        self.leaves + self.combined
    }
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.leaves += other.leaves;
        self.combined += other.combined;
        self.ordering_skipped += other.ordering_skipped;
        self.invalid_skipped += other.invalid_skipped;
        self.overflowed += other.overflowed;
        self.matches += other.matches;
        self.stopped |= other.stopped;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "leaves built:       {}", self.leaves)?;
        writeln!(f, "combined built:     {}", self.combined)?;
        writeln!(f, "ordering skipped:   {}", self.ordering_skipped)?;
        writeln!(f, "invalid skipped:    {}", self.invalid_skipped)?;
        writeln!(f, "overflowed:         {}", self.overflowed)?;
        write!(f, "matches:            {}", self.matches)?;
        if self.stopped {
            write!(f, " (stopped early)")?;
        }
        Ok(())
    }
}
