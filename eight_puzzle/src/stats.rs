use std::ops::AddAssign;

/// Search statistic collector.
/// It collects data during breadth-first and best-first search.
pub trait SearchStatsCollector {
    /// Called before each expansion, can return false to cancel search process.
    #[inline(always)] fn expanded(&mut self) -> bool { true }
    /// Called for each configuration added to the frontier for the first time.
    #[inline(always)] fn discovered(&mut self) { }
    /// Called for each already expanded configuration moved back to the frontier.
    #[inline(always)] fn reopened(&mut self) { }
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

/// Counts expansions.
impl SearchStatsCollector for u64 {
    #[inline(always)] fn expanded(&mut self) -> bool { *self += 1; true }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub discovered: u64,
    pub reopened: u64
}

impl SearchAllStats {
    /// Returns number of configurations ever put into the frontier (not counting the start).
    pub fn enqueued(&self) -> u64 { self.discovered + self.reopened }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.discovered += rhs.discovered;
        self.reopened += rhs.reopened;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self) -> bool { self.expanded += 1; true }
    #[inline(always)] fn discovered(&mut self) { self.discovered += 1; }
    #[inline(always)] fn reopened(&mut self) { self.reopened += 1; }
}

/// Counts expansions and cancels the search when their number reaches the limit.
pub struct Limited {
    pub expanded: u64,
    pub limit: u64
}

impl Limited {
    pub fn with_limit(limit: u64) -> Self { Self{expanded: 0, limit} }

    pub fn reset_expanded(&mut self) { self.expanded = 0; }

    pub fn reset_limit(&mut self, limit: u64) { self.reset_expanded(); self.limit = limit; }
}

impl SearchStatsCollector for Limited {
    #[inline(always)] fn expanded(&mut self) -> bool {
        if self.expanded >= self.limit { return false; }
        self.expanded += 1;
        true
    }
}
