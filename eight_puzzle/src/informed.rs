use crate::error::PuzzleError;
use crate::puzzle_sliding9::heuristic::{ExtraHeuristic, Heuristic};
use crate::puzzle_sliding9::state::PuzzleState;
use crate::solver::{check_solvable, SearchSolver};
use crate::stats::SearchStatsCollector;
use log::{debug, trace};
use std::collections::HashSet;

/// Where a freshly generated configuration was already seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Membership {
    NotFound,
    /// Index in the frontier.
    InOpen(usize),
    /// Depth recorded for the expanded configuration.
    InClosed(u32),
}

/// Best-first search.
///
/// Each step expands the frontier member with the lowest weight
/// (depth plus [`Heuristic`] estimate) and then re-sorts the frontier.
/// Ties are broken by insertion order.
///
/// The heuristic overestimates, so the found path is not guaranteed to be the shortest.
pub struct InformedSearchSolver<EH: ExtraHeuristic = ()> {
    heuristic: Heuristic<EH>,
    current_state: PuzzleState,
    target_state: PuzzleState,
    /// Frontier sorted by weight, the next configuration to expand first.
    opened: Vec<PuzzleState>,
    closed: HashSet<PuzzleState>,
    depth: u64,
}

impl InformedSearchSolver<()> {
    /// Constructs solver that searches for `target` starting from `start`.
    /// Fails with [`PuzzleError::Unsolvable`] if there is no path between them.
    #[inline] pub fn new(start: PuzzleState, target: PuzzleState) -> Result<Self, PuzzleError> {
        Self::with_extra_heuristic(start, target, ())
    }
}

impl<EH: ExtraHeuristic> InformedSearchSolver<EH> {
    /// Constructs solver that searches for `target` starting from `start`,
    /// and adds `extra` to the estimate of each configuration.
    /// Fails with [`PuzzleError::Unsolvable`] if there is no path between them.
    pub fn with_extra_heuristic(start: PuzzleState, target: PuzzleState, extra: EH) -> Result<Self, PuzzleError> {
        check_solvable(&start, &target)?;
        let heuristic = Heuristic::new(*target.board(), extra);
        let start = heuristic.weigh(start.with_depth(0));
        debug!("best-first search from\n{}\nto\n{}\nstart weight is {}", start, target, start.weight());
        Ok(Self {
            heuristic,
            current_state: start,
            target_state: target,
            opened: vec![start],
            closed: HashSet::new(),
            depth: 0,
        })
    }

    /// Returns the frontier, in expansion order.
    #[inline] pub fn opened(&self) -> &[PuzzleState] { &self.opened }

    /// Checks whether `state` was already expanded.
    #[inline] pub fn is_closed(&self, state: &PuzzleState) -> bool {
        self.closed.contains(state)
    }

    /// Evaluator used to weigh the configurations.
    #[inline] pub fn heuristic(&self) -> &Heuristic<EH> { &self.heuristic }

    fn classify(&self, child: &PuzzleState) -> Membership {
        if let Some(index) = self.opened.iter().position(|s| s == child) {
            Membership::InOpen(index)
        } else if let Some(closed) = self.closed.get(child) {
            Membership::InClosed(closed.depth())
        } else {
            Membership::NotFound
        }
    }

    /// Puts `child` into the frontier, unless it is already known with no longer path.
    fn reconcile(&mut self, child: PuzzleState, stats: &mut impl SearchStatsCollector) {
        match self.classify(&child) {
            Membership::NotFound => {
                self.opened.push(self.heuristic.weigh(child));
                stats.discovered();
            }
            Membership::InOpen(index) => {
                if child.depth() < self.opened[index].depth() {
                    trace!("shorter path ({} instead of {}) to opened\n{}", child.depth(), self.opened[index].depth(), child);
                    self.opened[index] = self.heuristic.weigh(child);
                }
            }
            Membership::InClosed(depth) => {
                if child.depth() < depth {
                    debug!("reopening (path {} instead of {})\n{}", child.depth(), depth, child);
                    self.closed.remove(&child);
                    self.opened.push(self.heuristic.weigh(child));
                    stats.reopened();
                }
            }
        }
    }
}

impl<EH: ExtraHeuristic> SearchSolver for InformedSearchSolver<EH> {
    fn next_state_stats(&mut self, stats: &mut impl SearchStatsCollector) -> Result<(), PuzzleError> {
        if self.is_solved() { return Err(PuzzleError::AlreadySolved); }
        if self.opened.is_empty() {
            debug!("frontier exhausted after {} steps", self.depth);
            return Err(PuzzleError::Exhausted);
        }
        if !stats.expanded() { return Err(PuzzleError::Cancelled { expansions: self.depth }); }
        let expanded = self.opened.remove(0);
        self.closed.insert(expanded);
        self.depth += 1;
        trace!("step {}: expanding weight {} at depth {}, {} opened, {} closed",
            self.depth, expanded.weight(), expanded.depth(), self.opened.len(), self.closed.len());
        for child in expanded.neighbors() {
            self.reconcile(child, stats);
        }
        self.opened.sort_by_key(PuzzleState::weight);
        // an empty frontier keeps the current state, the next call reports exhaustion
        if let Some(best) = self.opened.first() {
            self.current_state = *best;
        }
        Ok(())
    }

    #[inline] fn current_state(&self) -> &PuzzleState { &self.current_state }
    #[inline] fn target_state(&self) -> &PuzzleState { &self.target_state }
    #[inline] fn depth(&self) -> u64 { self.depth }
    #[inline] fn opened_len(&self) -> usize { self.opened.len() }
    #[inline] fn closed_len(&self) -> usize { self.closed.len() }
}
