use crate::error::PuzzleError;
use crate::puzzle_sliding9::state::PuzzleState;
use crate::solver::{check_solvable, SearchSolver};
use crate::stats::SearchStatsCollector;
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

/// Breadth-first search.
///
/// The frontier is a FIFO queue, so configurations are expanded level by level
/// and the target is reached by a path with the minimal number of moves.
pub struct UninformedSearchSolver {
    current_state: PuzzleState,
    target_state: PuzzleState,
    /// Frontier, in expansion order.
    opened: VecDeque<PuzzleState>,
    /// Content of `opened`, for membership tests.
    in_opened: HashSet<PuzzleState>,
    closed: HashSet<PuzzleState>,
    depth: u64,
}

impl UninformedSearchSolver {
    /// Constructs solver that searches for `target` starting from `start`.
    /// Fails with [`PuzzleError::Unsolvable`] if there is no path between them.
    pub fn new(start: PuzzleState, target: PuzzleState) -> Result<Self, PuzzleError> {
        check_solvable(&start, &target)?;
        let start = start.with_depth(0);
        debug!("breadth-first search from\n{}\nto\n{}", start, target);
        Ok(Self {
            current_state: start,
            target_state: target,
            opened: VecDeque::from([start]),
            in_opened: HashSet::from([start]),
            closed: HashSet::new(),
            depth: 0,
        })
    }

    /// Returns iterator over the frontier, in expansion order.
    pub fn opened(&self) -> impl Iterator<Item=&PuzzleState> + '_ {
        self.opened.iter()
    }

    /// Checks whether `state` was already expanded.
    #[inline] pub fn is_closed(&self, state: &PuzzleState) -> bool {
        self.closed.contains(state)
    }
}

impl SearchSolver for UninformedSearchSolver {
    fn next_state_stats(&mut self, stats: &mut impl SearchStatsCollector) -> Result<(), PuzzleError> {
        if self.is_solved() { return Err(PuzzleError::AlreadySolved); }
        let Some(&observed) = self.opened.front() else {
            debug!("frontier exhausted after {} steps", self.depth);
            return Err(PuzzleError::Exhausted);
        };
        if !stats.expanded() { return Err(PuzzleError::Cancelled { expansions: self.depth }); }
        self.opened.pop_front();
        self.in_opened.remove(&observed);
        self.depth += 1;
        trace!("step {}: depth {}, {} opened, {} closed", self.depth, observed.depth(), self.opened.len(), self.closed.len());
        if observed == self.target_state {
            self.current_state = observed;
            return Ok(());
        }
        for neighbor in observed.neighbors() {
            if self.closed.contains(&neighbor) || self.in_opened.contains(&neighbor) { continue; }
            self.in_opened.insert(neighbor);
            self.opened.push_back(neighbor);
            stats.discovered();
        }
        self.closed.insert(observed);
        Ok(())
    }

    #[inline] fn current_state(&self) -> &PuzzleState { &self.current_state }
    #[inline] fn target_state(&self) -> &PuzzleState { &self.target_state }
    #[inline] fn depth(&self) -> u64 { self.depth }
    #[inline] fn opened_len(&self) -> usize { self.opened.len() }
    #[inline] fn closed_len(&self) -> usize { self.closed.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle_sliding9::board::Board;
    use crate::puzzle_sliding9::{random_walk, swap_two_tiles};
    use crate::stats::{Limited, SearchAllStats};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state(rows: [[u8; 3]; 3]) -> PuzzleState { PuzzleState::new(rows).unwrap() }

    fn start() -> PuzzleState { state([[1, 2, 3], [0, 4, 6], [7, 5, 8]]) }

    #[test_log::test]
    fn test_state_walk() {
        let mut solver = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        assert!(!solver.is_solved());
        let iterations = solver.run().unwrap();
        assert!(solver.is_solved());
        assert_eq!(solver.depth(), iterations);
        assert_eq!(solver.current_state().rows(), [[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(solver.solution_depth(), Some(3));
    }

    #[test_log::test]
    fn test_frontier_grows_level_by_level() {
        let mut solver = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        assert_eq!((solver.opened_len(), solver.closed_len()), (1, 0));
        solver.next_state().unwrap();
        assert_eq!((solver.opened_len(), solver.closed_len()), (3, 1));
        assert_eq!(solver.opened().map(PuzzleState::rows).collect::<Vec<_>>(), [
            [[1, 2, 3], [4, 0, 6], [7, 5, 8]],
            [[0, 2, 3], [1, 4, 6], [7, 5, 8]],
            [[1, 2, 3], [7, 4, 6], [0, 5, 8]],
        ]);
        solver.next_state().unwrap();
        // the start is closed, so only three of four neighbors are enqueued
        assert_eq!((solver.opened_len(), solver.closed_len()), (5, 2));
        assert!(solver.is_closed(&start()));
        assert!(solver.opened().all(|s| s.depth() <= 2));
    }

    #[test_log::test]
    fn test_advance_after_solved() {
        let mut solver = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        solver.run().unwrap();
        let (opened, closed) = (solver.opened_len(), solver.closed_len());
        assert_eq!(solver.next_state(), Err(PuzzleError::AlreadySolved));
        assert_eq!((solver.opened_len(), solver.closed_len()), (opened, closed));
    }

    #[test_log::test]
    fn test_start_is_target() {
        let mut solver = UninformedSearchSolver::new(PuzzleState::goal(), PuzzleState::goal()).unwrap();
        assert!(solver.is_solved());
        assert_eq!(solver.run(), Ok(0));
        assert_eq!(solver.solution_depth(), Some(0));
    }

    #[test_log::test]
    fn test_unsolvable() {
        let swapped = PuzzleState::from(swap_two_tiles(Board::goal()));
        assert!(matches!(UninformedSearchSolver::new(swapped, PuzzleState::goal()), Err(PuzzleError::Unsolvable)));
        let reversed = state([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
        assert!(matches!(UninformedSearchSolver::new(reversed, PuzzleState::goal()), Err(PuzzleError::Unsolvable)));
    }

    #[test_log::test]
    fn test_rejects_malformed_boards() {
        let out_of_range = PuzzleState::from(Board::pack([9, 1, 2, 3, 4, 5, 6, 7, 0]));
        let duplicated = PuzzleState::from(Board::pack([1, 1, 2, 3, 4, 5, 6, 7, 0]));
        assert!(matches!(UninformedSearchSolver::new(out_of_range, PuzzleState::goal()),
                         Err(PuzzleError::InvalidTile { tile: 9 })));
        assert!(matches!(UninformedSearchSolver::new(PuzzleState::goal(), duplicated),
                         Err(PuzzleError::DuplicateTile { tile: 1 })));
    }

    #[test_log::test]
    fn test_exhausted_frontier() {
        let mut solver = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        for n in start().neighbors() {
            solver.closed.insert(n);
        }
        solver.next_state().unwrap();
        assert_eq!((solver.opened_len(), solver.closed_len(), solver.depth()), (0, 4, 1));
        assert_eq!(solver.next_state(), Err(PuzzleError::Exhausted));
        assert_eq!(solver.next_state_stats(&mut Limited::with_limit(0)), Err(PuzzleError::Exhausted));
        assert_eq!((solver.opened_len(), solver.closed_len(), solver.depth()), (0, 4, 1));
    }

    #[test_log::test]
    fn test_cancelled() {
        let mut solver = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        let mut limited = Limited::with_limit(2);
        assert_eq!(solver.run_stats(&mut limited), Err(PuzzleError::Cancelled { expansions: 2 }));
        assert_eq!((solver.opened_len(), solver.closed_len()), (5, 2));
        limited.reset_limit(u64::MAX);
        solver.run_stats(&mut limited).unwrap();
        assert_eq!(solver.solution_depth(), Some(3));
    }

    #[test_log::test]
    fn test_stats_account_for_containers() {
        let mut solver = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        let mut stats = SearchAllStats::default();
        let iterations = solver.run_stats(&mut stats).unwrap();
        assert_eq!(stats.expanded, iterations);
        assert_eq!(stats.reopened, 0);
        // the target is dequeued but never closed
        assert_eq!(stats.discovered as usize, solver.opened_len() + solver.closed_len());
    }

    #[test_log::test]
    fn test_solvers_are_independent() {
        let mut first = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        let second = UninformedSearchSolver::new(start(), PuzzleState::goal()).unwrap();
        first.run().unwrap();
        assert_eq!((second.opened_len(), second.closed_len(), second.depth()), (1, 0, 0));
    }

    #[test]
    fn test_random_walks_are_solved_optimally() {
        let mut rng = ChaCha8Rng::seed_from_u64(271);
        for walk_len in [0, 1, 2, 5, 8, 12] {
            let target = random_walk(Board::goal(), 10, &mut rng);
            let start = random_walk(target, walk_len, &mut rng);
            let mut solver = UninformedSearchSolver::new(start.into(), target.into()).unwrap();
            solver.run().unwrap();
            let moves = solver.solution_depth().unwrap();
            assert!(moves as usize <= walk_len);
            assert_eq!(moves as usize % 2, walk_len % 2);
        }
    }
}
