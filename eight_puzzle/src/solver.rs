use crate::error::PuzzleError;
use crate::puzzle_sliding9::solvability::{inversions, is_solvable};
use crate::puzzle_sliding9::state::PuzzleState;
use crate::stats::SearchStatsCollector;
use log::debug;

/// Interface shared by the search strategies.
///
/// A solver is advanced one step at a time by [`next_state`](Self::next_state) until
/// [`is_solved`](Self::is_solved) reports that the target was reached,
/// or driven to completion by [`run`](Self::run).
pub trait SearchSolver {
    /// Performs one step of the search. Collects statistics during the step.
    ///
    /// Fails with:
    /// * [`PuzzleError::AlreadySolved`] if the target was already reached (the solver is not changed),
    /// * [`PuzzleError::Cancelled`] if `stats` vetoed the expansion (the solver is not changed),
    /// * [`PuzzleError::Exhausted`] if there is nothing left to expand (the solver is not changed).
    ///
    /// A step that expands the last configuration of the frontier succeeds,
    /// and the following call fails with [`PuzzleError::Exhausted`].
    fn next_state_stats(&mut self, stats: &mut impl SearchStatsCollector) -> Result<(), PuzzleError>;

    /// Configuration treated as the solution so far.
    fn current_state(&self) -> &PuzzleState;

    /// Configuration searched for.
    fn target_state(&self) -> &PuzzleState;

    /// Number of steps performed so far.
    fn depth(&self) -> u64;

    /// Number of discovered but not yet expanded configurations.
    fn opened_len(&self) -> usize;

    /// Number of expanded configurations.
    fn closed_len(&self) -> usize;

    #[inline] fn is_solved(&self) -> bool {
        self.current_state() == self.target_state()
    }

    /// Performs one step of the search.
    #[inline] fn next_state(&mut self) -> Result<(), PuzzleError> {
        self.next_state_stats(&mut ())
    }

    /// Performs steps until the target is reached and returns their number.
    /// Collect statistics during search.
    fn run_stats(&mut self, stats: &mut impl SearchStatsCollector) -> Result<u64, PuzzleError> {
        let mut iterations = 0;
        while !self.is_solved() {
            self.next_state_stats(stats)?;
            iterations += 1;
        }
        debug!("target reached after {} iterations, path length is {}", iterations, self.current_state().depth());
        Ok(iterations)
    }

    /// Performs steps until the target is reached and returns their number.
    #[inline] fn run(&mut self) -> Result<u64, PuzzleError> {
        self.run_stats(&mut ())
    }

    /// Returns number of moves of the found path, or `None` if the target is not reached yet.
    #[inline] fn solution_depth(&self) -> Option<u32> {
        self.is_solved().then(|| self.current_state().depth())
    }
}

/// Fails if either board is not a permutation of `0..9`,
/// or with [`PuzzleError::Unsolvable`] if `target` cannot be reached from `start`.
pub(crate) fn check_solvable(start: &PuzzleState, target: &PuzzleState) -> Result<(), PuzzleError> {
    start.board().validate()?;
    target.board().validate()?;
    if is_solvable(start.board(), target.board()) { return Ok(()); }
    debug!("rejecting pair with {} inversions:\n{}\nand\n{}", inversions(start.board(), target.board()), start, target);
    Err(PuzzleError::Unsolvable)
}
