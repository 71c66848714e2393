#![doc = include_str!("../README.md")]

pub mod error;
pub mod puzzle_sliding9;
pub mod solver;
pub mod stats;
pub mod uninformed;
pub mod informed;

pub use error::PuzzleError;
pub use puzzle_sliding9::heuristic::{EuclideanDistance, ExtraHeuristic, Heuristic};
pub use puzzle_sliding9::neighbors::Direction;
pub use puzzle_sliding9::state::PuzzleState;
pub use solver::SearchSolver;
pub use uninformed::UninformedSearchSolver;
pub use informed::InformedSearchSolver;
