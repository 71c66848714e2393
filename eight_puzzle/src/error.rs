use crate::puzzle_sliding9::neighbors::Direction;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Board must have 9 cells, got {count}")]
    WrongTileCount { count: usize },
    #[error("Tile {tile} is outside the label range")]
    InvalidTile { tile: u8 },
    #[error("Tile {tile} occurs more than once")]
    DuplicateTile { tile: u8 },
    #[error("Blank cannot move {0}")]
    OutOfBounds(Direction),
    #[error("Path length exceeds the depth range")]
    DepthOverflow,
    #[error("Target configuration is unreachable from the start (odd inversion parity)")]
    Unsolvable,
    #[error("Search has already reached the target")]
    AlreadySolved,
    #[error("Frontier exhausted without reaching the target")]
    Exhausted,
    #[error("Search cancelled after {expansions} expansions")]
    Cancelled { expansions: u64 },
}
