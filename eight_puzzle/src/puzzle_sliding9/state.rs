use crate::error::PuzzleError;
use crate::puzzle_sliding9::board::Board;
use crate::puzzle_sliding9::heuristic;
use crate::puzzle_sliding9::neighbors::{neighbor_of, Direction};
use crate::puzzle_sliding9::utils::{cell_coords, SIDE};
use arrayvec::ArrayVec;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Configuration of the puzzle reached during search.
///
/// Equality and hashing consider only the board, so the same board reached
/// by different paths is recognized as the same node.
#[derive(Clone, Copy)]
pub struct PuzzleState {
    board: Board,
    /// Number of moves from the start configuration (g-cost).
    depth: u32,
    /// Priority used by informed search (f-cost), unused by uninformed one.
    weight: u32,
}

impl PuzzleState {
    /// Constructs state (with depth and weight 0) from rows of the board.
    pub fn new(rows: [[u8; SIDE as usize]; SIDE as usize]) -> Result<Self, PuzzleError> {
        Board::from_rows(rows).map(Self::from)
    }

    /// Constructs state (with depth and weight 0) from tiles given in reading order.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, PuzzleError> {
        Board::from_tiles(tiles).map(Self::from)
    }

    /// Returns the usual goal configuration, see [`Board::goal`].
    pub fn goal() -> Self { Board::goal().into() }

    #[inline] pub fn board(&self) -> &Board { &self.board }
    #[inline] pub fn depth(&self) -> u32 { self.depth }
    #[inline] pub fn weight(&self) -> u32 { self.weight }

    #[inline] pub fn with_depth(self, depth: u32) -> Self { Self { depth, ..self } }
    #[inline] pub fn with_weight(self, weight: u32) -> Self { Self { weight, ..self } }

    /// Returns tile at given row and column.
    #[inline] pub fn tile_at(&self, row: u8, col: u8) -> u8 {
        self.board.tile_at(row * SIDE + col)
    }

    /// Returns (row, column) of the blank.
    #[inline] pub fn blank_position(&self) -> (u8, u8) {
        cell_coords(self.board.blank_position())
    }

    #[inline] pub fn rows(&self) -> [[u8; SIDE as usize]; SIDE as usize] { self.board.rows() }

    /// Returns state with the blank swapped with its neighbor in `direction`.
    /// The depth is incremented and the weight copied.
    pub fn move_blank(&self, direction: Direction) -> Result<Self, PuzzleError> {
        let blank = self.board.blank_position();
        let target = neighbor_of(blank, direction).ok_or(PuzzleError::OutOfBounds(direction))?;
        let depth = self.depth.checked_add(1).ok_or(PuzzleError::DepthOverflow)?;
        let mut board = self.board;
        board.move_blank(blank, target);
        Ok(Self { board, depth, weight: self.weight })
    }

    /// Returns all states reachable by one legal move, in the order of [`Direction::ALL`].
    pub fn neighbors(&self) -> ArrayVec<Self, 4> {
        Direction::ALL.iter().filter_map(|dir| self.move_blank(*dir).ok()).collect()
    }

    /// See [`heuristic::tile_reversals`].
    #[inline] pub fn tile_reversals(&self, other: &Self) -> u32 {
        heuristic::tile_reversals(&self.board, &other.board)
    }

    /// See [`heuristic::misplaced_tiles`].
    #[inline] pub fn misplaced_tiles(&self, other: &Self) -> u32 {
        heuristic::misplaced_tiles(&self.board, &other.board)
    }

    /// See [`heuristic::misplaced_distances`].
    #[inline] pub fn misplaced_distances(&self, other: &Self) -> u32 {
        heuristic::misplaced_distances(&self.board, &other.board)
    }

    /// See [`heuristic::euclidean_distance`].
    #[inline] pub fn euclidean_distance(&self, other: &Self) -> u32 {
        heuristic::euclidean_distance(&self.board, &other.board)
    }
}

impl From<Board> for PuzzleState {
    #[inline] fn from(board: Board) -> Self { Self { board, depth: 0, weight: 0 } }
}

impl PartialEq for PuzzleState {
    #[inline] fn eq(&self, other: &Self) -> bool { self.board == other.board }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    #[inline] fn hash<H: Hasher>(&self, state: &mut H) { self.board.hash(state) }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

impl fmt::Debug for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PuzzleState")
            .field("board", &self.board)
            .field("depth", &self.depth)
            .field("weight", &self.weight)
            .finish()
    }
}
