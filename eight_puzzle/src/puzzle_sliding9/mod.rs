//! Board of the 3x3 sliding puzzle and its evaluation.

pub mod utils;
pub mod neighbors;
pub mod board;
pub mod state;
pub mod solvability;
pub mod heuristic;

#[cfg(test)]
use crate::puzzle_sliding9::{board::Board, neighbors::Direction, state::PuzzleState, utils::{BLANK, BOARD_SIZE}};
#[cfg(test)]
use arrayvec::ArrayVec;

/// Returns board obtained from `board` by `steps` random moves, none of which undoes the previous one.
#[cfg(test)]
pub(crate) fn random_walk(board: Board, steps: usize, rng: &mut impl rand::Rng) -> Board {
    let mut state = PuzzleState::from(board);
    let mut previous: Option<Direction> = None;
    for _ in 0..steps {
        let moves: ArrayVec<(Direction, PuzzleState), 4> = Direction::ALL.into_iter()
            .filter(|dir| Some(dir.opposite()) != previous)
            .filter_map(|dir| state.move_blank(dir).ok().map(|moved| (dir, moved)))
            .collect();
        let (dir, moved) = moves[rng.gen_range(0..moves.len())];
        previous = Some(dir);
        state = moved;
    }
    *state.board()
}

/// Returns `board` with its first two tiles (in reading order, the blank skipped) swapped.
#[cfg(test)]
pub(crate) fn swap_two_tiles(board: Board) -> Board {
    let cells: ArrayVec<usize, 2> = (0..BOARD_SIZE).filter(|c| board.tile_at(*c as u8) != BLANK).take(2).collect();
    let mut tiles: ArrayVec<u8, BOARD_SIZE> = board.iter().collect();
    tiles.swap(cells[0], cells[1]);
    Board::pack(tiles)
}
