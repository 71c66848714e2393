use crate::puzzle_sliding9::board::Board;
use crate::puzzle_sliding9::utils::{BLANK, BOARD_SIZE};
use arrayvec::ArrayVec;

/// Returns number of pairs of tiles (the blank excluded) whose relative order in `board` differs from their order in `target`.
pub fn inversions(board: &Board, target: &Board) -> u32 {
    let target_positions = target.positions();
    let ranks: ArrayVec<u8, BOARD_SIZE> = board.iter()
        .filter(|t| *t != BLANK)
        .map(|t| target_positions[t as usize])
        .collect();
    ranks.iter().enumerate()
        .map(|(i, rank)| ranks[i+1..].iter().filter(|later| *later < rank).count() as u32)
        .sum()
}

/// Checks whether `target` can be reached from `board`.
///
/// The board has odd width, so horizontal moves keep the reading order of the tiles
/// and vertical moves shift one tile over two others. Thus the parity of `inversions` never changes.
#[inline] pub fn is_solvable(board: &Board, target: &Board) -> bool {
    inversions(board, target) % 2 == 0
}
