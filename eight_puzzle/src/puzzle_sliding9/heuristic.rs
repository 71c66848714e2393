use crate::puzzle_sliding9::board::Board;
use crate::puzzle_sliding9::neighbors::{cell_nr, neighbor_of, Direction};
use crate::puzzle_sliding9::state::PuzzleState;
use crate::puzzle_sliding9::utils::{cell_coords, BLANK, BOARD_SIZE, SIDE};

/// Distances between all pair of cells.
pub type CellMetric = [[u8; BOARD_SIZE]; BOARD_SIZE];

/// Returns Manhattan metric for the board.
pub fn manhattan_metric() -> CellMetric {
    let mut cell_distances = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for first_r in 0..SIDE {
        for first_c in 0..SIDE {
            let first_cell = cell_nr(first_c, first_r) as usize;
            for second_r in 0..SIDE {
                let row_dist = first_r.abs_diff(second_r);
                for second_c in first_c..SIDE {
                    let second_cell = cell_nr(second_c, second_r) as usize;
                    let distance = row_dist + second_c - first_c;
                    cell_distances[first_cell][second_cell] = distance;
                    cell_distances[second_cell][first_cell] = distance;
                }
            }
        }
    }
    cell_distances
}

/// Returns number of cells whose content differs between `board` and `target`.
pub fn misplaced_tiles(board: &Board, target: &Board) -> u32 {
    board.iter().zip(target.iter()).filter(|(b, t)| b != t).count() as u32
}

/// Returns sum of Manhattan distances between positions of each tile (the blank included) in `board` and in `target`.
pub fn misplaced_distances(board: &Board, target: &Board) -> u32 {
    manhattan_sum(&manhattan_metric(), board, &target.positions())
}

fn manhattan_sum(metric: &CellMetric, board: &Board, target_positions: &[u8; BOARD_SIZE]) -> u32 {
    board.iter().enumerate()
        .map(|(cell, t)| metric[cell][target_positions[t as usize] as usize] as u32)
        .sum()
}

/// Returns number of pairs of adjacent tiles (the blank excluded) that occupy each other's target cells.
pub fn tile_reversals(board: &Board, target: &Board) -> u32 {
    let mut result = 0;
    for cell in 0..BOARD_SIZE as u8 {
        let tile = board.tile_at(cell);
        if tile == BLANK { continue; }
        for dir in [Direction::Right, Direction::Down] {
            let Some(other) = neighbor_of(cell, dir) else { continue };
            let other_tile = board.tile_at(other);
            if other_tile != BLANK && target.tile_at(cell) == other_tile && target.tile_at(other) == tile {
                result += 1;
            }
        }
    }
    result
}

/// Returns sum of Euclidean distances between positions of each tile (the blank included) in `board` and in `target`, rounded down.
pub fn euclidean_distance(board: &Board, target: &Board) -> u32 {
    euclidean_sum(board, &target.positions())
}

fn euclidean_sum(board: &Board, target_positions: &[u8; BOARD_SIZE]) -> u32 {
    let sum: f64 = board.iter().enumerate().map(|(cell, t)| {
        let (r, c) = cell_coords(cell as u8);
        let (tr, tc) = cell_coords(target_positions[t as usize]);
        let (dr, dc) = (r.abs_diff(tr) as f64, c.abs_diff(tc) as f64);
        (dr * dr + dc * dc).sqrt()
    }).sum();
    sum.floor() as u32
}

/// Term added to the base estimate of [`Heuristic`].
pub trait ExtraHeuristic {
    fn value(&self, board: &Board, target_positions: &[u8; BOARD_SIZE]) -> u32;
}

/// No extra term.
impl ExtraHeuristic for () {
    #[inline(always)] fn value(&self, _board: &Board, _target_positions: &[u8; BOARD_SIZE]) -> u32 { 0 }
}

/// Adds the sum of Euclidean distances, see [`euclidean_distance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EuclideanDistance;

impl ExtraHeuristic for EuclideanDistance {
    #[inline] fn value(&self, board: &Board, target_positions: &[u8; BOARD_SIZE]) -> u32 {
        euclidean_sum(board, target_positions)
    }
}

/// Estimates remaining cost to the target as
/// misplaced tiles + Manhattan distances + 2 × tile reversals (+ extra term).
///
/// The estimate is not admissible: misplaced tiles overlap with Manhattan distances.
pub struct Heuristic<EH: ExtraHeuristic = ()> {
    target: Board,
    target_positions: [u8; BOARD_SIZE],
    metric: CellMetric,
    extra: EH,
}

impl<EH: ExtraHeuristic> Heuristic<EH> {
    pub fn new(target: Board, extra: EH) -> Self {
        Self { target, target_positions: target.positions(), metric: manhattan_metric(), extra }
    }

    #[inline] pub fn target(&self) -> &Board { &self.target }

    /// Returns h-cost of `board`.
    pub fn estimate(&self, board: &Board) -> u32 {
        misplaced_tiles(board, &self.target)
            + manhattan_sum(&self.metric, board, &self.target_positions)
            + 2 * tile_reversals(board, &self.target)
            + self.extra.value(board, &self.target_positions)
    }

    /// Returns `state` with weight set to its depth plus the estimate.
    #[inline] pub fn weigh(&self, state: PuzzleState) -> PuzzleState {
        let weight = state.depth() + self.estimate(state.board());
        state.with_weight(weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u8; 3]; 3]) -> Board { Board::from_rows(rows).unwrap() }

    #[test]
    fn test_manhattan_33() {
        // 0, 1, 2
        // 3, 4, 5
        // 6, 7, 8
        let metric = manhattan_metric();
        for cell in 0..BOARD_SIZE {
            assert_eq!(metric[cell][cell], 0);
            for other in 0..BOARD_SIZE { assert_eq!(metric[cell][other], metric[other][cell]); }
        }
        assert_eq!(metric[0][1], 1);
        assert_eq!(metric[0][2], 2);
        assert_eq!(metric[0][4], 2);
        assert_eq!(metric[0][8], 4);
        assert_eq!(metric[2][6], 4);
        assert_eq!(metric[3][5], 2);
        assert_eq!(metric[5][7], 2);
        assert_eq!(metric[1][7], 2);
    }

    #[test]
    fn test_misplaced_tiles() {
        let goal = Board::goal();
        assert_eq!(misplaced_tiles(&board([[1, 2, 3], [0, 4, 6], [7, 5, 8]]), &goal), 4);
        assert_eq!(misplaced_tiles(&goal, &goal), 0);
    }

    #[test]
    fn test_misplaced_distances() {
        let goal = Board::goal();
        assert_eq!(misplaced_distances(&board([[1, 2, 3], [0, 4, 6], [7, 5, 8]]), &goal), 6);
        assert_eq!(misplaced_distances(&board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]), &goal), 2);
        assert_eq!(misplaced_distances(&goal, &goal), 0);
    }

    #[test]
    fn test_tile_reversals() {
        let goal = Board::goal();
        assert_eq!(tile_reversals(&board([[1, 2, 3], [4, 5, 6], [8, 7, 0]]), &goal), 1);   // row
        assert_eq!(tile_reversals(&board([[1, 2, 6], [4, 5, 3], [7, 8, 0]]), &goal), 1);   // column
        assert_eq!(tile_reversals(&board([[1, 2, 6], [4, 5, 3], [8, 7, 0]]), &goal), 2);
        assert_eq!(tile_reversals(&board([[1, 2, 3], [4, 6, 5], [8, 7, 0]]), &goal), 2);
        // blank swapped with its neighbor is not a reversal
        assert_eq!(tile_reversals(&board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]), &goal), 0);
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(&board([[1, 2, 3], [0, 4, 6], [7, 5, 8]]), &Board::goal()), 5);
        assert_eq!(euclidean_distance(&board([[3, 8, 7], [0, 4, 6], [2, 1, 5]]), &board([[0, 4, 3], [2, 6, 7], [5, 8, 1]])), 12);
        assert_eq!(euclidean_distance(&board([[0, 2, 3], [1, 4, 5], [8, 7, 6]]), &board([[1, 2, 3], [8, 0, 4], [7, 6, 5]])), 7);
    }

    #[test]
    fn test_estimate() {
        let start = board([[1, 2, 3], [0, 4, 6], [7, 5, 8]]);
        let heuristic = Heuristic::new(Board::goal(), ());
        assert_eq!(heuristic.estimate(&start), 4 + 6);
        assert_eq!(heuristic.estimate(&Board::goal()), 0);
        let with_euclidean = Heuristic::new(Board::goal(), EuclideanDistance);
        assert_eq!(with_euclidean.estimate(&start), 4 + 6 + 5);
        let reversed = board([[1, 2, 3], [4, 5, 6], [8, 7, 0]]);
        assert_eq!(heuristic.estimate(&reversed), 2 + 2 + 2);
    }

    #[test]
    fn test_weigh_adds_depth() {
        let heuristic = Heuristic::new(Board::goal(), ());
        let state = PuzzleState::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        assert_eq!(heuristic.weigh(state).weight(), 4);
        let deeper = state.move_blank(Direction::Left).unwrap();
        assert_eq!(deeper.depth(), 1);
        assert_eq!(heuristic.weigh(deeper).weight(), 1 + 3 + 4);
    }
}
