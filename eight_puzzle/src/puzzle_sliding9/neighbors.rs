use crate::puzzle_sliding9::utils::{BOARD_SIZE, DENIED, SIDE};
use std::fmt;

/// Direction in which the blank slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

impl Direction {
    /// All directions, in the order successors are generated.
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Up, Direction::Down];

    /// Returns (row, column) offset of the cell the blank moves to.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Returns direction that undoes the move in `self` direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        })
    }
}

/// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
pub type Neighbors = [[u8; 4]; BOARD_SIZE];

/// Returns index of cell with given (c, r) coordinates.
#[inline(always)] pub const fn cell_nr(c: u8, r: u8) -> u8 { r * SIDE + c }

/// Constructs neighbors matrix for the board.
pub const fn construct_neighbors() -> Neighbors {
    let mut neighbors = [[DENIED; 4]; BOARD_SIZE];
    let mut r = 0;
    while r < SIDE {
        let mut c = 0;
        while c < SIDE {
            let cell = cell_nr(c, r) as usize;
            if c != 0 { neighbors[cell][Direction::Left as usize] = cell_nr(c-1, r); }
            if r != 0 { neighbors[cell][Direction::Up as usize] = cell_nr(c, r-1); }
            if c+1 != SIDE { neighbors[cell][Direction::Right as usize] = cell_nr(c+1, r); }
            if r+1 != SIDE { neighbors[cell][Direction::Down as usize] = cell_nr(c, r+1); }
            c += 1;
        }
        r += 1;
    }
    neighbors
}

pub const NEIGHBORS: Neighbors = construct_neighbors();

/// Returns the cell adjacent to `cell` in direction `dir`, or `None` if `cell` lies on the edge facing `dir`.
#[inline] pub fn neighbor_of(cell: u8, dir: Direction) -> Option<u8> {
    match NEIGHBORS[cell as usize][dir as usize] {
        DENIED => None,
        n => Some(n),
    }
}
