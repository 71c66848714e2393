use crate::error::PuzzleError;
use crate::puzzle_sliding9::utils::{BITS_PER_CELL, BITS_PER_CELL_MASK64, BLANK, BOARD_SIZE, SIDE};
use std::fmt;
use std::iter::FusedIterator;

/// Tiles of the board, packed into one integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed by board indices (BITS_PER_CELL bits per cell), gives tiles numbers that occupy given board cell.
    cells: u64,
}

impl Board {

    /// Packs tiles without validating them. Missing trailing tiles are blanks.
    pub(crate) fn pack(tiles: impl IntoIterator<Item=u8>) -> Self {
        let mut cells = 0u64;
        let mut index = 0;
        for t in tiles {
            cells |= (t as u64) << index;
            index += BITS_PER_CELL;
        }
        Self { cells }
    }

    /// Constructs the usual goal: tiles 1 to 8 in reading order followed by the blank.
    pub fn goal() -> Self {
        Self::pack((1..BOARD_SIZE as u8).chain(std::iter::once(BLANK)))
    }

    /// Constructs `Board` from tiles given in reading order.
    /// Fails unless `tiles` is a permutation of `0..9`.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, PuzzleError> {
        if tiles.len() != BOARD_SIZE {
            return Err(PuzzleError::WrongTileCount { count: tiles.len() });
        }
        let mut seen = [false; BOARD_SIZE];
        for &t in tiles {
            let slot = seen.get_mut(t as usize).ok_or(PuzzleError::InvalidTile { tile: t })?;
            if *slot { return Err(PuzzleError::DuplicateTile { tile: t }); }
            *slot = true;
        }
        Ok(Self::pack(tiles.iter().copied()))
    }

    /// Constructs `Board` from its rows.
    pub fn from_rows(rows: [[u8; SIDE as usize]; SIDE as usize]) -> Result<Self, PuzzleError> {
        let mut tiles = [BLANK; BOARD_SIZE];
        for (slot, t) in tiles.iter_mut().zip(rows.iter().flatten()) {
            *slot = *t;
        }
        Self::from_tiles(&tiles)
    }

    /// Checks that the tiles form a permutation of `0..9`.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let mut tiles = [BLANK; BOARD_SIZE];
        for (slot, t) in tiles.iter_mut().zip(self.iter()) {
            *slot = t;
        }
        Self::from_tiles(&tiles).map(|_| ())
    }

    /// Tile at position.
    #[inline] pub fn tile_at(&self, position: u8) -> u8 {
        ((self.cells >> (position * BITS_PER_CELL)) & BITS_PER_CELL_MASK64) as u8
    }

    /// Returns index of the cell occupied by the blank.
    pub fn blank_position(&self) -> u8 {
        self.iter().position(|t| t == BLANK).unwrap_or(0) as u8
    }

    /// Swap blank with the tile that occupy new_blank_position.
    /// Returns number of this tile.
    pub fn move_blank(&mut self, current_blank_position: u8, new_blank_position: u8) -> u8 {
        let new_blank_index = new_blank_position * BITS_PER_CELL;
        let result = (self.cells >> new_blank_index) & BITS_PER_CELL_MASK64;
        self.cells &= !(BITS_PER_CELL_MASK64 << new_blank_index);       // clear cell which should be blank
        self.cells |= result << (current_blank_position * BITS_PER_CELL);    // set old blank cell to result
        result as u8
    }

    /// Returns array indexed by tile numbers that gives cells occupied by tiles.
    pub fn positions(&self) -> [u8; BOARD_SIZE] {
        let mut result = [0u8; BOARD_SIZE];
        for (cell, t) in self.iter().enumerate() {
            result[t as usize] = cell as u8;
        }
        result
    }

    /// Returns tiles arranged in rows.
    pub fn rows(&self) -> [[u8; SIDE as usize]; SIDE as usize] {
        let mut result = [[BLANK; SIDE as usize]; SIDE as usize];
        for (cell, t) in self.iter().enumerate() {
            result[cell / SIDE as usize][cell % SIDE as usize] = t;
        }
        result
    }

    #[inline] pub fn iter(&self) -> TilesIterator {
        TilesIterator::new(self.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i != 0 { writeln!(f)?; }
            for (c, t) in row.iter().enumerate() {
                if c != 0 { f.write_str(" ")?; }
                if *t == BLANK { f.write_str(" ")?; } else { write!(f, "{}", t)?; }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.rows())
    }
}

/// Iterator over tiles of the board, in reading order.
#[derive(Copy, Clone)]
pub struct TilesIterator {
    rest: u64,
    left: u8
}

impl TilesIterator {
    #[inline] pub fn new(cells: u64) -> Self {
        Self { rest: cells, left: BOARD_SIZE as u8 }
    }
}

impl Iterator for TilesIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 { return None; }
        self.left -= 1;
        let result = (self.rest & BITS_PER_CELL_MASK64) as u8;
        self.rest >>= BITS_PER_CELL;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left as usize, Some(self.left as usize))
    }
}

impl ExactSizeIterator for TilesIterator {}

impl FusedIterator for TilesIterator {}
