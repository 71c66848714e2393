/// Marks a missing neighbor in the neighbors table.
pub const DENIED: u8 = u8::MAX;

/// Number of bits needed to store either tile number or its position (index of the board cell).
pub const BITS_PER_CELL: u8 = 4;

/// 0..01..1 mask with BITS_PER_CELL bits set.
pub const BITS_PER_CELL_MASK64: u64 = (1u64<<BITS_PER_CELL)-1;

/// Number of rows and also number of columns of the board.
pub const SIDE: u8 = 3;

/// Number of cells in the board.
pub const BOARD_SIZE: usize = (SIDE * SIDE) as usize;

/// Tile number that denotes the blank cell.
pub const BLANK: u8 = 0;

/// Returns (row, column) coordinates of the cell with given index.
#[inline(always)] pub fn cell_coords(cell: u8) -> (u8, u8) { (cell / SIDE, cell % SIDE) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_fits_u64() {
        assert!(BOARD_SIZE * BITS_PER_CELL as usize <= 64);
        assert!(BOARD_SIZE as u64 <= BITS_PER_CELL_MASK64 + 1);
    }

    #[test]
    fn test_cell_coords() {
        assert_eq!(cell_coords(0), (0, 0));
        assert_eq!(cell_coords(2), (0, 2));
        assert_eq!(cell_coords(3), (1, 0));
        assert_eq!(cell_coords(8), (2, 2));
    }
}
