use log::debug;

use crate::coord::{BoardShape, Coord};
use crate::grid::Grid;
use crate::piece::Piece;


// Black occupies rows above this one, white occupies rows below `WHITE_ROWS_END`.
// Rows in between start empty.
const BLACK_ROWS_AFTER: u8 = 4;
const WHITE_ROWS_END: u8 = 3;

// Men stand only on squares where row and column parity differ.
pub fn is_playable_square(coord: Coord) -> bool { coord.row.is_even() != coord.col.is_even() }

pub fn starting_piece(coord: Coord) -> Option<Piece> {
    let row = coord.row.to_zero_based();
    if !is_playable_square(coord) {
        None
    } else if row > BLACK_ROWS_AFTER {
        Some(Piece::new_black())
    } else if row < WHITE_ROWS_END {
        Some(Piece::new_white())
    } else {
        None
    }
}

pub fn generate_starting_grid(board_shape: BoardShape) -> Grid {
    let mut grid = Grid::new(board_shape);
    for coord in board_shape.coords() {
        grid[coord] = starting_piece(coord);
    }
    debug!("Starting grid: {:?}", grid.piece_count());
    grid
}
