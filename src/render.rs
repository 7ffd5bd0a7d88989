use itertools::Itertools;
use static_assertions::const_assert_eq;

use crate::coord::{Coord, NUM_COLS, Row};
use crate::grid::Grid;


pub const CELL_WIDTH: usize = 6;
pub const BORDER_WIDTH: usize = 65;

// Each cell is a leading space plus the padded label, cells are separated and framed by '|'.
const ROW_WIDTH: usize = NUM_COLS as usize * (1 + CELL_WIDTH) + NUM_COLS as usize + 1;
const_assert_eq!(ROW_WIDTH, BORDER_WIDTH);

pub fn render_border() -> String { "-".repeat(BORDER_WIDTH) }

// Columns go right to left, mirroring the order in which rows go top to bottom.
pub fn render_row(grid: &Grid, row: Row) -> String {
    let cells = grid
        .shape()
        .cols()
        .rev()
        .map(|col| {
            let label = grid[Coord::new(row, col)]
                .map_or("", |piece| piece.to_text());
            format_cell(label)
        })
        .join("|");
    format!("|{}|", cells)
}

// A border line, then every row followed by its own border, top row first.
pub fn render_grid(grid: &Grid) -> Vec<String> {
    let mut lines = vec![render_border()];
    for row in grid.shape().rows().rev() {
        lines.push(render_row(grid, row));
        lines.push(render_border());
    }
    lines
}

fn format_cell(label: &str) -> String { format!(" {:<1$}", label, CELL_WIDTH) }
