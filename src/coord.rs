use std::fmt;

use itertools::Itertools;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8,  // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn is_even(self) -> bool { self.idx % 2 == 0 }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8,  // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub fn is_even(self) -> bool { self.idx % 2 == 0 }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }
    pub const fn from_zero_based(row: u8, col: u8) -> Self {
        Self::new(Row::from_zero_based(row), Col::from_zero_based(col))
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row.idx, self.col.idx)
    }
}


// At most `NUM_ROWS` x `NUM_COLS`, so that every row and column index fits `Row` and `Col`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardShape {
    num_rows: u8,
    num_cols: u8,
}

impl BoardShape {
    pub const fn new(num_rows: u8, num_cols: u8) -> Self {
        assert!(num_rows <= NUM_ROWS && num_cols <= NUM_COLS);
        BoardShape { num_rows, num_cols }
    }
    pub const fn checkers() -> Self { Self::new(NUM_ROWS, NUM_COLS) }

    pub const fn num_rows(self) -> u8 { self.num_rows }
    pub const fn num_cols(self) -> u8 { self.num_cols }

    // Bottom to top. Use `.rev()` to walk the board the way it is printed.
    pub fn rows(self) -> impl DoubleEndedIterator<Item = Row> + Clone {
        (0..self.num_rows).map(Row::from_zero_based)
    }
    pub fn cols(self) -> impl DoubleEndedIterator<Item = Col> + Clone {
        (0..self.num_cols).map(Col::from_zero_based)
    }
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        self.rows().cartesian_product(self.cols()).map(|(row, col)| Coord::new(row, col))
    }
}
