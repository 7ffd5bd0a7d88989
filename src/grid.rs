use std::{fmt, ops};

use enum_map::EnumMap;
use ndarray::{Array, Array2};

use crate::coord::{BoardShape, Coord};
use crate::force::Force;
use crate::piece::Piece;


#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    shape: BoardShape,
    data: Array2<Option<Piece>>,
}

impl Grid {
    pub fn new(board_shape: BoardShape) -> Self {
        Grid {
            shape: board_shape,
            data: Array::from_elem(
                (board_shape.num_rows() as usize, board_shape.num_cols() as usize),
                None,
            ),
        }
    }

    pub fn shape(&self) -> BoardShape { self.shape }

    pub fn piece_count(&self) -> EnumMap<Force, usize> {
        let mut count = EnumMap::default();
        for piece in self.data.iter().flatten() {
            count[piece.force()] += 1;
        }
        count
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<Piece>;
    #[track_caller]
    fn index(&self, pos: Coord) -> &Self::Output {
        self.data
            .get(coord_to_index(pos))
            .unwrap_or_else(|| panic!("{}", out_of_bound_message(pos, self.shape)))
    }
}

impl ops::IndexMut<Coord> for Grid {
    #[track_caller]
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        let shape = self.shape;
        self.data
            .get_mut(coord_to_index(pos))
            .unwrap_or_else(|| panic!("{}", out_of_bound_message(pos, shape)))
    }
}

fn coord_to_index(pos: Coord) -> [usize; 2] {
    [
        pos.row.to_zero_based() as usize,
        pos.col.to_zero_based() as usize,
    ]
}

fn out_of_bound_message(pos: Coord, board_shape: BoardShape) -> String {
    format!(
        "Coord ({}, {}) is out of bound for {}x{} board",
        pos.row.to_zero_based(),
        pos.col.to_zero_based(),
        board_shape.num_rows(),
        board_shape.num_cols()
    )
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(
                self.shape
                    .coords()
                    .filter_map(|coord| self[coord].map(|piece| (coord, piece.force()))),
            )
            .finish()
    }
}
