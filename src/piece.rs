use std::fmt;

use crate::force::Force;


// A checkers man. The only way to get one is `new_white` / `new_black`: the color is the whole
// identity of a piece, there is nothing else to configure.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    force: Force,
}

impl Piece {
    pub const fn new_white() -> Self { Piece { force: Force::White } }
    pub const fn new_black() -> Self { Piece { force: Force::Black } }

    pub fn force(self) -> Force { self.force }

    // Labels are part of the rendered board and must stay stable.
    pub fn to_text(self) -> &'static str {
        match self.force {
            Force::White => "blanc",
            Force::Black => "noir",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use `pad` rather than `write_str` so that width and alignment flags apply.
        f.pad(self.to_text())
    }
}
