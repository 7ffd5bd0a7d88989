#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod coord;
pub mod error;
pub mod force;
pub mod game;
pub mod grid;
pub mod output;
pub mod piece;
pub mod player;
pub mod random;
pub mod registry;
pub mod render;
pub mod starter;
pub mod test_util;
