//! Core value types: positions, sides, axes, tiles, errors, RNG.
//!
//! These are the leaf types of the model. Everything here is plain data
//! with value semantics; the grid and move machinery lives in `face` and
//! `cube`.

pub mod axis;
pub mod error;
pub mod position;
pub mod rng;
pub mod side;
pub mod tile;

pub use axis::{Axis, Direction, Move};
pub use error::CubeError;
pub use position::Position;
pub use rng::CubeRng;
pub use side::{Side, SideMap};
pub use tile::Tile;
