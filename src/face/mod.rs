//! Faces and the slice algebra.
//!
//! A [`Face`] is a size x size grid of tiles. Rotation cycles read it
//! through frozen [`Slice`] snapshots and write it back through positional
//! merges; the two never alias because slices are values, not views into
//! the grid storage.

pub mod grid;
pub mod slice;

pub use grid::Face;
pub use slice::Slice;
