//! Tile coordinates within a face.

use serde::{Deserialize, Serialize};

/// Immutable 2D coordinate of a tile within a face.
///
/// `x` is the column and `y` is the row; both satisfy `0 <= x, y < size`
/// for a cube of the given size. A tile's *home* position is the `Position`
/// it was created at, which renderers use to map the tile back to its
/// original image fragment.
///
/// ```
/// use rust_twisty::core::Position;
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.x, 2);
/// assert_eq!(pos.y, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column within the face.
    pub x: usize,
    /// Row within the face.
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
