//! A single sticker of the cube.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::side::Side;

/// One sticker on the surface of the cube.
///
/// A tile is created once, when the cube is built, and from then on is only
/// ever *relocated* by moves. Two fields are fixed for its whole lifetime:
///
/// - `color`: the [`Side`] the tile started on, exactly like the color of a
///   physical sticker.
/// - `home`: the [`Position`] within that face at creation time, which
///   renderers use to map the tile back to its original image fragment.
///
/// `rotation` accumulates the visual turns the tile has been caught in
/// (whole-face spins and orientation-correcting slice transforms). It is
/// always a multiple of 90, normalized into `[0, 360)`, and only matters
/// for faces rendered with images rather than flat colors.
///
/// `payload` is produced by the renderer's construction callback and handed
/// back unchanged in every move event; the core never inspects it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile<P> {
    color: Side,
    home: Position,
    rotation: i16,
    payload: P,
}

impl<P> Tile<P> {
    /// Create a tile with zero rotation.
    pub(crate) fn new(color: Side, home: Position, payload: P) -> Self {
        Self {
            color,
            home,
            rotation: 0,
            payload,
        }
    }

    /// The fixed color of this tile.
    #[must_use]
    pub const fn color(&self) -> Side {
        self.color
    }

    /// The position this tile was created at.
    #[must_use]
    pub const fn home(&self) -> Position {
        self.home
    }

    /// Accumulated visual rotation in degrees, a multiple of 90 in
    /// `[0, 360)`.
    #[must_use]
    pub const fn rotation(&self) -> i16 {
        self.rotation
    }

    /// The opaque renderer payload.
    #[must_use]
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Add `angle` degrees to the visual rotation, normalizing into
    /// `[0, 360)`.
    pub(crate) fn rotate_by(&mut self, angle: i16) {
        self.rotation = (self.rotation + angle).rem_euclid(360);
    }
}
