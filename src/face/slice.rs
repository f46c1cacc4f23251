//! Value-semantics slices of a face.
//!
//! A slice is a frozen snapshot of one row or column, taken at extraction
//! time. The transform capabilities consume and return the slice by value,
//! so a snapshot captured before a merge can never alias the grid it came
//! from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Tile;

/// Inline capacity: cubes up to 8x8 slice without touching the heap.
type TileVec<P> = SmallVec<[Tile<P>; 8]>;

/// An ordered snapshot of `size` tiles cut from one row or column.
///
/// Produced by [`Face::row`](crate::face::Face::row) and
/// [`Face::column`](crate::face::Face::column). The two transform
/// capabilities mirror the orientation corrections a rotation cycle needs:
///
/// - [`rotated_by`](Slice::rotated_by) adds an angle to every tile's visual
///   rotation (used when a cycle step crosses between faces whose grids are
///   stored in mirrored sense).
/// - [`reversed`](Slice::reversed) flips the tile order (used when a face's
///   index direction runs opposite to the rotation's direction of travel).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice<P> {
    tiles: TileVec<P>,
}

impl<P> Slice<P> {
    pub(crate) fn from_tiles(tiles: TileVec<P>) -> Self {
        Self { tiles }
    }

    /// Number of tiles in the slice (the cube size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the slice holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tiles in slice order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile<P>] {
        &self.tiles
    }

    /// Iterate over the tiles in slice order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tile<P>> {
        self.tiles.iter()
    }

    /// Tile at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile<P>> {
        self.tiles.get(index)
    }

    /// Add `angle` degrees (mod 360) to every tile's visual rotation.
    #[must_use]
    pub fn rotated_by(mut self, angle: i16) -> Self {
        for tile in &mut self.tiles {
            tile.rotate_by(angle);
        }
        self
    }

    /// The same tiles in opposite order.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.tiles.reverse();
        self
    }

    /// Apply one cycle step's orientation correction.
    pub(crate) fn transformed(self, turn: i16, reverse: bool) -> Self {
        let slice = if turn == 0 { self } else { self.rotated_by(turn) };
        if reverse {
            slice.reversed()
        } else {
            slice
        }
    }
}

impl<P> IntoIterator for Slice<P> {
    type Item = Tile<P>;
    type IntoIter = smallvec::IntoIter<[Tile<P>; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
