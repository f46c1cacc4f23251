//! Collector for the tiles one move touches.

use crate::core::Tile;
use crate::face::{Face, Slice};

/// Collects tiles from the slices and faces one move touches, in the order
/// a renderer should present them.
///
/// Slices append in extraction order; a boundary face prepends its tiles
/// ahead of everything collected so far.
///
/// ```
/// use rust_twisty::cube::TileAccumulator;
///
/// let accumulator: TileAccumulator<()> = TileAccumulator::new();
/// assert!(accumulator.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct TileAccumulator<P> {
    tiles: Vec<Tile<P>>,
}

impl<P> Default for TileAccumulator<P> {
    fn default() -> Self {
        Self { tiles: Vec::new() }
    }
}

impl<P: Clone> TileAccumulator<P> {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every tile of `slice`, keeping slice order.
    pub fn add_slice(&mut self, slice: &Slice<P>) -> &mut Self {
        self.tiles.extend(slice.iter().cloned());
        self
    }

    /// Prepend every tile of `face` (row-major) ahead of the tiles
    /// collected so far.
    pub fn add_face(&mut self, face: &Face<P>) -> &mut Self {
        let mut combined: Vec<Tile<P>> = face.tiles().cloned().collect();
        combined.append(&mut self.tiles);
        self.tiles = combined;
        self
    }

    /// Number of collected tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The collected tiles in presentation order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile<P>] {
        &self.tiles
    }

    /// Consume the accumulator, yielding the collected tiles.
    #[must_use]
    pub fn into_tiles(self) -> Vec<Tile<P>> {
        self.tiles
    }
}
