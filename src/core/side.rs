//! Face identifiers and per-side data storage.
//!
//! ## Side
//!
//! Closed enum for the six faces of the cube. A `Side` doubles as the
//! sticker color: every tile is created with the `Side` of the face it
//! starts on and keeps that color for its entire lifetime.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the six faces of the cube.
///
/// Also used as the color of a tile: a tile created on the `Front` face
/// carries the `Front` color forever, wherever moves take it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Front,
    Back,
    Up,
    Down,
    Left,
    Right,
}

impl Side {
    /// All six sides in canonical order.
    pub const ALL: [Side; 6] = [
        Side::Front,
        Side::Back,
        Side::Up,
        Side::Down,
        Side::Left,
        Side::Right,
    ];

    /// Number of sides.
    pub const COUNT: usize = 6;

    /// Canonical index of this side, `0..6`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side on the opposite end of the cube.
    ///
    /// ```
    /// use rust_twisty::core::Side;
    ///
    /// assert_eq!(Side::Front.opposite(), Side::Back);
    /// assert_eq!(Side::Up.opposite(), Side::Down);
    /// assert_eq!(Side::Left.opposite(), Side::Right);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Up => Side::Down,
            Side::Down => Side::Up,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Single-letter color code, as used by terminal renderers.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Side::Front => 'f',
            Side::Back => 'b',
            Side::Up => 'u',
            Side::Down => 'd',
            Side::Left => 'l',
            Side::Right => 'r',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Side::Front => "front",
            Side::Back => "back",
            Side::Up => "up",
            Side::Down => "down",
            Side::Left => "left",
            Side::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Per-side data storage with O(1) access.
///
/// Backed by a fixed `[T; 6]` with one entry per side, indexed by [`Side`].
///
/// ## Example
///
/// ```
/// use rust_twisty::core::{Side, SideMap};
///
/// let mut counts: SideMap<u32> = SideMap::with_value(0);
/// counts[Side::Up] = 9;
/// assert_eq!(counts[Side::Up], 9);
/// assert_eq!(counts[Side::Down], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 6],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Side::ALL[i])),
        }
    }

    /// Create a new SideMap from a fallible factory, stopping at the first
    /// error.
    pub fn try_new<E>(mut factory: impl FnMut(Side) -> Result<T, E>) -> Result<Self, E> {
        let mut data = Vec::with_capacity(Side::COUNT);
        for side in Side::ALL {
            data.push(factory(side)?);
        }
        match <[T; 6]>::try_from(data) {
            Ok(data) => Ok(Self { data }),
            Err(_) => unreachable!("exactly six sides were produced"),
        }
    }

    /// Create a new SideMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to one side's entry.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to one side's entry.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over `(Side, &T)` pairs in canonical side order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }

    /// Iterate over the entries in canonical side order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order_matches_index() {
        for (i, side) in Side::ALL.into_iter().enumerate() {
            assert_eq!(side.index(), i);
        }
    }

    #[test]
    fn test_opposites_are_involutions() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
            assert_ne!(side.opposite(), side);
        }
    }

    #[test]
    fn test_letters_are_unique() {
        let letters: Vec<char> = Side::ALL.iter().map(|s| s.letter()).collect();
        let mut deduped = letters.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), letters.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Front), "front");
        assert_eq!(format!("{}", Side::Down), "down");
    }

    #[test]
    fn test_side_map_factory() {
        let map = SideMap::new(|side| side.letter());
        assert_eq!(map[Side::Up], 'u');
        assert_eq!(map[Side::Back], 'b');
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(1);
        map[Side::Left] += 5;
        assert_eq!(map[Side::Left], 6);
        assert_eq!(map[Side::Right], 1);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(|side| side.index());
        let collected: Vec<(Side, usize)> = map.iter().map(|(s, &v)| (s, v)).collect();
        assert_eq!(collected.len(), 6);
        assert_eq!(collected[0], (Side::Front, 0));
        assert_eq!(collected[5], (Side::Right, 5));
    }

    #[test]
    fn test_try_new_propagates_error() {
        let result: Result<SideMap<usize>, &str> = SideMap::try_new(|side| {
            if side == Side::Left {
                Err("nope")
            } else {
                Ok(side.index())
            }
        });
        assert_eq!(result, Err("nope"));
    }

    #[test]
    fn test_serialization() {
        let side = Side::Left;
        let json = serde_json::to_string(&side).unwrap();
        let deserialized: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(side, deserialized);
    }
}
