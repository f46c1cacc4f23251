//! Rotation axes, directions, and moves.
//!
//! A move on the cube is fully described by an axis, a direction of travel
//! around that axis, and the index of the layer being turned. All three are
//! closed types matched exhaustively throughout the crate.

use serde::{Deserialize, Serialize};

/// One of the three rotation axes.
///
/// Layer index 0 sits at the axis's start side: `Left` for x, `Up` for y,
/// `Front` for z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lower-case axis letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Direction of travel around an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    AntiClockwise,
}

impl Direction {
    /// `+1` for clockwise, `-1` for anticlockwise.
    ///
    /// ```
    /// use rust_twisty::core::Direction;
    ///
    /// assert_eq!(Direction::Clockwise.signum(), 1);
    /// assert_eq!(Direction::AntiClockwise.signum(), -1);
    /// ```
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::AntiClockwise => -1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::AntiClockwise,
            Direction::AntiClockwise => Direction::Clockwise,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Clockwise => "clockwise",
            Direction::AntiClockwise => "anticlockwise",
        };
        write!(f, "{name}")
    }
}

/// A single layer turn: axis, direction, and layer index.
///
/// ```
/// use rust_twisty::core::{Axis, Direction, Move};
///
/// let mv = Move::new(Axis::Y, Direction::Clockwise, 0);
/// assert_eq!(mv.inverse(), Move::new(Axis::Y, Direction::AntiClockwise, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Axis the layer turns around.
    pub axis: Axis,
    /// Direction of travel.
    pub direction: Direction,
    /// Layer index, `0 <= layer < size`.
    pub layer: usize,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(axis: Axis, direction: Direction, layer: usize) -> Self {
        Self {
            axis,
            direction,
            layer,
        }
    }

    /// The move that undoes this one: same axis and layer, opposite
    /// direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            axis: self.axis,
            direction: self.direction.inverse(),
            layer: self.layer,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.direction.signum() > 0 { '+' } else { '-' };
        write!(f, "{}{}[{}]", self.axis, sign, self.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signum() {
        assert_eq!(Direction::Clockwise.signum(), 1);
        assert_eq!(Direction::AntiClockwise.signum(), -1);
    }

    #[test]
    fn test_direction_inverse() {
        assert_eq!(Direction::Clockwise.inverse(), Direction::AntiClockwise);
        assert_eq!(
            Direction::AntiClockwise.inverse().inverse(),
            Direction::AntiClockwise
        );
    }

    #[test]
    fn test_move_inverse_round_trip() {
        let mv = Move::new(Axis::Z, Direction::AntiClockwise, 2);
        assert_eq!(mv.inverse().inverse(), mv);
        assert_eq!(mv.inverse().axis, Axis::Z);
        assert_eq!(mv.inverse().layer, 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Move::new(Axis::X, Direction::Clockwise, 1)),
            "x+[1]"
        );
        assert_eq!(
            format!("{}", Move::new(Axis::Z, Direction::AntiClockwise, 0)),
            "z-[0]"
        );
    }

    #[test]
    fn test_serialization() {
        let mv = Move::new(Axis::Y, Direction::AntiClockwise, 3);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
