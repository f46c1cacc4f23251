//! Declarative cycle table for the six rotation operations.
//!
//! Every operation is `{axis} x {direction}`: four faces trade one line
//! each around a cycle, and a boundary layer additionally spins the fully
//! covered side face. The geometry (which line of which face, which cycle
//! steps need an orientation correction, which boundary spins which way)
//! lives here as six static [`CyclePlan`] values, and one code path in the
//! model executes them all.

use crate::core::{Axis, Direction, Side};

use super::event::Line;

/// How a plan resolves the moved layer index on a given face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LayerIndex {
    /// The face's native index agrees with the layer index.
    Layer,
    /// The face's native index runs in the opposite sense: use
    /// `size - 1 - layer`.
    Mirror,
}

impl LayerIndex {
    fn resolve(self, layer: usize, size: usize) -> usize {
        match self {
            LayerIndex::Layer => layer,
            LayerIndex::Mirror => size - 1 - layer,
        }
    }
}

/// Which line of a face a plan touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineRef {
    Row(LayerIndex),
    Column(LayerIndex),
}

impl LineRef {
    /// Resolve to a concrete row or column for this layer and cube size.
    pub(crate) fn resolve(self, layer: usize, size: usize) -> Line {
        match self {
            LineRef::Row(index) => Line::Row(index.resolve(layer, size)),
            LineRef::Column(index) => Line::Column(index.resolve(layer, size)),
        }
    }
}

/// One merge edge of a cycle: `dest`'s line receives `src`'s extracted
/// slice, corrected by `turn` degrees and an optional order reversal.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EdgeStep {
    pub dest: Side,
    pub src: Side,
    pub turn: i16,
    pub reverse: bool,
}

/// Whole-face spin triggered when the moved layer sits at a boundary.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BoundarySpin {
    pub side: Side,
    pub direction: Direction,
}

/// Declarative description of one rotation operation.
pub(crate) struct CyclePlan {
    /// The four touched faces with their line selectors, in the order a
    /// renderer receives the extracted tiles.
    pub lines: [(Side, LineRef); 4],
    /// The four merge edges of the cycle.
    pub steps: [EdgeStep; 4],
    /// Spin applied when `layer == 0`.
    pub near: BoundarySpin,
    /// Spin applied when `layer == size - 1`.
    pub far: BoundarySpin,
}

impl CyclePlan {
    /// Line selector of a face that is part of this cycle.
    pub(crate) fn line_of(&self, side: Side) -> LineRef {
        self.lines
            .iter()
            .find(|(s, _)| *s == side)
            .map(|&(_, line)| line)
            .expect("face is not part of this cycle")
    }
}

const fn edge(dest: Side, src: Side, turn: i16, reverse: bool) -> EdgeStep {
    EdgeStep {
        dest,
        src,
        turn,
        reverse,
    }
}

const fn spin(side: Side, direction: Direction) -> BoundarySpin {
    BoundarySpin { side, direction }
}

static X_CLOCKWISE: CyclePlan = CyclePlan {
    lines: [
        (Side::Up, LineRef::Column(LayerIndex::Layer)),
        (Side::Front, LineRef::Column(LayerIndex::Layer)),
        (Side::Down, LineRef::Column(LayerIndex::Layer)),
        (Side::Back, LineRef::Column(LayerIndex::Mirror)),
    ],
    steps: [
        edge(Side::Up, Side::Front, 0, false),
        edge(Side::Front, Side::Down, 0, false),
        edge(Side::Down, Side::Back, 180, true),
        edge(Side::Back, Side::Up, 180, true),
    ],
    near: spin(Side::Left, Direction::AntiClockwise),
    far: spin(Side::Right, Direction::Clockwise),
};

static X_ANTICLOCKWISE: CyclePlan = CyclePlan {
    lines: [
        (Side::Up, LineRef::Column(LayerIndex::Layer)),
        (Side::Front, LineRef::Column(LayerIndex::Layer)),
        (Side::Down, LineRef::Column(LayerIndex::Layer)),
        (Side::Back, LineRef::Column(LayerIndex::Mirror)),
    ],
    steps: [
        edge(Side::Up, Side::Back, 180, true),
        edge(Side::Back, Side::Down, 180, true),
        edge(Side::Down, Side::Front, 0, false),
        edge(Side::Front, Side::Up, 0, false),
    ],
    near: spin(Side::Left, Direction::Clockwise),
    far: spin(Side::Right, Direction::AntiClockwise),
};

static Y_CLOCKWISE: CyclePlan = CyclePlan {
    lines: [
        (Side::Right, LineRef::Row(LayerIndex::Layer)),
        (Side::Front, LineRef::Row(LayerIndex::Layer)),
        (Side::Left, LineRef::Row(LayerIndex::Layer)),
        (Side::Back, LineRef::Row(LayerIndex::Layer)),
    ],
    steps: [
        edge(Side::Front, Side::Right, 0, false),
        edge(Side::Right, Side::Back, 0, false),
        edge(Side::Back, Side::Left, 0, false),
        edge(Side::Left, Side::Front, 0, false),
    ],
    near: spin(Side::Up, Direction::Clockwise),
    far: spin(Side::Down, Direction::AntiClockwise),
};

static Y_ANTICLOCKWISE: CyclePlan = CyclePlan {
    lines: [
        (Side::Right, LineRef::Row(LayerIndex::Layer)),
        (Side::Front, LineRef::Row(LayerIndex::Layer)),
        (Side::Left, LineRef::Row(LayerIndex::Layer)),
        (Side::Back, LineRef::Row(LayerIndex::Layer)),
    ],
    steps: [
        edge(Side::Front, Side::Left, 0, false),
        edge(Side::Left, Side::Back, 0, false),
        edge(Side::Back, Side::Right, 0, false),
        edge(Side::Right, Side::Front, 0, false),
    ],
    near: spin(Side::Up, Direction::AntiClockwise),
    far: spin(Side::Down, Direction::Clockwise),
};

static Z_CLOCKWISE: CyclePlan = CyclePlan {
    lines: [
        (Side::Right, LineRef::Column(LayerIndex::Layer)),
        (Side::Up, LineRef::Row(LayerIndex::Mirror)),
        (Side::Left, LineRef::Column(LayerIndex::Mirror)),
        (Side::Down, LineRef::Row(LayerIndex::Layer)),
    ],
    steps: [
        edge(Side::Up, Side::Left, 90, true),
        edge(Side::Left, Side::Down, 90, false),
        edge(Side::Down, Side::Right, 90, true),
        edge(Side::Right, Side::Up, 90, false),
    ],
    near: spin(Side::Front, Direction::Clockwise),
    far: spin(Side::Back, Direction::AntiClockwise),
};

static Z_ANTICLOCKWISE: CyclePlan = CyclePlan {
    lines: [
        (Side::Right, LineRef::Column(LayerIndex::Layer)),
        (Side::Up, LineRef::Row(LayerIndex::Mirror)),
        (Side::Left, LineRef::Column(LayerIndex::Mirror)),
        (Side::Down, LineRef::Row(LayerIndex::Layer)),
    ],
    steps: [
        edge(Side::Up, Side::Right, -90, false),
        edge(Side::Right, Side::Down, -90, true),
        edge(Side::Down, Side::Left, -90, false),
        edge(Side::Left, Side::Up, -90, true),
    ],
    near: spin(Side::Front, Direction::AntiClockwise),
    far: spin(Side::Back, Direction::Clockwise),
};

/// The plan for one of the six rotation operations.
pub(crate) fn plan_for(axis: Axis, direction: Direction) -> &'static CyclePlan {
    match (axis, direction) {
        (Axis::X, Direction::Clockwise) => &X_CLOCKWISE,
        (Axis::X, Direction::AntiClockwise) => &X_ANTICLOCKWISE,
        (Axis::Y, Direction::Clockwise) => &Y_CLOCKWISE,
        (Axis::Y, Direction::AntiClockwise) => &Y_ANTICLOCKWISE,
        (Axis::Z, Direction::Clockwise) => &Z_CLOCKWISE,
        (Axis::Z, Direction::AntiClockwise) => &Z_ANTICLOCKWISE,
    }
}
