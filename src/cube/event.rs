//! Move events, commit plans, and the event-channel capability.
//!
//! When a rotation is invoked with `animate`, the cube does not mutate.
//! It publishes a [`MoveEvent`] describing the move, carrying the
//! [`MoveCommit`] that *would* perform it, and waits. Whoever holds the
//! commit (typically a renderer, after its animation finishes) hands it
//! back through [`Cube::apply`](crate::cube::Cube::apply), and only then
//! does the model change.
//!
//! The commit is plain data, not a closure: applying it is exactly-once by
//! construction, because [`Cube::apply`](crate::cube::Cube::apply) consumes
//! the value and checks its sequence number against the pending move.
//!
//! ## Channel capability
//!
//! The cube does not implement publish/subscribe; it consumes an
//! [`EventChannel`] provided by the embedder. Subscription management and
//! delivery semantics are entirely channel-side; the only contract the
//! cube relies on is synchronous fan-out to the handlers registered at
//! publish time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Axis, Direction, Side, Tile};
use crate::face::Slice;

/// A resolved row or column of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `y` of the face.
    Row(usize),
    /// Column `x` of the face.
    Column(usize),
}

/// A whole-face 90 degree spin, part of a boundary-layer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSpin {
    /// The fully covered boundary face.
    pub side: Side,
    /// Spin direction, independent of the slice cycle's own direction.
    pub direction: Direction,
}

/// One positional overwrite inside a commit plan: `side`'s `line` receives
/// `tiles`, already orientation-corrected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStep<P> {
    side: Side,
    line: Line,
    tiles: Slice<P>,
}

impl<P> MergeStep<P> {
    pub(crate) fn new(side: Side, line: Line, tiles: Slice<P>) -> Self {
        Self { side, line, tiles }
    }

    /// Destination face.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Destination row or column.
    #[must_use]
    pub fn line(&self) -> Line {
        self.line
    }

    /// The corrected slice that will be written.
    #[must_use]
    pub fn tiles(&self) -> &Slice<P> {
        &self.tiles
    }

    pub(crate) fn into_parts(self) -> (Side, Line, Slice<P>) {
        (self.side, self.line, self.tiles)
    }
}

/// The deferred mutation for one move: four merge steps plus an optional
/// boundary-face spin, tagged with the sequence number of the move that
/// produced it.
///
/// A commit is inert data. Nothing happens until it is passed to
/// [`Cube::apply`](crate::cube::Cube::apply); dropping every copy leaves
/// the model silently unchanged, which is the caller's prerogative.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommit<P> {
    sequence: u64,
    merges: SmallVec<[MergeStep<P>; 4]>,
    spin: Option<FaceSpin>,
}

impl<P> MoveCommit<P> {
    pub(crate) fn new(
        sequence: u64,
        merges: SmallVec<[MergeStep<P>; 4]>,
        spin: Option<FaceSpin>,
    ) -> Self {
        Self {
            sequence,
            merges,
            spin,
        }
    }

    /// Sequence number of the move that produced this commit.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The merge steps, in application order.
    #[must_use]
    pub fn merges(&self) -> &[MergeStep<P>] {
        &self.merges
    }

    /// The boundary-face spin, when the moved layer was at 0 or size-1.
    #[must_use]
    pub fn spin(&self) -> Option<FaceSpin> {
        self.spin
    }

    pub(crate) fn into_parts(self) -> (SmallVec<[MergeStep<P>; 4]>, Option<FaceSpin>) {
        (self.merges, self.spin)
    }
}

/// Announcement of one deferred move.
///
/// Every subscriber observes the identical pre-mutation tile list; the
/// model does not change until the carried commit is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent<P> {
    /// Axis of the move.
    pub axis: Axis,
    /// Direction of the move (`signum()` gives the classic +1/-1 code).
    pub direction: Direction,
    /// Layer index of the move.
    pub layer: usize,
    /// Every tile the move touches, in presentation order: boundary-face
    /// tiles first (when the layer is at a boundary), then the four
    /// extracted slices in extraction order.
    pub tiles: Vec<Tile<P>>,
    /// The deferred mutation; hand it to
    /// [`Cube::apply`](crate::cube::Cube::apply) to perform the move.
    pub commit: MoveCommit<P>,
}

/// Fan-out channel capability consumed by the cube.
///
/// Implementors forward each published event synchronously, in order, to
/// every handler registered at publish time. The cube performs no
/// buffering and assumes no delivery guarantees beyond that.
pub trait EventChannel<P> {
    /// Fan the event out to the currently registered subscribers.
    fn publish(&self, event: &MoveEvent<P>);
}
