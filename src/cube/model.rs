//! The cube model: six faces plus the move machinery.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Axis, CubeError, CubeRng, Direction, Move, Position, Side, SideMap};
use crate::face::{Face, Slice};

use super::accumulator::TileAccumulator;
use super::event::{EventChannel, FaceSpin, Line, MergeStep, MoveCommit, MoveEvent};
use super::plan::{plan_for, CyclePlan};

/// An NxNxN twisty puzzle.
///
/// The cube owns exactly six [`Face`]s. Moves relocate tiles between
/// faces; they never create or destroy them, so the total tile count is
/// `6 * size^2` for the cube's whole lifetime and every tile keeps its
/// color.
///
/// ## Rotating
///
/// Each of the six operations (`{x,y,z} x {clockwise, anticlockwise}`)
/// takes a layer index and an `animate` flag:
///
/// - `animate = false`: the move is applied before the call returns.
/// - `animate = true`: the model is left untouched; a [`MoveEvent`] is
///   published on the attached channel (and returned), and the move only
///   happens when its commit is handed back to [`apply`](Cube::apply).
///
/// ```
/// use rust_twisty::cube::Cube;
///
/// let mut cube = Cube::new(3)?;
/// cube.y_clockwise(0, false)?;
/// cube.y_anti_clockwise(0, false)?;
/// assert!(cube.is_solved());
/// # Ok::<(), rust_twisty::core::CubeError>(())
/// ```
///
/// ## Deferred commits
///
/// While a deferred move is outstanding the cube refuses further
/// rotations with [`CubeError::MovePending`]; a commit that is not the
/// pending one is refused with [`CubeError::StaleCommit`]. If every
/// subscriber declines to animate, [`discard_pending`](Cube::discard_pending)
/// abandons the move without mutating.
pub struct Cube<P = ()> {
    size: usize,
    faces: SideMap<Face<P>>,
    channel: Option<Box<dyn EventChannel<P>>>,
    /// Sequence number of the next move to be issued.
    sequence: u64,
    /// Sequence of the deferred move awaiting its commit, if any.
    pending: Option<u64>,
}

impl Cube<()> {
    /// Create a solved cube with unit payloads.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        Self::with_tilefn(size, |_, _| ())
    }
}

impl<P: Clone> Cube<P> {
    /// Create a solved cube, invoking `tilefn` once per tile to produce
    /// its payload.
    ///
    /// The callback receives the tile's color and home position, in
    /// row-major order face by face.
    pub fn with_tilefn<F>(size: usize, mut tilefn: F) -> Result<Self, CubeError>
    where
        F: FnMut(Side, Position) -> P,
    {
        if size == 0 {
            return Err(CubeError::InvalidSize { size });
        }
        let faces = SideMap::new(|side| Face::solved(side, size, &mut tilefn));
        Ok(Self {
            size,
            faces,
            channel: None,
            sequence: 0,
            pending: None,
        })
    }

    /// Create a cube from an explicit per-face color layout.
    ///
    /// The cube size is taken from the front face's row count; every face
    /// grid must be exactly that size, or the construction is rejected
    /// with [`CubeError::MalformedFace`].
    pub fn from_grids<F>(grids: &SideMap<Vec<Vec<Side>>>, mut tilefn: F) -> Result<Self, CubeError>
    where
        F: FnMut(Side, Position) -> P,
    {
        let size = grids[Side::Front].len();
        if size == 0 {
            return Err(CubeError::InvalidSize { size });
        }
        let faces = SideMap::try_new(|side| Face::from_rows(side, size, &grids[side], &mut tilefn))?;
        Ok(Self {
            size,
            faces,
            channel: None,
            sequence: 0,
            pending: None,
        })
    }

    /// Attach the channel deferred moves are announced on.
    ///
    /// Without a channel, animated rotations still return their event to
    /// the caller; nothing is published.
    pub fn attach_channel(&mut self, channel: Box<dyn EventChannel<P>>) {
        self.channel = Some(channel);
    }

    /// Edge length of the cube.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// One face of the cube.
    #[must_use]
    pub fn face(&self, side: Side) -> &Face<P> {
        &self.faces[side]
    }

    /// All six faces.
    #[must_use]
    pub fn faces(&self) -> &SideMap<Face<P>> {
        &self.faces
    }

    /// Total number of tiles; always `6 * size^2`.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        6 * self.size * self.size
    }

    /// Number of tiles of each color, across all faces.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Side, usize> {
        let mut counts = FxHashMap::default();
        for face in self.faces.values() {
            for tile in face.tiles() {
                *counts.entry(tile.color()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Whether every face shows a single uniform color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .values()
            .all(|face| face.uniform_color().is_some())
    }

    /// Whether a deferred move is awaiting its commit.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Rotate one layer of the cube.
    ///
    /// With `animate`, the model is left unchanged: the move event is
    /// published on the attached channel and returned, and the cube goes
    /// pending until [`apply`](Cube::apply) or
    /// [`discard_pending`](Cube::discard_pending). Without `animate`, the
    /// move is applied synchronously and `None` is returned.
    pub fn rotate(&mut self, mv: Move, animate: bool) -> Result<Option<MoveEvent<P>>, CubeError> {
        if mv.layer >= self.size {
            return Err(CubeError::LayerOutOfRange {
                layer: mv.layer,
                size: self.size,
            });
        }
        if self.pending.is_some() {
            return Err(CubeError::MovePending);
        }

        let plan = plan_for(mv.axis, mv.direction);
        let event = self.build_event(mv, plan);

        if animate {
            self.pending = Some(event.commit.sequence());
            if let Some(channel) = &self.channel {
                channel.publish(&event);
            }
            Ok(Some(event))
        } else {
            self.apply_steps(event.commit);
            Ok(None)
        }
    }

    /// Perform a deferred move.
    ///
    /// Consumes the commit; a second application (of a clone), a commit
    /// that was discarded, or a commit from another cube is rejected with
    /// [`CubeError::StaleCommit`].
    pub fn apply(&mut self, commit: MoveCommit<P>) -> Result<(), CubeError> {
        match self.pending {
            Some(expected) if expected == commit.sequence() => {
                self.pending = None;
                self.apply_steps(commit);
                Ok(())
            }
            _ => Err(CubeError::StaleCommit {
                sequence: commit.sequence(),
            }),
        }
    }

    /// Abandon a pending deferred move without mutating.
    ///
    /// Returns whether a move was actually pending. Its commit becomes
    /// stale; the sequence it consumed is never reused.
    pub fn discard_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Rotate a slice clockwise around the x axis. Layer 0 is nearest the
    /// `left` face.
    pub fn x_clockwise(&mut self, layer: usize, animate: bool) -> Result<Option<MoveEvent<P>>, CubeError> {
        self.rotate(Move::new(Axis::X, Direction::Clockwise, layer), animate)
    }

    /// Rotate a slice anticlockwise around the x axis.
    pub fn x_anti_clockwise(&mut self, layer: usize, animate: bool) -> Result<Option<MoveEvent<P>>, CubeError> {
        self.rotate(Move::new(Axis::X, Direction::AntiClockwise, layer), animate)
    }

    /// Rotate a slice clockwise around the y axis. Layer 0 is nearest the
    /// `up` face.
    pub fn y_clockwise(&mut self, layer: usize, animate: bool) -> Result<Option<MoveEvent<P>>, CubeError> {
        self.rotate(Move::new(Axis::Y, Direction::Clockwise, layer), animate)
    }

    /// Rotate a slice anticlockwise around the y axis.
    pub fn y_anti_clockwise(&mut self, layer: usize, animate: bool) -> Result<Option<MoveEvent<P>>, CubeError> {
        self.rotate(Move::new(Axis::Y, Direction::AntiClockwise, layer), animate)
    }

    /// Rotate a slice clockwise around the z axis. Layer 0 is nearest the
    /// `front` face.
    pub fn z_clockwise(&mut self, layer: usize, animate: bool) -> Result<Option<MoveEvent<P>>, CubeError> {
        self.rotate(Move::new(Axis::Z, Direction::Clockwise, layer), animate)
    }

    /// Rotate a slice anticlockwise around the z axis.
    pub fn z_anti_clockwise(&mut self, layer: usize, animate: bool) -> Result<Option<MoveEvent<P>>, CubeError> {
        self.rotate(Move::new(Axis::Z, Direction::AntiClockwise, layer), animate)
    }

    /// Apply `count` random non-animated moves, returning them in order.
    ///
    /// The same seed and count always produce the same scramble.
    pub fn scramble(&mut self, count: usize, rng: &mut CubeRng) -> Result<Vec<Move>, CubeError> {
        let mut moves = Vec::with_capacity(count);
        for _ in 0..count {
            let mv = self.random_move(rng);
            self.rotate(mv, false)?;
            moves.push(mv);
        }
        Ok(moves)
    }

    fn random_move(&self, rng: &mut CubeRng) -> Move {
        let axis = Axis::ALL[rng.gen_index(Axis::ALL.len())];
        let direction = if rng.gen_bool() {
            Direction::Clockwise
        } else {
            Direction::AntiClockwise
        };
        Move::new(axis, direction, rng.gen_index(self.size))
    }

    /// Extract the touched slices, build the commit plan and the event.
    /// Issues a fresh sequence number; does not mutate any face.
    fn build_event(&mut self, mv: Move, plan: &CyclePlan) -> MoveEvent<P> {
        let sequence = self.sequence;
        self.sequence += 1;

        // Frozen snapshots, in the plan's accumulation order.
        let extracted: Vec<(Side, Slice<P>)> = plan
            .lines
            .iter()
            .map(|&(side, line_ref)| {
                let line = line_ref.resolve(mv.layer, self.size);
                (side, self.extract(side, line))
            })
            .collect();

        let spin = if mv.layer == 0 {
            Some(FaceSpin {
                side: plan.near.side,
                direction: plan.near.direction,
            })
        } else if mv.layer == self.size - 1 {
            Some(FaceSpin {
                side: plan.far.side,
                direction: plan.far.direction,
            })
        } else {
            None
        };

        let mut accumulator = TileAccumulator::new();
        for (_, slice) in &extracted {
            accumulator.add_slice(slice);
        }
        if let Some(spin) = spin {
            accumulator.add_face(&self.faces[spin.side]);
        }

        let merges: SmallVec<[MergeStep<P>; 4]> = plan
            .steps
            .iter()
            .map(|step| {
                let slice = extracted
                    .iter()
                    .find(|(side, _)| *side == step.src)
                    .map(|(_, slice)| slice.clone())
                    .expect("every cycle source was extracted");
                let line = plan.line_of(step.dest).resolve(mv.layer, self.size);
                MergeStep::new(step.dest, line, slice.transformed(step.turn, step.reverse))
            })
            .collect();

        MoveEvent {
            axis: mv.axis,
            direction: mv.direction,
            layer: mv.layer,
            tiles: accumulator.into_tiles(),
            commit: MoveCommit::new(sequence, merges, spin),
        }
    }

    fn extract(&self, side: Side, line: Line) -> Slice<P> {
        match line {
            Line::Row(y) => self.faces[side].row(y),
            Line::Column(x) => self.faces[side].column(x),
        }
    }

    fn apply_steps(&mut self, commit: MoveCommit<P>) {
        let (merges, spin) = commit.into_parts();
        for step in merges {
            let (side, line, tiles) = step.into_parts();
            match line {
                Line::Row(y) => self.faces[side].merge_row(tiles, y),
                Line::Column(x) => self.faces[side].merge_column(tiles, x),
            }
        }
        if let Some(spin) = spin {
            self.faces[spin.side].spin(spin.direction);
        }
    }
}

impl<P: Clone + std::fmt::Debug> std::fmt::Debug for Cube<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cube")
            .field("size", &self.size)
            .field("faces", &self.faces)
            .field("sequence", &self.sequence)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
