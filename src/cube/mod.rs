//! The cube model and its move machinery.
//!
//! ## Key Types
//!
//! - [`Cube`]: six faces plus the rotation operations
//! - [`MoveEvent`]: announcement of a deferred move, carrying its commit
//! - [`MoveCommit`]: the deferred mutation, applied exactly once
//! - [`EventChannel`]: the publish capability the cube consumes
//! - [`TileAccumulator`]: tiles touched by one move, in presentation order
//!
//! ## Deferred-commit protocol
//!
//! An animated rotation publishes a [`MoveEvent`] instead of mutating; the
//! model changes only when the event's commit is handed back to
//! [`Cube::apply`]. Until then the cube is *pending* and refuses further
//! rotations. The full state machine is Idle -> Pending -> Idle, exited
//! exactly once per move by `apply` (or abandoned via
//! [`Cube::discard_pending`]).

pub mod accumulator;
pub mod event;
pub mod model;

mod plan;

pub use accumulator::TileAccumulator;
pub use event::{EventChannel, FaceSpin, Line, MergeStep, MoveCommit, MoveEvent};
pub use model::Cube;
