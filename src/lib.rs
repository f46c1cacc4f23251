//! # rust-twisty
//!
//! An NxNxN twisty-puzzle model for external renderers (terminal or DOM).
//!
//! ## Design Principles
//!
//! 1. **Model Only**: No rendering, input handling, or presentation. The
//!    crate exposes the cube state and a narrow event contract; renderers
//!    do the rest.
//!
//! 2. **Tiles Are Stickers**: Every tile keeps its color and home position
//!    for the cube's whole lifetime. Moves relocate tiles, never create or
//!    destroy them.
//!
//! 3. **Value-Semantics Slices**: Rotation cycles work on frozen snapshot
//!    slices, so a captured slice can never alias a later merge.
//!
//! 4. **Deferred Commits**: An animated move publishes an event carrying
//!    its mutation as data; the model changes only when the commit is
//!    handed back. Renderers animate against the pre-move state.
//!
//! ## Architecture
//!
//! - The six rotation operations are generated from one declarative cycle
//!   table, so the orientation corrections live in a single place.
//! - Faces store their grids in persistent vectors (`im`), making
//!   renderer-facing snapshots cheap.
//! - Opaque per-tile payloads: a construction callback supplies them, the
//!   core hands them back unchanged in every move event.
//!
//! ## Modules
//!
//! - `core`: positions, sides, axes, tiles, errors, RNG
//! - `face`: the tile grid and the slice algebra
//! - `cube`: the cube itself, move events, commits, the channel capability

pub mod core;
pub mod cube;
pub mod face;

// Re-export commonly used types
pub use crate::core::{Axis, CubeError, CubeRng, Direction, Move, Position, Side, SideMap, Tile};

pub use crate::face::{Face, Slice};

pub use crate::cube::{
    Cube, EventChannel, FaceSpin, Line, MergeStep, MoveCommit, MoveEvent, TileAccumulator,
};
