//! Structured errors surfaced by the cube model.
//!
//! All conditions are detected synchronously and are fatal to the single
//! operation only: the cube remains fully usable after a rejected call.

use thiserror::Error;

use super::side::Side;

/// Canonical error type for the cube model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A cube must have at least one layer per axis.
    #[error("cube size must be at least 1, got {size}")]
    InvalidSize { size: usize },

    /// A rotation named a layer outside `[0, size)`.
    #[error("layer {layer} out of range for a size-{size} cube")]
    LayerOutOfRange { layer: usize, size: usize },

    /// An explicit layout supplied a face grid that is not size x size.
    #[error("{side} face grid is {rows}x{cols}, expected {expected}x{expected}")]
    MalformedFace {
        side: Side,
        expected: usize,
        rows: usize,
        cols: usize,
    },

    /// A rotation was requested while a deferred move is still pending.
    #[error("a deferred move is pending; apply or discard it before rotating again")]
    MovePending,

    /// A commit did not match the pending move: already applied, discarded,
    /// or issued by another cube.
    #[error("commit {sequence} does not match the pending move")]
    StaleCommit { sequence: u64 },
}
