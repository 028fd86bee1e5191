//! Engine error types

use crate::board::Pos;
use thiserror::Error;

/// Errors surfaced by the move-selection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The board is full, or no empty cell passes the adjacency filter.
    #[error("no move available")]
    NoMoveAvailable,

    /// The engine tried to commit a move onto an occupied cell. The
    /// scans and the generator only ever yield empty cells, so this is
    /// an internal invariant break: fatal, never retried.
    #[error("selected cell {pos} is already occupied")]
    CellOccupied { pos: Pos },

    /// Rejected search depth at engine construction.
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(i8),
}
