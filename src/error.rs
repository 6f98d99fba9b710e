//! Error types
//!
//! Maze errors are invariant violations: a correct caller never sees them.
//! Settings errors come from user-supplied configuration files.

use thiserror::Error;

use crate::maze::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("cell ({row}, {column}) is outside a {rows}x{columns} grid")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("cells {from:?} and {to:?} do not share an edge")]
    InvalidAdjacency { from: Cell, to: Cell },

    #[error("maze dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {reason}")]
    Invalid { reason: String },

    #[error(transparent)]
    Maze(#[from] MazeError),
}
