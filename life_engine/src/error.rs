// error.rs - Error types for grid construction and editing

use thiserror::Error;

pub type Result<T, E = GridError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) holds {value:?}, expected a dead or live cell")]
    InvalidCell { row: usize, col: usize, value: String },

    #[error("buffer is {found_rows}x{found_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },
}

/// Errors raised by the [`Life`](crate::Life) controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("cannot toggle cell ({row}, {col}) while the simulation is running")]
    EditWhileRunning { row: usize, col: usize },

    #[error("cannot replace the grid while the simulation is running")]
    ResetWhileRunning,

    #[error(transparent)]
    Grid(#[from] GridError),
}
