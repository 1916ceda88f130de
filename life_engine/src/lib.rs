//! Conway's Game of Life on a bounded grid.
//!
//! [`rules`] holds the pure generation functions; [`Life`] wraps them with
//! the run state and editing rules an interactive front end needs.

pub mod error;
pub mod grid;
pub mod life;
pub mod patterns;
pub mod rules;

pub use error::{GridError, LifeError};
pub use grid::Grid;
pub use life::{Life, RunState};
pub use patterns::{Pattern, PATTERNS};
pub use rules::{count_neighbors, step, step_into, toggle_cell};
