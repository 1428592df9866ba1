//! **wayfind-core**: grid model for step-traced pathfinding.
//!
//! This crate provides the data the searches in *wayfind-paths* operate on:
//! geometry primitives, the [`Cell`] record with its search scratch, the
//! per-run [`Grid`] snapshot, and the editable [`Layout`] that grids are
//! built from.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, CellId, CellRef, Status, UNREACHABLE};
pub use error::{GridError, Role};
pub use geom::{Point, Range};
pub use grid::{Grid, build_grid, build_weighted_grid};
pub use layout::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, Layout, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};
