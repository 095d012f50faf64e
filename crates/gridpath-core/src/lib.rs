//! **gridpath-core**: grid model for the gridpath pathfinding visualizer.
//!
//! This crate provides the types shared by the search engine and its hosts:
//! geometry primitives, cells with their visual/search state, the grid with
//! its neighbour lists and text map format, and a cancellation token.

pub mod cell;
pub mod context;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use context::Context;
pub use error::{GridError, Result};
pub use geom::{Point, Range};
pub use grid::Grid;
