use thiserror::Error;

use crate::cell::CellState;
use crate::geom::Point;

/// Convenient result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by grid edits and by the text map parser.
///
/// Searches never return these: an unreachable end or a missing endpoint is
/// an ordinary search outcome.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The point lies outside the grid.
    #[error("{pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Point, rows: i32, cols: i32 },

    /// The target cell already holds a marker that cannot be overwritten.
    #[error("cell {pos} is occupied by {state:?}")]
    Occupied { pos: Point, state: CellState },

    /// A map row does not have the same width as the first row.
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A map contains a character that is not a cell glyph.
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    /// A map contains a second start or end marker.
    #[error("map has more than one {state:?} marker (second at {pos})")]
    DuplicateEndpoint { state: CellState, pos: Point },

    /// A map has no rows.
    #[error("map is empty")]
    Empty,
}
