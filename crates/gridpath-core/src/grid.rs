//! The [`Grid`] type: a fixed-size 2D array of [`Cell`]s.
//!
//! The grid is the single shared surface between a search and its host:
//! searches borrow it mutably and flip cell states, the host reads those
//! states back whenever it is notified.
//!
//! A grid can also be written and read as plain text, one glyph per cell
//! (see [`CellState::glyph`]):
//!
//! ```text
//! S..#.
//! .#.#.
//! .#...
//! ...#E
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::cell::{Cell, CellState};
use crate::error::{GridError, Result};
use crate::geom::{Point, Range};

/// A `rows × cols` matrix of cells with at most one start and one end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Create a grid of free cells. Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let cells = Range::new(0, 0, cols, rows).iter().map(Cell::new).collect();
        Self {
            cells,
            rows,
            cols,
            start: None,
            end: None,
        }
    }

    /// Parse a grid from the text map format.
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.chars().count();

        let mut grid = Grid::new(lines.len() as i32, expected as i32);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(GridError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let state = CellState::from_glyph(glyph)
                    .ok_or(GridError::UnknownGlyph { glyph, row, col })?;
                let pos = Point::at(row as i32, col as i32);
                match state {
                    CellState::Start if grid.start.is_some() => {
                        return Err(GridError::DuplicateEndpoint { state, pos });
                    }
                    CellState::End if grid.end.is_some() => {
                        return Err(GridError::DuplicateEndpoint { state, pos });
                    }
                    CellState::Start => grid.start = Some(pos),
                    CellState::End => grid.end = Some(pos),
                    _ => {}
                }
                if let Some(i) = grid.index(pos) {
                    grid.cells[i].set_state(state);
                }
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Dimensions and addressing
    // -----------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// The grid rectangle, `(0, 0)` to `(cols, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.cols, self.rows)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat row-major index of `p`, or `None` if it is outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.cols as usize) + (p.x as usize))
    }

    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(move |i| &mut self.cells[i])
    }

    /// State at `p`, or `None` outside the grid.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    // -----------------------------------------------------------------------
    // Endpoints and painting
    // -----------------------------------------------------------------------

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Make `p` the start cell. The previous start, if any, becomes free.
    pub fn place_start(&mut self, p: Point) -> Result<()> {
        self.check_placeable(p, self.end)?;
        if let Some(old) = self.start.replace(p) {
            if let Some(c) = self.cell_mut(old) {
                c.reset();
            }
        }
        if let Some(c) = self.cell_mut(p) {
            c.mark_start();
        }
        Ok(())
    }

    /// Make `p` the end cell. The previous end, if any, becomes free.
    pub fn place_end(&mut self, p: Point) -> Result<()> {
        self.check_placeable(p, self.start)?;
        if let Some(old) = self.end.replace(p) {
            if let Some(c) = self.cell_mut(old) {
                c.reset();
            }
        }
        if let Some(c) = self.cell_mut(p) {
            c.mark_end();
        }
        Ok(())
    }

    /// Move both markers at once, for instance to swap them.
    ///
    /// When `start == end` only the start marker is kept and the grid ends
    /// up without an end. Nothing changes if either cell is a barrier or
    /// outside the grid.
    pub fn place_endpoints(&mut self, start: Point, end: Point) -> Result<()> {
        self.check_placeable(start, None)?;
        self.check_placeable(end, None)?;
        for old in [self.start.take(), self.end.take()].into_iter().flatten() {
            if let Some(c) = self.cell_mut(old) {
                c.reset();
            }
        }
        self.place_start(start)?;
        if end != start {
            self.place_end(end)?;
        }
        Ok(())
    }

    fn check_placeable(&self, p: Point, other: Option<Point>) -> Result<()> {
        let state = self.state(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.rows,
            cols: self.cols,
        })?;
        if state == CellState::Barrier || other == Some(p) {
            return Err(GridError::Occupied { pos: p, state });
        }
        Ok(())
    }

    /// Turn `p` into a barrier. Start and end cells are left alone.
    ///
    /// Returns whether the cell changed. Neighbour lists go stale until the
    /// next [`update_neighbors`](Grid::update_neighbors).
    pub fn place_barrier(&mut self, p: Point) -> Result<bool> {
        let (rows, cols) = (self.rows, self.cols);
        let cell = self.cell_mut(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows,
            cols,
        })?;
        if cell.is_start() || cell.is_end() || cell.is_barrier() {
            return Ok(false);
        }
        cell.mark_barrier();
        Ok(true)
    }

    /// Reset `p` to free, forgetting it as start or end.
    pub fn erase(&mut self, p: Point) -> Result<()> {
        let (rows, cols) = (self.rows, self.cols);
        let cell = self.cell_mut(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows,
            cols,
        })?;
        cell.reset();
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        Ok(())
    }

    /// Repaint the start and end markers on their cells.
    pub fn restore_endpoints(&mut self) {
        if let Some(c) = self.start.and_then(|p| self.cell_mut(p)) {
            c.mark_start();
        }
        if let Some(c) = self.end.and_then(|p| self.cell_mut(p)) {
            c.mark_end();
        }
    }

    // -----------------------------------------------------------------------
    // Whole-grid operations
    // -----------------------------------------------------------------------

    /// Recompute every cell's neighbour list from the current barriers.
    ///
    /// Must run after barriers change and before a search starts.
    pub fn update_neighbors(&mut self) {
        let bounds = self.bounds();
        let neighbors: Vec<Vec<Point>> = self
            .cells
            .iter()
            .map(|c| {
                c.pos()
                    .neighbors_4()
                    .into_iter()
                    .filter(|&n| bounds.contains(n))
                    .filter(|&n| !self.cells[self.flat(n)].is_barrier())
                    .collect()
            })
            .collect();
        for (cell, list) in self.cells.iter_mut().zip(neighbors) {
            cell.set_neighbors(list);
        }
    }

    /// Clear everything: all cells free, no endpoints, no neighbours.
    pub fn reset(&mut self) {
        debug!("resetting {}x{} grid", self.rows, self.cols);
        for c in &mut self.cells {
            c.reset();
            c.clear_neighbors();
        }
        self.start = None;
        self.end = None;
    }

    /// Wipe the marks left by a search run, keeping barriers and endpoints.
    pub fn clear_search(&mut self) {
        for c in &mut self.cells {
            if c.state().is_search_mark() {
                c.reset();
            }
        }
        self.restore_endpoints();
    }

    #[inline]
    fn flat(&self, p: Point) -> usize {
        (p.y as usize) * (self.cols as usize) + (p.x as usize)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1) as usize) {
            for c in row {
                write!(f, "{}", c.state().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn states_and_points_round_trip() {
        let pairs: Vec<(Point, CellState)> = Grid::parse("S#\n.E")
            .unwrap()
            .iter()
            .map(|c| (c.pos(), c.state()))
            .collect();
        let json = serde_json::to_string(&pairs).unwrap();
        let back: Vec<(Point, CellState)> = serde_json::from_str(&json).unwrap();
        assert_eq!(pairs, back);
    }
}
