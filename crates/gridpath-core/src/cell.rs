//! The [`Cell`] type, one grid square with its search state.

use crate::geom::Point;

/// Visual and search state of a cell.
///
/// Searches communicate with the host by flipping these states in place:
/// `Open` when a cell is discovered, `Closed` once it is expanded and `Path`
/// for the reconstructed route.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Barrier,
    Start,
    End,
    Open,
    Closed,
    Path,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 7] = [
        CellState::Free,
        CellState::Barrier,
        CellState::Start,
        CellState::End,
        CellState::Open,
        CellState::Closed,
        CellState::Path,
    ];

    /// Glyph used by the text map format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Barrier => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }

    /// Inverse of [`glyph`](CellState::glyph).
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.glyph() == ch)
    }

    /// Whether the state was produced by a search run (open, closed or path).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }
}

/// A grid cell: an immutable position, a mutable [`CellState`] and the list
/// of traversable orthogonal neighbours computed by
/// [`Grid::update_neighbors`](crate::Grid::update_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    state: CellState,
    neighbors: Vec<Point>,
}

impl Cell {
    /// Create a free cell at `pos` with no neighbours computed yet.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Free,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Neighbours as of the last recompute. Stale if barriers changed since.
    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<Point>) {
        self.neighbors = neighbors;
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.state == CellState::Free
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }

    #[inline]
    pub fn mark_open(&mut self) {
        self.state = CellState::Open;
    }

    #[inline]
    pub fn mark_closed(&mut self) {
        self.state = CellState::Closed;
    }

    #[inline]
    pub fn mark_path(&mut self) {
        self.state = CellState::Path;
    }

    /// Paint the start marker. Prefer [`Grid::place_start`](crate::Grid::place_start),
    /// which also keeps the start unique.
    #[inline]
    pub fn mark_start(&mut self) {
        self.state = CellState::Start;
    }

    /// Paint the end marker. Prefer [`Grid::place_end`](crate::Grid::place_end).
    #[inline]
    pub fn mark_end(&mut self) {
        self.state = CellState::End;
    }

    #[inline]
    pub fn mark_barrier(&mut self) {
        self.state = CellState::Barrier;
    }

    /// Back to [`CellState::Free`].
    #[inline]
    pub fn reset(&mut self) {
        self.state = CellState::Free;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for s in CellState::ALL {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn mutators_change_state() {
        let mut c = Cell::new(Point::new(1, 2));
        assert!(c.is_free());
        c.mark_open();
        assert!(c.is_open());
        c.mark_closed();
        assert!(c.is_closed());
        c.mark_path();
        assert!(c.is_path());
        c.mark_barrier();
        assert!(c.is_barrier());
        c.reset();
        assert_eq!(c.state(), CellState::Free);
        assert_eq!(c.pos(), Point::new(1, 2));
    }

    #[test]
    fn search_marks() {
        assert!(CellState::Open.is_search_mark());
        assert!(CellState::Path.is_search_mark());
        assert!(!CellState::Start.is_search_mark());
        assert!(!CellState::Barrier.is_search_mark());
    }
}
