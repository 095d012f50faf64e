use gridpath_core::Grid;

/// Per-round redraw hook.
///
/// A running search holds the only mutable loan on the grid, so the hook is
/// handed a shared view of it each time it fires. Implemented for every
/// `FnMut(&Grid)` closure.
pub trait Notify {
    /// Called once per expansion round and once per step of path
    /// reconstruction.
    fn notify(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> Notify for F {
    #[inline]
    fn notify(&mut self, grid: &Grid) {
        self(grid)
    }
}

/// A notifier that ignores every round.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Notify for Silent {
    #[inline]
    fn notify(&mut self, _grid: &Grid) {}
}

/// Pending-cell collection driving an uninformed search: its pop order is
/// the traversal order.
pub trait Frontier<T> {
    fn push(&mut self, item: T);

    /// Remove the next item to expand.
    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
