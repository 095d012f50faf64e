use gridpath_core::{Grid, Point};

use crate::outcome::Route;
use crate::traits::Notify;

/// Walk the predecessor map back from `end` to `start`.
///
/// Every intermediate cell is painted `Path` in order from the end towards
/// the start, with one notification per step. The `End` and `Start` markers
/// are repainted last. `came_from` is indexed like the grid and must hold no
/// entry for `start`.
pub(crate) fn reconstruct<N: Notify + ?Sized>(
    grid: &mut Grid,
    came_from: &[Option<Point>],
    start: Point,
    end: Point,
    notify: &mut N,
) -> Route {
    let mut cells = vec![end];
    let mut current = end;
    while let Some(prev) = grid.index(current).and_then(|i| came_from[i]) {
        current = prev;
        cells.push(current);
        if current != start {
            if let Some(c) = grid.cell_mut(current) {
                c.mark_path();
            }
        }
        notify.notify(grid);
    }
    if let Some(c) = grid.cell_mut(end) {
        c.mark_end();
    }
    if let Some(c) = grid.cell_mut(start) {
        c.mark_start();
    }
    cells.reverse();
    Route::new(cells)
}
