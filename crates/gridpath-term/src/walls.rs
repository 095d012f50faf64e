//! Random barrier scatter for generated grids.

use gridpath_core::{Grid, Point, Result};
use rand::RngExt;

/// Turn each free cell into a barrier with probability `density`.
///
/// Start and end cells are never covered. Returns the number of barriers
/// placed.
pub fn scatter(grid: &mut Grid, density: f64, rng: &mut impl RngExt) -> Result<usize> {
    let mut placed = 0;
    for p in grid.bounds() {
        let r: f64 = rng.random();
        if r < density && grid.place_barrier(p)? {
            placed += 1;
        }
    }
    Ok(placed)
}

/// Start in the top-left corner, end in the bottom-right one.
pub fn place_corners(grid: &mut Grid) -> Result<()> {
    let start = Point::new(0, 0);
    let end = Point::new(grid.cols() - 1, grid.rows() - 1);
    grid.place_start(start)?;
    grid.place_end(end)
}
