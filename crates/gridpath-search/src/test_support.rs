//! Fixtures shared by the algorithm tests.

use std::collections::VecDeque;

use gridpath_core::{Grid, Point};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Parse a text map and compute its neighbour lists.
pub(crate) fn prepared(text: &str) -> Grid {
    let mut g = Grid::parse(text).expect("valid test map");
    g.update_neighbors();
    g
}

/// Open `rows × cols` grid with the given endpoints.
pub(crate) fn open_grid(rows: i32, cols: i32, start: Point, end: Point) -> Grid {
    let mut g = Grid::new(rows, cols);
    g.place_start(start).expect("start in grid");
    g.place_end(end).expect("end in grid");
    g.update_neighbors();
    g
}

/// Seeded random grid: barriers with probability `density`, start in the
/// top-left corner and end in the bottom-right one.
pub(crate) fn random_grid(seed: u64, rows: i32, cols: i32, density: f64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Grid::new(rows, cols);
    for p in g.bounds() {
        let r: f64 = rng.random();
        if r < density {
            g.place_barrier(p).expect("point in grid");
        }
    }
    let start = Point::new(0, 0);
    let end = Point::new(cols - 1, rows - 1);
    g.erase(start).expect("start in grid");
    g.erase(end).expect("end in grid");
    g.place_start(start).expect("start in grid");
    g.place_end(end).expect("end in grid");
    g.update_neighbors();
    g
}

/// Reference shortest step count between the grid's endpoints, computed
/// from barrier states alone so it does not share code with the searches.
pub(crate) fn shortest_len(g: &Grid) -> Option<usize> {
    let (start, end) = (g.start()?, g.end()?);
    let mut dist = vec![usize::MAX; g.len()];
    let mut queue = VecDeque::from([start]);
    dist[g.index(start)?] = 0;
    while let Some(p) = queue.pop_front() {
        let d = dist[g.index(p)?];
        if p == end {
            return Some(d);
        }
        for n in p.neighbors_4() {
            let Some(ni) = g.index(n) else { continue };
            if dist[ni] != usize::MAX || g.cell(n).is_some_and(|c| c.is_barrier()) {
                continue;
            }
            dist[ni] = d + 1;
            queue.push_back(n);
        }
    }
    None
}
