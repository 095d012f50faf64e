use gridpath_core::{Context, Grid, Point};

use crate::bfs::first_visit;
use crate::outcome::Outcome;
use crate::run::Run;
use crate::traits::Notify;

/// Depth-first search from `start` to `end`.
///
/// LIFO frontier: follows one branch until it dead-ends, then backtracks.
/// Finds *a* path when one exists, with no guarantee about its length.
pub fn dfs<N: Notify + ?Sized>(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    notify: &mut N,
    ctx: &Context,
) -> Outcome {
    match Run::begin("dfs", grid, start, end, notify, ctx) {
        Some(run) => first_visit(run, Vec::new()),
        None => Outcome::MissingEndpoint,
    }
}
