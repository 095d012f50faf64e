use gridpath_core::{Context, Grid, Point};

use crate::best_first::{GoalTest, best_first};
use crate::outcome::Outcome;
use crate::run::Run;
use crate::traits::Notify;

/// Dijkstra's algorithm over the whole reachable grid.
///
/// Unlike [`ucs`](crate::ucs) it keeps relaxing until the queue is empty,
/// so the animation shows the complete distance field; only then is the
/// end's cost checked and the route painted. On a unit-cost grid the route
/// has the same length UCS would find.
pub fn dijkstra<N: Notify + ?Sized>(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    notify: &mut N,
    ctx: &Context,
) -> Outcome {
    match Run::begin("dijkstra", grid, start, end, notify, ctx) {
        Some(run) => best_first(run, GoalTest::Exhaust, |_, g| g),
        None => Outcome::MissingEndpoint,
    }
}
