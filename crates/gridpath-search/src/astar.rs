use gridpath_core::{Context, Grid, Point};

use crate::best_first::{GoalTest, best_first};
use crate::distance::Heuristic;
use crate::outcome::Outcome;
use crate::run::Run;
use crate::traits::Notify;

/// A* search keyed by `f = g + h`.
///
/// `g` counts steps from the start and `h` is `heuristic`'s estimate of the
/// steps left to `end`. Both heuristics are admissible and consistent on a
/// 4-connected unit grid, so the route found is a shortest one. Equal `f`
/// values are expanded in insertion order.
pub fn astar<N: Notify + ?Sized>(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    notify: &mut N,
    ctx: &Context,
    heuristic: Heuristic,
) -> Outcome {
    let Some(run) = Run::begin("astar", grid, start, end, notify, ctx) else {
        return Outcome::MissingEndpoint;
    };
    let goal = run.end;
    best_first(run, GoalTest::OnPop, move |p, g| {
        g + heuristic.estimate(p, goal)
    })
}
