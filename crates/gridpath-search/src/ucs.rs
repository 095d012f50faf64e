use gridpath_core::{Context, Grid, Point};

use crate::best_first::{GoalTest, best_first};
use crate::outcome::Outcome;
use crate::run::Run;
use crate::traits::Notify;

/// Uniform-cost search: expand cells by accumulated cost and stop as soon as
/// `end` is popped.
pub fn ucs<N: Notify + ?Sized>(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    notify: &mut N,
    ctx: &Context,
) -> Outcome {
    match Run::begin("ucs", grid, start, end, notify, ctx) {
        Some(run) => best_first(run, GoalTest::OnPop, |_, g| g),
        None => Outcome::MissingEndpoint,
    }
}
