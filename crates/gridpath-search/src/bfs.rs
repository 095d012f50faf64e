use std::collections::VecDeque;

use gridpath_core::{Context, Grid, Point};

use crate::outcome::Outcome;
use crate::run::Run;
use crate::traits::{Frontier, Notify};

/// Breadth-first search from `start` to `end`.
///
/// Level-order traversal through a FIFO frontier. Every step costs 1, so the
/// first time `end` is popped its route has the fewest possible steps.
pub fn bfs<N: Notify + ?Sized>(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    notify: &mut N,
    ctx: &Context,
) -> Outcome {
    match Run::begin("bfs", grid, start, end, notify, ctx) {
        Some(run) => first_visit(run, VecDeque::new()),
        None => Outcome::MissingEndpoint,
    }
}

/// Visited-set traversal shared by BFS and DFS; only the frontier
/// discipline differs.
///
/// A cell is marked visited when it is pushed, so it enters the frontier at
/// most once. The goal test happens when a cell is popped.
pub(crate) fn first_visit<N, F>(mut run: Run<'_, N>, mut frontier: F) -> Outcome
where
    N: Notify + ?Sized,
    F: Frontier<Point>,
{
    let mut visited = vec![false; run.grid.len()];
    visited[run.start_idx()] = true;
    frontier.push(run.start);

    while let Some(current) = frontier.pop() {
        if current == run.end {
            return run.found();
        }

        let nbuf = run.take_neighbors(current);
        for &np in nbuf.iter() {
            let Some(ni) = run.idx(np) else { continue };
            if visited[ni] || run.is_barrier(np) {
                continue;
            }
            visited[ni] = true;
            run.discover(np, current);
            frontier.push(np);
        }
        run.put_neighbors(nbuf);

        if run.finish_round(current) {
            return run.cancelled();
        }
    }

    run.not_found()
}
