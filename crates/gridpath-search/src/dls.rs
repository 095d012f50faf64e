//! Depth-limited search and iterative deepening.

use gridpath_core::{Context, Grid, Point};
use log::trace;

use crate::outcome::Outcome;
use crate::run::Run;
use crate::traits::Notify;

/// Deepest limit [`ids`] tries unless told otherwise.
pub const DEFAULT_IDS_MAX_DEPTH: usize = 100;

/// Depth-first search that never goes deeper than `limit` steps.
///
/// Instead of a visited set the search remembers the shallowest depth at
/// which each cell was reached, and pushes a cell again whenever a strictly
/// shallower route to it turns up. Cells popped at the limit are closed
/// without being expanded.
pub fn dls<N: Notify + ?Sized>(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    notify: &mut N,
    ctx: &Context,
    limit: usize,
) -> Outcome {
    match Run::begin("dls", grid, start, end, notify, ctx) {
        Some(run) => depth_limited(run, limit),
        None => Outcome::MissingEndpoint,
    }
}

fn depth_limited<N: Notify + ?Sized>(mut run: Run<'_, N>, limit: usize) -> Outcome {
    let mut best_depth: Vec<Option<usize>> = vec![None; run.grid.len()];
    best_depth[run.start_idx()] = Some(0);
    let mut stack = vec![(run.start, 0usize)];

    while let Some((current, depth)) = stack.pop() {
        if current == run.end {
            return run.found();
        }

        if depth >= limit {
            if run.finish_round(current) {
                return run.cancelled();
            }
            continue;
        }

        let next = depth + 1;
        let nbuf = run.take_neighbors(current);
        for &np in nbuf.iter() {
            let Some(ni) = run.idx(np) else { continue };
            if best_depth[ni].is_none_or(|d| next < d) {
                best_depth[ni] = Some(next);
                run.discover(np, current);
                stack.push((np, next));
            }
        }
        run.put_neighbors(nbuf);

        if run.finish_round(current) {
            return run.cancelled();
        }
    }

    run.not_found()
}

/// Iterative deepening: [`dls`] with limits `1, 2, …, max_depth` until one
/// succeeds.
///
/// Each attempt starts from scratch; only the cell marks of earlier attempts
/// stay visible. A start equal to the end is found without any limit, even
/// when `max_depth` is zero. Finds a shortest route (in steps) when its length is at
/// most `max_depth`, and reports [`Outcome::NotFound`] otherwise even if a
/// longer route exists.
pub fn ids<N: Notify + ?Sized>(
    grid: &mut Grid,
    start: Option<Point>,
    end: Option<Point>,
    notify: &mut N,
    ctx: &Context,
    max_depth: usize,
) -> Outcome {
    let (Some(s), Some(e)) = (start, end) else {
        return Outcome::MissingEndpoint;
    };
    if !grid.contains(s) || !grid.contains(e) {
        return Outcome::MissingEndpoint;
    }
    if s == e {
        return dls(grid, start, end, notify, ctx, 0);
    }
    for limit in 1..=max_depth {
        trace!("ids: depth limit {limit}");
        match dls(grid, start, end, notify, ctx, limit) {
            Outcome::NotFound => continue,
            other => return other,
        }
    }
    Outcome::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Silent;
    use crate::test_support::{open_grid, prepared, shortest_len};
    use gridpath_core::CellState;

    /// A single-file corridor whose only route is `len` steps long.
    fn corridor(len: i32) -> Grid {
        open_grid(1, len + 1, Point::new(0, 0), Point::new(len, 0))
    }

    #[test]
    fn dls_respects_the_limit() {
        let mut g = corridor(4);
        let (s, e) = (g.start(), g.end());
        assert_eq!(dls(&mut g, s, e, &mut Silent, &Context::new(), 3), Outcome::NotFound);
        g.clear_search();
        let out = dls(&mut g, s, e, &mut Silent, &Context::new(), 4);
        assert_eq!(out.path_len(), Some(4));
    }

    #[test]
    fn cells_at_the_limit_are_closed_not_expanded() {
        let mut g = corridor(5);
        let (s, e) = (g.start(), g.end());
        dls(&mut g, s, e, &mut Silent, &Context::new(), 2);
        assert_eq!(g.to_string(), "Sxx..E\n");
        assert_eq!(g.state(Point::new(3, 0)), Some(CellState::Free));
    }

    #[test]
    fn dls_revisits_cells_reached_by_a_shallower_route() {
        // Plain first-visit DFS would claim cells along the long way round;
        // tracking the best depth keeps the shallow route to E open.
        let mut g = prepared(
            "S..
             ...
             .E.",
        );
        let (s, e) = (g.start(), g.end());
        let out = dls(&mut g, s, e, &mut Silent, &Context::new(), 3);
        assert!(out.is_found());
        assert!(out.path_len().unwrap() <= 3);
        assert!(out.route().unwrap().is_contiguous());
    }

    #[test]
    fn ids_finds_shortest_length() {
        let mut g = prepared(
            "S.#....
             .##.##.
             .#..#E.
             ...#...",
        );
        let expected = shortest_len(&g);
        let (s, e) = (g.start(), g.end());
        let out = ids(&mut g, s, e, &mut Silent, &Context::new(), DEFAULT_IDS_MAX_DEPTH);
        assert_eq!(out.path_len(), expected);
    }

    #[test]
    fn ids_scans_limits_up_to_the_path_length() {
        let len = 6;
        let mut g = corridor(len);
        let (s, e) = (g.start(), g.end());
        let out = ids(&mut g, s, e, &mut Silent, &Context::new(), len as usize);
        assert_eq!(out.path_len(), Some(len as usize));
    }

    #[test]
    fn ids_gives_up_past_max_depth() {
        let mut g = corridor(8);
        let (s, e) = (g.start(), g.end());
        let out = ids(&mut g, s, e, &mut Silent, &Context::new(), 7);
        assert_eq!(out, Outcome::NotFound);
        assert_eq!(g.count(CellState::Path), 0);
    }

    #[test]
    fn ids_start_equals_end() {
        let mut g = open_grid(2, 2, Point::new(0, 0), Point::new(1, 1));
        let p = Some(Point::new(1, 0));
        let out = ids(&mut g, p, p, &mut Silent, &Context::new(), 5);
        assert_eq!(out.path_len(), Some(0));
    }

    #[test]
    fn ids_start_equals_end_with_zero_depth() {
        let mut g = open_grid(2, 2, Point::new(0, 0), Point::new(1, 1));
        let p = Some(Point::new(1, 0));
        let out = ids(&mut g, p, p, &mut Silent, &Context::new(), 0);
        assert!(out.is_found());
        assert_eq!(out.route().unwrap().cells(), &[Point::new(1, 0)]);
        assert_eq!(g.count(CellState::Path), 0);

        let (s, e) = (Some(Point::new(0, 0)), Some(Point::new(1, 1)));
        assert_eq!(ids(&mut g, s, e, &mut Silent, &Context::new(), 0), Outcome::NotFound);
    }

    #[test]
    fn ids_missing_endpoint() {
        let mut g = Grid::new(2, 2);
        let out = ids(&mut g, None, Some(Point::ZERO), &mut Silent, &Context::new(), 5);
        assert_eq!(out, Outcome::MissingEndpoint);
    }

    #[test]
    fn ids_cancellation_stops_deepening() {
        let mut g = corridor(10);
        let (s, e) = (g.start(), g.end());
        let ctx = Context::new();
        ctx.cancel();
        let mut rounds = 0;
        let out = ids(&mut g, s, e, &mut |_: &Grid| rounds += 1, &ctx, 20);
        assert_eq!(out, Outcome::Cancelled);
        assert_eq!(rounds, 1);
    }
}
