//! Priority-driven search shared by UCS, Dijkstra and A*.

use gridpath_core::Point;

use crate::frontier::PriorityQueue;
use crate::outcome::Outcome;
use crate::run::{Run, UNREACHABLE};
use crate::traits::Notify;

/// When the search is allowed to stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum GoalTest {
    /// Stop as soon as the end is popped from the queue.
    OnPop,
    /// Drain the whole queue, then look at the end's cost.
    Exhaust,
}

/// Expand cells in order of `key(cell, g)`, where `g` is the number of steps
/// from the start.
///
/// Costs are relaxed only when strictly improved. `open_set` tracks which
/// cells are pending, but only to paint each one open once: it does not
/// keep a cell to a single queue entry. An improved cost for a pending cell
/// queues a second entry with the new key, and the outdated entry is
/// skipped when it surfaces (`g > g_score`). A one-entry-per-cell queue
/// would keep the old key and could expand the cell out of order.
pub(crate) fn best_first<N, K>(mut run: Run<'_, N>, goal: GoalTest, key: K) -> Outcome
where
    N: Notify + ?Sized,
    K: Fn(Point, i32) -> i32,
{
    let len = run.grid.len();
    let mut g_score = vec![UNREACHABLE; len];
    let mut open_set = vec![false; len];
    let mut queue = PriorityQueue::new();

    let si = run.start_idx();
    g_score[si] = 0;
    open_set[si] = true;
    queue.push(key(run.start, 0), (run.start, 0));

    while let Some((_, (current, g))) = queue.pop() {
        let Some(ci) = run.idx(current) else { continue };
        // Skip stale entries.
        if g > g_score[ci] {
            continue;
        }
        open_set[ci] = false;

        if goal == GoalTest::OnPop && current == run.end {
            return run.found();
        }

        let nbuf = run.take_neighbors(current);
        for &np in nbuf.iter() {
            let Some(ni) = run.idx(np) else { continue };
            let tentative = g + 1;
            if tentative >= g_score[ni] {
                continue;
            }
            g_score[ni] = tentative;
            run.set_parent(np, current);
            if !open_set[ni] {
                open_set[ni] = true;
                run.mark_open(np);
            }
            queue.push(key(np, tentative), (np, tentative));
        }
        run.put_neighbors(nbuf);

        if run.finish_round(current) {
            return run.cancelled();
        }
    }

    let reached = run.idx(run.end).is_some_and(|ei| g_score[ei] != UNREACHABLE);
    if goal == GoalTest::Exhaust && reached {
        return run.found();
    }
    run.not_found()
}
