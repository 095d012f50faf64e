//! Per-call search state shared by every algorithm.
//!
//! A [`Run`] owns the transient data of one search call (predecessor map,
//! neighbour scratch buffer) together with the loans on the grid, the notify
//! hook and the cancellation context. Algorithms only decide *which* cell to
//! expand next; discovering, closing, notifying, cancelling and backtracking
//! all go through here so every algorithm paints the grid the same way.

use gridpath_core::{Context, Grid, Point};
use log::debug;

use crate::outcome::Outcome;
use crate::path;
use crate::traits::Notify;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) struct Run<'a, N: Notify + ?Sized> {
    pub(crate) grid: &'a mut Grid,
    notify: &'a mut N,
    ctx: &'a Context,
    pub(crate) start: Point,
    pub(crate) end: Point,
    came_from: Vec<Option<Point>>,
    nbuf: Vec<Point>,
    rounds: usize,
    name: &'static str,
}

impl<'a, N: Notify + ?Sized> Run<'a, N> {
    /// Validate the endpoints and set up empty transient state.
    ///
    /// Endpoints that differ from the grid's own are moved onto the grid
    /// first, so at most one cell ever shows each marker. Returns `None`
    /// (and leaves the grid untouched) when either endpoint is missing,
    /// outside the grid or on a barrier.
    pub(crate) fn begin(
        name: &'static str,
        grid: &'a mut Grid,
        start: Option<Point>,
        end: Option<Point>,
        notify: &'a mut N,
        ctx: &'a Context,
    ) -> Option<Self> {
        let (Some(start), Some(end)) = (start, end) else {
            debug!("{name}: start or end missing");
            return None;
        };
        let matches_grid =
            grid.start() == Some(start) && (start == end || grid.end() == Some(end));
        if !matches_grid {
            if let Err(e) = grid.place_endpoints(start, end) {
                debug!("{name}: cannot use {start} -> {end}: {e}");
                return None;
            }
        }
        debug!("{name}: searching {start} -> {end}");
        let len = grid.len();
        Some(Self {
            grid,
            notify,
            ctx,
            start,
            end,
            came_from: vec![None; len],
            nbuf: Vec::with_capacity(4),
            rounds: 0,
            name,
        })
    }

    /// Flat index of `p`, `None` outside the grid.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.grid.index(p)
    }

    /// Flat index of the start, which `begin` checked to be in the grid.
    #[inline]
    pub(crate) fn start_idx(&self) -> usize {
        self.grid.index(self.start).unwrap_or_default()
    }

    /// Take the neighbour scratch buffer filled with the neighbours of `p`.
    /// Hand it back with [`put_neighbors`](Run::put_neighbors).
    pub(crate) fn take_neighbors(&mut self, p: Point) -> Vec<Point> {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        if let Some(c) = self.grid.cell(p) {
            nbuf.extend_from_slice(c.neighbors());
        }
        nbuf
    }

    pub(crate) fn put_neighbors(&mut self, nbuf: Vec<Point>) {
        self.nbuf = nbuf;
    }

    #[inline]
    pub(crate) fn is_barrier(&self, p: Point) -> bool {
        self.grid.cell(p).is_some_and(|c| c.is_barrier())
    }

    /// Record `from` as the predecessor of `p` without touching its state.
    #[inline]
    pub(crate) fn set_parent(&mut self, p: Point, from: Point) {
        if let Some(i) = self.grid.index(p) {
            self.came_from[i] = Some(from);
        }
    }

    #[inline]
    pub(crate) fn mark_open(&mut self, p: Point) {
        if let Some(c) = self.grid.cell_mut(p) {
            c.mark_open();
        }
    }

    /// Record the predecessor of a newly reached cell and paint it open.
    #[inline]
    pub(crate) fn discover(&mut self, p: Point, from: Point) {
        self.set_parent(p, from);
        self.mark_open(p);
    }

    /// End of one expansion round: redraw, close `current` (the start keeps
    /// its marker) and poll for cancellation.
    ///
    /// Returns `true` when the host asked to stop.
    pub(crate) fn finish_round(&mut self, current: Point) -> bool {
        self.notify.notify(self.grid);
        if current != self.start {
            if let Some(c) = self.grid.cell_mut(current) {
                c.mark_closed();
            }
        }
        self.rounds += 1;
        self.ctx.is_done()
    }

    /// Backtrack from the end, paint the route and finish.
    pub(crate) fn found(self) -> Outcome {
        let route = path::reconstruct(
            self.grid,
            &self.came_from,
            self.start,
            self.end,
            &mut *self.notify,
        );
        debug!(
            "{}: path of length {} after {} rounds",
            self.name,
            route.len(),
            self.rounds
        );
        Outcome::Found(route)
    }

    pub(crate) fn not_found(self) -> Outcome {
        debug!("{}: no path after {} rounds", self.name, self.rounds);
        Outcome::NotFound
    }

    /// Stop early, leaving the exploration marks but restoring the endpoint
    /// markers.
    pub(crate) fn cancelled(self) -> Outcome {
        debug!("{}: cancelled after {} rounds", self.name, self.rounds);
        if let Some(c) = self.grid.cell_mut(self.end) {
            c.mark_end();
        }
        if let Some(c) = self.grid.cell_mut(self.start) {
            c.mark_start();
        }
        Outcome::Cancelled
    }
}
