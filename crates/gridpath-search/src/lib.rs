//! Step-by-step search algorithms for grid pathfinding visualizers.
//!
//! Every algorithm works on a [`gridpath_core::Grid`] borrowed mutably for
//! the length of the call and reports its progress by changing cell states
//! in place:
//!
//! - discovered cells become **open**, expanded cells **closed**;
//! - on success the route is painted as **path** cells, end to start;
//! - the [`Notify`] hook fires once per expansion round and once per
//!   backtracking step so a host can redraw;
//! - the host's [`Context`](gridpath_core::Context) is polled once per round
//!   and cancels the run when set.
//!
//! | Function | Frontier | Shortest route |
//! |---|---|---|
//! | [`bfs`] | FIFO | yes |
//! | [`dfs`] | LIFO | no |
//! | [`dls`] / [`ids`] | LIFO with depth bound | `ids`: yes, up to its bound |
//! | [`ucs`] | priority on cost, stops at the end | yes |
//! | [`dijkstra`] | priority on cost, drains the queue | yes |
//! | [`astar`] | priority on cost + estimate | yes |
//!
//! [`Algorithm`] wraps them behind a single enumeration for hosts.

mod algorithm;
mod astar;
mod best_first;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod dls;
mod frontier;
mod outcome;
mod path;
mod run;
mod traits;
mod ucs;

#[cfg(test)]
mod test_support;

pub use algorithm::{Algorithm, DEFAULT_DEPTH_LIMIT, SearchConfig};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::{Heuristic, euclidean, manhattan};
pub use dls::{DEFAULT_IDS_MAX_DEPTH, dls, ids};
pub use frontier::PriorityQueue;
pub use outcome::{Outcome, Route};
pub use run::UNREACHABLE;
pub use traits::{Frontier, Notify, Silent};
pub use ucs::ucs;
