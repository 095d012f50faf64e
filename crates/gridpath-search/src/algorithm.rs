//! Algorithm selection: the enumeration a host exposes to its user.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Context, Grid};
use log::debug;

use crate::distance::Heuristic;
use crate::dls::DEFAULT_IDS_MAX_DEPTH;
use crate::outcome::Outcome;
use crate::traits::Notify;
use crate::{astar, bfs, dfs, dijkstra, dls, ids, ucs};

/// Depth limit used by [`Algorithm::Dls`] unless configured.
pub const DEFAULT_DEPTH_LIMIT: usize = 20;

/// Tunables for the algorithms that take extra parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Limit for a single depth-limited run.
    pub depth_limit: usize,
    /// Deepest limit iterative deepening tries.
    pub ids_max_depth: usize,
    /// Estimate used by A*.
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            ids_max_depth: DEFAULT_IDS_MAX_DEPTH,
            heuristic: Heuristic::default(),
        }
    }
}

/// One of the supported search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dls,
    Ids,
    Ucs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dls,
        Algorithm::Ids,
        Algorithm::Ucs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dls => "DLS",
            Algorithm::Ids => "IDS",
            Algorithm::Ucs => "UCS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
        }
    }

    /// Whether the route found is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs | Algorithm::Dls)
    }

    /// Run on the grid's own start and end cells.
    ///
    /// Neighbour lists are used as they are: call
    /// [`Grid::update_neighbors`] after editing barriers.
    pub fn run<N: Notify + ?Sized>(
        self,
        grid: &mut Grid,
        notify: &mut N,
        ctx: &Context,
        config: &SearchConfig,
    ) -> Outcome {
        let (start, end) = (grid.start(), grid.end());
        debug!("running {self} with {config:?}");
        match self {
            Algorithm::Bfs => bfs(grid, start, end, notify, ctx),
            Algorithm::Dfs => dfs(grid, start, end, notify, ctx),
            Algorithm::Dls => dls(grid, start, end, notify, ctx, config.depth_limit),
            Algorithm::Ids => ids(grid, start, end, notify, ctx, config.ids_max_depth),
            Algorithm::Ucs => ucs(grid, start, end, notify, ctx),
            Algorithm::Dijkstra => dijkstra(grid, start, end, notify, ctx),
            Algorithm::AStar => astar(grid, start, end, notify, ctx, config.heuristic),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dls" => Ok(Algorithm::Dls),
            "ids" => Ok(Algorithm::Ids),
            "ucs" => Ok(Algorithm::Ucs),
            "dijkstra" | "dijk" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(format!("unknown algorithm {other:?}")),
        }
    }
}
