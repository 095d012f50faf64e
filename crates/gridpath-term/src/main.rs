//! `gridpath`: watch grid search algorithms explore, in the terminal or in
//! batch.

mod app;
mod headless;
mod model;
mod screen;
mod walls;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use gridpath_core::Grid;
use gridpath_search::{
    Algorithm, DEFAULT_DEPTH_LIMIT, DEFAULT_IDS_MAX_DEPTH, Heuristic, Outcome, SearchConfig,
};
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing_subscriber::EnvFilter;

use crate::model::Visualizer;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step-by-step grid pathfinding visualizer")]
struct Cli {
    /// Grid height when no map is given.
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(i32).range(1..=500))]
    rows: i32,

    /// Grid width when no map is given.
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(i32).range(1..=500))]
    cols: i32,

    /// bfs, dfs, dls, ids, ucs, dijkstra or astar.
    #[arg(short, long, default_value = "bfs")]
    algorithm: Algorithm,

    /// Load the grid from a text map (`.` free, `#` wall, `S` start, `E` end).
    #[arg(long)]
    map: Option<PathBuf>,

    /// Scatter random walls over the grid with this probability.
    #[arg(long, value_parser = parse_density)]
    walls: Option<f64>,

    /// Seed for --walls; random when omitted.
    #[arg(long, requires = "walls")]
    seed: Option<u64>,

    /// Pause after each search round, in milliseconds.
    #[arg(long, default_value_t = 10)]
    delay_ms: u64,

    /// Depth limit for DLS.
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,

    /// Deepest limit tried by IDS.
    #[arg(long, default_value_t = DEFAULT_IDS_MAX_DEPTH)]
    ids_max_depth: usize,

    /// A* estimate: manhattan or euclidean.
    #[arg(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Run once and print the result instead of opening the visualizer.
    #[arg(long)]
    headless: bool,

    /// Write logs here (interactive mode only logs when this is set).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth_limit: self.depth_limit,
            ids_max_depth: self.ids_max_depth,
            heuristic: self.heuristic,
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("{d} is not between 0 and 1"))
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut grid = build_grid(&cli)?;
    let config = cli.search_config();

    if cli.headless {
        let mut stdout = std::io::stdout().lock();
        let outcome = headless::run(&mut grid, cli.algorithm, &config, &mut stdout)?;
        return Ok(match outcome {
            Outcome::Found(_) => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::from(2),
            Outcome::Cancelled | Outcome::MissingEndpoint => ExitCode::FAILURE,
        });
    }

    let model = Visualizer::new(grid, cli.algorithm, config);
    app::run(model, Duration::from_millis(cli.delay_ms))?;
    Ok(ExitCode::SUCCESS)
}

/// Load the map or generate a grid. Generated grids get corner endpoints in
/// headless mode; interactively the user places them.
fn build_grid(cli: &Cli) -> Result<Grid> {
    let mut grid = match &cli.map {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read map {}", path.display()))?;
            Grid::parse(&text).with_context(|| format!("invalid map {}", path.display()))?
        }
        None => {
            let mut grid = Grid::new(cli.rows, cli.cols);
            if cli.headless {
                walls::place_corners(&mut grid)
                    .context("grid too small for separate start and end")?;
            }
            grid
        }
    };

    if let Some(density) = cli.walls {
        let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
        let placed = walls::scatter(&mut grid, density, &mut StdRng::seed_from_u64(seed))?;
        info!("placed {placed} walls (density {density}, seed {seed})");
    }
    Ok(grid)
}

/// Install the log subscriber: stderr in headless mode, the log file
/// otherwise, since the visualizer owns the terminal.
fn init_tracing(cli: &Cli) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = match (&cli.log_file, cli.headless) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        (None, true) => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init(),
        (None, false) => return Ok(()),
    };
    installed.map_err(|e| anyhow!("failed to install logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["gridpath"]);
        assert_eq!((cli.rows, cli.cols), (25, 25));
        assert_eq!(cli.algorithm, Algorithm::Bfs);
        assert_eq!(cli.delay_ms, 10);
        assert_eq!(cli.search_config(), SearchConfig::default());
    }

    #[test]
    fn algorithm_names_are_case_insensitive() {
        let cli = Cli::parse_from(["gridpath", "--algorithm", "A*", "--heuristic", "euclidean"]);
        assert_eq!(cli.algorithm, Algorithm::AStar);
        assert_eq!(cli.heuristic, Heuristic::Euclidean);
    }

    #[test]
    fn density_is_bounded() {
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("lots").is_err());
        assert!(Cli::try_parse_from(["gridpath", "--seed", "3"]).is_err());
    }

    #[test]
    fn headless_generated_grid_has_corner_endpoints() {
        let cli = Cli::parse_from(["gridpath", "--headless", "--rows", "4", "--cols", "6"]);
        let grid = build_grid(&cli).unwrap();
        assert_eq!(grid.start(), Some(gridpath_core::Point::new(0, 0)));
        assert_eq!(grid.end(), Some(gridpath_core::Point::new(5, 3)));

        let cli = Cli::parse_from(["gridpath", "--rows", "4", "--cols", "6"]);
        assert_eq!(build_grid(&cli).unwrap().start(), None);
    }
}
