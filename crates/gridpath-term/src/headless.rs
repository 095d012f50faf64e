//! Batch mode: run once without animation and print the result.

use std::io::Write;

use anyhow::Result;
use gridpath_core::{CellState, Grid};
use gridpath_search::{Algorithm, Outcome, SearchConfig};
use log::info;

/// Search `grid` and write the marked grid plus a summary line to `out`.
pub fn run(
    grid: &mut Grid,
    algorithm: Algorithm,
    config: &SearchConfig,
    out: &mut impl Write,
) -> Result<Outcome> {
    grid.clear_search();
    grid.update_neighbors();

    let mut rounds = 0usize;
    let mut count = |_: &Grid| rounds += 1;
    let outcome = algorithm.run(grid, &mut count, &gridpath_core::Context::new(), config);
    info!("{algorithm}: {outcome} after {rounds} notifications");

    write!(out, "{grid}")?;
    writeln!(
        out,
        "{algorithm}: {outcome} ({} closed, {} open, {rounds} steps)",
        grid.count(CellState::Closed),
        grid.count(CellState::Open),
    )?;
    Ok(outcome)
}
