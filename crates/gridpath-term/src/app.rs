//! The interactive loop: poll input, update the model, redraw.

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use crossterm::terminal;
use gridpath_core::{Context, Grid};
use gridpath_search::Outcome;
use log::{debug, info};

use crate::model::{Effect, Msg, Visualizer};
use crate::screen::{CELL_WIDTH, FOOTER_ROWS, Screen};

/// Idle poll interval between frames.
const FRAME: Duration = Duration::from_millis(16);

/// Run the visualizer until the user quits.
///
/// `delay` is slept after every search round so the exploration can be
/// watched.
pub fn run(model: Visualizer, delay: Duration) -> Result<()> {
    check_fits(model.grid.rows(), model.grid.cols())?;
    let mut screen = Screen::init().context("failed to set up the terminal")?;
    let result = event_loop(&mut screen, model, delay);
    screen.close();
    result
}

fn check_fits(rows: i32, cols: i32) -> Result<()> {
    let (width, height) = terminal::size().context("failed to read the terminal size")?;
    let need_w = i64::from(cols) * i64::from(CELL_WIDTH);
    let need_h = i64::from(rows) + i64::from(FOOTER_ROWS);
    if need_w > i64::from(width) || need_h > i64::from(height) {
        bail!(
            "a {rows}x{cols} grid needs a {need_w}x{need_h} terminal, this one is {width}x{height}"
        );
    }
    Ok(())
}

fn event_loop(screen: &mut Screen, mut model: Visualizer, delay: Duration) -> Result<()> {
    screen.draw(&model.grid, &model.footer())?;
    loop {
        let msgs = screen.poll_msgs(FRAME)?;
        if msgs.is_empty() {
            continue;
        }
        for msg in msgs {
            match model.update(msg) {
                Some(Effect::Quit) => return Ok(()),
                Some(Effect::Search) => {
                    let outcome = animate(screen, &mut model, delay)?;
                    model.finish(&outcome);
                }
                None => {}
            }
        }
        screen.draw(&model.grid, &model.footer())?;
    }
}

/// Run the selected search, redrawing after every round.
///
/// Input is drained between rounds; a quit key cancels the search but
/// keeps the application running.
fn animate(screen: &mut Screen, model: &mut Visualizer, delay: Duration) -> Result<Outcome> {
    model.grid.clear_search();
    model.grid.update_neighbors();
    info!(
        "{} from {:?} to {:?}",
        model.algorithm,
        model.grid.start(),
        model.grid.end()
    );

    let ctx = Context::new();
    let footer = model.footer();
    let mut failure: Option<io::Error> = None;
    let mut rounds = 0usize;
    let mut redraw = |g: &Grid| {
        rounds += 1;
        if failure.is_some() {
            return;
        }
        if let Err(e) = step(screen, g, &footer, delay, &ctx) {
            failure = Some(e);
            ctx.cancel();
        }
    };
    let outcome = model
        .algorithm
        .run(&mut model.grid, &mut redraw, &ctx, &model.config);
    debug!("{} finished after {rounds} notifications", model.algorithm);

    if let Some(e) = failure {
        return Err(e).context("terminal failed during the search");
    }
    Ok(outcome)
}

fn step(
    screen: &mut Screen,
    grid: &Grid,
    footer: &[String],
    delay: Duration,
    ctx: &Context,
) -> io::Result<()> {
    screen.draw(grid, footer)?;
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    if screen.poll_msgs(Duration::ZERO)?.into_iter().any(Msg::is_quit) {
        ctx.cancel();
    }
    Ok(())
}
