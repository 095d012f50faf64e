//! Crossterm terminal driver.
//!
//! Owns the terminal while the visualizer runs: raw mode, the alternate
//! screen and mouse capture are switched on by [`Screen::init`] and undone by
//! [`Screen::close`] (also called on drop). Each grid cell is drawn as a
//! colored block two columns wide.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{CellState, Grid, Point};

use crate::model::{Key, MouseAction, Msg};

/// Terminal columns used by one grid cell.
pub const CELL_WIDTH: u16 = 2;

/// Terminal rows needed below the grid for the footer.
pub const FOOTER_ROWS: u16 = 3;

/// Background color for each cell state.
pub fn state_color(state: CellState) -> Color {
    match state {
        CellState::Free => Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
        CellState::Barrier => Color::Rgb { r: 0, g: 0, b: 0 },
        CellState::Start => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        CellState::End => Color::Rgb {
            r: 64,
            g: 224,
            b: 208,
        },
        CellState::Open => Color::Rgb { r: 0, g: 255, b: 0 },
        CellState::Closed => Color::Rgb { r: 255, g: 0, b: 0 },
        CellState::Path => Color::Rgb {
            r: 128,
            g: 0,
            b: 128,
        },
    }
}

/// Maps a crossterm key event to a visualizer [`Key`].
fn to_key(ev: KeyEvent) -> Option<Key> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }
    match ev.code {
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// Terminal position to grid point.
fn to_grid_pos(column: u16, row: u16) -> Point {
    Point::new(i32::from(column / CELL_WIDTH), i32::from(row))
}

/// Maps a crossterm event to a [`Msg`].
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(k) => to_key(k).map(Msg::Key),
        Event::Mouse(me) => {
            let action = match me.kind {
                MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
                MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
                MouseEventKind::Drag(MouseButton::Left) => MouseAction::Drag,
                MouseEventKind::Up(_) => MouseAction::Release,
                _ => return None,
            };
            Some(Msg::Mouse {
                action,
                pos: to_grid_pos(me.column, me.row),
            })
        }
        Event::Resize(..) => Some(Msg::Resize),
        _ => None,
    }
}

/// The terminal back-end.
pub struct Screen {
    out: Stdout,
    active: bool,
    /// States as last painted, row-major; empty forces a full repaint.
    painted: Vec<CellState>,
}

impl Screen {
    /// Take over the terminal.
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut screen = Self {
            out: io::stdout(),
            active: true,
            painted: Vec::new(),
        };
        if let Err(e) = execute!(
            screen.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        ) {
            screen.close();
            return Err(e);
        }
        Ok(screen)
    }

    /// Wait up to `timeout` for input, then drain everything queued.
    pub fn poll_msgs(&mut self, timeout: Duration) -> io::Result<Vec<Msg>> {
        let mut msgs = Vec::new();
        if !event::poll(timeout)? {
            return Ok(msgs);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(msg) = to_msg(event::read()?) {
                if msg == Msg::Resize {
                    self.invalidate();
                }
                msgs.push(msg);
            }
        }
        Ok(msgs)
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.painted.clear();
    }

    /// Paint the cells that changed since the last draw, then the footer.
    pub fn draw(&mut self, grid: &Grid, footer: &[String]) -> io::Result<()> {
        let full = self.painted.len() != grid.len();
        if full {
            queue!(self.out, terminal::Clear(ClearType::All))?;
            self.painted = vec![CellState::Free; grid.len()];
        }
        for (i, cell) in grid.iter().enumerate() {
            if !full && self.painted[i] == cell.state() {
                continue;
            }
            self.painted[i] = cell.state();
            let p = cell.pos();
            queue!(
                self.out,
                cursor::MoveTo(p.x as u16 * CELL_WIDTH, p.y as u16),
                SetBackgroundColor(state_color(cell.state())),
                Print("  ")
            )?;
        }
        queue!(self.out, ResetColor)?;
        for (i, line) in footer.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(0, grid.rows() as u16 + 1 + i as u16),
                terminal::Clear(ClearType::UntilNewLine),
                Print(line)
            )?;
        }
        self.out.flush()
    }

    /// Give the terminal back. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            self.out,
            ResetColor,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn every_state_has_a_distinct_color() {
        let colors: Vec<Color> = CellState::ALL.iter().map(|&s| state_color(s)).collect();
        for (i, a) in colors.iter().enumerate() {
            assert!(colors[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn mouse_columns_map_to_double_width_cells() {
        let msg = to_msg(mouse(MouseEventKind::Down(MouseButton::Left), 7, 2));
        assert_eq!(
            msg,
            Some(Msg::Mouse {
                action: MouseAction::Main,
                pos: Point::new(3, 2)
            })
        );
        let msg = to_msg(mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0));
        assert!(matches!(
            msg,
            Some(Msg::Mouse {
                action: MouseAction::Drag,
                ..
            })
        ));
        assert_eq!(to_msg(mouse(MouseEventKind::Moved, 0, 0)), None);
    }

    #[test]
    fn keys_map_and_ctrl_c_quits() {
        let ev = |code, modifiers| {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            })
        };
        assert_eq!(
            to_msg(ev(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Msg::Key(Key::Char('q')))
        );
        assert_eq!(
            to_msg(ev(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Msg::Key(Key::Escape))
        );
        assert_eq!(to_msg(ev(KeyCode::Tab, KeyModifiers::NONE)), None);
    }
}
