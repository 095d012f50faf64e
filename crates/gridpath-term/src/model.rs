//! Editor state of the interactive visualizer and its message handling.
//!
//! The model never touches the terminal: the driver in [`crate::screen`]
//! turns terminal events into [`Msg`] values, and the loop in
//! [`crate::app`] carries out the returned [`Effect`].

use gridpath_core::{Grid, Point};
use gridpath_search::{Algorithm, Outcome, SearchConfig};
use log::{info, warn};

/// Keys the visualizer reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
}

/// Mouse actions, already reduced to what the editor needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseAction {
    /// Left button pressed.
    Main,
    /// Right button pressed.
    Secondary,
    /// Pointer moved with the left button held.
    Drag,
    /// Any button released.
    Release,
}

/// Input message. Mouse positions are grid coordinates and may fall outside
/// the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Key(Key),
    Mouse { action: MouseAction, pos: Point },
    /// The terminal was resized; everything must be repainted.
    Resize,
}

impl Msg {
    /// Whether the message asks to quit, or to abort a running search.
    pub fn is_quit(self) -> bool {
        matches!(self, Msg::Key(Key::Char('q') | Key::Escape))
    }
}

/// Side effect requested by [`Visualizer::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Run the selected algorithm on the current grid.
    Search,
    /// Leave the application.
    Quit,
}

/// The grid being edited plus the selected algorithm and status line.
#[derive(Debug)]
pub struct Visualizer {
    pub grid: Grid,
    pub algorithm: Algorithm,
    pub config: SearchConfig,
    status: String,
    painting: bool,
}

impl Visualizer {
    pub fn new(grid: Grid, algorithm: Algorithm, config: SearchConfig) -> Self {
        Self {
            grid,
            algorithm,
            config,
            status: String::from("left click: start, end, walls"),
            painting: false,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Two footer lines: selection and status, then the key help.
    pub fn footer(&self) -> [String; 2] {
        let algos: Vec<String> = Algorithm::ALL
            .iter()
            .enumerate()
            .map(|(i, a)| {
                if *a == self.algorithm {
                    format!("[{}:{a}]", i + 1)
                } else {
                    format!(" {}:{a} ", i + 1)
                }
            })
            .collect();
        [
            format!("{} | {}", algos.join(""), self.status),
            String::from(
                "left: start/end/wall  right: erase  space: run  r: clear marks  c: clear all  q: quit",
            ),
        ]
    }

    /// Apply one input message.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Key(key) => return self.key(key),
            Msg::Mouse { action, pos } => self.mouse(action, pos),
            Msg::Resize => {}
        }
        None
    }

    /// Record how a search ended.
    pub fn finish(&mut self, outcome: &Outcome) {
        info!("{}: {outcome}", self.algorithm);
        self.status = format!("{}: {outcome}", self.algorithm);
    }

    fn key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Char('q') | Key::Escape => return Some(Effect::Quit),
            Key::Char(' ') | Key::Enter => {
                if self.grid.start().is_some() && self.grid.end().is_some() {
                    self.status = format!("{} running, q/Esc aborts", self.algorithm);
                    return Some(Effect::Search);
                }
                self.status = String::from("place a start and an end first");
            }
            Key::Char(d @ '1'..='7') => {
                let i = d as usize - '1' as usize;
                self.algorithm = Algorithm::ALL[i];
                self.status = format!("selected {}", self.algorithm);
            }
            Key::Char('c') => {
                self.grid.reset();
                self.status = String::from("grid cleared");
            }
            Key::Char('r') => {
                self.grid.clear_search();
                self.status = String::from("search marks cleared");
            }
            Key::Char(_) => {}
        }
        None
    }

    fn mouse(&mut self, action: MouseAction, pos: Point) {
        match action {
            MouseAction::Main => {
                self.painting = true;
                self.left_click(pos);
            }
            MouseAction::Drag if self.painting => self.paint(pos),
            MouseAction::Drag => {}
            MouseAction::Release => self.painting = false,
            MouseAction::Secondary => {
                if self.grid.contains(pos) {
                    let res = self.grid.erase(pos);
                    self.report(res);
                }
            }
        }
    }

    /// Start first, then end, then walls.
    fn left_click(&mut self, p: Point) {
        if !self.grid.contains(p) {
            return;
        }
        let (start, end) = (self.grid.start(), self.grid.end());
        if start.is_none() && end != Some(p) {
            let res = self.grid.place_start(p);
            self.report(res);
        } else if end.is_none() && start != Some(p) {
            let res = self.grid.place_end(p);
            self.report(res);
        } else {
            self.paint(p);
        }
    }

    fn paint(&mut self, p: Point) {
        if self.grid.contains(p) {
            let res = self.grid.place_barrier(p).map(|_| ());
            self.report(res);
        }
    }

    fn report(&mut self, res: gridpath_core::Result<()>) {
        if let Err(e) = res {
            warn!("edit rejected: {e}");
            self.status = e.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::CellState;

    fn vis() -> Visualizer {
        Visualizer::new(Grid::new(5, 5), Algorithm::Bfs, SearchConfig::default())
    }

    fn click(v: &mut Visualizer, action: MouseAction, x: i32, y: i32) -> Option<Effect> {
        v.update(Msg::Mouse {
            action,
            pos: Point::new(x, y),
        })
    }

    #[test]
    fn clicks_place_start_then_end_then_walls() {
        let mut v = vis();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        click(&mut v, MouseAction::Main, 2, 2);
        assert_eq!(v.grid.start(), Some(Point::new(0, 0)));
        assert_eq!(v.grid.end(), Some(Point::new(4, 4)));
        assert_eq!(v.grid.state(Point::new(2, 2)), Some(CellState::Barrier));
    }

    #[test]
    fn clicking_the_start_again_does_not_make_it_the_end() {
        let mut v = vis();
        click(&mut v, MouseAction::Main, 1, 1);
        click(&mut v, MouseAction::Main, 1, 1);
        assert_eq!(v.grid.end(), None);
        assert_eq!(v.grid.state(Point::new(1, 1)), Some(CellState::Start));
    }

    #[test]
    fn drag_paints_only_while_pressed() {
        let mut v = vis();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        click(&mut v, MouseAction::Main, 1, 0);
        click(&mut v, MouseAction::Drag, 1, 1);
        click(&mut v, MouseAction::Drag, 1, 2);
        click(&mut v, MouseAction::Release, 1, 2);
        click(&mut v, MouseAction::Drag, 1, 3);
        assert_eq!(v.grid.count(CellState::Barrier), 3);
        assert_eq!(v.grid.state(Point::new(1, 3)), Some(CellState::Free));
    }

    #[test]
    fn right_click_erases_endpoints() {
        let mut v = vis();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Secondary, 0, 0);
        assert_eq!(v.grid.start(), None);
        click(&mut v, MouseAction::Main, 3, 3);
        assert_eq!(v.grid.start(), Some(Point::new(3, 3)));
    }

    #[test]
    fn clicks_outside_the_grid_are_ignored() {
        let mut v = vis();
        click(&mut v, MouseAction::Main, 7, 0);
        click(&mut v, MouseAction::Secondary, -1, 2);
        assert_eq!(v.grid.start(), None);
    }

    #[test]
    fn number_keys_select_algorithms() {
        let mut v = vis();
        v.update(Msg::Key(Key::Char('7')));
        assert_eq!(v.algorithm, Algorithm::AStar);
        v.update(Msg::Key(Key::Char('4')));
        assert_eq!(v.algorithm, Algorithm::Ids);
        v.update(Msg::Key(Key::Char('9')));
        assert_eq!(v.algorithm, Algorithm::Ids);
    }

    #[test]
    fn search_needs_both_endpoints() {
        let mut v = vis();
        assert_eq!(v.update(Msg::Key(Key::Char(' '))), None);
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        assert_eq!(v.update(Msg::Key(Key::Enter)), Some(Effect::Search));
    }

    #[test]
    fn clear_keys() {
        let mut v = vis();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        v.grid.cell_mut(Point::new(2, 0)).unwrap().mark_closed();

        v.update(Msg::Key(Key::Char('r')));
        assert_eq!(v.grid.count(CellState::Closed), 0);
        assert!(v.grid.start().is_some());

        v.update(Msg::Key(Key::Char('c')));
        assert_eq!(v.grid.start(), None);
        assert_eq!(v.grid.end(), None);
    }

    #[test]
    fn quit_keys() {
        let mut v = vis();
        assert_eq!(v.update(Msg::Key(Key::Escape)), Some(Effect::Quit));
        assert_eq!(v.update(Msg::Key(Key::Char('q'))), Some(Effect::Quit));
        assert!(Msg::Key(Key::Char('q')).is_quit());
        assert!(!Msg::Resize.is_quit());
    }

    #[test]
    fn footer_marks_the_selected_algorithm() {
        let mut v = vis();
        v.update(Msg::Key(Key::Char('2')));
        assert!(v.footer()[0].contains("[2:DFS]"));
        v.finish(&Outcome::NotFound);
        assert!(v.status().ends_with("no path"));
    }
}
