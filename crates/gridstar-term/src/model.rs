//! Front-end state: the board plus the status line, updated by [`Action`]s.

use gridstar_core::{Grid, Result};
use gridstar_paths::{SearchOutcome, SearchReport, Step};
use log::{info, warn};

use crate::board::Board;
use crate::input::Action;
use crate::screen::{Screen, draw_grid, draw_status};

pub const HELP: &str = "click: start, goal, walls | right click: erase | space: run | c: clear | q: quit";

/// What the driver should do after an update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Draw the changed glyphs.
    Redraw,
    /// Throw away the last frame and draw everything.
    Repaint,
    /// Run a search on the board.
    Search,
    /// Stop the program.
    End,
}

#[derive(Debug)]
pub struct Model {
    board: Board,
    status: String,
}

impl Model {
    pub fn new(rows: usize, cell_width: u16) -> Result<Self> {
        Ok(Self {
            board: Board::new(rows, cell_width)?,
            status: HELP.to_string(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Terminal size needed to show the board and the status line.
    pub fn screen_size(&self) -> (u16, u16) {
        let grid = self.board.grid();
        let side = u16::try_from(grid.dimension()).unwrap_or(u16::MAX);
        (
            side.saturating_mul(grid.cell_size()),
            side.saturating_add(1),
        )
    }

    /// Apply an action made while no search is running.
    pub fn update(&mut self, action: Action) -> Result<Option<Effect>> {
        let effect = match action {
            Action::Place { x, y } => {
                let Some(c) = self.board.pick(x, y) else {
                    return Ok(None);
                };
                self.board.place(c).map(|_| Effect::Redraw)
            }
            Action::Erase { x, y } => {
                let Some(c) = self.board.pick(x, y) else {
                    return Ok(None);
                };
                self.board.erase(c);
                Some(Effect::Redraw)
            }
            Action::Run => {
                if self.board.start().is_some() && self.board.goal().is_some() {
                    Some(Effect::Search)
                } else {
                    self.status = "place a start and a goal first".to_string();
                    Some(Effect::Redraw)
                }
            }
            Action::Clear => {
                self.board.clear()?;
                self.status = HELP.to_string();
                Some(Effect::Redraw)
            }
            Action::Cancel => None,
            Action::Quit => Some(Effect::End),
            Action::Resize { .. } => Some(Effect::Repaint),
        };
        Ok(effect)
    }

    /// Record how a search ended in the status line.
    pub fn finish_search(&mut self, result: Result<SearchReport>) {
        self.status = match result {
            Ok(report) => {
                let expanded = report.stats.expanded;
                let line = match &report.outcome {
                    SearchOutcome::Found(path) => {
                        format!("path found: {} moves, {expanded} cells expanded", path.length())
                    }
                    SearchOutcome::Exhausted => format!("no path: {expanded} cells expanded"),
                    SearchOutcome::Cancelled => format!("cancelled after {expanded} expansions"),
                };
                info!("{line}");
                line
            }
            Err(e) => {
                warn!("search rejected: {e}");
                e.to_string()
            }
        };
    }

    /// Paint the board and status line.
    pub fn draw(&self, screen: &mut Screen) {
        draw_grid(self.board.grid(), screen);
        draw_status(screen, &self.status);
    }
}

/// Paint a grid mid-search with a progress line.
pub fn draw_step(grid: &Grid, step: Step, steps: usize, screen: &mut Screen) {
    draw_grid(grid, screen);
    let what = match step {
        Step::Expanded(c) => format!("expanding {c}"),
        Step::Traced(c) => format!("tracing {c}"),
    };
    draw_status(screen, &format!("searching, step {steps}: {what} | esc: stop"));
}
