//! Command-line configuration.

use std::time::Duration;

use clap::Parser;

/// Draw walls with the mouse and watch A* find its way through them.
///
/// Left click places the start, then the goal, then barriers. Right click
/// erases. Space runs the search, `c` clears the board, Esc stops a
/// running search and `q` quits.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gridstar", version, about)]
pub struct Config {
    /// Cells per side of the square grid. Shrunk to fit the terminal.
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(2..))]
    pub rows: u16,

    /// Terminal columns per grid cell.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    pub cell_width: u16,

    /// Pause after every search step, in milliseconds.
    #[arg(long, default_value_t = 5)]
    pub step_delay_ms: u64,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 50,
            cell_width: 2,
            step_delay_ms: 5,
            no_mouse: false,
        }
    }
}

impl Config {
    #[inline]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    /// Largest grid side, at most [`rows`](Self::rows), that fits a
    /// `term_width`×`term_height` terminal with one row kept for the
    /// status line. `None` if not even a 2×2 grid fits.
    pub fn fit(&self, term_width: u16, term_height: u16) -> Option<u16> {
        let by_height = term_height.saturating_sub(1);
        let by_width = term_width / self.cell_width.max(1);
        let side = self.rows.min(by_height).min(by_width);
        (side >= 2).then_some(side)
    }
}
