//! Terminal front-end for gridstar.
//!
//! Draw a start, a goal and walls with the mouse, then watch
//! [`gridstar_paths::AStar`] explore the board one expansion at a time.
//! Rendering goes through an off-screen [`screen::Screen`] that is diffed
//! against the previous frame before anything reaches the terminal.

pub mod app;
pub mod board;
pub mod config;
pub mod input;
pub mod model;
pub mod palette;
pub mod screen;
pub mod terminal;

pub use app::{App, run};
pub use board::Board;
pub use config::Config;
pub use input::Action;
pub use model::{Effect, Model};
