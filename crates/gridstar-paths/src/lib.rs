//! Observable A* search over a [`gridstar_core::Grid`].
//!
//! The engine runs on the grid in place: discovered cells turn
//! [`Frontier`](gridstar_core::Role::Frontier), expanded ones
//! [`Visited`](gridstar_core::Role::Visited) and the final route
//! [`Path`](gridstar_core::Role::Path), and a caller-supplied step callback
//! sees the grid after every change so it can be drawn.
//!
//! ```
//! use gridstar_core::{Coord, Grid, Role};
//! use gridstar_paths::search;
//!
//! let mut grid = Grid::new(5).unwrap();
//! let (start, goal) = (Coord::new(0, 0), Coord::new(4, 4));
//! grid.set_role(start, Role::Start).unwrap();
//! grid.set_role(goal, Role::Goal).unwrap();
//! grid.recompute_all_neighbors();
//!
//! let report = search(&mut grid, start, goal, |_grid, _step| {}).unwrap();
//! assert_eq!(report.path_length(), Some(8));
//! ```
//!
//! Expansion order is deterministic: frontier entries are keyed by
//! `(f, insertion sequence)`, so equal-f cells pop oldest first.

mod astar;
mod distance;
mod outcome;
mod reconstruct;
mod state;
mod traits;

pub use astar::{AStar, search};
pub use distance::manhattan;
pub use outcome::{Path, SearchOutcome, SearchReport, SearchStats};
pub use state::UNREACHABLE;
pub use traits::{Heuristic, Manhattan, Step};
