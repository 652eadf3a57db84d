//! **gridstar-core**: the grid model behind step-by-step pathfinding.
//!
//! This crate provides the types a search runs over and a renderer draws:
//! coordinates, cells with a visitation [`Role`], the square [`Grid`] that
//! owns them, the shared [`Error`] type, and a [`CancelToken`] for
//! interrupting a running search.

pub mod cancel;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cancel::CancelToken;
pub use cell::{Cell, Role};
pub use error::{Error, InvalidRequest, Result};
pub use geom::{Coord, Direction};
pub use grid::Grid;
