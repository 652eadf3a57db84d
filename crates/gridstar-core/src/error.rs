//! Error type shared by the grid model and the search engine.

use thiserror::Error;

use crate::geom::Coord;

/// Why a search request was rejected before it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    /// Start and goal are the same cell.
    SameEndpoints(Coord),
    /// An endpoint does not belong to the grid being searched.
    OutsideGrid { coord: Coord, dimension: usize },
}

impl std::fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SameEndpoints(c) => write!(f, "start and goal are both {c}"),
            Self::OutsideGrid { coord, dimension } => {
                write!(f, "endpoint {coord} is not on the {dimension}x{dimension} grid")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid dimension must be greater than zero")]
    ZeroDimension,

    #[error("coordinate {coord} is outside the {dimension}x{dimension} grid")]
    OutOfBounds { coord: Coord, dimension: usize },

    #[error("invalid search request: {0}")]
    InvalidSearchRequest(InvalidRequest),
}

pub type Result<T> = std::result::Result<T, Error>;
