//! The [`Cell`] type: one grid position and its current [`Role`].

use crate::geom::Coord;

/// What a cell currently represents. Exactly one role is active at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    Start,
    Goal,
    Barrier,
    /// Discovered and queued for expansion ("open").
    Frontier,
    /// Already expanded ("closed").
    Visited,
    /// On the reconstructed shortest path.
    Path,
}

impl Role {
    /// Roles the search engine never overwrites.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::Goal)
    }

    /// Roles written by a search run (as opposed to placed by the user).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }

    /// Single-character glyph, used by the text rendering of a grid.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::Goal => 'G',
            Self::Barrier => '#',
            Self::Frontier => 'o',
            Self::Visited => 'x',
            Self::Path => '*',
        }
    }
}

/// A single grid position.
///
/// The coordinate is fixed for the cell's lifetime. Neighbours are stored as
/// coordinates into the owning [`Grid`](crate::Grid) and are only valid until
/// the next barrier edit; see [`Grid::recompute_all_neighbors`](crate::Grid::recompute_all_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    role: Role,
    neighbors: Vec<Coord>,
    size: u16,
}

impl Cell {
    pub(crate) fn new(coord: Coord, size: u16) -> Self {
        Self {
            coord,
            role: Role::Empty,
            neighbors: Vec::with_capacity(4),
            size,
        }
    }

    #[inline]
    pub fn coordinates(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Force the cell back to [`Role::Empty`].
    #[inline]
    pub fn reset(&mut self) {
        self.role = Role::Empty;
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.role == Role::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }

    #[inline]
    pub fn is_goal(&self) -> bool {
        self.role == Role::Goal
    }

    /// Traversable neighbours as of the last neighbour recomputation.
    #[inline]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }

    pub(crate) fn neighbors_mut(&mut self) -> &mut Vec<Coord> {
        &mut self.neighbors
    }

    /// Side length in display units. Only renderers care about it.
    #[inline]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Top-left corner in display units, `(x, y)`.
    #[inline]
    pub fn origin(&self) -> (usize, usize) {
        let s = self.size as usize;
        (self.coord.col * s, self.coord.row * s)
    }
}
