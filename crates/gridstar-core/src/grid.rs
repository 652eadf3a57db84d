//! The [`Grid`] type: a square, row-major arena of [`Cell`]s.
//!
//! The grid is the single owner of its cells. Relations between cells
//! (neighbour lists) are stored as [`Coord`]s into the same grid, so there
//! are no ownership cycles even though the underlying graph has them.

use std::fmt;

use crate::cell::{Cell, Role};
use crate::error::{Error, Result};
use crate::geom::Coord;

/// An N×N grid of cells. N is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    dimension: usize,
    cell_size: u16,
}

impl Grid {
    /// Create an N×N grid of empty cells with unit display size.
    pub fn new(dimension: usize) -> Result<Self> {
        Self::with_cell_size(dimension, 1)
    }

    /// Create an N×N grid whose cells report `cell_size` display units per
    /// side.
    pub fn with_cell_size(dimension: usize, cell_size: u16) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::ZeroDimension);
        }
        let mut cells = Vec::with_capacity(dimension * dimension);
        for row in 0..dimension {
            for col in 0..dimension {
                cells.push(Cell::new(Coord::new(row, col), cell_size));
            }
        }
        Ok(Self {
            cells,
            dimension,
            cell_size,
        })
    }

    /// Side length N.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.in_bounds(self.dimension)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        self.contains(c).then(|| c.row * self.dimension + c.col)
    }

    /// Coordinate of a flat index. `idx` must be below [`len`](Grid::len).
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx / self.dimension, idx % self.dimension)
    }

    fn out_of_bounds(&self, coord: Coord) -> Error {
        Error::OutOfBounds {
            coord,
            dimension: self.dimension,
        }
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    #[inline]
    pub fn get(&self, c: Coord) -> Option<&Cell> {
        self.index(c).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut Cell> {
        self.index(c).map(|i| &mut self.cells[i])
    }

    /// Bounds-checked cell access.
    pub fn cell_at(&self, c: Coord) -> Result<&Cell> {
        self.get(c).ok_or_else(|| self.out_of_bounds(c))
    }

    /// Bounds-checked mutable cell access.
    pub fn cell_at_mut(&mut self, c: Coord) -> Result<&mut Cell> {
        let err = self.out_of_bounds(c);
        self.get_mut(c).ok_or(err)
    }

    /// Role of the cell at `c`.
    pub fn role(&self, c: Coord) -> Result<Role> {
        self.cell_at(c).map(Cell::role)
    }

    /// Set the role of the cell at `c`.
    pub fn set_role(&mut self, c: Coord, role: Role) -> Result<()> {
        self.cell_at_mut(c)?.set_role(role);
        Ok(())
    }

    /// Cell by flat index. Panics if `idx` is out of range.
    #[inline]
    pub fn cell_by_index(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable cell by flat index. Panics if `idx` is out of range.
    #[inline]
    pub fn cell_by_index_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Row-major mutable iterator over cells.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cell> {
        self.cells.iter_mut()
    }

    /// First cell (row-major) holding `role`.
    pub fn find(&self, role: Role) -> Option<Coord> {
        self.cells
            .iter()
            .find(|c| c.role() == role)
            .map(Cell::coordinates)
    }

    /// Number of cells holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role() == role).count()
    }

    // -----------------------------------------------------------------------
    // Bulk operations
    // -----------------------------------------------------------------------

    /// Rebuild every cell's neighbour list from the current barriers.
    ///
    /// Neighbours are the in-bounds orthogonal cells (up, down, left, right)
    /// that are not barriers. Must be called after any barrier edit and
    /// before each search; calling it twice in a row is harmless.
    pub fn recompute_all_neighbors(&mut self) {
        let blocked: Vec<bool> = self.cells.iter().map(Cell::is_barrier).collect();
        let n = self.dimension;
        for cell in self.cells.iter_mut() {
            let here = cell.coordinates();
            let list = cell.neighbors_mut();
            list.clear();
            list.extend(
                here.neighbors_4(n)
                    .filter(|nb| !blocked[nb.row * n + nb.col]),
            );
        }
    }

    /// Reset every cell to [`Role::Empty`] and drop all neighbour lists.
    pub fn reset_all(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
            cell.neighbors_mut().clear();
        }
    }

    /// Erase the marks left by a previous search (frontier, visited, path),
    /// keeping start, goal and barriers.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.role().is_search_mark() {
                cell.reset();
            }
        }
    }
}

/// One line per row, one [`Role::glyph`] per cell.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dimension) {
            for cell in row {
                write!(f, "{}", cell.role().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_cell_at() {
        let g = Grid::new(4).unwrap();
        assert_eq!(g.dimension(), 4);
        assert_eq!(g.len(), 16);
        let c = g.cell_at(Coord::new(3, 1)).unwrap();
        assert_eq!(c.coordinates(), Coord::new(3, 1));
        assert_eq!(c.role(), Role::Empty);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(Grid::new(0), Err(Error::ZeroDimension));
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let mut g = Grid::new(3).unwrap();
        let err = g.cell_at(Coord::new(0, 3)).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                coord: Coord::new(0, 3),
                dimension: 3
            }
        );
        assert!(g.cell_at_mut(Coord::new(3, 0)).is_err());
        assert!(g.set_role(Coord::new(9, 9), Role::Barrier).is_err());
        assert!(g.get(Coord::new(3, 3)).is_none());
    }

    #[test]
    fn index_round_trips_coord() {
        let g = Grid::new(5).unwrap();
        for (i, cell) in g.iter().enumerate() {
            assert_eq!(g.index(cell.coordinates()), Some(i));
            assert_eq!(g.coord(i), cell.coordinates());
        }
    }

    #[test]
    fn neighbors_skip_barriers_and_edges() {
        let mut g = Grid::new(3).unwrap();
        g.set_role(Coord::new(0, 1), Role::Barrier).unwrap();
        g.recompute_all_neighbors();

        // Centre: up is a barrier.
        let centre = g.cell_at(Coord::new(1, 1)).unwrap();
        assert_eq!(
            centre.neighbors(),
            &[Coord::new(2, 1), Coord::new(1, 0), Coord::new(1, 2)]
        );
        // Corner next to the barrier only keeps the cell below.
        let corner = g.cell_at(Coord::new(0, 0)).unwrap();
        assert_eq!(corner.neighbors(), &[Coord::new(1, 0)]);
        // Nobody lists the barrier.
        assert!(
            g.iter()
                .all(|c| !c.neighbors().contains(&Coord::new(0, 1)))
        );
    }

    #[test]
    fn recompute_is_idempotent_and_tracks_edits() {
        let mut g = Grid::new(3).unwrap();
        g.recompute_all_neighbors();
        let first = g.clone();
        g.recompute_all_neighbors();
        assert_eq!(g, first);

        g.set_role(Coord::new(1, 1), Role::Barrier).unwrap();
        // Stale until recomputed.
        assert!(
            g.cell_at(Coord::new(0, 1))
                .unwrap()
                .neighbors()
                .contains(&Coord::new(1, 1))
        );
        g.recompute_all_neighbors();
        assert!(
            !g.cell_at(Coord::new(0, 1))
                .unwrap()
                .neighbors()
                .contains(&Coord::new(1, 1))
        );
    }

    #[test]
    fn clear_search_marks_keeps_user_roles() {
        let mut g = Grid::new(2).unwrap();
        g.set_role(Coord::new(0, 0), Role::Start).unwrap();
        g.set_role(Coord::new(0, 1), Role::Visited).unwrap();
        g.set_role(Coord::new(1, 0), Role::Barrier).unwrap();
        g.set_role(Coord::new(1, 1), Role::Path).unwrap();
        g.clear_search_marks();
        assert_eq!(g.to_string(), "S.\n#.\n");

        g.reset_all();
        assert_eq!(g.count(Role::Empty), 4);
        assert_eq!(g.find(Role::Start), None);
    }

    #[test]
    fn display_renders_roles() {
        let mut g = Grid::new(3).unwrap();
        g.set_role(Coord::new(0, 0), Role::Start).unwrap();
        g.set_role(Coord::new(2, 2), Role::Goal).unwrap();
        g.set_role(Coord::new(1, 1), Role::Barrier).unwrap();
        assert_eq!(g.to_string(), "S..\n.#.\n..G\n");
        assert_eq!(g.find(Role::Goal), Some(Coord::new(2, 2)));
    }

    #[test]
    fn cells_carry_grid_cell_size() {
        let g = Grid::with_cell_size(4, 16).unwrap();
        let c = g.cell_at(Coord::new(2, 3)).unwrap();
        assert_eq!(c.size(), 16);
        assert_eq!(c.origin(), (48, 32));
    }
}
