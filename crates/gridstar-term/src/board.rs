//! The editable [`Board`]: a grid plus the user's start and goal choice.

use gridstar_core::{Coord, Grid, Result, Role};
use log::debug;

/// A grid being edited with the pointer.
///
/// Start, goal and barriers never overwrite one another: the first click
/// places the start, the second the goal, every later click a barrier.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    start: Option<Coord>,
    goal: Option<Coord>,
}

impl Board {
    /// An empty `rows`×`rows` board whose cells are `cell_width` columns wide.
    pub fn new(rows: usize, cell_width: u16) -> Result<Self> {
        Ok(Self {
            grid: Grid::with_cell_size(rows, cell_width)?,
            start: None,
            goal: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    /// Map a terminal position to the cell drawn there.
    pub fn pick(&self, x: u16, y: u16) -> Option<Coord> {
        let width = self.grid.cell_size().max(1);
        let c = Coord::new(y as usize, (x / width) as usize);
        self.grid.contains(c).then_some(c)
    }

    /// Place the next role at `c`. Returns the role placed, if any.
    /// Coordinates outside the grid are ignored.
    pub fn place(&mut self, c: Coord) -> Option<Role> {
        if !self.grid.contains(c) {
            return None;
        }
        let role = if self.start.is_none() && self.goal != Some(c) {
            self.start = Some(c);
            Role::Start
        } else if self.goal.is_none() && self.start != Some(c) {
            self.goal = Some(c);
            Role::Goal
        } else if self.start != Some(c) && self.goal != Some(c) {
            Role::Barrier
        } else {
            return None;
        };
        self.grid.set_role(c, role).ok()?;
        Some(role)
    }

    /// Reset the cell at `c`, forgetting it as start or goal.
    pub fn erase(&mut self, c: Coord) {
        let Some(cell) = self.grid.get_mut(c) else {
            return;
        };
        cell.reset();
        if self.start == Some(c) {
            self.start = None;
        }
        if self.goal == Some(c) {
            self.goal = None;
        }
    }

    /// Replace the grid with a fresh one of the same size.
    pub fn clear(&mut self) -> Result<()> {
        self.grid = Grid::with_cell_size(self.grid.dimension(), self.grid.cell_size())?;
        self.start = None;
        self.goal = None;
        Ok(())
    }

    /// Wipe marks from the previous run and rebuild neighbour lists.
    ///
    /// Returns the grid with both endpoints, or `None` until the user has
    /// placed a start and a goal.
    pub fn prepare_search(&mut self) -> Option<(&mut Grid, Coord, Coord)> {
        let (start, goal) = (self.start?, self.goal?);
        self.grid.clear_search_marks();
        self.grid.recompute_all_neighbors();
        debug!(
            "board: {} barriers, searching {start} -> {goal}",
            self.grid.count(Role::Barrier)
        );
        Some((&mut self.grid, start, goal))
    }
}
