//! Geometry primitives: [`Coord`] and [`Direction`].
//!
//! Coordinates are `(row, col)` pairs; rows grow down, columns grow right.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell coordinate on a square grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies inside a `dimension`×`dimension` grid.
    #[inline]
    pub const fn in_bounds(self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// The coordinate one step away in `dir`, or `None` if that step would
    /// leave a `dimension`×`dimension` grid.
    #[inline]
    pub fn step(self, dir: Direction, dimension: usize) -> Option<Coord> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self::new(row, col);
        next.in_bounds(dimension).then_some(next)
    }

    /// The in-bounds orthogonal neighbours, in [`Direction::CARDINAL`] order.
    pub fn neighbors_4(self, dimension: usize) -> impl Iterator<Item = Coord> {
        Direction::CARDINAL
            .into_iter()
            .filter_map(move |d| self.step(d, dimension))
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbour enumeration order. Search tie-breaking depends on it, so it
    /// is fixed: up, down, left, right.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta of a single step.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn step_stays_in_bounds() {
        let c = Coord::ZERO;
        assert_eq!(c.step(Direction::Up, 3), None);
        assert_eq!(c.step(Direction::Left, 3), None);
        assert_eq!(c.step(Direction::Down, 3), Some(Coord::new(1, 0)));
        assert_eq!(c.step(Direction::Right, 3), Some(Coord::new(0, 1)));
        assert_eq!(Coord::new(2, 2).step(Direction::Down, 3), None);
    }

    #[test]
    fn neighbors_4_order_and_clipping() {
        let inner: Vec<_> = Coord::new(1, 1).neighbors_4(3).collect();
        assert_eq!(
            inner,
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
            ]
        );
        let corner: Vec<_> = Coord::new(2, 2).neighbors_4(3).collect();
        assert_eq!(corner, vec![Coord::new(1, 2), Coord::new(2, 1)]);
        assert_eq!(Coord::ZERO.neighbors_4(1).count(), 0);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Coord::new(0, 4);
        let b = Coord::new(3, 1);
        assert_eq!(a.manhattan(b), 6);
        assert_eq!(b.manhattan(a), 6);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn display_is_row_col() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
        let t: (usize, usize) = Coord::new(2, 7).into();
        assert_eq!(t, (2, 7));
    }
}
