use gridstar_core::Coord;

use crate::distance::manhattan;

/// Estimate of the remaining cost between two cells.
///
/// Must never overestimate the true cost under unit orthogonal moves
/// (admissible). It should also be consistent, `h(a) <= 1 + h(b)` for
/// neighbours `a` and `b`: the engine never re-expands a cell, so an
/// inconsistent heuristic can cost optimality.
pub trait Heuristic {
    fn estimate(&self, from: Coord, to: Coord) -> u32;
}

impl<F: Fn(Coord, Coord) -> u32> Heuristic for F {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        self(from, to)
    }
}

/// `|Δrow| + |Δcol|`. Consistent for 4-way unit-cost movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> u32 {
        manhattan(from, to)
    }
}

/// What happened just before the step callback was invoked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// A cell was expanded and its neighbours processed.
    Expanded(Coord),
    /// A cell was marked as part of the final path.
    Traced(Coord),
}

impl Step {
    #[inline]
    pub fn coord(self) -> Coord {
        match self {
            Self::Expanded(c) | Self::Traced(c) => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_heuristic_matches_distance() {
        let a = Coord::new(0, 0);
        let b = Coord::new(4, 4);
        assert_eq!(Manhattan.estimate(a, b), 8);
        assert_eq!(Manhattan.estimate(b, b), 0);
    }

    #[test]
    fn closures_are_heuristics() {
        let zero = |_: Coord, _: Coord| 0u32;
        assert_eq!(zero.estimate(Coord::new(1, 1), Coord::new(9, 9)), 0);
    }

    #[test]
    fn step_coord() {
        assert_eq!(Step::Expanded(Coord::new(1, 2)).coord(), Coord::new(1, 2));
        assert_eq!(Step::Traced(Coord::new(3, 4)).coord(), Coord::new(3, 4));
    }
}
