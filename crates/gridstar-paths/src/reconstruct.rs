use gridstar_core::{Grid, Role};

use crate::outcome::Path;
use crate::traits::Step;

/// Walk predecessor links from `goal_idx` back to the start.
///
/// Every cell strictly between start and goal becomes [`Role::Path`] and
/// `on_step` fires once per such cell, in walk order (goal side first).
/// Predecessors always have a strictly smaller g-score, so the chain is
/// acyclic and at most `grid.len()` long.
pub(crate) fn reconstruct_path<F>(
    grid: &mut Grid,
    came_from: &[Option<usize>],
    goal_idx: usize,
    on_step: &mut F,
) -> Path
where
    F: FnMut(&Grid, Step),
{
    let mut cells = vec![grid.coord(goal_idx)];
    let mut ci = goal_idx;

    while let Some(prev) = came_from[ci] {
        ci = prev;
        let coord = grid.coord(ci);
        cells.push(coord);

        // The start has no predecessor and keeps its role.
        if came_from[ci].is_none() {
            break;
        }
        let cell = grid.cell_by_index_mut(ci);
        if !cell.role().is_endpoint() {
            cell.set_role(Role::Path);
        }
        on_step(grid, Step::Traced(coord));
    }

    cells.reverse();
    Path::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_core::Coord;

    /// Straight corridor along row 0 of a 4x4 grid: 0 <- 1 <- 2 <- 3.
    fn corridor() -> (Grid, Vec<Option<usize>>) {
        let mut grid = Grid::new(4).unwrap();
        grid.set_role(Coord::new(0, 0), Role::Start).unwrap();
        grid.set_role(Coord::new(0, 3), Role::Goal).unwrap();
        grid.set_role(Coord::new(0, 1), Role::Visited).unwrap();
        grid.set_role(Coord::new(0, 2), Role::Frontier).unwrap();
        let mut came_from = vec![None; grid.len()];
        came_from[1] = Some(0);
        came_from[2] = Some(1);
        came_from[3] = Some(2);
        (grid, came_from)
    }

    #[test]
    fn marks_interior_and_keeps_endpoints() {
        let (mut grid, came_from) = corridor();
        let mut traced = Vec::new();
        let path = reconstruct_path(&mut grid, &came_from, 3, &mut |_: &Grid, s: Step| {
            traced.push(s)
        });

        assert_eq!(
            path.cells(),
            &[
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(0, 3)
            ]
        );
        assert_eq!(path.length(), 3);
        assert_eq!(
            traced,
            vec![
                Step::Traced(Coord::new(0, 2)),
                Step::Traced(Coord::new(0, 1))
            ]
        );
        assert_eq!(grid.role(Coord::new(0, 0)), Ok(Role::Start));
        assert_eq!(grid.role(Coord::new(0, 3)), Ok(Role::Goal));
        assert_eq!(grid.count(Role::Path), 2);
    }

    #[test]
    fn adjacent_endpoints_trace_nothing() {
        let (mut grid, mut came_from) = corridor();
        came_from[1] = None;
        let mut calls = 0;
        let path = reconstruct_path(&mut grid, &came_from, 2, &mut |_: &Grid, _: Step| {
            calls += 1
        });
        assert_eq!(path.cells(), &[Coord::new(0, 1), Coord::new(0, 2)]);
        assert_eq!(calls, 0);
        assert_eq!(grid.count(Role::Path), 0);
    }
}
