#![allow(dead_code)]

use std::collections::VecDeque;

use gridstar_core::{Coord, Grid, Role};

/// Build a grid from rows of `.`, `#`, `S` and `G`, with neighbours ready.
pub fn parse(layout: &str) -> (Grid, Coord, Coord) {
    let rows: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let mut grid = Grid::new(rows.len()).unwrap();
    let (mut start, mut goal) = (None, None);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), rows.len(), "layout must be square");
        for (col, ch) in line.chars().enumerate() {
            let c = Coord::new(row, col);
            let role = match ch {
                '#' => Role::Barrier,
                'S' => {
                    start = Some(c);
                    Role::Start
                }
                'G' => {
                    goal = Some(c);
                    Role::Goal
                }
                _ => Role::Empty,
            };
            grid.set_role(c, role).unwrap();
        }
    }
    grid.recompute_all_neighbors();
    (grid, start.expect("layout has S"), goal.expect("layout has G"))
}

/// Shortest move count by breadth-first search over roles, ignoring the
/// cached neighbour lists.
pub fn bfs_distance(grid: &Grid, start: Coord, goal: Coord) -> Option<usize> {
    let n = grid.dimension();
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::new();
    dist[grid.index(start)?] = 0;
    queue.push_back(start);
    while let Some(c) = queue.pop_front() {
        let d = dist[grid.index(c)?];
        if c == goal {
            return Some(d);
        }
        for nb in c.neighbors_4(n) {
            let i = grid.index(nb)?;
            if dist[i] != usize::MAX || grid.cell_by_index(i).is_barrier() {
                continue;
            }
            dist[i] = d + 1;
            queue.push_back(nb);
        }
    }
    None
}

/// Whether `cells` is a connected walk of orthogonal moves over non-barriers.
pub fn is_valid_walk(grid: &Grid, cells: &[Coord]) -> bool {
    cells.windows(2).all(|w| w[0].manhattan(w[1]) == 1)
        && cells
            .iter()
            .all(|&c| grid.get(c).is_some_and(|cell| !cell.is_barrier()))
}
