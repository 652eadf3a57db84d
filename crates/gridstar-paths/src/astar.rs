use gridstar_core::{CancelToken, Coord, Error, Grid, InvalidRequest, Result, Role};
use log::{debug, trace};

use crate::outcome::{SearchOutcome, SearchReport};
use crate::reconstruct::reconstruct_path;
use crate::state::SearchState;
use crate::traits::{Heuristic, Manhattan, Step};

/// A* search engine.
///
/// Holds the heuristic and an optional [`CancelToken`]; all per-search state
/// lives inside [`search`](AStar::search) and is dropped when it returns.
#[derive(Clone, Debug, Default)]
pub struct AStar<H = Manhattan> {
    heuristic: H,
    cancel: Option<CancelToken>,
}

impl AStar<Manhattan> {
    /// Engine using the [`Manhattan`] heuristic and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> AStar<H> {
    /// Swap in another heuristic.
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> AStar<H2> {
        AStar {
            heuristic,
            cancel: self.cancel,
        }
    }

    /// Check `token` once per expansion and stop with
    /// [`SearchOutcome::Cancelled`] when it is tripped.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Search for a shortest path from `start` to `goal`.
    ///
    /// Neighbour lists must be fresh (see [`Grid::recompute_all_neighbors`]).
    /// Discovered cells become [`Role::Frontier`], expanded ones
    /// [`Role::Visited`] and the final path [`Role::Path`]; start and goal
    /// keep their roles. `on_step` runs after each expansion and after each
    /// path cell is marked, with read access to the grid.
    ///
    /// Endpoints outside the grid and `start == goal` are rejected with
    /// [`Error::InvalidSearchRequest`] before any cell is touched.
    pub fn search<F>(
        &self,
        grid: &mut Grid,
        start: Coord,
        goal: Coord,
        mut on_step: F,
    ) -> Result<SearchReport>
    where
        F: FnMut(&Grid, Step),
    {
        let start_idx = index_of(grid, start)?;
        let goal_idx = index_of(grid, goal)?;
        if start_idx == goal_idx {
            return Err(Error::InvalidSearchRequest(InvalidRequest::SameEndpoints(
                start,
            )));
        }

        let n = grid.dimension();
        debug!("astar: searching {start} -> {goal} on {n}x{n} grid");

        let mut state = SearchState::new(grid.len());
        state.seed(start_idx, self.heuristic.estimate(start, goal));

        let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

        let outcome = loop {
            if self.cancelled() {
                break SearchOutcome::Cancelled;
            }
            let Some(ci) = state.pop() else {
                break SearchOutcome::Exhausted;
            };

            if ci == goal_idx {
                let path = reconstruct_path(grid, &state.came_from, goal_idx, &mut on_step);
                grid.cell_by_index_mut(goal_idx).set_role(Role::Goal);
                break SearchOutcome::Found(path);
            }

            let current = grid.coord(ci);
            let tentative_g = state.g[ci] + 1;
            trace!("astar: expanding {current} g={} f={}", state.g[ci], state.f[ci]);

            nbuf.clear();
            nbuf.extend_from_slice(grid.cell_by_index(ci).neighbors());

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if state.is_closed(ni) || tentative_g >= state.g[ni] {
                    continue;
                }

                state.came_from[ni] = Some(ci);
                state.g[ni] = tentative_g;
                let f = tentative_g.saturating_add(self.heuristic.estimate(np, goal));
                state.f[ni] = f;

                // An open cell keeps its queued entry; only its scores move.
                if !state.is_open(ni) {
                    state.push(ni, f);
                    let cell = grid.cell_by_index_mut(ni);
                    if !cell.role().is_endpoint() {
                        cell.set_role(Role::Frontier);
                    }
                }
            }

            on_step(grid, Step::Expanded(current));

            state.close(ci);
            let cell = grid.cell_by_index_mut(ci);
            if !cell.role().is_endpoint() {
                cell.set_role(Role::Visited);
            }
        };

        let stats = state.stats;
        match &outcome {
            SearchOutcome::Found(path) => debug!(
                "astar: found path of length {} ({} expanded, {} discovered)",
                path.length(),
                stats.expanded,
                stats.discovered
            ),
            SearchOutcome::Exhausted => {
                debug!("astar: no path ({} expanded)", stats.expanded)
            }
            SearchOutcome::Cancelled => {
                debug!("astar: cancelled after {} expansions", stats.expanded)
            }
        }

        Ok(SearchReport { outcome, stats })
    }
}

/// Run A* with the [`Manhattan`] heuristic and no cancellation.
///
/// See [`AStar::search`].
pub fn search<F>(grid: &mut Grid, start: Coord, goal: Coord, on_step: F) -> Result<SearchReport>
where
    F: FnMut(&Grid, Step),
{
    AStar::new().search(grid, start, goal, on_step)
}

fn index_of(grid: &Grid, coord: Coord) -> Result<usize> {
    grid.index(coord)
        .ok_or(Error::InvalidSearchRequest(InvalidRequest::OutsideGrid {
            coord,
            dimension: grid.dimension(),
        }))
}
