use gridstar_core::Coord;

/// A path from start to goal, both endpoints included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    /// Number of moves, i.e. cells minus one.
    #[inline]
    pub fn length(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn goal(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    /// Cells strictly between start and goal.
    pub fn interior(&self) -> &[Coord] {
        match self.cells.len() {
            0..=2 => &[],
            n => &self.cells[1..n - 1],
        }
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached.
    Found(Path),
    /// Every reachable cell was expanded without reaching the goal.
    Exhausted,
    /// The cancel token was tripped. Cell roles are left as they were.
    Cancelled,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped from the frontier and expanded.
    pub expanded: usize,
    /// Cells inserted into the frontier (start included).
    pub discovered: usize,
}

/// Result of [`AStar::search`](crate::AStar::search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match &self.outcome {
            SearchOutcome::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Path length in moves, if a path was found.
    #[inline]
    pub fn path_length(&self) -> Option<usize> {
        self.path().map(Path::length)
    }
}
