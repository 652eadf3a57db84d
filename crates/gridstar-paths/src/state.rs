use std::collections::BinaryHeap;

use crate::outcome::SearchStats;

/// Sentinel g-score for cells not reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Frontier entry
// ---------------------------------------------------------------------------

/// Entry of the open set, ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// Cells themselves are never compared: `seq` is unique per push, so two
/// entries with the same `f` always pop in insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: u32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-call bookkeeping of one A* run, indexed by flat cell index.
pub(crate) struct SearchState {
    pub(crate) g: Vec<u32>,
    pub(crate) f: Vec<u32>,
    pub(crate) came_from: Vec<Option<usize>>,
    open: BinaryHeap<OpenEntry>,
    open_member: Vec<bool>,
    closed: Vec<bool>,
    next_seq: u64,
    pub(crate) stats: SearchStats,
}

impl SearchState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            g: vec![UNREACHABLE; len],
            f: vec![UNREACHABLE; len],
            came_from: vec![None; len],
            open: BinaryHeap::new(),
            open_member: vec![false; len],
            closed: vec![false; len],
            next_seq: 0,
            stats: SearchStats::default(),
        }
    }

    /// Seed the frontier with the start cell (sequence 0).
    pub(crate) fn seed(&mut self, idx: usize, h: u32) {
        self.g[idx] = 0;
        self.f[idx] = h;
        self.push(idx, h);
    }

    /// Insert a cell that is not currently open, under a fresh sequence
    /// number. A cell is never queued twice: an open cell whose score
    /// improves keeps its original entry.
    pub(crate) fn push(&mut self, idx: usize, f: u32) {
        debug_assert!(!self.open_member[idx], "cell {idx} is already open");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.open.push(OpenEntry { f, seq, idx });
        self.open_member[idx] = true;
        self.stats.discovered += 1;
    }

    /// Pop the best open cell and drop it from the membership mirror.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        let entry = self.open.pop()?;
        self.open_member[entry.idx] = false;
        Some(entry.idx)
    }

    #[inline]
    pub(crate) fn is_open(&self, idx: usize) -> bool {
        self.open_member[idx]
    }

    #[inline]
    pub(crate) fn is_closed(&self, idx: usize) -> bool {
        self.closed[idx]
    }

    #[inline]
    pub(crate) fn close(&mut self, idx: usize) {
        self.closed[idx] = true;
        self.stats.expanded += 1;
    }
}
