use gridstar_core::Coord;

/// Manhattan (L1) distance between two coordinates, saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    u32::try_from(a.manhattan(b)).unwrap_or(u32::MAX)
}
