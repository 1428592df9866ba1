use wayfind_core::{CellId, Grid, Point};

/// How cells connect: neighbor enumeration plus a matching lower bound on
/// the number of steps between two positions.
pub trait Topology {
    /// Append the passable neighbors of `id` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, grid: &Grid, id: CellId, buf: &mut Vec<CellId>);

    /// Fewest steps from `from` to `to` on an empty board.
    /// Must never overestimate (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
