use wayfind_core::{CellId, Grid, Point};

use crate::distance::{chebyshev, manhattan};
use crate::traits::Topology;

/// 4-connected board: up, right, down, left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cardinal;

impl Topology for Cardinal {
    fn neighbors(&self, grid: &Grid, id: CellId, buf: &mut Vec<CellId>) {
        for p in grid[id].pos.neighbors_4() {
            push_passable(grid, p, buf);
        }
    }

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// 8-connected board. Diagonal steps cost the same as orthogonal ones and
/// may not cut a corner: both orthogonal cells beside the diagonal must be
/// passable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Octile;

impl Topology for Octile {
    fn neighbors(&self, grid: &Grid, id: CellId, buf: &mut Vec<CellId>) {
        let p = grid[id].pos;
        let open = |q: Point| grid.at(q).is_some_and(|c| c.is_passable());
        for n in p.neighbors_8() {
            let d = n - p;
            if d.x != 0 && d.y != 0 && !(open(p.shift(d.x, 0)) && open(p.shift(0, d.y))) {
                continue;
            }
            push_passable(grid, n, buf);
        }
    }

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        chebyshev(from, to)
    }
}

#[inline]
fn push_passable(grid: &Grid, p: Point, buf: &mut Vec<CellId>) {
    if let Some(c) = grid.at(p) {
        if c.is_passable() {
            buf.push(c.id);
        }
    }
}
