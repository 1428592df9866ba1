//! The [`Cell`] record and its lightweight [`CellRef`] view.

use std::fmt;

use crate::geom::Point;

/// Sentinel distance meaning "not reached yet" (+∞).
///
/// Costs are `i64` while weights are `i32`. Grid construction rejects
/// boards where `cells × heaviest step` does not fit in an `i64`, so no real
/// path cost ever reaches this value.
pub const UNREACHABLE: i64 = i64::MAX;

/// Stable identity of a cell: its row-major index in the owning grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub usize);

impl CellId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Unvisited,
    Visited,
    Wall,
    Path,
    Start,
    Finish,
}

impl Status {
    /// One-character glyph used by [`Grid::render`](crate::Grid::render).
    pub const fn glyph(self) -> char {
        match self {
            Self::Unvisited => '.',
            Self::Visited => 'o',
            Self::Wall => '#',
            Self::Path => '*',
            Self::Start => 'S',
            Self::Finish => 'F',
        }
    }
}

/// One grid position: identity, flags and per-run search scratch.
///
/// The scratch fields (`distance` through `predecessor`) start at their
/// identity values whenever a grid is built and are only written by a
/// single search run over that grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    pub pos: Point,
    pub is_start: bool,
    pub is_finish: bool,
    pub is_obstacle: bool,
    /// Opt-in traversal cost of entering this cell. `0` means unit cost.
    pub weight: i32,
    /// Best known cost from the start, [`UNREACHABLE`] until relaxed.
    pub distance: i64,
    /// Estimate of remaining cost to the finish, computed lazily by A*.
    pub heuristic: Option<i64>,
    /// `distance + heuristic`, only maintained by A*.
    pub total: i64,
    /// Set once the cell is settled (Dijkstra) or closed (A*).
    pub visited: bool,
    pub predecessor: Option<CellId>,
    pub status: Status,
}

impl Cell {
    /// A plain open cell with all scratch fields at their identity values.
    pub fn new(id: CellId, pos: Point) -> Self {
        Self {
            id,
            pos,
            is_start: false,
            is_finish: false,
            is_obstacle: false,
            weight: 0,
            distance: UNREACHABLE,
            heuristic: None,
            total: UNREACHABLE,
            visited: false,
            predecessor: None,
            status: Status::Unvisited,
        }
    }

    /// Cost of stepping into this cell.
    #[inline]
    pub fn step_cost(&self) -> i64 {
        if self.weight == 0 { 1 } else { i64::from(self.weight) }
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        !self.is_obstacle
    }

    /// Neither start nor finish.
    #[inline]
    pub fn is_plain(&self) -> bool {
        !self.is_start && !self.is_finish
    }

    /// The rendering view of this cell.
    #[inline]
    pub fn to_ref(&self) -> CellRef {
        CellRef {
            id: self.id,
            pos: self.pos,
            is_start: self.is_start,
            is_finish: self.is_finish,
            is_obstacle: self.is_obstacle,
        }
    }
}

/// What consumers of a trace may rely on: position and flags, no scratch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRef {
    pub id: CellId,
    pub pos: Point,
    pub is_start: bool,
    pub is_finish: bool,
    pub is_obstacle: bool,
}

impl CellRef {
    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_identity_scratch() {
        let c = Cell::new(CellId(4), Point::new(1, 1));
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.total, UNREACHABLE);
        assert_eq!(c.heuristic, None);
        assert_eq!(c.predecessor, None);
        assert!(!c.visited);
        assert_eq!(c.status, Status::Unvisited);
    }

    #[test]
    fn zero_weight_costs_one() {
        let mut c = Cell::new(CellId(0), Point::ZERO);
        assert_eq!(c.step_cost(), 1);
        c.weight = 5;
        assert_eq!(c.step_cost(), 5);
        c.weight = i32::MAX;
        assert_eq!(c.step_cost(), i64::from(i32::MAX));
    }

    #[test]
    fn cell_ref_exposes_row_and_col() {
        let mut c = Cell::new(CellId(7), Point::new(3, 1));
        c.is_finish = true;
        let r = c.to_ref();
        assert_eq!((r.row(), r.col()), (1, 3));
        assert!(r.is_finish);
        assert_eq!(r.id, CellId(7));
    }
}
