//! The [`Grid`] snapshot searched by one run.
//!
//! A grid is built fresh before every run with all scratch fields at their
//! identity values. Searches write scratch into it; afterwards it is only
//! read (path reconstruction, rendering). To search again, call
//! [`Grid::rebuilt`] or build a new grid from the [`Layout`](crate::Layout).

use std::ops::{Index, IndexMut};

use crate::cell::{Cell, CellId, CellRef, Status};
use crate::error::{GridError, Role};
use crate::geom::{Point, Range};

/// A row-major board of [`Cell`] records with exactly one start and one
/// finish.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: CellId,
    finish: CellId,
}

/// Build a grid with unit-cost cells.
///
/// Fails if the size is not positive, an endpoint or obstacle lies outside
/// the board, start and finish coincide, or an endpoint is an obstacle.
pub fn build_grid(
    width: i32,
    height: i32,
    start: Point,
    finish: Point,
    obstacles: impl IntoIterator<Item = Point>,
) -> Result<Grid, GridError> {
    build_weighted_grid(width, height, start, finish, obstacles, [])
}

/// Like [`build_grid`], additionally assigning per-cell weights.
///
/// A weight of `0` keeps the unit cost. Negative weights are rejected, as
/// are weights heavy enough that a path cost could overflow `i64`.
pub fn build_weighted_grid(
    width: i32,
    height: i32,
    start: Point,
    finish: Point,
    obstacles: impl IntoIterator<Item = Point>,
    weights: impl IntoIterator<Item = (Point, i32)>,
) -> Result<Grid, GridError> {
    if width <= 0 || height <= 0 {
        return Err(GridError::EmptyGrid { width, height });
    }
    let bounds = Range::sized(width, height);
    let start_id = bounds.index_of(start).ok_or(GridError::OutOfBounds {
        what: Role::Start,
        pos: start,
    })?;
    let finish_id = bounds.index_of(finish).ok_or(GridError::OutOfBounds {
        what: Role::Finish,
        pos: finish,
    })?;
    if start_id == finish_id {
        return Err(GridError::SameEndpoints(start));
    }

    let weights = weights
        .into_iter()
        .map(|(p, weight)| {
            let i = bounds.index_of(p).ok_or(GridError::OutOfBounds {
                what: Role::Weighted,
                pos: p,
            })?;
            if weight < 0 {
                return Err(GridError::NegativeWeight { pos: p, weight });
            }
            Ok((i, weight))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Any simple path is shorter than `cells × heaviest`; if that product
    // fits, no cost can saturate into UNREACHABLE.
    let heaviest = weights.iter().map(|&(_, w)| w).max().unwrap_or(0).max(1);
    let fits = i64::from(width)
        .checked_mul(i64::from(height))
        .and_then(|n| n.checked_mul(i64::from(heaviest)))
        .is_some();
    if !fits {
        return Err(GridError::CostOverflow {
            width,
            height,
            weight: heaviest,
        });
    }

    let mut cells: Vec<Cell> = bounds
        .iter()
        .enumerate()
        .map(|(i, p)| Cell::new(CellId(i), p))
        .collect();

    let mut walls = 0usize;
    for p in obstacles {
        let i = bounds.index_of(p).ok_or(GridError::OutOfBounds {
            what: Role::Obstacle,
            pos: p,
        })?;
        if i == start_id {
            return Err(GridError::EndpointIsObstacle {
                what: Role::Start,
                pos: p,
            });
        }
        if i == finish_id {
            return Err(GridError::EndpointIsObstacle {
                what: Role::Finish,
                pos: p,
            });
        }
        if !cells[i].is_obstacle {
            cells[i].is_obstacle = true;
            cells[i].status = Status::Wall;
            walls += 1;
        }
    }

    for (i, weight) in weights {
        cells[i].weight = weight;
    }

    cells[start_id].is_start = true;
    cells[start_id].status = Status::Start;
    cells[finish_id].is_finish = true;
    cells[finish_id].status = Status::Finish;

    log::trace!("built {width}x{height} grid with {walls} obstacles");

    Ok(Grid {
        cells,
        bounds,
        start: CellId(start_id),
        finish: CellId(finish_id),
    })
}

impl Grid {
    /// The board rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a successfully built grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> CellId {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> CellId {
        self.finish
    }

    /// Identity of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn id_of(&self, p: Point) -> Option<CellId> {
        self.bounds.index_of(p).map(CellId)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.id_of(p).map(|id| &self.cells[id.0])
    }

    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    #[inline]
    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Smallest step cost over passable cells; at least 1.
    pub fn min_step_cost(&self) -> i64 {
        self.cells
            .iter()
            .filter(|c| c.is_passable())
            .map(Cell::step_cost)
            .min()
            .unwrap_or(1)
            .max(1)
    }

    /// A fresh copy of this board: same flags and weights, scratch reset.
    pub fn rebuilt(&self) -> Grid {
        let cells = self
            .cells
            .iter()
            .map(|c| {
                let mut fresh = Cell::new(c.id, c.pos);
                fresh.is_start = c.is_start;
                fresh.is_finish = c.is_finish;
                fresh.is_obstacle = c.is_obstacle;
                fresh.weight = c.weight;
                fresh.status = if c.is_start {
                    Status::Start
                } else if c.is_finish {
                    Status::Finish
                } else if c.is_obstacle {
                    Status::Wall
                } else {
                    Status::Unvisited
                };
                fresh
            })
            .collect();
        Grid {
            cells,
            bounds: self.bounds,
            start: self.start,
            finish: self.finish,
        }
    }

    /// Mark the plain cells of `path` with [`Status::Path`].
    pub fn mark_path(&mut self, path: &[CellRef]) {
        for r in path {
            let c = &mut self.cells[r.id.0];
            if c.is_plain() {
                c.status = Status::Path;
            }
        }
    }

    /// ASCII rendering, one line per row, using [`Status::glyph`].
    pub fn render(&self) -> String {
        let w = self.width() as usize;
        let mut out = String::with_capacity(self.cells.len() + self.height() as usize);
        for row in self.cells.chunks(w) {
            out.extend(row.iter().map(|c| c.status.glyph()));
            out.push('\n');
        }
        out
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }
}

impl IndexMut<CellId> for Grid {
    #[inline]
    fn index_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
