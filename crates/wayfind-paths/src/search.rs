//! Search configuration and the outcome of one run.

use std::fmt;

use wayfind_core::{CellId, CellRef, Grid, GridError, Point, Role};

use crate::astar::astar_with;
use crate::dijkstra::dijkstra_with;
use crate::neighbors::Cardinal;
use crate::path::path_between;
use crate::traits::Topology;

/// How A* scales its distance estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicMode {
    /// Topology distance × the grid's smallest step cost. Admissible and
    /// consistent with per-cell weights.
    #[default]
    Scaled,
    /// Unscaled topology distance. Admissible since every step costs ≥ 1.
    Plain,
    /// No estimate; A* expands in uniform-cost order.
    Zero,
}

impl HeuristicMode {
    pub(crate) fn scale(self, grid: &Grid) -> i64 {
        match self {
            Self::Scaled => grid.min_step_cost(),
            Self::Plain => 1,
            Self::Zero => 0,
        }
    }
}

/// Options for [`dijkstra_with`] and [`astar_with`].
#[derive(Clone, Debug)]
pub struct SearchConfig<T = Cardinal> {
    pub topology: T,
    /// Ignored by Dijkstra.
    pub heuristic: HeuristicMode,
    /// Search from here instead of the grid's start cell.
    pub start: Option<Point>,
    /// Search towards here instead of the grid's finish cell.
    pub finish: Option<Point>,
}

impl Default for SearchConfig<Cardinal> {
    fn default() -> Self {
        Self::with_topology(Cardinal)
    }
}

impl<T: Topology> SearchConfig<T> {
    pub fn with_topology(topology: T) -> Self {
        Self {
            topology,
            heuristic: HeuristicMode::default(),
            start: None,
            finish: None,
        }
    }

    /// Resolve the configured endpoints against `grid`.
    ///
    /// Unlike grid construction, start and finish may coincide here.
    pub(crate) fn endpoints(&self, grid: &Grid) -> Result<(CellId, CellId), GridError> {
        let start = resolve(grid, self.start, grid.start(), Role::Start)?;
        let finish = resolve(grid, self.finish, grid.finish(), Role::Finish)?;
        Ok((start, finish))
    }
}

fn resolve(grid: &Grid, p: Option<Point>, default: CellId, what: Role) -> Result<CellId, GridError> {
    let Some(p) = p else {
        return Ok(default);
    };
    let id = grid.id_of(p).ok_or(GridError::OutOfBounds { what, pos: p })?;
    if grid[id].is_obstacle {
        return Err(GridError::EndpointIsObstacle { what, pos: p });
    }
    Ok(id)
}

/// The two searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    /// Run this algorithm over `grid` between its own endpoints.
    pub fn run(self, grid: Grid) -> Search {
        match self {
            Self::Dijkstra => crate::dijkstra(grid),
            Self::AStar => crate::astar(grid),
        }
    }

    /// Run this algorithm with explicit options.
    pub fn run_with<T: Topology>(
        self,
        grid: Grid,
        config: &SearchConfig<T>,
    ) -> Result<Search, GridError> {
        match self {
            Self::Dijkstra => dijkstra_with(grid, config),
            Self::AStar => astar_with(grid, config),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("Dijkstra"),
            Self::AStar => f.write_str("A*"),
        }
    }
}

/// The outcome of one search run.
///
/// Owns the grid it consumed, so the scratch it wrote can be read back but
/// never searched again. Use [`Grid::rebuilt`] on [`Search::grid`] for a
/// fresh run over the same board.
#[derive(Clone, Debug)]
pub struct Search {
    grid: Grid,
    algorithm: Algorithm,
    start: CellId,
    finish: CellId,
    visited: Vec<CellRef>,
    reached: bool,
}

impl Search {
    pub(crate) fn new(
        grid: Grid,
        algorithm: Algorithm,
        (start, finish): (CellId, CellId),
        visited: Vec<CellRef>,
        reached: bool,
    ) -> Self {
        log::debug!(
            "{algorithm}: {}x{} grid, {} cells visited, finish {}",
            grid.width(),
            grid.height(),
            visited.len(),
            if reached { "reached" } else { "unreachable" }
        );
        Self {
            grid,
            algorithm,
            start,
            finish,
            visited,
            reached,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn start(&self) -> CellId {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> CellId {
        self.finish
    }

    /// Cells in the order they were settled (Dijkstra) or expanded (A*).
    #[inline]
    pub fn visited(&self) -> &[CellRef] {
        &self.visited
    }

    /// Whether the finish was popped before the frontier ran dry.
    #[inline]
    pub fn reached(&self) -> bool {
        self.reached
    }

    /// Cost of the shortest path, if the finish was reached.
    pub fn cost(&self) -> Option<i64> {
        self.reached.then(|| self.grid[self.finish].distance)
    }

    /// The shortest path start→finish inclusive, or empty if unreachable.
    pub fn path(&self) -> Vec<CellRef> {
        path_between(&self.grid, self.start, self.finish)
    }

    /// Hand both traces to a consumer.
    pub fn into_traces(self) -> Traces {
        let path = self.path();
        Traces {
            visited: self.visited,
            path,
        }
    }

    /// The searched grid, with `Path` status marked along the shortest path.
    pub fn into_marked_grid(mut self) -> Grid {
        let path = self.path();
        self.grid.mark_path(&path);
        self.grid
    }
}

/// Visitation and path traces of one run, ready for playback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traces {
    pub visited: Vec<CellRef>,
    pub path: Vec<CellRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::Layout;

    fn grid(text: &str) -> Grid {
        Layout::parse(text).unwrap().build().unwrap()
    }

    #[test]
    fn endpoints_default_to_grid_flags() {
        let g = grid("S.F");
        let (s, f) = SearchConfig::default().endpoints(&g).unwrap();
        assert_eq!((s, f), (g.start(), g.finish()));
    }

    #[test]
    fn endpoint_overrides_are_validated() {
        let g = grid("S#F");
        let mut cfg = SearchConfig {
            finish: Some(Point::new(1, 0)),
            ..SearchConfig::default()
        };
        assert!(matches!(
            cfg.endpoints(&g),
            Err(GridError::EndpointIsObstacle {
                what: Role::Finish,
                ..
            })
        ));
        cfg.finish = Some(Point::new(0, 4));
        assert!(matches!(
            cfg.endpoints(&g),
            Err(GridError::OutOfBounds {
                what: Role::Finish,
                ..
            })
        ));
        cfg.finish = Some(Point::new(0, 0));
        assert_eq!(cfg.endpoints(&g).unwrap(), (g.start(), g.start()));
    }

    #[test]
    fn heuristic_scale_follows_mode() {
        let g = grid("S3F\n222");
        // Unweighted endpoints keep the minimum at 1.
        assert_eq!(HeuristicMode::Scaled.scale(&g), 1);

        let bounds = wayfind_core::Range::sized(3, 1);
        let g = wayfind_core::build_weighted_grid(
            3,
            1,
            Point::new(0, 0),
            Point::new(2, 0),
            [],
            bounds.iter().map(|p| (p, 2)),
        )
        .unwrap();
        assert_eq!(HeuristicMode::Scaled.scale(&g), 2);
        assert_eq!(HeuristicMode::Plain.scale(&g), 1);
        assert_eq!(HeuristicMode::Zero.scale(&g), 0);
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Dijkstra.to_string(), "Dijkstra");
        assert_eq!(Algorithm::AStar.to_string(), "A*");
    }
}
