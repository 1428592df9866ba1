use wayfind_core::{CellId, CellRef, Grid, GridError, Point, Status};

use crate::frontier::Frontier;
use crate::neighbors::Cardinal;
use crate::search::{Algorithm, HeuristicMode, Search, SearchConfig};
use crate::traits::Topology;

/// A* search from the grid's start to its finish on a 4-connected board,
/// guided by the Manhattan distance scaled by the smallest step cost.
///
/// The visitation trace lists cells in expansion order: each cell appears
/// once, when it moves from the open set to the closed set.
pub fn astar(grid: Grid) -> Search {
    let endpoints = (grid.start(), grid.finish());
    let scale = HeuristicMode::default().scale(&grid);
    run(grid, &Cardinal, scale, endpoints)
}

/// A* with explicit topology, heuristic mode and endpoints.
///
/// Fails only if a configured endpoint is out of bounds or an obstacle.
pub fn astar_with<T: Topology>(grid: Grid, config: &SearchConfig<T>) -> Result<Search, GridError> {
    let endpoints = config.endpoints(&grid)?;
    let scale = config.heuristic.scale(&grid);
    Ok(run(grid, &config.topology, scale, endpoints))
}

fn run<T: Topology>(mut grid: Grid, topology: &T, scale: i64, endpoints: (CellId, CellId)) -> Search {
    let mut trace = Vec::new();
    let reached = expand(&mut grid, topology, scale, endpoints, &mut trace);
    Search::new(grid, Algorithm::AStar, endpoints, trace, reached)
}

/// Open-set key: total estimate first, then the remaining estimate, so
/// among equally promising cells the one closer to the goal goes first.
type Key = (i64, i64);

/// Expand cells in order of `distance + heuristic` until `finish` is
/// closed. Appends each closed cell to `trace` and returns whether the
/// finish was reached.
pub(crate) fn expand<T: Topology>(
    grid: &mut Grid,
    topology: &T,
    scale: i64,
    (start, finish): (CellId, CellId),
    trace: &mut Vec<CellRef>,
) -> bool {
    let goal = grid[finish].pos;
    let estimate = |p: Point| i64::from(topology.estimate(p, goal)).saturating_mul(scale);

    let mut open: Frontier<Key> = Frontier::with_capacity(grid.len());
    let mut nbuf: Vec<CellId> = Vec::with_capacity(8);

    {
        let s = &mut grid[start];
        let h = estimate(s.pos);
        s.distance = 0;
        s.heuristic = Some(h);
        s.total = h;
        open.push_or_decrease(start, (h, h));
    }

    while let Some((ci, _)) = open.extract_min() {
        // Closed from here on; never reopened.
        let cell = &mut grid[ci];
        cell.visited = true;
        if cell.is_plain() {
            cell.status = Status::Visited;
        }
        trace.push(cell.to_ref());

        if ci == finish {
            return true;
        }
        let current_g = cell.distance;

        nbuf.clear();
        topology.neighbors(grid, ci, &mut nbuf);

        for &ni in nbuf.iter() {
            let n = &mut grid[ni];
            if n.visited || n.is_obstacle {
                continue;
            }
            let tentative = current_g.saturating_add(n.step_cost());
            if tentative >= n.distance {
                continue;
            }
            let pos = n.pos;
            let h = *n.heuristic.get_or_insert_with(|| estimate(pos));
            n.distance = tentative;
            n.total = tentative.saturating_add(h);
            n.predecessor = Some(ci);
            open.push_or_decrease(ni, (n.total, h));
        }
    }

    false
}
