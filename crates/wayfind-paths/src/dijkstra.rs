use wayfind_core::{CellId, CellRef, Grid, GridError, Status};

use crate::frontier::Frontier;
use crate::neighbors::Cardinal;
use crate::search::{Algorithm, Search, SearchConfig};
use crate::traits::Topology;

/// Uniform-cost search from the grid's start to its finish on a
/// 4-connected board.
///
/// The returned [`Search`] holds the visitation trace: every cell in the
/// order it was settled, ending with the finish if it was reached.
pub fn dijkstra(grid: Grid) -> Search {
    let endpoints = (grid.start(), grid.finish());
    run(grid, &Cardinal, endpoints)
}

/// Uniform-cost search with explicit topology and endpoints.
///
/// Fails only if a configured endpoint is out of bounds or an obstacle.
pub fn dijkstra_with<T: Topology>(grid: Grid, config: &SearchConfig<T>) -> Result<Search, GridError> {
    let endpoints = config.endpoints(&grid)?;
    Ok(run(grid, &config.topology, endpoints))
}

fn run<T: Topology>(mut grid: Grid, topology: &T, endpoints: (CellId, CellId)) -> Search {
    let mut trace = Vec::new();
    let reached = settle(&mut grid, topology, endpoints, &mut trace);
    Search::new(grid, Algorithm::Dijkstra, endpoints, trace, reached)
}

/// Label-setting loop. Appends each settled cell to `trace` and stops as
/// soon as `finish` is settled. Returns whether it was.
pub(crate) fn settle<T: Topology>(
    grid: &mut Grid,
    topology: &T,
    (start, finish): (CellId, CellId),
    trace: &mut Vec<CellRef>,
) -> bool {
    let mut open: Frontier<i64> = Frontier::with_capacity(grid.len());
    let mut nbuf: Vec<CellId> = Vec::with_capacity(8);

    grid[start].distance = 0;
    open.push_or_decrease(start, 0);

    while let Some((ci, current_d)) = open.extract_min() {
        let cell = &mut grid[ci];
        cell.visited = true;
        if cell.is_plain() {
            cell.status = Status::Visited;
        }
        trace.push(cell.to_ref());

        if ci == finish {
            return true;
        }

        nbuf.clear();
        topology.neighbors(grid, ci, &mut nbuf);

        for &ni in nbuf.iter() {
            let n = &mut grid[ni];
            if n.visited || n.is_obstacle {
                continue;
            }
            let tentative = current_d.saturating_add(n.step_cost());
            if tentative >= n.distance {
                continue;
            }
            n.distance = tentative;
            n.predecessor = Some(ci);
            open.push_or_decrease(ni, tentative);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::{Layout, Point, build_grid, build_weighted_grid};

    use crate::neighbors::Octile;

    fn grid(text: &str) -> Grid {
        Layout::parse(text).unwrap().build().unwrap()
    }

    fn cols_rows(cells: &[CellRef]) -> Vec<(i32, i32)> {
        cells.iter().map(|c| (c.col(), c.row())).collect()
    }

    #[test]
    fn open_board_path_is_manhattan_plus_one() {
        let g = build_grid(5, 5, Point::new(0, 0), Point::new(4, 4), []).unwrap();
        let s = dijkstra(g);
        assert!(s.reached());
        assert_eq!(s.cost(), Some(8));
        assert_eq!(s.path().len(), 9);
        assert!(s.visited().len() <= 25);
        assert_eq!(s.visited()[0].pos, Point::new(0, 0));
        assert_eq!(s.visited().last().unwrap().pos, Point::new(4, 4));
    }

    #[test]
    fn settles_in_distance_order() {
        let s = dijkstra(grid(
            "
            .....
            ..S..
            .....
            ....F",
        ));
        let dists: Vec<i64> = s.visited().iter().map(|c| s.grid()[c.id].distance).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn detours_around_wall() {
        let s = dijkstra(grid(
            "
            S#F
            .#.
            ...",
        ));
        assert_eq!(
            cols_rows(&s.path()),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)]
        );
    }

    #[test]
    fn wall_in_column_one_forces_bottom_row_detour() {
        let g = build_grid(
            3,
            3,
            Point::new(0, 0),
            Point::new(2, 0),
            [Point::new(1, 0), Point::new(1, 1)],
        )
        .unwrap();
        let s = dijkstra(g);
        assert_eq!(s.cost(), Some(6));
        assert_eq!(s.path().len(), 7);
        assert!(s.path().iter().any(|c| c.pos == Point::new(1, 2)));
    }

    #[test]
    fn enclosed_start_visits_only_itself() {
        let s = dijkstra(grid(
            "
            .#...
            #S#..
            .#..F",
        ));
        assert!(!s.reached());
        assert_eq!(s.visited().len(), 1);
        assert!(s.visited()[0].is_start);
        assert!(s.path().is_empty());
        assert_eq!(s.cost(), None);
    }

    #[test]
    fn enclosed_finish_visits_reachable_component() {
        let s = dijkstra(grid(
            "
            S...#.
            ....#F
            ....##",
        ));
        assert!(!s.reached());
        assert_eq!(s.visited().len(), 12);
        assert!(s.path().is_empty());
    }

    #[test]
    fn trace_stops_at_finish() {
        let s = dijkstra(grid("SF......"));
        assert_eq!(cols_rows(s.visited()), vec![(0, 0), (1, 0)]);
        assert!(!s.grid().at(Point::new(2, 0)).unwrap().visited);
    }

    #[test]
    fn visited_cells_carry_status() {
        let s = dijkstra(grid("S..F"));
        let g = s.grid();
        assert_eq!(g.at(Point::new(1, 0)).unwrap().status, Status::Visited);
        assert_eq!(g.at(Point::new(0, 0)).unwrap().status, Status::Start);
        assert_eq!(g.at(Point::new(3, 0)).unwrap().status, Status::Finish);
    }

    #[test]
    fn rerun_on_rebuilt_grid_is_identical() {
        let layout = Layout::parse(
            "
            S.#....
            ..#.##.
            ....#.F",
        )
        .unwrap();
        let a = dijkstra(layout.build().unwrap());
        let b = dijkstra(a.grid().rebuilt());
        let c = dijkstra(layout.build().unwrap());
        assert_eq!(a.visited(), b.visited());
        assert_eq!(a.visited(), c.visited());
        assert_eq!(a.path(), c.path());
    }

    #[test]
    fn weights_steer_the_path() {
        let s = dijkstra(grid(
            "
            S9F
            ...",
        ));
        assert_eq!(s.cost(), Some(4));
        assert_eq!(cols_rows(&s.path()), vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]);

        let s = dijkstra(grid(
            "
            S3F
            ...",
        ));
        assert_eq!(s.cost(), Some(4));
        assert_eq!(s.path().len(), 3);
    }

    #[test]
    fn heaviest_weight_still_reaches_finish() {
        let g = build_weighted_grid(
            3,
            1,
            Point::new(0, 0),
            Point::new(2, 0),
            [],
            [(Point::new(1, 0), i32::MAX)],
        )
        .unwrap();
        let s = dijkstra(g);
        assert!(s.reached());
        assert_eq!(s.cost(), Some(i64::from(i32::MAX) + 1));
        assert_eq!(s.path().len(), 3);
    }

    #[test]
    fn costs_past_i32_range_are_exact() {
        let g = build_weighted_grid(
            4,
            1,
            Point::new(0, 0),
            Point::new(3, 0),
            [],
            [(Point::new(1, 0), 1 << 30), (Point::new(2, 0), 1 << 30)],
        )
        .unwrap();
        let s = dijkstra(g);
        assert!(s.reached());
        assert_eq!(s.cost(), Some((1i64 << 31) + 1));
        assert_eq!(s.path().len(), 4);
    }

    #[test]
    fn heavy_row_loses_to_long_detour() {
        // Two heaviest cells cost more than any detour on this board.
        let g = build_weighted_grid(
            4,
            3,
            Point::new(0, 0),
            Point::new(3, 0),
            [Point::new(1, 1), Point::new(2, 1)],
            [(Point::new(1, 0), i32::MAX), (Point::new(2, 0), i32::MAX)],
        )
        .unwrap();
        let s = dijkstra(g);
        assert_eq!(s.cost(), Some(7));
        assert_eq!(s.path().len(), 8);
    }

    #[test]
    fn start_equal_to_finish() {
        let cfg = SearchConfig {
            finish: Some(Point::new(0, 0)),
            ..SearchConfig::default()
        };
        let s = dijkstra_with(grid("S.F"), &cfg).unwrap();
        assert_eq!(s.visited().len(), 1);
        assert_eq!(s.path().len(), 1);
        assert_eq!(s.cost(), Some(0));
    }

    #[test]
    fn octile_takes_diagonals() {
        let cfg = SearchConfig::with_topology(Octile);
        let g = build_grid(5, 5, Point::new(0, 0), Point::new(4, 4), []).unwrap();
        let s = dijkstra_with(g, &cfg).unwrap();
        assert_eq!(s.path().len(), 5);
    }

    #[test]
    fn invalid_override_fails_fast() {
        let cfg = SearchConfig {
            start: Some(Point::new(9, 9)),
            ..SearchConfig::default()
        };
        assert!(dijkstra_with(grid("S.F"), &cfg).is_err());
    }
}
