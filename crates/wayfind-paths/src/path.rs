use wayfind_core::{CellId, CellRef, Grid};

/// Walk predecessor links back from `finish` to the grid's start cell.
///
/// Returns the path start→finish inclusive, or an empty `Vec` if the
/// predecessor chain does not end at the start (finish never reached).
pub fn reconstruct_path(grid: &Grid, finish: CellId) -> Vec<CellRef> {
    path_between(grid, grid.start(), finish)
}

/// Like [`reconstruct_path`], for a search that started at `start`.
pub fn path_between(grid: &Grid, start: CellId, finish: CellId) -> Vec<CellRef> {
    let mut path = Vec::new();
    let mut cur = Some(finish);
    while let Some(id) = cur {
        // A chain can never be longer than the board.
        if path.len() == grid.len() {
            return Vec::new();
        }
        let cell = &grid[id];
        path.push(cell.to_ref());
        cur = cell.predecessor;
    }
    if path.last().map(|c| c.id) != Some(start) {
        return Vec::new();
    }
    path.reverse();
    path
}
