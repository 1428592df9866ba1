//! Terminal demo: random board, both searches, final frames side by side.
//!
//! Run: cargo run --bin trace [seed]

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfind_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Layout};
use wayfind_paths::Algorithm;

/// Percentage of cells turned into walls.
const WALL_DENSITY: u32 = 28;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut layout = Layout::resized(DEFAULT_WIDTH, DEFAULT_HEIGHT, &mut rng);
    for p in layout.bounds() {
        if rng.random_range(0..100) < WALL_DENSITY {
            layout.toggle_wall(p);
        }
    }

    for algorithm in Algorithm::ALL {
        let grid = match layout.build() {
            Ok(g) => g,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        let search = algorithm.run(grid);
        let visited = search.visited().len();
        let summary = match search.cost() {
            Some(cost) => format!("path of {} cells, cost {cost}", search.path().len()),
            None => "no path".to_string(),
        };
        println!("{algorithm} (seed {seed}): {visited} cells visited, {summary}");
        print!("{}", search.into_marked_grid().render());
        println!();
    }
}
