//! Step-traced shortest-path searches over wayfind grids.
//!
//! Two searches share one outcome type, [`Search`]:
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`], [`dijkstra_with`])
//! - **A\*** heuristic search ([`astar`], [`astar_with`])
//!
//! Each run consumes a freshly built [`Grid`](wayfind_core::Grid), writes
//! its scratch fields, and records the order in which cells were settled
//! or expanded. That visitation trace and the reconstructed path
//! ([`Search::path`], [`reconstruct_path`]) are what an animator plays
//! back. An unreachable finish is not an error: the path is simply empty.
//!
//! Neighbor enumeration goes through the [`Topology`] trait; [`Cardinal`]
//! (4-connected) is the default and [`Octile`] (8-connected) is provided.

mod astar;
mod dijkstra;
mod distance;
mod frontier;
mod neighbors;
mod path;
mod search;
mod traits;

pub use astar::{astar, astar_with};
pub use dijkstra::{dijkstra, dijkstra_with};
pub use distance::{chebyshev, manhattan};
pub use frontier::{Frontier, FrontierError};
pub use neighbors::{Cardinal, Octile};
pub use path::{path_between, reconstruct_path};
pub use search::{Algorithm, HeuristicMode, Search, SearchConfig, Traces};
pub use traits::Topology;
pub use wayfind_core::UNREACHABLE;
