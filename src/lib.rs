#![warn(missing_docs)]

//! # `trailhead`
//!
//! Graph-search building blocks for grid and graph puzzles: breadth- and depth-first search, Dijkstra's algorithm, flood fill, path counting, maximum cliques and union-find.
//!
//! Most searches run over *implicit* graphs. A graph is a start state plus a neighbor function `FnMut(&N) -> I`, where `N` is any `Eq + Hash + Clone` state and `I` yields the states one step away
//! (or `(state, cost)` pairs for [`dijkstra`]). Nothing is materialized up front, so positions, `(position, heading)` pairs or whole puzzle configurations all work as states.
//!
//! Explicit graphs are either an [`AdjacencyMap`](clique::AdjacencyMap) or a petgraph [`UnGraphMap`](petgraph::graphmap::UnGraphMap).
//! Rectangular grids are read into a [`Grid`] and can be turned into a [`Maze`] with a builder such as [`MazeBuilder`](builder::MazeBuilder).
//!
//! ```
//! use trailhead::{bfs_path, dijkstra_cost};
//!
//! let chain = |n: &u32| if *n < 4 { vec![n + 1] } else { vec![] };
//! assert_eq!(bfs_path(0, chain, |n| *n == 4), Some(vec![0, 1, 2, 3, 4]));
//!
//! let unit = |n: &u32| chain(n).into_iter().map(|m| (m, 1u32)).collect::<Vec<_>>();
//! assert_eq!(dijkstra_cost(0, unit, &4), Some(4));
//! ```
//!
//! # Conventions
//! Absence is never an error: an unreachable goal is [`None`], an empty search is an empty collection.
//! Only reading and parsing input in [`input`] is fallible, with [`InputError`].
//! Costs must be non-negative, adjacency maps must be symmetric and [`count_paths_dag`] must be given an acyclic graph; none of these are checked.

pub use builder::{Builder, MazeBuilder};
pub use clique::{find_max_clique, maximal_cliques, AdjacencyMap};
pub use connectivity::{flood_fill, flood_fill_mark, regions};
pub use dijkstra::{dijkstra_cost, dijkstra_distances, dijkstra_path};
pub use error::InputError;
pub use grid::Grid;
pub use location::{Dimension, Location};
pub use maze::Maze;
pub use paths::{count_paths_cyclic, count_paths_dag};
pub use search::{bfs_distances, bfs_levels, bfs_path, dfs_path};
pub use union_find::UnionFind;

mod tests;
pub mod builder;
pub mod clique;
pub mod connectivity;
pub mod dijkstra;
pub(crate) mod error;
pub(crate) mod grid;
pub mod input;
pub(crate) mod location;
pub mod maze;
pub mod paths;
pub mod search;
pub mod shape;
pub(crate) mod union_find;
#[cfg(feature = "wasm")]
pub mod wasm;
