//! JavaScript bindings, built with the `wasm` feature.
//!
//! Mazes are passed as text, one row per line, with `wall` marking blocked cells.
//! Graphs are passed as one `a{sep}b` edge per line.

use itertools::Itertools;
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::builder::{Builder, MazeBuilder};
use crate::clique::find_max_clique;
use crate::input::{char_grid, graph_edges};
use crate::location::Location;
use crate::maze::Maze;
use crate::shape::SquareStep;

fn parse_maze(maze: &str, wall: char) -> Result<Maze<SquareStep>, JsError> {
    let grid = char_grid(maze)?;
    MazeBuilder::<SquareStep>::from_grid(&grid, |c| *c != wall)
        .build()
        .map_err(|reasons| JsError::new(&format!("invalid maze: {reasons:?}")))
}

/// Number of steps on a shortest route between two cells, or `undefined` if they are not connected.
#[wasm_bindgen(js_name = shortestPathLength)]
pub fn shortest_path_length(maze: &str, wall: char, start_x: usize, start_y: usize, end_x: usize, end_y: usize) -> Result<Option<usize>, JsError> {
    let maze = parse_maze(maze, wall)?;
    Ok(maze.shortest_path(Location(start_x, start_y), Location(end_x, end_y)).map(|path| path.len() - 1))
}

/// Number of open cells reachable from `(x, y)`, itself included; zero if it is a wall.
#[wasm_bindgen(js_name = regionSize)]
pub fn region_size(maze: &str, wall: char, x: usize, y: usize) -> Result<usize, JsError> {
    Ok(parse_maze(maze, wall)?.flood_fill(Location(x, y)).len())
}

/// Size of a largest clique in an undirected graph.
#[wasm_bindgen(js_name = maxCliqueSize)]
pub fn max_clique_size(edges: &str, sep: &str) -> Result<usize, JsError> {
    Ok(find_max_clique(&graph_edges(edges, sep, false)?).len())
}

/// Members of a largest clique in an undirected graph, sorted by name.
#[wasm_bindgen(js_name = maxClique)]
pub fn max_clique(edges: &str, sep: &str) -> Result<Array, JsError> {
    let clique = find_max_clique(&graph_edges(edges, sep, false)?);
    Ok(clique.into_iter().sorted().map(|node| JsValue::from_str(&node)).collect())
}
