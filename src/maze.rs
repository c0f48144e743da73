//! Mazes as explicit graphs over grid locations, plus search helpers that work straight on a [`Grid`].

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::ops::Add;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::clique::{adjacency_of, AdjacencyMap};
use crate::dijkstra::dijkstra_cost;
use crate::grid::Grid;
use crate::location::{Dimension, Location};
use crate::search::{bfs_distances, bfs_path, dfs_path};
use crate::shape::{Shape, SquareStep};
use crate::union_find::UnionFind;

/// A rectangular maze: open locations joined wherever movement between them is allowed.
///
/// Each edge is weighted by the direction taken from its lower-indexed end.
/// Produced by a [`Builder`](crate::builder::Builder).
#[derive(Clone, Debug)]
pub struct Maze<Sh: Shape = SquareStep> {
    graph: UnGraphMap<Location, Sh>,
    // width, height
    dims: (Dimension, Dimension),
}

impl<Sh: Shape> Maze<Sh> {
    pub(crate) fn new(graph: UnGraphMap<Location, Sh>, dims: (Dimension, Dimension)) -> Self {
        Self { graph, dims }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &UnGraphMap<Location, Sh> {
        &self.graph
    }

    /// Dimensions `(width, height)` of the board the maze was cut from.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Whether `location` is an open cell of this maze.
    pub fn contains(&self, location: Location) -> bool {
        self.graph.contains_node(location)
    }

    /// Open cells directly reachable from `location`, in row-major order.
    pub fn neighbors(&self, location: Location) -> Vec<Location> {
        if !self.contains(location) {
            return Vec::new();
        }

        self.graph.neighbors(location).sorted().collect_vec()
    }

    /// A shortest route from `start` to `end`, both ends included.
    pub fn shortest_path(&self, start: Location, end: Location) -> Option<Vec<Location>> {
        if !self.contains(start) {
            return None;
        }

        bfs_path(start, |location| self.neighbors(*location), |location| *location == end)
    }

    /// Some route from `start` to `end`, not necessarily the shortest.
    pub fn any_path(&self, start: Location, end: Location) -> Option<Vec<Location>> {
        if !self.contains(start) {
            return None;
        }

        dfs_path(start, |location| self.neighbors(*location), |location| *location == end)
    }

    /// Step counts from `start` to every reachable cell.
    pub fn distances_from(&self, start: Location) -> HashMap<Location, usize> {
        if !self.contains(start) {
            return HashMap::new();
        }

        bfs_distances(start, |location| self.neighbors(*location))
    }

    /// Every cell reachable from `start`, `start` included; empty if `start` is not open.
    pub fn flood_fill(&self, start: Location) -> HashSet<Location> {
        self.distances_from(start).into_keys().collect()
    }

    /// The connected regions of the maze.
    pub fn regions(&self) -> Vec<HashSet<Location>> {
        UnionFind::from_graph(&self.graph).components()
    }

    /// How many connected regions the maze has.
    pub fn count_components(&self) -> usize {
        UnionFind::from_graph(&self.graph).count_components()
    }

    /// The maze as an [`AdjacencyMap`], for use with the clique functions.
    pub fn adjacency(&self) -> AdjacencyMap<Location> {
        adjacency_of(&self.graph)
    }
}

impl<Sh: Shape> Display for Maze<Sh> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.dims.1.get() {
            for x in 0..self.dims.0.get() {
                write!(f, "{}", if self.contains(Location(x, y)) { '.' } else { '#' })?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// A shortest 4-connected route across `grid` from `start` to `end` over cells satisfying `walkable`.
///
/// [`None`] if either end is out of bounds or not walkable, or if no route exists.
pub fn bfs_grid_path<T>(grid: &Grid<T>, start: Location, end: Location, walkable: impl Fn(&T) -> bool) -> Option<Vec<Location>> {
    if !grid.get(start).is_some_and(&walkable) {
        return None;
    }

    bfs_path(start, |location| grid.neighbors_where(*location, &walkable), |location| *location == end)
}

/// Some 4-connected route across `grid` from `start` to `end` over cells satisfying `walkable`, found depth-first.
pub fn dfs_grid_path<T>(grid: &Grid<T>, start: Location, end: Location, walkable: impl Fn(&T) -> bool) -> Option<Vec<Location>> {
    if !grid.get(start).is_some_and(&walkable) {
        return None;
    }

    dfs_path(start, |location| grid.neighbors_where(*location, &walkable), |location| *location == end)
}

/// Step counts from `start` to every walkable cell reachable from it.
pub fn grid_distances<T>(grid: &Grid<T>, start: Location, walkable: impl Fn(&T) -> bool) -> HashMap<Location, usize> {
    if !grid.get(start).is_some_and(&walkable) {
        return HashMap::new();
    }

    bfs_distances(start, |location| grid.neighbors_where(*location, &walkable))
}

/// Cheapest 4-connected route across a grid of entry costs, where moving onto a cell costs its value.
///
/// The starting cell's own cost is not paid.
pub fn cheapest_path_cost<C>(grid: &Grid<C>, start: Location, end: Location) -> Option<C>
where
    C: Copy + Ord + Default + Add<Output = C>,
{
    if !grid.contains(start) {
        return None;
    }

    dijkstra_cost(
        start,
        |location| grid.neighbors::<SquareStep>(*location).into_iter()
            .filter_map(|neighbor| grid.get(neighbor).map(|cost| (neighbor, *cost)))
            .collect_vec(),
        &end,
    )
}

#[cfg(test)]
mod tests {
    use crate::builder::{Builder, MazeBuilder};
    use crate::grid::Grid;
    use crate::location::Location;
    use crate::shape::SquareStep;

    use super::{bfs_grid_path, cheapest_path_cost, dfs_grid_path, grid_distances, Maze};

    fn parse(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|row| row.chars().collect()).collect()).unwrap()
    }

    fn maze(rows: &[&str]) -> Maze<SquareStep> {
        MazeBuilder::from_grid(&parse(rows), |c| *c != '#').build().unwrap()
    }

    #[test]
    fn shortest_route_around_a_wall() {
        let maze = maze(&[
            "....",
            ".##.",
            "....",
        ]);

        let path = maze.shortest_path(Location(0, 1), Location(3, 1)).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path.first(), Some(&Location(0, 1)));
        assert_eq!(path.last(), Some(&Location(3, 1)));
        for (a, b) in path.iter().zip(path.iter().skip(1)) {
            assert_eq!(a.manhattan_distance(*b), 1);
        }

        let any = maze.any_path(Location(0, 1), Location(3, 1)).unwrap();
        assert!(any.len() >= 6);
    }

    #[test]
    fn walls_split_regions() {
        let maze = maze(&[
            "..#..",
            "..#..",
            "#####",
            "....#",
        ]);

        assert_eq!(maze.count_components(), 3);
        let mut sizes = maze.regions().iter().map(|r| r.len()).collect::<Vec<_>>();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![4, 4, 4]);
        assert_eq!(maze.flood_fill(Location(0, 3)).len(), 4);
        assert!(maze.flood_fill(Location(2, 0)).is_empty());
        assert_eq!(maze.shortest_path(Location(0, 0), Location(4, 0)), None);
    }

    #[test]
    fn distances_and_adjacency() {
        let maze = maze(&["...", ".#."]);
        let distances = maze.distances_from(Location(0, 1));
        assert_eq!(distances[&Location(2, 1)], 4);
        assert_eq!(distances.len(), 5);

        let adjacency = maze.adjacency();
        assert_eq!(adjacency.len(), 5);
        assert!(adjacency[&Location(1, 0)].contains(&Location(0, 0)));
        assert!(!adjacency.contains_key(&Location(1, 1)));
    }

    #[test]
    fn grid_helpers_agree_with_the_maze() {
        let rows = ["S..#", ".#..", "...E"];
        let grid = parse(&rows);
        let start = grid.find_first(&'S').unwrap();
        let end = grid.find_first(&'E').unwrap();

        let bfs = bfs_grid_path(&grid, start, end, |c| *c != '#').unwrap();
        let expected = maze(&rows).shortest_path(start, end).unwrap();
        assert_eq!(bfs.len(), expected.len());
        assert!(dfs_grid_path(&grid, start, end, |c| *c != '#').is_some());
        assert_eq!(grid_distances(&grid, start, |c| *c != '#')[&end], 5);
        assert!(bfs_grid_path(&grid, Location(3, 0), end, |c| *c != '#').is_none());
    }

    #[test]
    fn cheapest_route_over_cell_costs() {
        let grid = Grid::from_rows(vec![
            vec![1u32, 1, 6, 3, 7],
            vec![1, 3, 8, 1, 3],
            vec![2, 1, 3, 6, 5],
        ]).unwrap();

        // the bottom row beats cutting through the cheap cell at (3, 1)
        let cost = cheapest_path_cost(&grid, Location(0, 0), Location(4, 2)).unwrap();
        assert_eq!(cost, 1 + 2 + 1 + 3 + 6 + 5);
        assert_eq!(cheapest_path_cost(&grid, Location(0, 0), Location(0, 0)), Some(0));
        assert_eq!(cheapest_path_cost(&grid, Location(0, 0), Location(9, 9)), None);
    }
}
