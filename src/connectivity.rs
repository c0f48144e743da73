//! Region discovery on grids.

use std::collections::HashSet;

use crate::grid::Grid;
use crate::location::Location;
use crate::shape::{Shape, SquareStep, Step};
use crate::union_find::UnionFind;

/// Every location reachable from `start` through 4-connected cells satisfying `include`.
///
/// Returns the empty set if `start` is out of bounds or its own cell fails `include`.
pub fn flood_fill<T>(grid: &Grid<T>, start: Location, include: impl Fn(&T) -> bool) -> HashSet<Location> {
    flood_fill_with::<SquareStep, T>(grid, start, include)
}

/// [`flood_fill`] with the neighborhood given by `Sh`, for example [`OctileStep`](crate::shape::OctileStep) for diagonal connectivity.
pub fn flood_fill_with<Sh: Shape, T>(grid: &Grid<T>, start: Location, include: impl Fn(&T) -> bool) -> HashSet<Location> {
    let mut region = HashSet::new();
    if !grid.get(start).is_some_and(&include) {
        return region;
    }

    region.insert(start);
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        for neighbor in grid.neighbors::<Sh>(current) {
            if grid.get(neighbor).is_some_and(&include) && region.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    tracing::trace!(%start, size = region.len(), "flood fill");
    region
}

/// Flood fill from `start` that writes `mark` into every cell it reaches, returning the number of cells marked.
///
/// The predicate is tested against the cell values before marking, so a `mark` that itself satisfies `include` does not cause revisits.
pub fn flood_fill_mark<T: Clone>(grid: &mut Grid<T>, start: Location, include: impl Fn(&T) -> bool, mark: T) -> usize {
    let region = flood_fill(grid, start, include);
    for location in &region {
        grid.set(*location, mark.clone());
    }

    region.len()
}

/// Partition every cell of `grid` into 4-connected regions, where neighboring cells belong together when `same` holds for their values.
///
/// `same` should be symmetric.
pub fn regions<T>(grid: &Grid<T>, same: impl Fn(&T, &T) -> bool) -> Vec<HashSet<Location>> {
    let mut uf = UnionFind::new();
    for (location, cell) in grid.iter() {
        uf.find(location);
        // only right and down, every pair is still considered once
        for step in [SquareStep::Right, SquareStep::Down] {
            let neighbor = step.attempt_from(location);
            if grid.get(neighbor).is_some_and(|other| same(cell, other)) {
                uf.union(location, neighbor);
            }
        }
    }

    uf.components()
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::location::Location;
    use crate::shape::OctileStep;

    use super::{flood_fill, flood_fill_mark, flood_fill_with, regions};

    fn parse(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows.iter().map(|row| row.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn fill_stops_at_walls() {
        let grid = parse(&["..#.", ".##.", "...#"]);
        let region = flood_fill(&grid, Location(0, 0), |c| *c == '.');

        assert!(region.contains(&Location(0, 0)));
        assert!(region.contains(&Location(1, 0)));
        assert!(region.contains(&Location(0, 1)));
        assert!(region.contains(&Location(2, 2)));
        assert!(!region.contains(&Location(3, 0)));
        assert_eq!(region.len(), 6);
    }

    #[test]
    fn excluded_or_missing_start_is_empty() {
        let grid = parse(&[".#", ".."]);
        assert!(flood_fill(&grid, Location(1, 0), |c| *c == '.').is_empty());
        assert!(flood_fill(&grid, Location(5, 5), |c| *c == '.').is_empty());
    }

    #[test]
    fn diagonals_connect_with_octile_steps() {
        let grid = parse(&["#.", ".#"]);
        assert_eq!(flood_fill(&grid, Location(0, 0), |c| *c == '#').len(), 1);
        assert_eq!(flood_fill_with::<OctileStep, _>(&grid, Location(0, 0), |c| *c == '#').len(), 2);
    }

    #[test]
    fn marking_rewrites_cells() {
        let mut grid = parse(&["..#", ".#.", "..."]);
        let marked = flood_fill_mark(&mut grid, Location(0, 0), |c| *c == '.', 'X');

        assert_eq!(marked, 7);
        assert_eq!(grid.get(Location(0, 0)), Some(&'X'));
        assert_eq!(grid.get(Location(2, 0)), Some(&'#'));
        assert_eq!(grid.get(Location(2, 2)), Some(&'X'));
        assert_eq!(grid.get(Location(2, 1)), Some(&'X'));
    }

    #[test]
    fn regions_by_letter() {
        let grid = parse(&["AAB", "ABB", "CCB"]);
        let mut sizes = regions(&grid, |a, b| a == b).iter().map(|r| r.len()).collect::<Vec<_>>();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 3, 4]);
    }
}
