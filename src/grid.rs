use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

use itertools::Itertools;
use ndarray::Array2;

use crate::error::InputError;
use crate::location::{Dimension, Location};
use crate::shape::{Shape, SquareStep, Step};

/// A rectangular grid of cells addressed by [`Location`], stored row-major.
///
/// A grid always has at least one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
}

impl<T> Grid<T> {
    /// Build a grid from rows of cells, top row first.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, InputError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(InputError::EmptyGrid);
        }

        if let Some((row, found)) = rows.iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width) {
            return Err(InputError::RaggedGrid { row, expected: width, found });
        }

        let height = rows.len();
        let cells = Array2::from_shape_vec((height, width), rows.into_iter().flatten().collect_vec())
            .map_err(|_| InputError::EmptyGrid)?;

        Ok(Self { cells })
    }

    /// Dimensions `(width, height)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        // from_rows and filled never produce an empty array
        (
            Dimension::new(self.cells.ncols()).unwrap_or(Dimension::MIN),
            Dimension::new(self.cells.nrows()).unwrap_or(Dimension::MIN),
        )
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// The bottom-right location.
    pub fn max_location(&self) -> Location {
        Location(self.width() - 1, self.height() - 1)
    }

    /// Whether `location` is inside the grid.
    pub fn contains(&self, location: Location) -> bool {
        location.0 < self.width() && location.1 < self.height()
    }

    /// The cell at `location`, or [`None`] if it is out of bounds.
    pub fn get(&self, location: Location) -> Option<&T> {
        self.cells.get(location.as_index())
    }

    /// Mutable access to the cell at `location`.
    pub fn get_mut(&mut self, location: Location) -> Option<&mut T> {
        self.cells.get_mut(location.as_index())
    }

    /// Overwrite the cell at `location`, returning the old value, or [`None`] if `location` is out of bounds.
    pub fn set(&mut self, location: Location, value: T) -> Option<T> {
        self.get_mut(location).map(|cell| std::mem::replace(cell, value))
    }

    /// Every `(location, cell)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &T)> + '_ {
        self.cells.indexed_iter().map(|(index, cell)| (Location::from(index), cell))
    }

    /// Every location in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter().map(|(location, _)| location)
    }

    /// In-bounds neighbors of `location` under the neighborhood `Sh`.
    pub fn neighbors<Sh: Shape>(&self, location: Location) -> Vec<Location> {
        Sh::neighbors_of(location).into_iter()
            .map(|(_, neighbor)| neighbor)
            .filter(|neighbor| self.contains(*neighbor))
            .collect_vec()
    }

    /// In-bounds 4-connected neighbors of `location` whose cells satisfy `include`.
    pub fn neighbors_where(&self, location: Location, include: impl Fn(&T) -> bool) -> Vec<Location> {
        self.neighbors::<SquareStep>(location).into_iter()
            .filter(|neighbor| self.get(*neighbor).is_some_and(&include))
            .collect_vec()
    }

    /// A grid of the same shape with `f` applied to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid { cells: self.cells.map(f) }
    }
}

impl<T: Clone> Grid<T> {
    /// A grid of the given `(width, height)` with every cell set to `value`.
    pub fn filled(dims: (Dimension, Dimension), value: T) -> Self {
        Self { cells: Array2::from_elem((dims.1.get(), dims.0.get()), value) }
    }
}

impl<T: PartialEq> Grid<T> {
    /// The first location, in row-major order, holding `value`.
    pub fn find_first(&self, value: &T) -> Option<Location> {
        self.iter().find(|(_, cell)| *cell == value).map(|(location, _)| location)
    }

    /// Every location holding `value`, in row-major order.
    pub fn find_all(&self, value: &T) -> Vec<Location> {
        self.iter()
            .filter(|(_, cell)| *cell == value)
            .map(|(location, _)| location)
            .collect_vec()
    }

    /// Whether `target` appears starting at `start` and reading in direction `step`.
    pub fn search_in_direction<Sh: Step>(&self, start: Location, step: Sh, target: &[T]) -> bool {
        let mut location = start;
        for (i, expected) in target.iter().enumerate() {
            if i > 0 {
                location = step.attempt_from(location);
            }
            match self.get(location) {
                Some(cell) if cell == expected => {}
                _ => return false,
            }
        }

        true
    }
}

impl<T: Eq + Hash + Clone> Grid<T> {
    /// Locations grouped by the value of their cell, skipping cells equal to `exclude`.
    pub fn group_by_value(&self, exclude: Option<&T>) -> HashMap<T, Vec<Location>> {
        let mut groups: HashMap<T, Vec<Location>> = HashMap::new();
        for (location, cell) in self.iter() {
            if exclude != Some(cell) {
                groups.entry(cell.clone()).or_default().push(location);
            }
        }

        groups
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
