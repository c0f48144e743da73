//! Step directions and the connectivity they describe.
//!
//! [`SquareStep`] gives the usual 4-connected neighborhood and [`OctileStep`] adds the diagonals.
//! Any other neighborhood can be supplied by implementing [`Step`]; [`Shape`] is then implemented automatically.

use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// Functionality that must be implemented on a case-by-case basis for any neighborhood.
///
/// [`SquareStep`] and [`OctileStep`] are built-in implementations.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// The location one step from `location` in this direction.
    ///
    /// The result may lie outside any particular grid; bounds are checked by the caller.
    fn attempt_from(&self, location: Location) -> Location;
    /// Directions whose step always lands later in row-major order.
    ///
    /// Every undirected neighbor pair is reached exactly once by stepping forward from the earlier cell.
    /// For example, for [`SquareStep`], [`Down`](SquareStep::Down) and [`Right`](SquareStep::Right) are forward directions.
    const FORWARD_VARIANTS: &'static [Self];
    /// The opposite direction.
    fn invert(&self) -> Self;
}

/// The four cardinal directions, listed clockwise from up.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward row 0.
    Up,
    /// Toward higher columns.
    Right,
    /// Toward higher rows.
    Down,
    /// Toward column 0.
    Left,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
        }
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::Down];

    fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }
}

impl SquareStep {
    /// The direction a quarter turn clockwise from this one.
    pub fn turn_clockwise(&self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// The direction a quarter turn counter-clockwise from this one.
    pub fn turn_counter_clockwise(&self) -> Self {
        self.turn_clockwise().invert()
    }
}

/// The eight king-move directions, listed clockwise from up.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum OctileStep {
    /// Toward row 0.
    Up,
    /// Diagonal between [`Up`](Self::Up) and [`Right`](Self::Right).
    UpRight,
    /// Toward higher columns.
    Right,
    /// Diagonal between [`Down`](Self::Down) and [`Right`](Self::Right).
    DownRight,
    /// Toward higher rows.
    Down,
    /// Diagonal between [`Down`](Self::Down) and [`Left`](Self::Left).
    DownLeft,
    /// Toward column 0.
    Left,
    /// Diagonal between [`Up`](Self::Up) and [`Left`](Self::Left).
    UpLeft,
}

impl Step for OctileStep {
    fn attempt_from(&self, location: Location) -> Location {
        location.offset_by(match self {
            Self::Up => (0, -1),
            Self::UpRight => (1, -1),
            Self::Right => (1, 0),
            Self::DownRight => (1, 1),
            Self::Down => (0, 1),
            Self::DownLeft => (-1, 1),
            Self::Left => (-1, 0),
            Self::UpLeft => (-1, -1),
        })
    }

    const FORWARD_VARIANTS: &'static [Self] = &[Self::Right, Self::DownRight, Self::Down, Self::DownLeft];

    fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::DownRight => Self::UpLeft,
            Self::Down => Self::Up,
            Self::DownLeft => Self::UpRight,
            Self::Left => Self::Right,
            Self::UpLeft => Self::DownRight,
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all neighborhoods.
pub trait Shape: Step {
    /// Every direction paired with the location it leads to, whether or not that location is on any grid.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
    /// The direction leading from `a` to `b`.
    ///
    /// Returns [`None`] unless `a` and `b` are one step apart.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
    /// This direction or its inverse, whichever is in [`Step::FORWARD_VARIANTS`].
    fn ensure_forward(&self) -> Self;
}

impl<Sh> Shape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }

    fn ensure_forward(&self) -> Self {
        match Self::FORWARD_VARIANTS.contains(self) {
            true => *self,
            false => self.invert(),
        }
    }
}
