use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A nonzero grid extent, used for `(width, height)` pairs.
pub type Dimension = NonZero<Coord>;

/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`; `x` grows to the right and `y` grows downward.
///
/// Stepping off the top or left edge wraps around to a very large coordinate, which every [`Grid`](crate::Grid) treats as out of bounds.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The `(row, column)` index of this location in a row-major array.
    pub fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Shift this location by `(dx, dy)`.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Taxicab distance to `other`.
    pub fn manhattan_distance(&self, other: Location) -> usize {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }

    /// Whether this location lies inside the inclusive rectangle spanned by `min` and `max`.
    pub fn in_bounds(&self, min: Location, max: Location) -> bool {
        (min.0..=max.0).contains(&self.0) && (min.1..=max.1).contains(&self.1)
    }
}

impl From<(Ix, Ix)> for Location {
    /// Build a location from a `(row, column)` array index.
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn index_round_trips_through_row_major_order() {
        let location = Location(3, 1);
        assert_eq!(location.as_index(), (1, 3));
        assert_eq!(Location::from(location.as_index()), location);
    }

    #[test]
    fn stepping_off_the_top_left_wraps_far_away() {
        let off = Location(0, 0).offset_by((-1, 0));
        assert_eq!(off.0, usize::MAX);
        assert!(!off.in_bounds(Location(0, 0), Location(10, 10)));
    }

    #[test]
    fn manhattan() {
        assert_eq!(Location(1, 5).manhattan_distance(Location(4, 2)), 6);
        assert_eq!(Location(2, 2).manhattan_distance(Location(2, 2)), 0);
    }
}
