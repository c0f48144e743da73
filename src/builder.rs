//! Configuring mazes before turning them into graphs.
//!
//! A [`MazeBuilder`] starts from an open rectangle or a parsed [`Grid`] and collects holes, walls and warps; [`Builder::build`] then produces a [`Maze`].

use std::collections::HashSet;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::grid::Grid;
use crate::location::{Dimension, Location};
use crate::maze::Maze;
use crate::shape::{Shape, SquareStep, Step};

/// Why a [`MazeBuilder`] refused a feature.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// A feature like a hole or a wall was placed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
    /// A warp was placed in a direction which does not make sense, e.g. a warp on the right border pointing up.
    WarpBadDirection,
    /// A wall was placed between two locations which are not one step apart.
    NotAdjacent,
}

/// Functionality all builders must implement, parametrised over the neighborhood `Sh` of the resulting maze.
///
/// Configuration happens in place through `&mut Self` chains; [`Clone`] a builder to keep a snapshot of it.
/// Once a builder enters an invalid state, further mutation does nothing and [`build`](Self::build) reports every reason collected.
pub trait Builder<Sh: Shape>: Clone {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order, where every location is open.
    fn with_dims(dims: (Dimension, Dimension)) -> Self;
    /// Remove `location` from the maze entirely, leaving a hole.
    ///
    /// An out-of-bounds `location` makes the builder [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds).
    fn drop_location(&mut self, location: Location) -> &mut Self;
    /// Place a wall between two adjacent locations. The order in which `locations` are specified does not matter.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) or [`NotAdjacent`](BuilderInvalidReason::NotAdjacent) invalid state.
    fn disconnect(&mut self, locations: UnorderedPair<Location>) -> &mut Self;
    /// Place walls on the given sides of `location`.
    fn disconnect_around(&mut self, location: Location, directions: Vec<Sh>) -> &mut Self;
    /// Returns [`None`] if this builder is valid, otherwise the reasons it is not.
    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>>;
    /// Convert this builder into a [`Maze`].
    ///
    /// Fails if the builder is in an invalid state.
    fn build(&self) -> Result<Maze<Sh>, &Vec<BuilderInvalidReason>>;
}

/// A builder for rectangular mazes whose cells connect according to `Sh`.
///
/// Start from [`with_dims`](Builder::with_dims) for an open field or [`from_grid`](Self::from_grid) to carve a maze out of a parsed grid.
#[derive(Clone, Debug)]
pub struct MazeBuilder<Sh: Shape = SquareStep> {
    // width, height
    dims: (Dimension, Dimension),
    invalid_reasons: Vec<BuilderInvalidReason>,
    // walls
    edge_blacklist: HashSet<UnorderedPair<Location>>,
    // holes
    location_blacklist: HashSet<Location>,
    // warps, with the direction taken from the lower indexed end
    edge_whitelist: HashSet<(UnorderedPair<Location>, Sh)>,
}

impl<Sh: Shape> MazeBuilder<Sh> {
    /// A builder the size of `grid` in which every cell failing `walkable` is dropped.
    pub fn from_grid<T>(grid: &Grid<T>, walkable: impl Fn(&T) -> bool) -> Self {
        let mut builder = Self::with_dims(grid.dims());
        for (location, cell) in grid.iter() {
            if !walkable(cell) {
                builder.drop_location(location);
            }
        }

        builder
    }

    #[inline]
    fn max_loc(&self) -> Location {
        Location(self.dims.0.get() - 1, self.dims.1.get() - 1)
    }

    #[inline]
    fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    fn is_open(&self, location: Location) -> bool {
        self.in_bounds(location) && !self.location_blacklist.contains(&location)
    }
}

impl<Sh: Shape> Builder<Sh> for MazeBuilder<Sh> {
    fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            invalid_reasons: Default::default(),
            edge_blacklist: Default::default(),
            location_blacklist: Default::default(),
            edge_whitelist: Default::default(),
        }
    }

    fn drop_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.location_blacklist.insert(location);
        self
    }

    fn disconnect(&mut self, locations: UnorderedPair<Location>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if !self.in_bounds(location) {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
                return self;
            }
        }

        if Sh::direction_to(locations.0, locations.1).is_none() {
            self.invalid_reasons.push(BuilderInvalidReason::NotAdjacent);
            return self;
        }

        self.edge_blacklist.insert(locations);
        self
    }

    fn disconnect_around(&mut self, location: Location, directions: Vec<Sh>) -> &mut Self {
        for direction in directions {
            let neighbor = direction.attempt_from(location);
            // walls facing off the board have nothing to cut
            if self.in_bounds(neighbor) {
                self.disconnect(UnorderedPair::from((location, neighbor)));
            }
        }

        self
    }

    fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    fn build(&self) -> Result<Maze<Sh>, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let (width, height) = (self.dims.0.get(), self.dims.1.get());
        let mut graph = UnGraphMap::with_capacity(
            // room for a fully open board; holes and walls only shrink it
            width * height,
            width * height * Sh::FORWARD_VARIANTS.len(),
        );

        for location in (0..height).cartesian_product(0..width).map(Location::from) {
            if !self.is_open(location) {
                continue;
            }

            graph.add_node(location);
            // only forward steps, so each edge is added once, from its lower indexed end
            for direction in Sh::FORWARD_VARIANTS {
                let neighbor = direction.attempt_from(location);
                if self.is_open(neighbor) && !self.edge_blacklist.contains(&UnorderedPair::from((location, neighbor))) {
                    graph.add_edge(location, neighbor, *direction);
                }
            }
        }

        for (UnorderedPair(l1, l2), direction) in self.edge_whitelist.iter() {
            if self.is_open(*l1) && self.is_open(*l2) {
                graph.add_edge(*l1, *l2, *direction);
            }
        }

        tracing::debug!(nodes = graph.node_count(), edges = graph.edge_count(), directions = Sh::VARIANTS.len(), "built maze");

        Ok(Maze::new(graph, self.dims))
    }
}

impl MazeBuilder<SquareStep> {
    /// Link a border cell to the cell facing it on the opposite border, so that walking off one side of the maze comes back in on the other.
    ///
    /// `direction` is the side being walked off. It is only read for corner cells, where two sides are possible; elsewhere the border decides.
    ///
    /// An out-of-bounds `location` makes the builder [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds).
    /// An interior `location`, or a corner whose `direction` is missing or points back into the maze, makes it [`WarpBadDirection`](BuilderInvalidReason::WarpBadDirection).
    pub fn add_warp(&mut self, location: Location, direction: Option<SquareStep>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        let max = self.max_loc();
        let on_left = location.0 == 0;
        let on_right = location.0 == max.0;
        let on_top = location.1 == 0;
        let on_bottom = location.1 == max.1;

        let edge = match (on_left || on_right, on_top || on_bottom) {
            // not on any border
            (false, false) => None,
            // corner
            (true, true) => direction,
            (true, false) => Some(if on_left { SquareStep::Left } else { SquareStep::Right }),
            (false, true) => Some(if on_top { SquareStep::Up } else { SquareStep::Down }),
        };

        let Some(edge) = edge else {
            self.invalid_reasons.push(BuilderInvalidReason::WarpBadDirection);
            return self;
        };

        let partner = match edge {
            SquareStep::Up => Location(location.0, max.1),
            SquareStep::Down => Location(location.0, 0),
            SquareStep::Left => Location(max.0, location.1),
            SquareStep::Right => Location(0, location.1),
        };

        if partner == location {
            // a corner given a direction pointing into the maze, e.g. Down from the top-left corner
            self.invalid_reasons.push(BuilderInvalidReason::WarpBadDirection);
            return self;
        }

        // seen from the lower indexed end the warp always steps backward
        self.edge_whitelist.insert((UnorderedPair::from((location, partner)), edge.ensure_forward().invert()));

        self
    }
}
