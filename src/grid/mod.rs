//! The hexagonal quad grid.
//!
//! [`Grid`] owns five append-only containers that together describe the mesh:
//!
//! - [`points`](Grid::points) — vertex positions with a boundary flag;
//! - [`triangles`](Grid::triangles) — the initial lattice triangulation;
//! - [`bases`](Grid::bases) — quadrilaterals formed by merging adjacent
//!   triangle pairs (intermediate, never rendered);
//! - [`quads`](Grid::quads) — the final mesh cells after subdivision;
//! - [`neighbours`](Grid::neighbours) — per-point adjacency derived from
//!   quad edges.
//!
//! Construction runs the whole pipeline synchronously: lattice, randomized
//! pairing, subdivision, neighbour graph, then the optional projection of
//! boundary points onto the unit circle. All index references are stable
//! because nothing is ever removed or renumbered; after construction only
//! point coordinates change, via the relaxation passes.
//!
//! # Example
//!
//! ```
//! use tessella::prelude::*;
//!
//! let mut source = Lcg::new(1);
//! let grid = Grid::builder(4)
//!     .force_circle(true)
//!     .build_with(&mut source)?;
//!
//! for quad in grid.quads().iter() {
//!     let [a, b, c, d] = *quad;
//!     assert!(a != b && b != c && c != d && d != a);
//! }
//! # Ok::<(), tessella::GridError>(())
//! ```

mod lattice;
mod neighbours;
mod pairing;
mod relax;
mod subdivide;

use nalgebra::Point2;

use crate::error::{GridError, Result};
use crate::observe::{BoxedObserver, ObservableVec, SubscriptionId};
use crate::source::{Entropy, UniformSource};

/// A mesh vertex: a 2D position plus a boundary flag.
///
/// The flag is set once at creation and never changes; relaxation and circle
/// projection move coordinates only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Position in the plane.
    pub position: Point2<f64>,
    /// Whether the point lies on the outer edge of the hexagonal domain.
    pub boundary: bool,
}

/// A lattice triangle referencing three point indices.
///
/// `active` starts `true` and flips to `false` exactly once, when the
/// triangle is consumed into a base by the pairing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Point indices of the three corners.
    pub corners: [usize; 3],
    /// Whether the triangle is still available for pairing.
    pub active: bool,
}

/// A quadrilateral referencing four point indices, in winding order.
///
/// Used both for intermediate bases and for final mesh cells.
pub type Quad = [usize; 4];

/// Default retry budget for the randomized pairing pass.
const DEFAULT_MAX_SEARCH_COUNT: usize = 10;

/// A quad mesh over a hexagonal domain.
///
/// Built via [`Grid::new`] or [`Grid::builder`]; see the [module
/// docs](self) for the pipeline. Consumers read the containers or subscribe
/// to their growth; the only mutations after construction are the relaxation
/// passes, which edit point coordinates in place.
#[derive(Debug)]
pub struct Grid {
    size: usize,
    points: ObservableVec<GridPoint>,
    triangles: ObservableVec<Triangle>,
    bases: ObservableVec<Quad>,
    quads: ObservableVec<Quad>,
    neighbours: ObservableVec<Vec<usize>>,
}

impl Grid {
    /// Build a grid with default options and a non-deterministic source.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SideCountTooLow`] if `size < 2`.
    pub fn new(size: usize) -> Result<Grid> {
        Grid::builder(size).build()
    }

    /// Start configuring a grid with the given hexagon side count.
    pub fn builder(size: usize) -> GridBuilder {
        GridBuilder::new(size)
    }

    /// The hexagon side count this grid was built with.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All mesh points, lattice points first, then subdivision centers and
    /// edge midpoints in creation order.
    pub fn points(&self) -> &ObservableVec<GridPoint> {
        &self.points
    }

    /// The initial lattice triangulation.
    ///
    /// Triangles consumed by the pairing pass are marked inactive but remain
    /// in place, so indices stay stable.
    pub fn triangles(&self) -> &ObservableVec<Triangle> {
        &self.triangles
    }

    /// Quadrilaterals formed by merging adjacent triangle pairs.
    pub fn bases(&self) -> &ObservableVec<Quad> {
        &self.bases
    }

    /// The final mesh cells.
    pub fn quads(&self) -> &ObservableVec<Quad> {
        &self.quads
    }

    /// Per-point adjacency: symmetric, irreflexive, deduplicated, in
    /// first-seen order. Points not referenced by any quad have empty lists.
    pub fn neighbours(&self) -> &ObservableVec<Vec<usize>> {
        &self.neighbours
    }

    /// Subscribe to future appends on the point container.
    ///
    /// A finished grid no longer grows and relaxation edits coordinates in
    /// place without notifying, so observers registered here stay silent;
    /// use the [`GridBuilder`] variants to watch construction.
    pub fn on_points_updated(
        &mut self,
        observer: impl FnMut(&[GridPoint]) + 'static,
    ) -> SubscriptionId {
        self.points.subscribe(observer)
    }

    /// Remove a point subscription.
    pub fn unsubscribe_points_updated(&mut self, id: SubscriptionId) -> bool {
        self.points.unsubscribe(id)
    }

    /// Subscribe to future appends on the triangle container.
    pub fn on_triangles_updated(
        &mut self,
        observer: impl FnMut(&[Triangle]) + 'static,
    ) -> SubscriptionId {
        self.triangles.subscribe(observer)
    }

    /// Remove a triangle subscription.
    pub fn unsubscribe_triangles_updated(&mut self, id: SubscriptionId) -> bool {
        self.triangles.unsubscribe(id)
    }

    /// Subscribe to future appends on the base container.
    pub fn on_bases_updated(
        &mut self,
        observer: impl FnMut(&[Quad]) + 'static,
    ) -> SubscriptionId {
        self.bases.subscribe(observer)
    }

    /// Remove a base subscription.
    pub fn unsubscribe_bases_updated(&mut self, id: SubscriptionId) -> bool {
        self.bases.unsubscribe(id)
    }

    /// Subscribe to future appends on the quad container.
    pub fn on_quads_updated(
        &mut self,
        observer: impl FnMut(&[Quad]) + 'static,
    ) -> SubscriptionId {
        self.quads.subscribe(observer)
    }

    /// Remove a quad subscription.
    pub fn unsubscribe_quads_updated(&mut self, id: SubscriptionId) -> bool {
        self.quads.unsubscribe(id)
    }

    /// Subscribe to future appends on the neighbour container.
    pub fn on_neighbours_updated(
        &mut self,
        observer: impl FnMut(&[Vec<usize>]) + 'static,
    ) -> SubscriptionId {
        self.neighbours.subscribe(observer)
    }

    /// Remove a neighbour subscription.
    pub fn unsubscribe_neighbours_updated(&mut self, id: SubscriptionId) -> bool {
        self.neighbours.unsubscribe(id)
    }
}

/// Configures and builds a [`Grid`].
///
/// Observers registered on the builder are installed before construction
/// runs, so they see every batch appended during the build. Each observer is
/// called with the newly appended items *before* the batch becomes visible
/// through the containers.
///
/// # Example
///
/// ```
/// use tessella::prelude::*;
///
/// let mut source = Lcg::new(99);
/// let grid = Grid::builder(5)
///     .max_search_count(20)
///     .force_circle(true)
///     .build_with(&mut source)?;
/// assert_eq!(grid.size(), 5);
/// # Ok::<(), tessella::GridError>(())
/// ```
pub struct GridBuilder {
    size: usize,
    max_search_count: usize,
    force_circle: bool,
    point_observers: Vec<BoxedObserver<GridPoint>>,
    triangle_observers: Vec<BoxedObserver<Triangle>>,
    base_observers: Vec<BoxedObserver<Quad>>,
    quad_observers: Vec<BoxedObserver<Quad>>,
    neighbour_observers: Vec<BoxedObserver<Vec<usize>>>,
}

impl GridBuilder {
    fn new(size: usize) -> Self {
        GridBuilder {
            size,
            max_search_count: DEFAULT_MAX_SEARCH_COUNT,
            force_circle: false,
            point_observers: Vec::new(),
            triangle_observers: Vec::new(),
            base_observers: Vec::new(),
            quad_observers: Vec::new(),
            neighbour_observers: Vec::new(),
        }
    }

    /// Set the retry budget for the randomized pairing pass (default 10).
    ///
    /// Pairing stops once this many consecutive samples land on inactive
    /// triangles. Larger budgets pair more triangles; a budget of 1 pairs
    /// none. Leftover unpaired triangles are expected and are subdivided
    /// directly.
    pub fn max_search_count(mut self, count: usize) -> Self {
        self.max_search_count = count;
        self
    }

    /// Project boundary points onto the unit circle after construction
    /// (default `false`).
    pub fn force_circle(mut self, force: bool) -> Self {
        self.force_circle = force;
        self
    }

    /// Observe point appends during construction.
    pub fn on_points_updated(mut self, observer: impl FnMut(&[GridPoint]) + 'static) -> Self {
        self.point_observers.push(Box::new(observer));
        self
    }

    /// Observe triangle appends during construction.
    pub fn on_triangles_updated(mut self, observer: impl FnMut(&[Triangle]) + 'static) -> Self {
        self.triangle_observers.push(Box::new(observer));
        self
    }

    /// Observe base appends during construction.
    pub fn on_bases_updated(mut self, observer: impl FnMut(&[Quad]) + 'static) -> Self {
        self.base_observers.push(Box::new(observer));
        self
    }

    /// Observe quad appends during construction.
    pub fn on_quads_updated(mut self, observer: impl FnMut(&[Quad]) + 'static) -> Self {
        self.quad_observers.push(Box::new(observer));
        self
    }

    /// Observe neighbour-list appends during construction.
    pub fn on_neighbours_updated(
        mut self,
        observer: impl FnMut(&[Vec<usize>]) + 'static,
    ) -> Self {
        self.neighbour_observers.push(Box::new(observer));
        self
    }

    /// Build the grid with a non-deterministic number source.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SideCountTooLow`] if the side count is below 2.
    pub fn build(self) -> Result<Grid> {
        let mut source = Entropy::default();
        self.build_with(&mut source)
    }

    /// Build the grid, drawing uniform `[0, 1)` values from `source`.
    ///
    /// A deterministic source (such as a seeded [`Lcg`](crate::source::Lcg))
    /// makes the whole mesh reproducible bit for bit.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SideCountTooLow`] if the side count is below 2.
    pub fn build_with<S: UniformSource + ?Sized>(self, source: &mut S) -> Result<Grid> {
        if self.size < 2 {
            return Err(GridError::SideCountTooLow { size: self.size });
        }

        let mut points = ObservableVec::new();
        let mut triangles = ObservableVec::new();
        let mut bases = ObservableVec::new();
        let mut quads = ObservableVec::new();
        let mut neighbours = ObservableVec::new();

        for observer in self.point_observers {
            points.subscribe(observer);
        }
        for observer in self.triangle_observers {
            triangles.subscribe(observer);
        }
        for observer in self.base_observers {
            bases.subscribe(observer);
        }
        for observer in self.quad_observers {
            quads.subscribe(observer);
        }
        for observer in self.neighbour_observers {
            neighbours.subscribe(observer);
        }

        lattice::build(self.size, &mut points, &mut triangles);
        pairing::run(&mut triangles, &mut bases, source, self.max_search_count);
        subdivide::run(&mut points, &triangles, &bases, &mut quads);
        neighbours::build(points.len(), &quads, &mut neighbours);

        if self.force_circle {
            project_boundary_to_circle(&mut points);
        }

        Ok(Grid {
            size: self.size,
            points,
            triangles,
            bases,
            quads,
            neighbours,
        })
    }
}

/// Rescale every boundary point onto the unit circle, preserving its angle.
///
/// Interior points and all topology are untouched.
fn project_boundary_to_circle(points: &mut ObservableVec<GridPoint>) {
    for i in 0..points.len() {
        let point = points.get_mut(i);
        if point.boundary {
            let distance = point.position.coords.norm();
            point.position = point.position / distance;
        }
    }
}
