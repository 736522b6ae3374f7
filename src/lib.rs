//! # Tessella
//!
//! Procedural quad-mesh generation over a hexagonal domain.
//!
//! Tessella builds an irregular-but-uniform quadrilateral mesh in four steps:
//!
//! 1. **Lattice**: a regular triangulated lattice covering a centered hexagon.
//! 2. **Pairing**: a randomized greedy matching that merges adjacent triangles
//!    into quadrilateral *bases*, leaving a random subset of triangles unpaired.
//! 3. **Subdivision**: every base and every leftover triangle is split through
//!    its center and edge midpoints, producing final quads only. Midpoints on
//!    shared edges are created exactly once, so the result has no T-junctions.
//! 4. **Neighbour graph**: an undirected, deduplicated vertex adjacency derived
//!    from the final quad edges.
//!
//! The mesh can then be smoothed toward equilibrium with the in-place
//! relaxation passes on [`Grid`], giving the familiar organic "relaxed
//! hexagrid" look.
//!
//! ## Quick Start
//!
//! ```
//! use tessella::prelude::*;
//!
//! // Build a grid with a seeded generator so the result is reproducible.
//! let mut source = Lcg::new(42);
//! let mut grid = Grid::builder(6).build_with(&mut source)?;
//!
//! println!("points: {}", grid.points().len());
//! println!("quads:  {}", grid.quads().len());
//!
//! // Smooth the interior a few times.
//! for _ in 0..50 {
//!     grid.relax_weighted();
//! }
//! # Ok::<(), tessella::GridError>(())
//! ```
//!
//! ## Observing Construction
//!
//! Every container on the grid is an [`ObservableVec`]: consumers can
//! subscribe to appends, either on the builder (to watch the mesh grow during
//! construction) or on the finished grid. Relaxation moves points in place and
//! never fires notifications.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tessella::prelude::*;
//!
//! let appended = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&appended);
//!
//! let mut source = Lcg::new(7);
//! let grid = Grid::builder(3)
//!     .on_points_updated(move |batch| counter.set(counter.get() + batch.len()))
//!     .build_with(&mut source)?;
//!
//! assert_eq!(appended.get(), grid.points().len());
//! # Ok::<(), tessella::GridError>(())
//! ```
//!
//! [`ObservableVec`]: observe::ObservableVec

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod grid;
pub mod observe;
pub mod source;

pub use error::{GridError, Result};
pub use grid::{Grid, GridBuilder, GridPoint, Quad, Triangle};

/// Prelude module for convenient imports.
///
/// ```
/// use tessella::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GridError, Result};
    pub use crate::grid::{Grid, GridBuilder, GridPoint, Quad, Triangle};
    pub use crate::observe::{ObservableVec, SubscriptionId};
    pub use crate::source::{Entropy, Lcg, UniformSource};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
