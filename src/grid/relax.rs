//! In-place relaxation passes.
//!
//! Each pass is a single sweep over the shared point buffer in ascending
//! index order. There is deliberately no double buffering: a point's update
//! sees the already-updated coordinates of lower-indexed neighbours and the
//! old coordinates of higher-indexed ones. This interleaving is part of the
//! observable numeric behavior and downstream consumers depend on it staying
//! put, so a snapshot-then-apply variant is not an equivalent substitute.
//!
//! None of the passes grows a container or fires notifications; only point
//! coordinates change.

use nalgebra::{Point2, Vector2};

use super::Grid;

/// Target radius for the boundary pass.
const BOUNDARY_RADIUS: f64 = 1.0;

/// Fraction of the radial error corrected per boundary pass.
const BOUNDARY_DAMPING: f64 = 0.1;

impl Grid {
    /// One uniform smoothing pass: every interior point moves to the
    /// arithmetic mean of its neighbours' current positions.
    ///
    /// Boundary points are left untouched. Call repeatedly to iterate toward
    /// equilibrium.
    ///
    /// # Example
    ///
    /// ```
    /// use tessella::prelude::*;
    ///
    /// let mut source = Lcg::new(5);
    /// let mut grid = Grid::builder(4).build_with(&mut source)?;
    /// for _ in 0..100 {
    ///     grid.relax();
    /// }
    /// # Ok::<(), tessella::GridError>(())
    /// ```
    pub fn relax(&mut self) {
        for i in 0..self.points.len() {
            if self.points[i].boundary {
                continue;
            }

            let neighbours = &self.neighbours[i];
            if neighbours.is_empty() {
                continue;
            }

            let mut sum = Vector2::zeros();
            for &n in neighbours {
                sum += self.points[n].position.coords;
            }
            let mean = sum / neighbours.len() as f64;

            self.points.get_mut(i).position = Point2::from(mean);
        }
    }

    /// One distance-weighted smoothing pass.
    ///
    /// Every interior point moves to the weighted mean of its neighbours'
    /// positions, each neighbour weighted by its current distance to the
    /// point. Longer edges pull harder, so oversized cells shrink and
    /// undersized ones grow: area variance drops and the grid reaches
    /// equilibrium in fewer passes than [`relax`](Grid::relax).
    pub fn relax_weighted(&mut self) {
        for i in 0..self.points.len() {
            if self.points[i].boundary {
                continue;
            }

            let neighbours = &self.neighbours[i];
            if neighbours.is_empty() {
                continue;
            }

            let current = self.points[i].position;
            let mut sum = Vector2::zeros();
            let mut weight = 0.0;
            for &n in neighbours {
                let neighbour = self.points[n].position;
                let w = (current - neighbour).norm();
                sum += neighbour.coords * w;
                weight += w;
            }

            if weight > 0.0 {
                self.points.get_mut(i).position = Point2::from(sum / weight);
            }
        }
    }

    /// One radial pass over boundary points only.
    ///
    /// Each boundary point is pulled a tenth of the way toward the unit
    /// circle along its own direction from the origin; interior points are
    /// untouched. Useful together with
    /// [`force_circle`](super::GridBuilder::force_circle) to keep a circular
    /// rim taut while the interior relaxes.
    pub fn relax_boundary(&mut self) {
        for i in 0..self.points.len() {
            let point = self.points.get_mut(i);
            if !point.boundary {
                continue;
            }

            let offset = point.position.coords;
            let distance = BOUNDARY_RADIUS - offset.norm();
            point.position += offset * distance * BOUNDARY_DAMPING;
        }
    }
}
