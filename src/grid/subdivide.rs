//! Quad subdivision of bases and leftover triangles.
//!
//! Every base and every still-active triangle is split through its center and
//! edge midpoints, one final quad per edge, so the output mesh contains quads
//! only. A single edge-to-midpoint cache is shared across both passes: a
//! shared edge between any two shapes contributes exactly one midpoint, which
//! keeps the mesh free of T-junctions.

use std::collections::HashMap;

use nalgebra::{Point2, Vector2};

use super::{GridPoint, Quad, Triangle};
use crate::observe::ObservableVec;

/// Unordered edge key: smaller point index first.
type EdgeKey = (usize, usize);

/// Subdivide all bases, then all still-active triangles, appending the new
/// center and midpoint points and the final quads.
pub(crate) fn run(
    points: &mut ObservableVec<GridPoint>,
    triangles: &[Triangle],
    bases: &[Quad],
    quads: &mut ObservableVec<Quad>,
) {
    let mut midpoints: HashMap<EdgeKey, usize> = HashMap::new();

    for base in bases {
        let center = push_center(points, base);
        split(points, quads, base, &mut midpoints, center);
    }

    for triangle in triangles.iter().filter(|t| t.active) {
        let center = push_center(points, &triangle.corners);
        split(points, quads, &triangle.corners, &mut midpoints, center);
    }
}

/// Append the arithmetic mean of the corners as a new interior point and
/// return its index.
fn push_center(points: &mut ObservableVec<GridPoint>, corners: &[usize]) -> usize {
    let mut sum = Vector2::zeros();
    for &corner in corners {
        sum += points[corner].position.coords;
    }

    let index = points.len();
    points.push(GridPoint {
        position: Point2::from(sum / corners.len() as f64),
        boundary: false,
    });
    index
}

/// Split one shape into one quad per edge.
///
/// Midpoints are looked up in (or inserted into) the shared cache; a midpoint
/// is on the boundary only when both edge endpoints are. Each emitted quad
/// `(center, mid[j], corner[j+1], mid[j+1])` preserves the winding of the
/// source shape.
fn split(
    points: &mut ObservableVec<GridPoint>,
    quads: &mut ObservableVec<Quad>,
    corners: &[usize],
    midpoints: &mut HashMap<EdgeKey, usize>,
    center: usize,
) {
    let count = corners.len();
    debug_assert!(count == 3 || count == 4);

    let mut edge_mid = [0usize; 4];
    for j in 0..count {
        let a = corners[j];
        let b = corners[(j + 1) % count];
        let key = (a.min(b), a.max(b));

        edge_mid[j] = *midpoints.entry(key).or_insert_with(|| {
            let point_a = points[a];
            let point_b = points[b];
            let index = points.len();
            points.push(GridPoint {
                position: Point2::from(
                    (point_a.position.coords + point_b.position.coords) / 2.0,
                ),
                boundary: point_a.boundary && point_b.boundary,
            });
            index
        });
    }

    for j in 0..count {
        let next = (j + 1) % count;
        quads.push([center, edge_mid[j], corners[next], edge_mid[next]]);
    }
}
