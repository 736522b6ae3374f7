//! Triangulated hexagon lattice generation.
//!
//! The lattice is laid out column by column: a centered hexagon of side `s`
//! spans `2s - 1` columns, growing from `s` points in the first column to
//! `2s - 1` in the middle and tapering back down. Coordinates are scaled so
//! the hexagon fits a unit-ish circle, which is what makes the later circle
//! projection a small move rather than a large one.

use nalgebra::Point2;

use super::{GridPoint, Triangle};
use crate::observe::ObservableVec;

/// Horizontal spacing between columns before scaling: sin(60°) = √3 / 2.
pub(crate) const SIDE_LENGTH: f64 = 0.866_025_403_784_438_6;

/// Number of points in column `x` of a hexagon of side `size`.
fn column_height(size: usize, x: usize) -> usize {
    if x < size {
        size + x
    } else {
        size * 3 - 2 - x
    }
}

/// Populate `points` and `triangles` with the hexagon lattice.
///
/// Every lattice point in the first or last column, or first or last in its
/// column, is flagged as boundary. All triangles start active.
pub(crate) fn build(
    size: usize,
    points: &mut ObservableVec<GridPoint>,
    triangles: &mut ObservableVec<Triangle>,
) {
    let max_height = size * 2 - 1;
    let max_height_delta = size as f64 - max_height as f64 * 0.5;
    let height_ratio = max_height as f64 / 2.0 - max_height_delta;

    for x in 0..size * 2 - 1 {
        let height = column_height(size, x);
        let height_delta = size as f64 - height as f64 * 0.5;
        for y in 0..height {
            let boundary =
                x == 0 || x == size * 2 - 2 || y == 0 || y == height - 1;
            points.push(GridPoint {
                position: Point2::new(
                    (x as f64 - size as f64 + 1.0) * SIDE_LENGTH / height_ratio,
                    (y as f64 + height_delta - max_height as f64 / 2.0) / height_ratio,
                ),
                boundary,
            });
        }
    }

    // Each adjacent column pair contributes two triangle strips. The winding
    // and offset rules differ between the growing half and the shrinking
    // half, and the last row of each half drops one triangle to respect the
    // hexagon taper.
    let mut offset = 0;
    for x in 0..size * 2 - 2 {
        let height = column_height(size, x);

        if x < size - 1 {
            for y in 0..height {
                push_triangle(triangles, [offset + y, offset + y + height, offset + y + height + 1]);
                if y >= height - 1 {
                    break;
                }
                push_triangle(triangles, [offset + y + height + 1, offset + y + 1, offset + y]);
            }
        } else {
            for y in 0..height {
                push_triangle(triangles, [offset + y, offset + y + height, offset + y + 1]);
                if y >= height - 2 {
                    break;
                }
                push_triangle(triangles, [offset + y + 1, offset + y + height, offset + y + height + 1]);
            }
        }

        offset += height;
    }
}

fn push_triangle(triangles: &mut ObservableVec<Triangle>, corners: [usize; 3]) {
    triangles.push(Triangle {
        corners,
        active: true,
    });
}
