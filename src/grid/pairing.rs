//! Randomized greedy triangle pairing.
//!
//! Two triangles are adjacent when they share exactly two of their three
//! vertices. The pairing pass repeatedly samples a triangle index from the
//! number source; when the sample lands on an active triangle with an active
//! adjacent triangle, the pair is merged into a quadrilateral base and both
//! triangles are retired.
//!
//! Termination is probabilistic: the pass stops once a run of consecutive
//! samples, as long as the search budget, fails to land on an active
//! triangle. Sampling an active triangle that happens to have no active
//! neighbour emits nothing but resets the run. An arbitrary subset of
//! triangles therefore remains unpaired by design; the subdivision pass
//! handles those directly.

use super::{Quad, Triangle};
use crate::observe::ObservableVec;
use crate::source::UniformSource;

/// Pair adjacent active triangles into bases until the search budget is
/// exhausted.
pub(crate) fn run<S: UniformSource + ?Sized>(
    triangles: &mut ObservableVec<Triangle>,
    bases: &mut ObservableVec<Quad>,
    source: &mut S,
    max_search_count: usize,
) {
    loop {
        let mut search_count = 0;
        let mut index;
        loop {
            index = (source.sample() * triangles.len() as f64) as usize;
            search_count += 1;
            if search_count >= max_search_count || triangles[index].active {
                break;
            }
        }

        if search_count >= max_search_count {
            break;
        }

        if let Some(partner) = first_active_adjacent(triangles, index) {
            let base = merge(&triangles[index], &triangles[partner]);
            bases.push(base);
            triangles.get_mut(index).active = false;
            triangles.get_mut(partner).active = false;
        }
    }
}

/// Find the lowest-indexed active triangle sharing exactly two vertices with
/// `index`, if any.
fn first_active_adjacent(triangles: &[Triangle], index: usize) -> Option<usize> {
    let triangle = triangles[index];
    triangles
        .iter()
        .enumerate()
        .position(|(i, other)| i != index && other.active && shared_vertices(&triangle, other) == 2)
}

fn shared_vertices(a: &Triangle, b: &Triangle) -> usize {
    a.corners
        .iter()
        .filter(|corner| b.corners.contains(corner))
        .count()
}

/// Merge two adjacent triangles into a base.
///
/// The six corner indices collapse to four unique ones once sorted (the
/// shared pair deduplicates); emitting them as `(i0, i2, i3, i1)`
/// reconstructs a proper quad winding from the ascending order.
fn merge(a: &Triangle, b: &Triangle) -> Quad {
    let mut indices = [
        a.corners[0],
        a.corners[1],
        a.corners[2],
        b.corners[0],
        b.corners[1],
        b.corners[2],
    ];
    indices.sort_unstable();

    let mut unique = [indices[0]; 4];
    let mut count = 1;
    for i in 1..6 {
        if indices[i] != indices[i - 1] {
            unique[count] = indices[i];
            count += 1;
        }
    }
    debug_assert_eq!(count, 4, "adjacent triangles must merge to 4 vertices");

    [unique[0], unique[2], unique[3], unique[1]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::from_fn;

    fn active(corners: [usize; 3]) -> Triangle {
        Triangle {
            corners,
            active: true,
        }
    }

    fn triangle_vec(triangles: &[Triangle]) -> ObservableVec<Triangle> {
        let mut vec = ObservableVec::new();
        for &t in triangles {
            vec.push(t);
        }
        vec
    }

    #[test]
    fn test_shared_vertices() {
        let a = active([0, 1, 2]);
        assert_eq!(shared_vertices(&a, &active([1, 2, 3])), 2);
        assert_eq!(shared_vertices(&a, &active([2, 3, 4])), 1);
        assert_eq!(shared_vertices(&a, &active([3, 4, 5])), 0);
        assert_eq!(shared_vertices(&a, &a), 3);
    }

    #[test]
    fn test_merge_winding() {
        // Sorted unique indices [0, 1, 2, 3] are emitted as (0, 2, 3, 1).
        let base = merge(&active([0, 1, 2]), &active([1, 2, 3]));
        assert_eq!(base, [0, 2, 3, 1]);

        // Corner order within the triangles must not matter.
        let base = merge(&active([9, 4, 7]), &active([7, 2, 4]));
        assert_eq!(base, [2, 7, 9, 4]);
    }

    #[test]
    fn test_pairs_adjacent_triangles_and_retires_them() {
        let mut triangles = triangle_vec(&[active([0, 1, 2]), active([1, 2, 3])]);
        let mut bases = ObservableVec::new();

        // Always sample index 0: pairs (0, 1), then exhausts the budget on
        // the now-inactive triangle 0.
        let mut source = from_fn(|| 0.0);
        run(&mut triangles, &mut bases, &mut source, 10);

        assert_eq!(&bases[..], &[[0, 2, 3, 1]]);
        assert!(!triangles[0].active);
        assert!(!triangles[1].active);
    }

    #[test]
    fn test_takes_first_adjacent_in_index_order() {
        // Triangle 0 is adjacent to both 1 and 2; the scan takes 1.
        let mut triangles = triangle_vec(&[
            active([0, 1, 2]),
            active([1, 2, 3]),
            active([0, 2, 4]),
        ]);
        let mut bases = ObservableVec::new();

        let mut source = from_fn(|| 0.0);
        run(&mut triangles, &mut bases, &mut source, 10);

        assert_eq!(bases[0], [0, 2, 3, 1]);
        assert!(!triangles[0].active);
        assert!(!triangles[1].active);
        assert!(triangles[2].active, "isolated leftover must stay active");
    }

    #[test]
    fn test_budget_of_one_pairs_nothing() {
        let mut triangles = triangle_vec(&[active([0, 1, 2]), active([1, 2, 3])]);
        let mut bases = ObservableVec::new();

        let mut source = from_fn(|| 0.0);
        run(&mut triangles, &mut bases, &mut source, 1);

        assert!(bases.is_empty());
        assert!(triangles.iter().all(|t| t.active));
    }

    #[test]
    fn test_budget_of_zero_terminates() {
        let mut triangles = triangle_vec(&[active([0, 1, 2]), active([1, 2, 3])]);
        let mut bases = ObservableVec::new();

        let mut source = from_fn(|| 0.0);
        run(&mut triangles, &mut bases, &mut source, 0);

        assert!(bases.is_empty());
    }

    #[test]
    fn test_sampled_triangle_without_active_partner_emits_nothing() {
        // Triangles 0 and 1 pair up; triangle 2 shares no edge with anything
        // and must survive, with no phantom base emitted for it.
        let mut triangles = triangle_vec(&[
            active([0, 1, 2]),
            active([1, 2, 3]),
            active([10, 11, 12]),
        ]);
        let mut bases = ObservableVec::new();

        // Draw triangle 2 first (no partner, nothing emitted), then triangle
        // 0 (pairs with 1), then exhaust the budget on the retired triangle 0.
        let mut samples = [0.7, 0.0, 0.0, 0.0, 0.0, 0.0].into_iter().cycle();
        let mut source = from_fn(move || samples.next().unwrap());

        run(&mut triangles, &mut bases, &mut source, 2);

        assert_eq!(&bases[..], &[[0, 2, 3, 1]]);
        assert!(triangles[2].active);
    }
}
