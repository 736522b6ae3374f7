//! Vertex adjacency from final quad edges.

use super::Quad;
use crate::observe::ObservableVec;

/// Derive one neighbour list per point from the quad edges.
///
/// For each quad edge `(p, q)`, `q` is appended to `p`'s list and `p` to
/// `q`'s, skipping entries already present. The result is symmetric,
/// irreflexive, and in first-seen order; points never referenced by a quad
/// keep an empty list. The lists are appended to `neighbours` as one batch.
pub(crate) fn build(
    point_count: usize,
    quads: &[Quad],
    neighbours: &mut ObservableVec<Vec<usize>>,
) {
    let mut lists: Vec<Vec<usize>> = vec![Vec::new(); point_count];

    for quad in quads {
        for j in 0..4 {
            let a = quad[j];
            let b = quad[(j + 1) & 3];

            if !lists[a].contains(&b) {
                lists[a].push(b);
            }
            if !lists[b].contains(&a) {
                lists[b].push(a);
            }
        }
    }

    neighbours.append(lists);
}
