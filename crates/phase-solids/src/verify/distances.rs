//! Pairwise Euclidean distances.

use crate::Point3;

/// Distance for every unordered pair `(i, j)`, `i < j`, in lexicographic order.
///
/// Yields `n(n-1)/2` values; empty for fewer than two points. O(n²).
pub fn pairwise_distances(points: &[Point3]) -> Vec<f64> {
    let n = points.len();
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            out.push((a - b).norm());
        }
    }
    out
}
