//! opportunities::ranking — deterministic ranking of locations by distance.
//!
//! Locations are ordered by ascending distance from an origin. Exact ties
//! are broken by the original location index, so the order is a strict
//! total order and does not depend on whether the underlying sort is
//! stable. Distances are compared with [`f64::total_cmp`]; callers reject
//! NaN beforehand (see `core::validation::validate_rankable`).

use ndarray::ArrayView1;
use std::cmp::Ordering;

/// Compare two `(distance, index)` entries: distance first, then index.
#[inline]
pub fn by_distance_then_index(a: (f64, usize), b: (f64, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

/// Location indices ordered by ascending `distances`, ties by index.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use mobility_flows::opportunities::ranking::rank_by_distance;
/// let order = rank_by_distance(array![1.0, 0.0, 1.0].view());
/// assert_eq!(order, vec![1, 0, 2]);
/// ```
pub fn rank_by_distance(distances: ArrayView1<'_, f64>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..distances.len()).collect();
    order.sort_unstable_by(|&a, &b| by_distance_then_index((distances[a], a), (distances[b], b)));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify equal distances keep their original index order.
    //
    // Given
    // -----
    // - Distances [3, 1, 3, 1, 0].
    //
    // Expect
    // ------
    // - Order [4, 1, 3, 0, 2].
    fn rank_by_distance_breaks_ties_by_index() {
        let order = rank_by_distance(array![3.0, 1.0, 3.0, 1.0, 0.0].view());
        assert_eq!(order, vec![4, 1, 3, 0, 2]);
    }

    #[test]
    // Purpose
    // -------
    // Check that infinite distances rank last and the comparator is a
    // total order on index ties.
    //
    // Given
    // -----
    // - Distances [∞, 2, 0].
    //
    // Expect
    // ------
    // - Order [2, 1, 0]; equal keys compare by index.
    fn rank_by_distance_places_infinity_last() {
        let order = rank_by_distance(array![f64::INFINITY, 2.0, 0.0].view());
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(by_distance_then_index((1.0, 0), (1.0, 1)), Ordering::Less);
        assert_eq!(by_distance_then_index((1.0, 2), (1.0, 2)), Ordering::Equal);
    }

    #[test]
    // Purpose
    // -------
    // Edge case: empty input.
    //
    // Given
    // -----
    // - No distances.
    //
    // Expect
    // ------
    // - Empty order.
    fn rank_by_distance_empty() {
        let empty: [f64; 0] = [];
        assert!(rank_by_distance(ArrayView1::from(&empty)).is_empty());
    }
}
