//! Hash-based sequence lookups
//!
//! Two small helpers independent of the graph structures: a single-pass
//! pair-sum search and a distinct-absolute-value counter. Both trade a
//! little memory (one map or set over the input) for a single scan of the
//! sequence.

use std::collections::{HashMap, HashSet};

/// Finds the first pair of values in `values` that sums to `target`
///
/// Scans left to right, keeping a map from value to its most recent index.
/// The first time a value's complement has already been seen, the pair is
/// returned as `(earlier, later)` in scan order. Returns `None` when no pair
/// sums to `target`.
///
/// # Example
///
/// ```
/// use densegraph::find_sum_pair;
///
/// let values = [5, 7, 2, 5, 3, 9, -6];
/// assert_eq!(find_sum_pair(10, &values), Some((5, 5)));
/// assert_eq!(find_sum_pair(1, &values), Some((7, -6)));
/// assert_eq!(find_sum_pair(100, &values), None);
/// ```
pub fn find_sum_pair(target: i64, values: &[i64]) -> Option<(i64, i64)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (i, &value) in values.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - value)) {
            return Some((values[j], value));
        }
        // Later duplicates overwrite the index; only membership matters for
        // the complement lookup.
        seen.insert(value, i);
    }
    None
}

/// Counts the distinct absolute values in `values`
///
/// `unsigned_abs` keeps `i64::MIN` well-defined.
///
/// # Example
///
/// ```
/// use densegraph::distinct_abs_values;
///
/// // |5| appears twice and |-6| = 6 is new: 5, 7, 2, 3, 9, 6.
/// assert_eq!(distinct_abs_values(&[5, 7, 2, 5, 3, 9, -6]), 6);
/// ```
pub fn distinct_abs_values(values: &[i64]) -> usize {
    values
        .iter()
        .map(|v| v.unsigned_abs())
        .collect::<HashSet<u64>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sum_pair_present() {
        let values = [5, 7, 2, 5, 3, 9, -6];
        assert_eq!(find_sum_pair(10, &values), Some((5, 5)));
        assert_eq!(find_sum_pair(12, &values), Some((5, 7)));
    }

    #[test]
    fn test_find_sum_pair_first_by_scan_order() {
        // Both (1, 3) and (2, 2) sum to 4; the scan completes (1, 3) first.
        let values = [1, 2, 3, 2];
        assert_eq!(find_sum_pair(4, &values), Some((1, 3)));
    }

    #[test]
    fn test_find_sum_pair_negative_target() {
        let values = [-4, 1, -3, 2];
        assert_eq!(find_sum_pair(-7, &values), Some((-4, -3)));
    }

    #[test]
    fn test_find_sum_pair_absent() {
        assert_eq!(find_sum_pair(100, &[5, 7, 2]), None);
        assert_eq!(find_sum_pair(0, &[]), None);
        // A single element cannot pair with itself.
        assert_eq!(find_sum_pair(10, &[5]), None);
    }

    #[test]
    fn test_distinct_abs_values() {
        assert_eq!(distinct_abs_values(&[5, 7, 2, 5, 3, 9, -6]), 6);
        assert_eq!(distinct_abs_values(&[-1, 1, -1, 1]), 1);
        assert_eq!(distinct_abs_values(&[]), 0);
        assert_eq!(distinct_abs_values(&[i64::MIN]), 1);
    }
}
