//! Set-like operations on slices.
//!
//! Membership is tracked with a [`HashSet`], so elements must be hashable.
//! Results keep a deterministic order: the order in which elements are first
//! met while scanning the inputs.

use std::{collections::HashSet, hash::Hash};

/// Removes duplicates, keeping the first occurrence of each element.
///
/// # Example
///
/// ```
/// use funcslice_ops::sets::nub;
///
/// assert_eq!(nub(&[1, 2, 2, 3, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn nub<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Returns the elements of `second` that also occur in `first`.
///
/// Order and duplicates follow `second`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sets::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3, 4], &[3, 4, 5, 6]), vec![3, 4]);
/// ```
pub fn intersection<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let members: HashSet<&T> = first.iter().collect();
    second
        .iter()
        .filter(|item| members.contains(item))
        .cloned()
        .collect()
}

/// Returns every distinct element of `first` followed by those of `second`.
///
/// Each element appears once, at the position it was first met.
///
/// # Example
///
/// ```
/// use funcslice_ops::sets::union;
///
/// assert_eq!(union(&[1, 2, 3, 4], &[3, 4, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn union<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(first.len() + second.len());
    first
        .iter()
        .chain(second)
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Returns the elements of `first` that do not occur in `second`.
///
/// Order and duplicates follow `first`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sets::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[3, 4, 5, 6]), vec![1, 2]);
/// ```
pub fn difference<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded: HashSet<&T> = second.iter().collect();
    first
        .iter()
        .filter(|item| !excluded.contains(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nub_keeps_first_occurrence_order() {
        assert_eq!(nub(&["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
        assert!(nub::<u8>(&[]).is_empty());
    }

    #[test]
    fn intersection_follows_second() {
        assert_eq!(intersection(&[1, 2, 3], &[3, 3, 9, 1]), vec![3, 3, 1]);
        assert!(intersection(&[1, 2], &[3, 4]).is_empty());
    }

    #[test]
    fn union_is_deduplicated() {
        assert_eq!(union(&[1, 1, 2], &[2, 3, 3]), vec![1, 2, 3]);
        assert_eq!(union(&[], &['z']), vec!['z']);
    }

    #[test]
    fn difference_follows_first() {
        assert_eq!(difference(&[4, 1, 4, 2], &[2]), vec![4, 1, 4]);
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }
}
