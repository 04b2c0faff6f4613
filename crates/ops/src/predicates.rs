//! Membership and prefix/suffix checks.
//!
//! The quantifiers [`any`] and [`all`] live in [`crate::sequence`] and are
//! re-exported here so predicate-style code can import everything from one
//! place.

use crate::sequence::reverse;

pub use crate::sequence::{all, any};

/// Returns `true` if `item` occurs in `seq`.
///
/// # Example
///
/// ```
/// use funcslice_ops::predicates::elem;
///
/// assert!(elem(&3, &[1, 2, 3, 4]));
/// assert!(!elem(&5, &[1, 2, 3, 4]));
/// ```
pub fn elem<T: PartialEq>(item: &T, seq: &[T]) -> bool {
    seq.contains(item)
}

/// Returns `true` if `item` does not occur in `seq`.
pub fn not_elem<T: PartialEq>(item: &T, seq: &[T]) -> bool {
    !elem(item, seq)
}

/// Returns `true` if `seq` begins with `prefix`.
///
/// The empty slice is a prefix of every slice. A prefix longer than `seq` is
/// never a prefix of it.
///
/// # Example
///
/// ```
/// use funcslice_ops::predicates::is_prefix_of;
///
/// assert!(is_prefix_of(&[1, 2], &[1, 2, 3, 4]));
/// assert!(!is_prefix_of(&[2, 3], &[1, 2, 3, 4]));
/// ```
pub fn is_prefix_of<T: PartialEq>(prefix: &[T], seq: &[T]) -> bool {
    prefix.len() <= seq.len() && prefix.iter().zip(seq).all(|(p, s)| p == s)
}

/// Returns `true` if `seq` ends with `suffix`.
///
/// Checked as a prefix test on both slices reversed.
///
/// # Example
///
/// ```
/// use funcslice_ops::predicates::is_suffix_of;
///
/// assert!(is_suffix_of(&[3, 4], &[1, 2, 3, 4]));
/// assert!(!is_suffix_of(&[2, 3], &[1, 2, 3, 4]));
/// ```
pub fn is_suffix_of<T: PartialEq + Clone>(suffix: &[T], seq: &[T]) -> bool {
    is_prefix_of(&reverse(suffix), &reverse(seq))
}
