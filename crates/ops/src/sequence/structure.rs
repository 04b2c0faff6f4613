use funcslice_core::Pair;

/// Places `elem` between each pair of adjacent elements.
///
/// Nothing is added before the first or after the last element, so an empty
/// or single-element slice comes back unchanged.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::intersperse;
///
/// assert_eq!(intersperse(&[1, 2, 3], 0), vec![1, 0, 2, 0, 3]);
/// assert!(intersperse(&[] as &[i32], 0).is_empty());
/// ```
pub fn intersperse<T: Clone>(seq: &[T], elem: T) -> Vec<T> {
    let Some((first, rest)) = seq.split_first() else {
        return Vec::new();
    };

    let mut interspersed = Vec::with_capacity(seq.len() * 2 - 1);
    interspersed.push(first.clone());
    for item in rest {
        interspersed.push(elem.clone());
        interspersed.push(item.clone());
    }
    interspersed
}

/// Pairs up elements by position, stopping at the end of the shorter slice.
///
/// Surplus elements of the longer slice are dropped.
///
/// # Example
///
/// ```
/// use funcslice_ops::{Pair, sequence::zip};
///
/// let zipped = zip(&[1, 2, 3], &["a", "b", "c", "d"]);
/// assert_eq!(zipped, vec![Pair::new(1, "a"), Pair::new(2, "b"), Pair::new(3, "c")]);
/// ```
pub fn zip<T, S>(first: &[T], second: &[S]) -> Vec<Pair<T, S>>
where
    T: Clone,
    S: Clone,
{
    first
        .iter()
        .zip(second)
        .map(|(fst, snd)| Pair::new(fst.clone(), snd.clone()))
        .collect()
}

/// Returns the elements in reverse order.
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}
