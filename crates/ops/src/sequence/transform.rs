/// Applies `f` to every element and collects the results.
///
/// The output has exactly the length and order of the input.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::map;
///
/// assert_eq!(map(&[1, 2, 3], |x| x * 2), vec![2, 4, 6]);
/// ```
pub fn map<T, F>(seq: &[T], f: F) -> Vec<T>
where
    F: FnMut(&T) -> T,
{
    seq.iter().map(f).collect()
}

/// Applies a fallible `f` to every element, stopping at the first error.
///
/// The error is returned exactly as `f` produced it. Elements after the
/// failing one are not visited.
///
/// # Errors
///
/// Returns the first `Err` produced by `f`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::try_map;
///
/// let halve = |x: &i32| if x % 2 == 0 { Ok(x / 2) } else { Err(*x) };
///
/// assert_eq!(try_map(&[2, 4, 6], halve), Ok(vec![1, 2, 3]));
/// assert_eq!(try_map(&[2, 3, 5], halve), Err(3));
/// ```
pub fn try_map<T, E, F>(seq: &[T], f: F) -> Result<Vec<T>, E>
where
    F: FnMut(&T) -> Result<T, E>,
{
    seq.iter().map(f).collect()
}

/// Keeps the elements for which `predicate` returns `true`, in their original order.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |x| x % 2 == 0), vec![2, 4]);
/// assert!(filter(&[1, 3], |x| x % 2 == 0).is_empty());
/// ```
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    seq.iter().filter(|x| predicate(x)).cloned().collect()
}
