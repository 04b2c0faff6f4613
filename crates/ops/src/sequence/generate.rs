/// Builds a sequence by applying `f` repeatedly, starting from `start`.
///
/// The result is `[start, f(start), f(f(start)), ...]` with `count + 1`
/// elements: `start` itself followed by `count` applications of `f`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::unfoldr;
///
/// assert_eq!(unfoldr(1, |x| x + 1, 5), vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(unfoldr(1, |x| x * 2, 0), vec![1]);
/// ```
pub fn unfoldr<T, F>(start: T, mut f: F, count: usize) -> Vec<T>
where
    F: FnMut(&T) -> T,
{
    let mut seq = Vec::with_capacity(count.saturating_add(1));
    let mut current = start;
    for _ in 0..count {
        let next = f(&current);
        seq.push(current);
        current = next;
    }
    seq.push(current);
    seq
}
