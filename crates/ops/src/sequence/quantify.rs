/// Returns `true` if `predicate` holds for at least one element.
///
/// Stops at the first match. An empty slice yields `false`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::any;
///
/// assert!(any(&[1, 2, 3, 4], |&x| x > 3));
/// assert!(!any(&[1, 2, 3, 4], |&x| x > 4));
/// ```
pub fn any<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().any(predicate)
}

/// Returns `true` if `predicate` holds for every element.
///
/// Stops at the first element that fails. An empty slice yields `true`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::all;
///
/// assert!(all(&[1, 2, 3, 4], |&x| x > 0));
/// assert!(!all(&[1, 2, 3, 4], |&x| x > 1));
/// ```
pub fn all<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    seq.iter().all(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slices() {
        let empty: [i32; 0] = [];
        assert!(!any(&empty, |_| true));
        assert!(all(&empty, |_| false));
    }

    #[test]
    #[should_panic(expected = "unexpected element 9")]
    fn all_lets_callback_panic_through() {
        let _ = all(&[2, 9], |&x| {
            assert!(x < 5, "unexpected element {x}");
            true
        });
    }

    #[test]
    fn any_short_circuits() {
        let mut checked = Vec::new();
        let found = any(&[1, 5, 2, 7], |&x| {
            checked.push(x);
            x > 4
        });
        assert!(found);
        assert_eq!(checked, vec![1, 5]);
    }

    #[test]
    fn all_short_circuits() {
        let mut checked = Vec::new();
        let holds = all(&[2, 4, 5, 6], |&x| {
            checked.push(x);
            x % 2 == 0
        });
        assert!(!holds);
        assert_eq!(checked, vec![2, 4, 5]);
    }
}
