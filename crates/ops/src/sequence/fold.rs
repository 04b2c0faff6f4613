use funcslice_core::Number;

/// Accumulates the elements left to right, starting from `unit`.
///
/// Computes `f(...f(f(unit, seq[0]), seq[1])..., seq[n - 1])`. An empty slice
/// returns `unit` unchanged.
///
/// Despite the name, traversal is forward. The derived reductions ([`and`],
/// [`or`], [`sum`], [`product`], [`concat`]) rely on this order. See
/// [`fold_right`] for a fold that starts from the last element.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::foldr;
///
/// assert_eq!(foldr(&[1, 2, 3, 4], 0, |acc, x| acc + x), 10);
/// assert_eq!(foldr(&[1, 2, 3, 4], 1, |acc, x| acc * x), 24);
///
/// // Forward order is visible with a non-commutative combiner.
/// assert_eq!(foldr(&[1, 2, 3], 0, |acc, x| acc * 10 + x), 123);
/// ```
pub fn foldr<T, A, F>(seq: &[T], unit: A, f: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    seq.iter().fold(unit, f)
}

/// Like [`foldr`], but with a fallible combiner.
///
/// Accumulation stops at the first error, which is returned unchanged.
///
/// # Errors
///
/// Returns the first `Err` produced by `f`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::try_foldr;
///
/// let checked_add = |acc: u8, x: &u8| acc.checked_add(*x).ok_or("overflow");
///
/// assert_eq!(try_foldr(&[100, 100], 0, checked_add), Ok(200));
/// assert_eq!(try_foldr(&[100, 100, 100], 0, checked_add), Err("overflow"));
/// ```
pub fn try_foldr<T, A, E, F>(seq: &[T], unit: A, f: F) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    seq.iter().try_fold(unit, f)
}

/// Accumulates the elements right to left, starting from `unit`.
///
/// Computes `f(seq[0], f(seq[1], ...f(seq[n - 1], unit)...))`.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::fold_right;
///
/// let nested = fold_right(&[1, 2, 3], "nil".to_string(), |x, acc| format!("({x} . {acc})"));
/// assert_eq!(nested, "(1 . (2 . (3 . nil)))");
/// ```
pub fn fold_right<T, A, F>(seq: &[T], unit: A, mut f: F) -> A
where
    F: FnMut(&T, A) -> A,
{
    seq.iter().rfold(unit, |acc, x| f(x, acc))
}

/// Returns `true` if every element is `true`.
///
/// An empty slice yields `true`.
pub fn and(seq: &[bool]) -> bool {
    foldr(seq, true, |acc, &x| acc && x)
}

/// Returns `true` if at least one element is `true`.
///
/// An empty slice yields `false`.
pub fn or(seq: &[bool]) -> bool {
    foldr(seq, false, |acc, &x| acc || x)
}

/// Adds up the elements, starting from zero.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::sum;
///
/// assert_eq!(sum(&[1, 2, 3, 4]), 10);
/// assert_eq!(sum::<f64>(&[]), 0.0);
/// ```
pub fn sum<T: Number>(seq: &[T]) -> T {
    foldr(seq, T::zero(), |acc, &x| acc + x)
}

/// Multiplies the elements together, starting from one.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::product;
///
/// assert_eq!(product(&[1, 2, 3, 4]), 24);
/// assert_eq!(product::<i32>(&[]), 1);
/// ```
pub fn product<T: Number>(seq: &[T]) -> T {
    foldr(seq, T::one(), |acc, &x| acc * x)
}

/// Flattens one level of nesting, keeping outer then inner order.
///
/// # Example
///
/// ```
/// use funcslice_ops::sequence::concat;
///
/// let nested = vec![vec![1, 2], vec![3, 4], vec![5]];
/// assert_eq!(concat(&nested), vec![1, 2, 3, 4, 5]);
/// ```
pub fn concat<T, S>(seqs: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    foldr(seqs, Vec::new(), |mut flat, inner| {
        flat.extend_from_slice(inner.as_ref());
        flat
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn foldr_on_empty_returns_unit() {
        let empty: [i32; 0] = [];
        assert_eq!(foldr(&empty, 42, |acc, x| acc + x), 42);
    }

    #[test]
    fn foldr_traverses_left_to_right() {
        // ((0 - 1) - 2) - 3
        assert_eq!(foldr(&[1, 2, 3], 0, |acc, x| acc - x), -6);

        let order = foldr(&['a', 'b', 'c'], String::new(), |mut acc, c| {
            acc.push(*c);
            acc
        });
        assert_eq!(order, "abc");
    }

    #[test]
    fn fold_right_traverses_right_to_left() {
        // 1 - (2 - (3 - 0))
        assert_eq!(fold_right(&[1, 2, 3], 0, |x, acc| x - acc), 2);

        let order = fold_right(&['a', 'b', 'c'], String::new(), |c, mut acc| {
            acc.push(*c);
            acc
        });
        assert_eq!(order, "cba");
    }

    #[test]
    fn try_foldr_stops_at_first_error() {
        let mut seen = 0;
        let result = try_foldr(&[1, 2, 0, 4], 100, |acc, &x| {
            seen += 1;
            if x == 0 {
                Err("division by zero")
            } else {
                Ok(acc / x)
            }
        });

        assert_eq!(result, Err("division by zero"));
        assert_eq!(seen, 3);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn foldr_lets_callback_panic_through() {
        let divisors = [1, 2, 0, 4];
        let _ = foldr(&divisors, 100, |acc, &x| acc / x);
    }

    #[test]
    fn try_foldr_matches_foldr_when_ok() {
        let seq = [3, 1, 4, 1, 5];
        let folded = foldr(&seq, 0, |acc, x| acc * 2 + x);
        let tried: Result<i32, ()> = try_foldr(&seq, 0, |acc, x| Ok(acc * 2 + x));
        assert_eq!(tried, Ok(folded));
    }

    #[test]
    fn boolean_reductions() {
        assert!(and(&[]));
        assert!(and(&[true, true]));
        assert!(!and(&[true, false, true]));

        assert!(!or(&[]));
        assert!(or(&[false, true]));
        assert!(!or(&[false, false]));
    }

    #[test]
    fn integer_reductions() {
        assert_eq!(sum::<i64>(&[]), 0);
        assert_eq!(product::<i64>(&[]), 1);
        assert_eq!(sum(&[1, 2, 3, 4]), 10);
        assert_eq!(product(&[1, 2, 3, 4]), 24);
        assert_eq!(product(&[7_u32, 0, 3]), 0);
    }

    #[test]
    fn float_reductions() {
        assert_relative_eq!(sum(&[0.1, 0.2, 0.3]), 0.6, epsilon = 1e-12);
        assert_relative_eq!(product(&[1.5_f32, 2.0, 4.0]), 12.0);
        assert_relative_eq!(sum::<f32>(&[]), 0.0);
        assert_relative_eq!(product::<f64>(&[]), 1.0);
    }

    #[test]
    fn concat_flattens_one_level() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![1], vec![], vec![2, 3]];
        assert_eq!(concat(&nested), vec![1, 2, 3]);

        let empty: Vec<Vec<i32>> = vec![];
        assert!(concat(&empty).is_empty());
    }

    #[test]
    fn concat_accepts_slices() {
        let parts: [&[char]; 2] = [&['h', 'e'], &['y']];
        assert_eq!(concat(&parts), vec!['h', 'e', 'y']);
    }
}
