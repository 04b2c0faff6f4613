//! Stack helpers over slices.
//!
//! The head of the slice (index `0`) is the top of the stack. Pushing and
//! popping return new vectors and leave the input untouched.

use funcslice_core::{Error, Result};

/// Returns a new stack with `val` on top of `seq`.
///
/// # Example
///
/// ```
/// use funcslice_ops::stack::push;
///
/// assert_eq!(push(&[2, 3, 4], 1), vec![1, 2, 3, 4]);
/// ```
pub fn push<T: Clone>(seq: &[T], val: T) -> Vec<T> {
    let mut pushed = Vec::with_capacity(seq.len() + 1);
    pushed.push(val);
    pushed.extend_from_slice(seq);
    pushed
}

/// Returns a new stack with the top element removed.
///
/// # Errors
///
/// Returns [`Error::EmptyStack`] if `seq` is empty.
///
/// # Example
///
/// ```
/// use funcslice_ops::{Error, stack::pop};
///
/// assert_eq!(pop(&[1, 2, 3, 4]), Ok(vec![2, 3, 4]));
/// assert_eq!(pop::<i32>(&[]), Err(Error::EmptyStack));
/// ```
pub fn pop<T: Clone>(seq: &[T]) -> Result<Vec<T>> {
    match seq.split_first() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(Error::EmptyStack),
    }
}

/// Returns the top element, if there is one.
pub fn peek<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}
