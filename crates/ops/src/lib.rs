//! Functional operations over ordered sequences.
//!
//! Every function here borrows its input slice and returns a freshly
//! allocated result (or a scalar). Nothing is mutated in place and no state is
//! kept between calls.
//!
//! - [`sequence`]: map, filter, folds, unfold, zip, concat, intersperse,
//!   reverse and the boolean/numeric reductions built on folding
//! - [`predicates`]: membership and prefix/suffix checks
//! - [`sets`]: de-duplication, intersection, union and difference
//! - [`stack`]: push, pop and peek on a slice whose head is the top
//!
//! The sequence operations are also re-exported at the crate root.
//!
//! # Example
//!
//! ```
//! use funcslice_ops::{filter, map, sum};
//!
//! let evens = filter(&[1, 2, 3, 4, 5, 6], |x| x % 2 == 0);
//! let squares = map(&evens, |x| x * x);
//! assert_eq!(sum(&squares), 56);
//! ```

pub mod predicates;
pub mod sequence;
pub mod sets;
pub mod stack;

pub use funcslice_core::{Error, Number, Pair, Result};
pub use sequence::{
    all, and, any, concat, filter, fold_right, foldr, intersperse, map, or, product, reverse, sum,
    try_foldr, try_map, unfoldr, zip,
};
