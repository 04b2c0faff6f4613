//! Sequence operations: transforming, folding, generating and combining slices.
//!
//! Callbacks receive elements by reference and are expected to be pure. A
//! callback that panics unwinds straight through these functions; fallible
//! callbacks should use [`try_map`] or [`try_foldr`], which hand the first
//! error back unchanged.
//!
//! # Folding order
//!
//! [`foldr`] accumulates left to right, from index `0` to `n - 1`, starting
//! from the unit value. [`and`], [`or`], [`sum`], [`product`] and [`concat`]
//! are all defined in terms of it. When a true right fold is needed (for a
//! combiner that is neither associative nor commutative) use [`fold_right`].

mod fold;
mod generate;
mod quantify;
mod structure;
mod transform;

pub use fold::{and, concat, fold_right, foldr, or, product, sum, try_foldr};
pub use generate::unfoldr;
pub use quantify::{all, any};
pub use structure::{intersperse, reverse, zip};
pub use transform::{filter, map, try_map};
