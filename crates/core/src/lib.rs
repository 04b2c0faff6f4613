//! Core types for the funcslice sequence library.
//!
//! This crate defines the shared vocabulary the sequence operations build on:
//!
//! - [`Pair`]: two values of possibly different types, produced by zipping
//! - [`Number`]: the closed family of primitive numeric types that can be
//!   summed and multiplied with literal identities
//! - [`Error`]: the failures a sequence helper can report on its own

mod error;
mod number;
mod pair;

pub use error::{Error, Result};
pub use number::Number;
pub use pair::Pair;
