//! Input generators for property tests.

use proptest::prelude::*;

/// Short integer sequences, including the empty one.
pub fn int_seq() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000..1_000, 0..32)
}

/// Short boolean sequences, including the empty one.
pub fn bool_seq() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..16)
}

/// A handful of integer sequences to be flattened.
pub fn nested_int_seq() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(int_seq(), 0..8)
}

/// Sequences drawn from a tiny alphabet so duplicates are common.
pub fn small_alphabet_seq() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), 0..16)
}
