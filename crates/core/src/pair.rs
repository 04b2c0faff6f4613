/// Two values of possibly different types, kept together.
///
/// `Pair` is what zipping two sequences produces: `fst` comes from the first
/// sequence and `snd` from the second. It converts freely to and from the
/// tuple `(T, S)` so it can be destructured like one.
///
/// # Example
///
/// ```
/// use funcslice_core::Pair;
///
/// let pair = Pair::new(1, "a");
/// assert_eq!(pair.fst, 1);
/// assert_eq!(pair.snd, "a");
///
/// let (n, s) = pair.into();
/// assert_eq!((n, s), (1, "a"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<T, S> {
    /// The value taken from the first sequence.
    pub fst: T,
    /// The value taken from the second sequence.
    pub snd: S,
}

impl<T, S> Pair<T, S> {
    /// Creates a pair from its two halves.
    pub const fn new(fst: T, snd: S) -> Self {
        Self { fst, snd }
    }
}

impl<T, S> From<(T, S)> for Pair<T, S> {
    fn from((fst, snd): (T, S)) -> Self {
        Self::new(fst, snd)
    }
}

impl<T, S> From<Pair<T, S>> for (T, S) {
    fn from(pair: Pair<T, S>) -> Self {
        (pair.fst, pair.snd)
    }
}
