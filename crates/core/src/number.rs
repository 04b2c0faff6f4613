use std::ops::{Add, Mul};

use num_traits::{One, Zero};

/// A primitive integer or floating point type.
///
/// `Number` restricts sums and products to types with a literal additive
/// identity (`0`) and multiplicative identity (`1`), supplied through
/// [`Zero`] and [`One`].
///
/// The trait is sealed. It is implemented for every primitive integer type
/// and for `f32` and `f64`, and cannot be implemented outside this crate.
///
/// # Example
///
/// ```
/// use funcslice_core::Number;
///
/// fn double<T: Number>(x: T) -> T {
///     x + x
/// }
///
/// assert_eq!(double(21_u8), 42);
/// assert_eq!(double(1.5_f64), 3.0);
/// assert_eq!(double(-4_i32), -8);
/// ```
///
/// [`Zero`]: https://docs.rs/num-traits/latest/num_traits/identities/trait.Zero.html
/// [`One`]: https://docs.rs/num-traits/latest/num_traits/identities/trait.One.html
pub trait Number: sealed::Sealed + Copy + Zero + One + Add<Output = Self> + Mul<Output = Self> {}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Number for $t {}
        )*
    };
}

impl_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
