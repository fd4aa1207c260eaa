//! The accumulator-shape policy applied by [`Coil::reduce`].
//!
//! A fold can legitimately end in two shapes: a scalar (a running sum) or a
//! sequence (a running history). The chain keeps its "current value is a
//! sequence" invariant after every step by normalizing the final accumulator
//! through this trait: sequence-shaped accumulators become the new wrapped
//! value verbatim, scalar-shaped ones are promoted to a singleton.
//!
//! [`Coil::reduce`]: super::Coil::reduce

/// The shape a fold result collapses into.
///
/// Implemented for `Vec<T>` (the sequence shape, used verbatim) and for the
/// standard scalar types (promoted to a one-element sequence). Implement it
/// for your own accumulator types to use them with
/// [`Coil::reduce`](super::Coil::reduce):
///
/// ```rust
/// use volute::chain::{FoldShape, wrap};
///
/// #[derive(Debug, PartialEq)]
/// struct Stats {
///     count: usize,
///     total: i64,
/// }
///
/// impl FoldShape for Stats {
///     type Element = Stats;
///
///     fn into_elements(self) -> Vec<Stats> {
///         vec![self]
///     }
/// }
///
/// let released = wrap(vec![1i64, 2, 3])
///     .reduce(Stats { count: 0, total: 0 }, |stats, value| Stats {
///         count: stats.count + 1,
///         total: stats.total + value,
///     })
///     .release();
/// assert_eq!(released, Ok(vec![Stats { count: 3, total: 6 }]));
/// ```
pub trait FoldShape {
    /// The element type of the resulting sequence.
    type Element;

    /// Collapses the final accumulator into the next wrapped sequence.
    fn into_elements(self) -> Vec<Self::Element>;
}

impl<T> FoldShape for Vec<T> {
    type Element = T;

    #[inline]
    fn into_elements(self) -> Vec<T> {
        self
    }
}

macro_rules! impl_fold_shape_scalar {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl FoldShape for $scalar {
                type Element = $scalar;

                #[inline]
                fn into_elements(self) -> Vec<$scalar> {
                    vec![self]
                }
            }
        )*
    };
}

impl_fold_shape_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl FoldShape for &str {
    type Element = Self;

    #[inline]
    fn into_elements(self) -> Vec<Self> {
        vec![self]
    }
}
