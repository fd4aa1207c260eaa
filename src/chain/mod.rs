//! The chaining pipeline: container, operators, and terminal extractors.
//!
//! A chain starts from one of the two constructors, threads through any
//! number of transformation steps, and ends at a terminal extractor:
//!
//! - [`wrap`] stores a sequence as-is; [`coil`] additionally promotes a
//!   bare scalar to a one-element sequence.
//! - Each step consumes the previous [`Coil`] stage and returns the next.
//! - The first error is sticky: every later step forwards it untouched,
//!   and only [`Coil::release`] / [`Coil::release_or_panic`] observe it.
//!
//! # Examples
//!
//! ```rust
//! use volute::chain::{coil, wrap};
//!
//! let released = wrap(vec!["lean".to_string()])
//!     .concat("mean".to_string())
//!     .release();
//! assert_eq!(released, Ok(vec!["lean".to_string(), "mean".to_string()]));
//!
//! let singleton = coil(42).release();
//! assert_eq!(singleton, Ok(vec![42]));
//! ```

mod coil;
mod error;
mod fold;
mod operand;
mod ops;
mod tag;

pub use coil::Coil;
pub use error::ChainError;
pub use fold::FoldShape;
pub use operand::{AnyOperand, Operand};
pub use tag::TypeTag;

/// Emits a `tracing` debug event when the `tracing` feature is enabled,
/// and expands to nothing otherwise.
macro_rules! chain_trace {
    ($($field:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($field)*);
    }};
}

pub(crate) use chain_trace;

/// Wraps a sequence in a new [`Coil`] chain stage.
///
/// Free-function form of [`Coil::wrap`].
///
/// # Examples
///
/// ```rust
/// use volute::chain::wrap;
///
/// let released = wrap(vec![1, 2, 3]).release();
/// assert_eq!(released, Ok(vec![1, 2, 3]));
/// ```
pub fn wrap<E, I>(elements: I) -> Coil<E>
where
    I: IntoIterator<Item = E>,
{
    Coil::wrap(elements)
}

/// Wraps a scalar or a sequence in a new [`Coil`] chain stage, promoting a
/// scalar to a one-element sequence.
///
/// Free-function form of [`Coil::coil`].
///
/// # Examples
///
/// ```rust
/// use volute::chain::{Coil, coil};
///
/// let from_scalar = coil(7).release();
/// assert_eq!(from_scalar, Ok(vec![7]));
///
/// let from_sequence: Coil<i32> = coil(vec![1, 2]);
/// assert_eq!(from_sequence.release(), Ok(vec![1, 2]));
/// ```
pub fn coil<E>(operand: impl Into<Operand<E>>) -> Coil<E> {
    Coil::coil(operand)
}
