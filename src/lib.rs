//! # volute
//!
//! A fluent, chainable transformation pipeline over homogeneous sequences.
//!
//! ## Overview
//!
//! volute wraps a sequence in a [`chain::Coil`] and lets you thread it
//! through map, filter, fold, concatenation, type introspection, and
//! snapshot save/restore steps. Every step consumes the previous stage and
//! returns the next one; the first failure is captured and forwarded
//! silently by all later steps, to be inspected only when the chain is
//! finalized by one of the two terminal extractors.
//!
//! - **Element-wise steps**: [`chain::Coil::map`], [`chain::Coil::filter`]
//! - **Folding**: [`chain::Coil::reduce`], with a dual accumulator-shape
//!   policy (scalar results become singletons, sequence results are kept
//!   verbatim)
//! - **Sequence steps**: [`chain::Coil::concat`], [`chain::Coil::export`],
//!   [`chain::Coil::types`]
//! - **Checkpoints**: [`chain::Coil::push`], [`chain::Coil::pop`]
//! - **Terminals**: [`chain::Coil::release`],
//!   [`chain::Coil::release_or_panic`]
//!
//! ## Feature Flags
//!
//! - `tracing`: emit a `tracing` debug event per chain operation
//!
//! ## Example
//!
//! ```rust
//! use volute::prelude::*;
//!
//! let released = wrap(vec![0, 1, 2, 3, 4])
//!     .filter(|value| value % 2 == 0)
//!     .map(|value| value * 2)
//!     .release();
//!
//! assert_eq!(released, Ok(vec![0, 4, 8]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the whole chaining surface.
///
/// # Usage
///
/// ```rust
/// use volute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain::{AnyOperand, ChainError, Coil, FoldShape, Operand, TypeTag, coil, wrap};
}

pub mod chain;
