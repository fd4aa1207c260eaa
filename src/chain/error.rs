//! Chain failures.
//!
//! The chain propagates its first failure by forwarding, not raising: once
//! an operation produces a `ChainError`, every later operation returns the
//! identical error untouched, and only the terminal extractors observe it.

use std::error::Error;
use std::fmt;

use super::tag::TypeTag;

/// A failure captured by a chain stage and forwarded by all later stages.
///
/// The first error wins. No operation recovers from or overwrites a stored
/// error; the chain surfaces it through [`Coil::release`] or aborts through
/// [`Coil::release_or_panic`].
///
/// [`Coil::release`]: super::Coil::release
/// [`Coil::release_or_panic`]: super::Coil::release_or_panic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// The wrapped value is not usable as a sequence of the chain's element
    /// type. Only reachable through the runtime-typed constructor
    /// [`Coil::wrap_any`](super::Coil::wrap_any).
    UnsupportedWrappedType {
        /// The element type the chain expected.
        expected: TypeTag,
    },
    /// A concatenation operand's element type differs from the chain's.
    OperandTypeMismatch {
        /// The chain's element type.
        expected: TypeTag,
        /// The operand's element type.
        found: TypeTag,
    },
    /// An export destination is not a writable sequence of the chain's
    /// element type.
    InvalidExportDestination {
        /// The element type the destination must hold.
        expected: TypeTag,
    },
    /// A pop was attempted on an empty snapshot stack.
    EmptyStack,
}

impl fmt::Display for ChainError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedWrappedType { expected } => {
                write!(
                    formatter,
                    "unsupported wrapped value: expected a sequence of {expected}"
                )
            }
            Self::OperandTypeMismatch { expected, found } => {
                write!(
                    formatter,
                    "type mismatch between wrapped value and operand: expected {expected}, found {found}"
                )
            }
            Self::InvalidExportDestination { expected } => {
                write!(
                    formatter,
                    "export destination must be a writable sequence of {expected}"
                )
            }
            Self::EmptyStack => formatter.write_str("pop on an empty snapshot stack"),
        }
    }
}

impl Error for ChainError {}
