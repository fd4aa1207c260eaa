//! The chain-stage container.

use std::any::Any;

use smallvec::SmallVec;

use super::chain_trace;
use super::error::ChainError;
use super::operand::Operand;
use super::tag::TypeTag;

/// Snapshot slots held inline before the stack spills to the heap.
const SNAPSHOT_SLOTS: usize = 4;

/// The live payload of a chain stage: the current elements plus the LIFO
/// snapshot stack populated by [`Coil::push`] and consumed by [`Coil::pop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct State<E> {
    pub(crate) elements: Vec<E>,
    pub(crate) snapshots: SmallVec<[Vec<E>; SNAPSHOT_SLOTS]>,
}

/// A chain stage: the current sequence, the sticky error, and the snapshot
/// stack.
///
/// A `Coil` is always in exactly one of two states: it holds a sequence of
/// `E`, or it holds the first error produced by the chain. Every operation
/// consumes the stage and returns the next one; on an errored stage every
/// operation is a no-op that forwards the identical error. The state is only
/// observable through the terminal extractors [`release`](Self::release) and
/// [`release_or_panic`](Self::release_or_panic).
///
/// # Examples
///
/// ```rust
/// use volute::chain::Coil;
///
/// let released = Coil::wrap(vec![1, 2, 3])
///     .map(|value| value + 1)
///     .filter(|value| *value > 2)
///     .release();
/// assert_eq!(released, Ok(vec![3, 4]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coil<E> {
    pub(crate) state: Result<State<E>, ChainError>,
}

impl<E> Coil<E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a sequence as-is in a new chain stage with no error and an
    /// empty snapshot stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::Coil;
    ///
    /// let released = Coil::wrap(vec!["a", "b"]).release();
    /// assert_eq!(released, Ok(vec!["a", "b"]));
    /// ```
    #[must_use]
    pub fn wrap<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let elements: Vec<E> = elements.into_iter().collect();
        chain_trace!(len = elements.len(), "wrap");
        Self {
            state: Ok(State {
                elements,
                snapshots: SmallVec::new(),
            }),
        }
    }

    /// Wraps a scalar or a sequence, promoting a scalar to a one-element
    /// sequence.
    ///
    /// The stored value is always a sequence afterwards, which is what keeps
    /// the rest of the chain free of scalar special cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::Coil;
    ///
    /// assert_eq!(Coil::coil(9).release(), Ok(vec![9]));
    ///
    /// let from_sequence: Coil<u8> = Coil::coil(vec![1, 2]);
    /// assert_eq!(from_sequence.release(), Ok(vec![1, 2]));
    /// ```
    #[must_use]
    pub fn coil(operand: impl Into<Operand<E>>) -> Self {
        Self::wrap(operand.into().into_elements())
    }

    /// Wraps a value whose type is known only at runtime.
    ///
    /// The box is inspected once, here: a `Vec<E>` is wrapped as-is, a bare
    /// `E` is promoted to a one-element sequence, and anything else produces
    /// a stage born with the sticky
    /// [`ChainError::UnsupportedWrappedType`] error; later operations
    /// forward it and only the terminals report it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    ///
    /// use volute::chain::Coil;
    ///
    /// let sequence: Box<dyn Any> = Box::new(vec![1, 2, 3]);
    /// assert_eq!(Coil::<i32>::wrap_any(sequence).release(), Ok(vec![1, 2, 3]));
    ///
    /// let scalar: Box<dyn Any> = Box::new(7);
    /// assert_eq!(Coil::<i32>::wrap_any(scalar).release(), Ok(vec![7]));
    ///
    /// let foreign: Box<dyn Any> = Box::new("seven");
    /// assert!(Coil::<i32>::wrap_any(foreign).release().is_err());
    /// ```
    #[must_use]
    pub fn wrap_any(value: Box<dyn Any>) -> Self
    where
        E: Any,
    {
        match value.downcast::<Vec<E>>() {
            Ok(elements) => Self::wrap(*elements),
            Err(value) => match value.downcast::<E>() {
                Ok(element) => Self::coil(*element),
                Err(_) => Self::from_error(ChainError::UnsupportedWrappedType {
                    expected: TypeTag::of::<E>(),
                }),
            },
        }
    }

    /// A stage that carries an error from birth.
    pub(crate) const fn from_error(error: ChainError) -> Self {
        Self { state: Err(error) }
    }

    /// Threads the current elements through `operation`, forwarding a sticky
    /// error and capturing a new one. Every element-level operator is a
    /// `step`; only the snapshot and terminal operations touch the stack.
    pub(crate) fn step<F>(self, operation: F) -> Self
    where
        F: FnOnce(Vec<E>) -> Result<Vec<E>, ChainError>,
    {
        let state = self.state.and_then(|State { elements, snapshots }| {
            operation(elements).map(|elements| State { elements, snapshots })
        });
        Self { state }
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Copies the current value onto the top of the snapshot stack.
    ///
    /// A pure checkpoint: the current value is unchanged. Forwards a sticky
    /// error without touching the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::Coil;
    ///
    /// let released = Coil::wrap(vec![1, 2, 3])
    ///     .push()
    ///     .concat([4])
    ///     .pop()
    ///     .release();
    /// assert_eq!(released, Ok(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn push(self) -> Self
    where
        E: Clone,
    {
        let state = self.state.map(|mut state| {
            chain_trace!(depth = state.snapshots.len() + 1, "push");
            state.snapshots.push(state.elements.clone());
            state
        });
        Self { state }
    }

    /// Removes the top snapshot and makes it the current value, discarding
    /// whatever was current immediately before.
    ///
    /// Popping an empty stack fails with [`ChainError::EmptyStack`], a
    /// defined, sticky failure rather than a crash. Forwards a sticky error
    /// without touching the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::{ChainError, Coil};
    ///
    /// let released = Coil::wrap(vec![1]).pop().release();
    /// assert_eq!(released, Err(ChainError::EmptyStack));
    /// ```
    #[must_use]
    pub fn pop(self) -> Self {
        let state = self.state.and_then(|mut state| {
            state.snapshots.pop().map_or(Err(ChainError::EmptyStack), |snapshot| {
                chain_trace!(depth = state.snapshots.len(), "pop");
                state.elements = snapshot;
                Ok(state)
            })
        });
        Self { state }
    }

    // =========================================================================
    // Terminal Extractors
    // =========================================================================

    /// Finalizes the chain, returning the current sequence or the sticky
    /// error, never both.
    ///
    /// # Errors
    ///
    /// Returns the first error any stage of the chain produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::Coil;
    ///
    /// assert_eq!(Coil::wrap(vec![1, 2]).release(), Ok(vec![1, 2]));
    /// ```
    pub fn release(self) -> Result<Vec<E>, ChainError> {
        self.state.map(|state| state.elements)
    }

    /// Finalizes the chain, returning the current sequence directly.
    ///
    /// # Panics
    ///
    /// Panics with the sticky error if any stage of the chain produced one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::Coil;
    ///
    /// assert_eq!(Coil::wrap(vec![1, 2]).release_or_panic(), vec![1, 2]);
    /// ```
    pub fn release_or_panic(self) -> Vec<E> {
        match self.release() {
            Ok(elements) => elements,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<E> Default for Coil<E> {
    /// An empty chain stage.
    fn default() -> Self {
        Self::wrap(Vec::new())
    }
}

impl<E> From<Vec<E>> for Coil<E> {
    fn from(elements: Vec<E>) -> Self {
        Self::wrap(elements)
    }
}

impl<E> FromIterator<E> for Coil<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::wrap(iter)
    }
}
