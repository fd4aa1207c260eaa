//! The transformation operators defined over a chain stage.
//!
//! Every operator here is pure with respect to the chain: it consumes the
//! previous stage, produces the next one, traverses left to right in a
//! single pass, and forwards a sticky error untouched.

use std::any::Any;

use super::chain_trace;
use super::coil::Coil;
use super::error::ChainError;
use super::fold::FoldShape;
use super::operand::{AnyOperand, Operand};
use super::tag::TypeTag;

impl<E> Coil<E> {
    // =========================================================================
    // Element-wise Operators
    // =========================================================================

    /// Applies `function` to every element in traversal order, producing a
    /// sequence of the same length and element type.
    ///
    /// The function is total: its result is taken verbatim for every
    /// element. There is no "keep the original" marker.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::wrap;
    ///
    /// let released = wrap(vec![1, 2, 3]).map(|value| value * 2).release();
    /// assert_eq!(released, Ok(vec![2, 4, 6]));
    /// ```
    #[must_use]
    pub fn map<F>(self, mut function: F) -> Self
    where
        F: FnMut(E) -> E,
    {
        self.step(|elements| {
            let mapped: Vec<E> = elements.into_iter().map(&mut function).collect();
            chain_trace!(len = mapped.len(), "map");
            Ok(mapped)
        })
    }

    /// Retains, in original order, exactly the elements for which
    /// `predicate` returns `true`.
    ///
    /// Does not reorder and does not deduplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::wrap;
    ///
    /// let released = wrap(vec![0, 1, 2, 3, 4])
    ///     .filter(|value| value % 2 == 0)
    ///     .release();
    /// assert_eq!(released, Ok(vec![0, 2, 4]));
    /// ```
    #[must_use]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        self.step(|elements| {
            let kept: Vec<E> = elements
                .into_iter()
                .filter(|element| predicate(element))
                .collect();
            chain_trace!(len = kept.len(), "filter");
            Ok(kept)
        })
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Performs a strict left fold over the elements in order, then
    /// normalizes the final accumulator by its [`FoldShape`]: a `Vec`-shaped
    /// accumulator becomes the new wrapped sequence verbatim (progressive
    /// accumulation), a scalar-shaped one is promoted to a singleton.
    ///
    /// If the wrapped sequence is empty the fold is skipped entirely:
    /// `initial` is discarded and the result is the empty sequence.
    ///
    /// The result is a fresh chain segment: its snapshot stack starts
    /// empty, since the element type may change with the fold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::wrap;
    ///
    /// // Scalar accumulator: promoted to a one-element sequence.
    /// let total = wrap(vec![1, 2, 3]).reduce(0, |acc, value| acc + value);
    /// assert_eq!(total.release(), Ok(vec![6]));
    ///
    /// // Sequence accumulator: used verbatim as a running history.
    /// let history = wrap(vec![1, 2, 3]).reduce(Vec::new(), |mut acc: Vec<i32>, value| {
    ///     acc.push(acc.last().copied().unwrap_or(0) + value);
    ///     acc
    /// });
    /// assert_eq!(history.release(), Ok(vec![1, 3, 6]));
    /// ```
    #[must_use]
    pub fn reduce<A, F>(self, initial: A, function: F) -> Coil<A::Element>
    where
        A: FoldShape,
        F: FnMut(A, E) -> A,
    {
        match self.state {
            Ok(state) => {
                if state.elements.is_empty() {
                    return Coil::wrap(Vec::new());
                }
                let folded = state.elements.into_iter().fold(initial, function);
                let elements = folded.into_elements();
                chain_trace!(len = elements.len(), "reduce");
                Coil::wrap(elements)
            }
            Err(error) => Coil::from_error(error),
        }
    }

    // =========================================================================
    // Sequence Operators
    // =========================================================================

    /// Appends the operand's elements after the current elements, preserving
    /// order.
    ///
    /// The operand is normalized first: a scalar becomes a one-element
    /// sequence. On this path the operand's element type is the chain's by
    /// construction, so concatenation cannot fail; see
    /// [`concat_any`](Self::concat_any) for the runtime-typed boundary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::wrap;
    ///
    /// let released = wrap(vec![0, 1, 2, 3, 4, 5])
    ///     .concat(6)
    ///     .concat([7, 8])
    ///     .release();
    /// assert_eq!(released, Ok(vec![0, 1, 2, 3, 4, 5, 6, 7, 8]));
    /// ```
    #[must_use]
    pub fn concat(self, operand: impl Into<Operand<E>>) -> Self {
        let operand = operand.into();
        self.step(|mut elements| {
            elements.extend(operand.into_elements());
            chain_trace!(len = elements.len(), "concat");
            Ok(elements)
        })
    }

    /// Appends a runtime-typed operand, checking element-type compatibility
    /// at the downcast boundary.
    ///
    /// On mismatch the chain fails with
    /// [`ChainError::OperandTypeMismatch`] and carries no value from then
    /// on; the error is sticky and never overwritten by later stages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::{AnyOperand, wrap};
    ///
    /// let released = wrap(vec!["1".to_string()])
    ///     .concat_any(AnyOperand::scalar("2".to_string()))
    ///     .release();
    /// assert_eq!(released, Ok(vec!["1".to_string(), "2".to_string()]));
    ///
    /// let poisoned = wrap(vec!["1".to_string()])
    ///     .concat_any(AnyOperand::sequence(vec![3i32]))
    ///     .release();
    /// assert!(poisoned.is_err());
    /// ```
    #[must_use]
    pub fn concat_any(self, operand: AnyOperand) -> Self
    where
        E: Any,
    {
        self.step(|mut elements| {
            elements.extend(operand.into_typed::<E>()?);
            chain_trace!(len = elements.len(), "concat");
            Ok(elements)
        })
    }

    /// Copies the current elements into a caller-owned destination.
    ///
    /// The destination is cleared and rebuilt to exactly the current element
    /// count; its prior contents are discarded. The current value passes
    /// through unchanged: export is an observation, not a transformation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::wrap;
    ///
    /// let mut buffer = vec![9, 9, 9, 9];
    /// let released = wrap(vec![1, 2, 3]).export(&mut buffer).release();
    /// assert_eq!(buffer, vec![1, 2, 3]);
    /// assert_eq!(released, Ok(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn export(self, destination: &mut Vec<E>) -> Self
    where
        E: Clone,
    {
        self.step(|elements| {
            destination.clear();
            destination.extend_from_slice(&elements);
            chain_trace!(len = elements.len(), "export");
            Ok(elements)
        })
    }

    /// Copies the current elements into a destination whose type is known
    /// only at runtime.
    ///
    /// The destination must be a `Vec<E>` behind the `Any`; anything else
    /// fails with the sticky [`ChainError::InvalidExportDestination`] and
    /// leaves the destination untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::wrap;
    ///
    /// let mut buffer: Vec<i32> = Vec::new();
    /// let released = wrap(vec![1, 2, 3]).export_any(&mut buffer).release();
    /// assert_eq!(buffer, vec![1, 2, 3]);
    /// assert_eq!(released, Ok(vec![1, 2, 3]));
    ///
    /// let mut mistyped: Vec<String> = Vec::new();
    /// assert!(wrap(vec![1, 2, 3]).export_any(&mut mistyped).release().is_err());
    /// ```
    #[must_use]
    pub fn export_any(self, destination: &mut dyn Any) -> Self
    where
        E: Any + Clone,
    {
        self.step(|elements| {
            let Some(buffer) = destination.downcast_mut::<Vec<E>>() else {
                return Err(ChainError::InvalidExportDestination {
                    expected: TypeTag::of::<E>(),
                });
            };
            buffer.clear();
            buffer.extend_from_slice(&elements);
            chain_trace!(len = elements.len(), "export");
            Ok(elements)
        })
    }

    /// A tagged view of the chain: a stage whose i-th element is the
    /// [`TypeTag`] of the i-th element of the current value, same length and
    /// order.
    ///
    /// The view is constructed on demand from a borrow; the source stage is
    /// untouched and the view starts with its own empty snapshot stack. A
    /// sticky error on the source is forwarded into the view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use volute::chain::{TypeTag, wrap};
    ///
    /// let stage = wrap(vec![1, 2, 3]);
    /// let tags = stage.types().release();
    /// assert_eq!(tags, Ok(vec![TypeTag::of::<i32>(); 3]));
    ///
    /// // The source stage is still usable afterwards.
    /// assert_eq!(stage.release(), Ok(vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn types(&self) -> Coil<TypeTag>
    where
        E: Any,
    {
        match &self.state {
            Ok(state) => {
                chain_trace!(len = state.elements.len(), "types");
                Coil::wrap(vec![TypeTag::of::<E>(); state.elements.len()])
            }
            Err(error) => Coil::from_error(*error),
        }
    }
}
