//! Runtime type descriptors for chain elements.

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// A copyable runtime descriptor of an element type.
///
/// `TypeTag` pairs a [`TypeId`] with the type's name. Two tags compare equal
/// exactly when they describe the same Rust type; the name is carried for
/// diagnostics and display only.
///
/// # Examples
///
/// ```rust
/// use volute::chain::TypeTag;
///
/// assert_eq!(TypeTag::of::<i32>(), TypeTag::of::<i32>());
/// assert_ne!(TypeTag::of::<i32>(), TypeTag::of::<u32>());
/// assert_eq!(TypeTag::of::<i32>().name(), "i32");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Returns the tag describing `T`.
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the described type's name, as produced by
    /// [`std::any::type_name`].
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "TypeTag({})", self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name)
    }
}
