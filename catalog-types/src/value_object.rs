//! Content-based equality for identity-less values.

use std::any::Any;
use std::fmt::Debug;

/// An immutable value compared purely by its content.
///
/// Structural equality comes from the implementor's `PartialEq` (usually
/// derived, which already recurses into nested value objects and
/// collections). [`ValueObject::equals`] layers the loose comparison on top:
/// a missing value or a value of another concrete type is never equal.
pub trait ValueObject: Debug + PartialEq + Any {
    /// Compares against an optional value of any type.
    ///
    /// Returns `false` for `None` and for values whose concrete type differs
    /// from `Self`; otherwise defers to `PartialEq`.
    fn equals<T: Any>(&self, other: Option<&T>) -> bool
    where
        Self: Sized,
    {
        other
            .and_then(|other| (other as &dyn Any).downcast_ref::<Self>())
            .is_some_and(|other| self == other)
    }
}

#[cfg(test)]
mod tests {
    use super::ValueObject;

    #[derive(Debug, PartialEq)]
    struct Wrapper(u8);

    impl ValueObject for Wrapper {}

    #[test]
    fn downcast_matches_same_type_only() {
        assert!(Wrapper(1).equals(Some(&Wrapper(1))));
        assert!(!Wrapper(1).equals(Some(&1u8)));
        assert!(!Wrapper(1).equals::<Wrapper>(None));
    }
}
