use crate::any_value::AnyValue;
use crate::error::EqualityError;
use crate::registry::ComparerRegistry;
use std::fmt;

/// Compares two erased values through `registry`
///
/// Shorthand for [`ComparerRegistry::equals`].
///
/// # Errors
///
/// Returns `EqualityError::UnregisteredComparer` if both values hold the same
/// type and `registry` has no comparer for it.
pub fn equals(
    registry: &ComparerRegistry,
    left: &AnyValue,
    right: &AnyValue,
) -> Result<bool, EqualityError> {
    registry.equals(left, right)
}

/// Compares an erased value against a value of a known type
///
/// Shorthand for [`AnyValue::eq_value`].
///
/// # Errors
///
/// Returns `EqualityError::DowncastMismatch` if `erased` does not hold a `T`.
pub fn equals_value<T: PartialEq + 'static>(
    erased: &AnyValue,
    other: &T,
) -> Result<bool, EqualityError> {
    erased.eq_value(other)
}

impl AnyValue {
    /// Compares the held value against `other` using `T`'s own `==`
    ///
    /// No registry is involved; the caller already knows the held type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anyeq::{AnyValue, EqualityError};
    ///
    /// let value = AnyValue::new(5u64);
    /// assert_eq!(value.eq_value(&5u64), Ok(true));
    /// assert_eq!(value.eq_value(&6u64), Ok(false));
    /// assert!(matches!(
    ///     value.eq_value(&5i32),
    ///     Err(EqualityError::DowncastMismatch { .. })
    /// ));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `EqualityError::DowncastMismatch` if the held value is not a `T`.
    pub fn eq_value<T: PartialEq + 'static>(&self, other: &T) -> Result<bool, EqualityError> {
        Ok(self.try_downcast_ref::<T>()? == other)
    }
}

/// An erased value borrowed together with the registry that compares it
///
/// `DispatchEq` implements `PartialEq`, so anything built on `==` works on
/// erased values: `assert_eq!`, `Vec::contains`, `Iterator::position`, slice
/// equality. Comparison goes through [`ComparerRegistry::equals`] on the
/// registry both operands were bound to.
///
/// # Panics
///
/// `PartialEq` cannot report errors, so comparing two values of the same
/// type with no registered comparer panics with the
/// `EqualityError::UnregisteredComparer` message. Use
/// [`ComparerRegistry::equals`] where that must be handled.
///
/// Comparing two `DispatchEq`s bound to different registries also panics:
/// the registries may disagree, which would make `==` depend on operand
/// order.
///
/// # Examples
///
/// ```
/// use sovran_anyeq::{AnyValue, ComparerRegistry};
///
/// let registry = ComparerRegistry::new();
/// let values = vec![AnyValue::new(1i32), AnyValue::new("two"), AnyValue::new(3.0f64)];
/// let bound: Vec<_> = values.iter().map(|v| registry.bind(v)).collect();
///
/// let needle = AnyValue::new("two");
/// assert!(bound.contains(&registry.bind(&needle)));
/// assert_eq!(bound.iter().position(|v| *v == needle), Some(1));
/// ```
#[derive(Clone, Copy)]
pub struct DispatchEq<'a> {
    registry: &'a ComparerRegistry,
    value: &'a AnyValue,
}

impl<'a> DispatchEq<'a> {
    pub(crate) fn new(registry: &'a ComparerRegistry, value: &'a AnyValue) -> Self {
        Self { registry, value }
    }

    /// The borrowed erased value
    pub fn value(&self) -> &'a AnyValue {
        self.value
    }

    /// Non-panicking comparison against any erased value
    ///
    /// # Errors
    ///
    /// See [`ComparerRegistry::equals`].
    pub fn try_eq(&self, other: &AnyValue) -> Result<bool, EqualityError> {
        self.registry.equals(self.value, other)
    }

    fn dispatch(&self, other: &AnyValue) -> bool {
        match self.try_eq(other) {
            Ok(equal) => equal,
            Err(err) => panic!("{}", err),
        }
    }
}

impl PartialEq for DispatchEq<'_> {
    fn eq(&self, other: &Self) -> bool {
        assert!(
            std::ptr::eq(self.registry, other.registry),
            "cannot compare values bound to different comparer registries"
        );
        self.dispatch(other.value)
    }
}

impl PartialEq<AnyValue> for DispatchEq<'_> {
    fn eq(&self, other: &AnyValue) -> bool {
        self.dispatch(other)
    }
}

impl fmt::Debug for DispatchEq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.value, f)
    }
}
