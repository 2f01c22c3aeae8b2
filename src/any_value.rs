use crate::error::EqualityError;
use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Object-safe view of a held value that can still be cloned
trait ErasedValue: Any + Send + Sync {
    fn clone_box(&self) -> Box<dyn ErasedValue>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any + Clone + Send + Sync> ErasedValue for T {
    fn clone_box(&self) -> Box<dyn ErasedValue> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A container for a single type-erased value that preserves type information
///
/// `AnyValue` owns the value it holds. Cloning an `AnyValue` clones the held
/// value, so two clones never share state.
///
/// # Examples
///
/// ```
/// use sovran_anyeq::AnyValue;
///
/// let value = AnyValue::new(42i32);
/// assert!(value.is_type::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value.downcast_ref::<u32>(), None);
/// ```
pub struct AnyValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn ErasedValue>,
}

impl AnyValue {
    /// Create a new AnyValue from a value of any type that implements Any, Clone, Send, and Sync
    pub fn new<T: Any + Clone + Send + Sync>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// The identity of the held type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Human-readable name of the held type, for diagnostics only
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if the contained value is of type T
    pub fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Get a reference to the contained value if it is of type T
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        (*self.value).as_any().downcast_ref::<T>()
    }

    /// Get a mutable reference to the contained value if it is of type T
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        (*self.value).as_any_mut().downcast_mut::<T>()
    }

    /// Reads the held value as `T`, failing with [`EqualityError::DowncastMismatch`]
    /// if something else is stored.
    pub fn try_downcast_ref<T: 'static>(&self) -> Result<&T, EqualityError> {
        self.downcast_ref::<T>().ok_or_else(|| self.mismatch::<T>())
    }

    /// Consumes the container and returns the held value
    ///
    /// # Errors
    ///
    /// Returns `EqualityError::DowncastMismatch` if the held value is not a `T`.
    pub fn into_inner<T: 'static>(self) -> Result<T, EqualityError> {
        let mismatch = self.mismatch::<T>();
        self.value
            .into_any()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| mismatch)
    }

    pub(crate) fn mismatch<T: 'static>(&self) -> EqualityError {
        EqualityError::DowncastMismatch {
            expected: type_name::<T>(),
            found: self.type_name,
        }
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            type_id: self.type_id,
            type_name: self.type_name,
            value: (*self.value).clone_box(),
        }
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_identity() {
        let value = AnyValue::new(7u16);
        assert_eq!(value.type_id(), TypeId::of::<u16>());
        assert_eq!(value.type_name(), "u16");
        assert!(value.is_type::<u16>());
        assert!(!value.is_type::<i16>());
    }

    #[test]
    fn test_clone_copies_value() {
        let mut original = AnyValue::new(vec![1, 2, 3]);
        let copy = original.clone();

        original.downcast_mut::<Vec<i32>>().unwrap().push(4);

        assert_eq!(original.downcast_ref::<Vec<i32>>().unwrap().len(), 4);
        assert_eq!(copy.downcast_ref::<Vec<i32>>().unwrap(), &vec![1, 2, 3]);
        assert_eq!(copy.type_id(), original.type_id());
    }

    #[test]
    fn test_into_inner() {
        let value = AnyValue::new(String::from("hello"));
        assert_eq!(value.clone().into_inner::<String>().unwrap(), "hello");

        let err = value.into_inner::<i32>().unwrap_err();
        assert_eq!(
            err,
            EqualityError::DowncastMismatch {
                expected: "i32",
                found: "alloc::string::String",
            }
        );
    }

    #[test]
    fn test_try_downcast_ref() {
        let value = AnyValue::new(1.5f64);
        assert_eq!(value.try_downcast_ref::<f64>(), Ok(&1.5));
        assert!(matches!(
            value.try_downcast_ref::<f32>(),
            Err(EqualityError::DowncastMismatch { .. })
        ));
    }

    #[test]
    fn test_debug_shows_type_name() {
        let value = AnyValue::new(3i64);
        assert!(format!("{:?}", value).contains("i64"));
    }
}
