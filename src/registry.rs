use crate::any_value::AnyValue;
use crate::comparer::Comparer;
use crate::dispatch::DispatchEq;
use crate::error::EqualityError;
use crate::sequence::SequenceEq;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

/// A table of per-type equality comparers for [`AnyValue`]s
///
/// `ComparerRegistry` maps the identity of a concrete type to the function
/// that decides equality for it. Comparing two erased values looks up the
/// held type and dispatches to its comparer, so new types can take part by
/// registering a comparer without touching the code that compares.
///
/// The registry does no locking of its own. Registration takes `&mut self`
/// and comparison takes `&self`; to share a registry between threads, put it
/// behind your own `RwLock` or `Mutex`.
///
/// # Examples
///
/// ```
/// use sovran_anyeq::{AnyValue, ComparerRegistry, EqualityError};
///
/// #[derive(Clone)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let mut registry = ComparerRegistry::new();
/// registry.register(|a: &Point, b: &Point| a.x == b.x && a.y == b.y);
///
/// let p1 = AnyValue::new(Point { x: 1, y: 2 });
/// let p2 = AnyValue::new(Point { x: 1, y: 2 });
/// let p3 = AnyValue::new(Point { x: 1, y: 3 });
///
/// assert!(registry.equals(&p1, &p2)?);
/// assert!(!registry.equals(&p1, &p3)?);
///
/// // Different held types are never equal
/// assert!(!registry.equals(&p1, &AnyValue::new(12i32))?);
/// # Ok::<(), EqualityError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ComparerRegistry {
    comparers: HashMap<TypeId, Comparer>,
}

impl ComparerRegistry {
    /// Creates a registry seeded with comparers for the built-in numeric and text types
    ///
    /// Every seeded comparer is the type's own `==`:
    /// `i16`, `u16`, `i32`, `u32`, `i64`, `u64`, `usize`, `f32`, `f64`,
    /// `&'static str`, `String`, `Box<str>` and `Arc<str>`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_native::<i16>();
        registry.register_native::<u16>();
        registry.register_native::<i32>();
        registry.register_native::<u32>();
        registry.register_native::<i64>();
        registry.register_native::<u64>();
        registry.register_native::<usize>();
        registry.register_native::<f32>();
        registry.register_native::<f64>();
        registry.register_native::<&'static str>();
        registry.register_native::<String>();
        registry.register_native::<Box<str>>();
        registry.register_native::<Arc<str>>();
        registry
    }

    /// Creates a registry with no comparers at all
    pub fn empty() -> Self {
        Self {
            comparers: HashMap::new(),
        }
    }

    /// Registers the equality comparer for `T`, replacing any existing one
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_anyeq::{AnyValue, ComparerRegistry};
    ///
    /// let mut registry = ComparerRegistry::new();
    ///
    /// // Compare strings case-insensitively from now on
    /// registry.register(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    ///
    /// let upper = AnyValue::new("HELLO".to_string());
    /// let lower = AnyValue::new("hello".to_string());
    /// assert_eq!(registry.equals(&upper, &lower), Ok(true));
    /// ```
    pub fn register<T, F>(&mut self, comparer: F)
    where
        T: Any,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.insert(
            TypeId::of::<T>(),
            type_name::<T>(),
            Comparer::typed::<T, F>(comparer),
        );
    }

    /// Registers `T`'s own `==` as its comparer
    pub fn register_native<T: Any + PartialEq>(&mut self) {
        self.insert(TypeId::of::<T>(), type_name::<T>(), Comparer::native::<T>());
    }

    /// Registers a zero-argument comparer for the unit type `()`
    pub fn register_unit<F>(&mut self, comparer: F)
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.insert(TypeId::of::<()>(), type_name::<()>(), Comparer::unit(comparer));
    }

    /// Registers element-wise equality as the comparer for the sequence type `S`
    ///
    /// See [`SequenceEq`] for what qualifies as a sequence.
    pub fn register_sequence<S: Any + SequenceEq>(&mut self) {
        self.register::<S, _>(|a: &S, b: &S| a.sequence_eq(b));
    }

    /// Builder-style [`register`](Self::register)
    ///
    /// ```
    /// use sovran_anyeq::{AnyValue, ComparerRegistry};
    ///
    /// let registry = ComparerRegistry::empty()
    ///     .with(|a: &u8, b: &u8| a == b)
    ///     .with(|a: &bool, b: &bool| a == b);
    ///
    /// assert_eq!(registry.len(), 2);
    /// assert_eq!(
    ///     registry.equals(&AnyValue::new(true), &AnyValue::new(true)),
    ///     Ok(true)
    /// );
    /// ```
    pub fn with<T, F>(mut self, comparer: F) -> Self
    where
        T: Any,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.register::<T, F>(comparer);
        self
    }

    fn insert(&mut self, type_id: TypeId, type_name: &'static str, comparer: Comparer) {
        if self.comparers.insert(type_id, comparer).is_some() {
            log::debug!("[ComparerRegistry] replaced comparer for {}", type_name);
        } else {
            log::debug!("[ComparerRegistry] registered comparer for {}", type_name);
        }
    }

    /// Compares two erased values
    ///
    /// Values holding different types are unequal and no comparer is
    /// consulted. Otherwise the comparer registered for the held type
    /// decides.
    ///
    /// # Errors
    ///
    /// Returns `EqualityError::UnregisteredComparer` if both values hold the
    /// same type and no comparer is registered for it.
    pub fn equals(&self, left: &AnyValue, right: &AnyValue) -> Result<bool, EqualityError> {
        if left.type_id() != right.type_id() {
            log::trace!(
                "[ComparerRegistry] {} vs {}: different types",
                left.type_name(),
                right.type_name()
            );
            return Ok(false);
        }

        let comparer = self.comparers.get(&left.type_id()).ok_or_else(|| {
            log::debug!(
                "[ComparerRegistry] no comparer registered for {}",
                left.type_name()
            );
            EqualityError::UnregisteredComparer {
                type_name: left.type_name(),
            }
        })?;

        comparer.compare(left, right)
    }

    /// Borrows `value` together with this registry so it can be compared with `==`
    ///
    /// See [`DispatchEq`].
    pub fn bind<'a>(&'a self, value: &'a AnyValue) -> DispatchEq<'a> {
        DispatchEq::new(self, value)
    }

    /// Returns true if a comparer is registered for `T`
    pub fn contains<T: Any>(&self) -> bool {
        self.contains_type_id(TypeId::of::<T>())
    }

    /// Returns true if a comparer is registered for the given type identity
    pub fn contains_type_id(&self, type_id: TypeId) -> bool {
        self.comparers.contains_key(&type_id)
    }

    /// Returns the number of registered comparers
    pub fn len(&self) -> usize {
        self.comparers.len()
    }

    /// Returns true if no comparers are registered
    pub fn is_empty(&self) -> bool {
        self.comparers.is_empty()
    }
}

impl Default for ComparerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Opaque;

    #[test]
    fn test_seed_set() {
        let registry = ComparerRegistry::new();
        assert_eq!(registry.len(), 13);
        assert!(registry.contains::<i16>());
        assert!(registry.contains::<u16>());
        assert!(registry.contains::<i32>());
        assert!(registry.contains::<u32>());
        assert!(registry.contains::<i64>());
        assert!(registry.contains::<u64>());
        assert!(registry.contains::<usize>());
        assert!(registry.contains::<f32>());
        assert!(registry.contains::<f64>());
        assert!(registry.contains::<&'static str>());
        assert!(registry.contains::<String>());
        assert!(registry.contains::<Box<str>>());
        assert!(registry.contains::<Arc<str>>());

        assert!(!registry.contains::<u8>());
        assert!(!registry.contains::<isize>());
        assert!(!registry.contains::<Opaque>());
    }

    #[test]
    fn test_empty_registry() {
        let registry = ComparerRegistry::empty();
        assert!(registry.is_empty());

        let result = registry.equals(&AnyValue::new(1i32), &AnyValue::new(1i32));
        assert_eq!(
            result,
            Err(EqualityError::UnregisteredComparer { type_name: "i32" })
        );
    }

    #[test]
    fn test_default_is_seeded() {
        assert_eq!(ComparerRegistry::default().len(), ComparerRegistry::new().len());
    }

    #[test]
    fn test_unregistered_type() {
        let registry = ComparerRegistry::new();
        let result = registry.equals(&AnyValue::new(Opaque), &AnyValue::new(Opaque));

        match result {
            Err(EqualityError::UnregisteredComparer { type_name }) => {
                assert!(type_name.ends_with("Opaque"));
            }
            other => panic!("expected UnregisteredComparer, got {:?}", other),
        }
    }

    #[test]
    fn test_type_mismatch_skips_lookup() {
        // Neither type is registered, but differing types short-circuit
        let registry = ComparerRegistry::empty();
        let result = registry.equals(&AnyValue::new(Opaque), &AnyValue::new(1u8));
        assert_eq!(result, Ok(false));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ComparerRegistry::new();
        let a = AnyValue::new(1i32);
        let b = AnyValue::new(2i32);
        assert_eq!(registry.equals(&a, &b), Ok(false));

        registry.register(|_: &i32, _: &i32| true);
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.equals(&a, &b), Ok(true));
        assert_eq!(registry.equals(&a, &a), Ok(true));
    }

    #[test]
    fn test_register_unit() {
        let mut registry = ComparerRegistry::empty();
        let a = AnyValue::new(());
        let b = AnyValue::new(());
        assert!(registry.equals(&a, &b).is_err());

        registry.register_unit(|| true);
        assert_eq!(registry.equals(&a, &b), Ok(true));
    }

    #[test]
    fn test_register_sequence() {
        let mut registry = ComparerRegistry::empty();
        registry.register_sequence::<Vec<u8>>();

        let s1 = AnyValue::new(vec![1u8, 2, 3]);
        let s2 = AnyValue::new(vec![1u8, 2, 3]);
        let s3 = AnyValue::new(vec![1u8, 2]);
        assert_eq!(registry.equals(&s1, &s2), Ok(true));
        assert_eq!(registry.equals(&s1, &s3), Ok(false));
    }

    #[test]
    fn test_lengths_compare() {
        let registry = ComparerRegistry::new();
        let len = AnyValue::new(vec![1, 2, 3].len());
        assert_eq!(registry.equals(&len, &AnyValue::new(3usize)), Ok(true));
        assert_eq!(registry.equals(&len, &AnyValue::new(4usize)), Ok(false));

        // usize and u64 stay distinct types
        assert_eq!(registry.equals(&len, &AnyValue::new(3u64)), Ok(false));
    }

    #[test]
    fn test_float_semantics() {
        let registry = ComparerRegistry::new();
        let nan = AnyValue::new(f64::NAN);
        assert_eq!(registry.equals(&nan, &nan), Ok(false));

        let zero = AnyValue::new(0.0f32);
        let neg_zero = AnyValue::new(-0.0f32);
        assert_eq!(registry.equals(&zero, &neg_zero), Ok(true));
    }

    #[test]
    fn test_text_types_compare_content() {
        let registry = ComparerRegistry::new();

        let owned = String::from("abc");
        let a = AnyValue::new(owned.as_str().to_owned().into_boxed_str());
        let b = AnyValue::new(Box::<str>::from("abc"));
        assert_eq!(registry.equals(&a, &b), Ok(true));

        let a: AnyValue = AnyValue::new(Arc::<str>::from("abc"));
        let b: AnyValue = AnyValue::new(Arc::<str>::from("abd"));
        assert_eq!(registry.equals(&a, &b), Ok(false));

        // &str and String are distinct types
        let a = AnyValue::new("abc");
        let b = AnyValue::new(String::from("abc"));
        assert_eq!(registry.equals(&a, &b), Ok(false));
    }
}
