use crate::any_value::AnyValue;
use crate::error::EqualityError;
use std::any::Any;
use std::sync::Arc;

/// A type-erased comparer as stored in a [`ComparerRegistry`](crate::ComparerRegistry)
///
/// Receives both operands still erased; it reads them back as its own type
/// before comparing. Reading back can only fail if the comparer is invoked
/// on values it was not registered for.
#[derive(Clone)]
pub(crate) struct Comparer {
    func: Arc<dyn Fn(&AnyValue, &AnyValue) -> Result<bool, EqualityError> + Send + Sync>,
}

impl Comparer {
    /// Wraps a typed comparer for `T`
    pub(crate) fn typed<T, F>(func: F) -> Self
    where
        T: Any,
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(
                move |left: &AnyValue, right: &AnyValue| -> Result<bool, EqualityError> {
                    let left = left.try_downcast_ref::<T>()?;
                    let right = right.try_downcast_ref::<T>()?;
                    Ok(func(left, right))
                },
            ),
        }
    }

    /// Wraps a comparer for `T`'s own `==`
    pub(crate) fn native<T: Any + PartialEq>() -> Self {
        Self::typed(|left: &T, right: &T| left == right)
    }

    /// Wraps a zero-argument comparer for the unit type
    ///
    /// `()` carries no data, so the comparer decides the result on its own.
    pub(crate) fn unit<F>(func: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(
                move |left: &AnyValue, right: &AnyValue| -> Result<bool, EqualityError> {
                    left.try_downcast_ref::<()>()?;
                    right.try_downcast_ref::<()>()?;
                    Ok(func())
                },
            ),
        }
    }

    /// Runs the comparer on two erased values
    pub(crate) fn compare(&self, left: &AnyValue, right: &AnyValue) -> Result<bool, EqualityError> {
        (self.func)(left, right)
    }
}

impl std::fmt::Debug for Comparer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Comparer")
    }
}
