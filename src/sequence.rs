//! Element-wise equality for sequence types.
//!
//! Nothing here is applied implicitly. A sequence type adopts element-wise
//! equality either by calling [`sequence_eq`] directly, through the
//! [`SequenceEq`] trait, or by installing it as its `PartialEq` with
//! [`impl_sequence_eq!`](crate::impl_sequence_eq). Types that already
//! implement `PartialEq` keep their own definition.

/// Compares two sequences element by element, in iteration order
///
/// Returns `true` when both sequences have the same length and every pair of
/// corresponding elements is equal. When both iterators report an exact
/// length up front, differing lengths return `false` without visiting any
/// element.
///
/// # Examples
///
/// ```
/// use sovran_anyeq::sequence_eq;
/// use std::collections::VecDeque;
///
/// let deque: VecDeque<i32> = [1, 2, 3].into_iter().collect();
/// assert!(sequence_eq(&deque, &[1, 2, 3]));
/// assert!(!sequence_eq(&deque, &[1, 2]));
/// ```
pub fn sequence_eq<L, R>(left: L, right: R) -> bool
where
    L: IntoIterator,
    R: IntoIterator,
    L::Item: PartialEq<R::Item>,
{
    let left = left.into_iter();
    let right = right.into_iter();

    if let ((left_min, Some(left_max)), (right_min, Some(right_max))) =
        (left.size_hint(), right.size_hint())
    {
        if left_min == left_max && right_min == right_max && left_min != right_min {
            return false;
        }
    }

    left.eq(right)
}

/// Element-wise equality for any type whose references iterate over comparable items
///
/// Implemented for every such type, including ones without a `PartialEq` of
/// their own. Element equality is the element type's `PartialEq`, so nested
/// sequences that adopted [`impl_sequence_eq!`](crate::impl_sequence_eq)
/// compare recursively.
pub trait SequenceEq {
    /// Returns `true` if both sequences have equal elements in the same order
    fn sequence_eq(&self, other: &Self) -> bool;
}

impl<S> SequenceEq for S
where
    S: ?Sized,
    for<'a> &'a S: IntoIterator,
    for<'a> <&'a S as IntoIterator>::Item: PartialEq,
{
    fn sequence_eq(&self, other: &Self) -> bool {
        borrowed_eq(self, other)
    }
}

fn borrowed_eq<'a, S>(left: &'a S, right: &'a S) -> bool
where
    S: ?Sized,
    &'a S: IntoIterator,
    <&'a S as IntoIterator>::Item: PartialEq,
{
    sequence_eq::<&'a S, &'a S>(left, right)
}

/// Installs element-wise equality as a sequence type's `PartialEq`
///
/// The type must be iterable by reference (`&Type: IntoIterator`) and its
/// items must be `PartialEq`.
///
/// Three forms are accepted:
///
/// - a plain or path-qualified type: `impl_sequence_eq!(Row)`,
///   `impl_sequence_eq!(crate::grid::Row)`
/// - a type with plain type parameters: `impl_sequence_eq!(Wrapper<T>)`
/// - anything else (lifetimes, bounds, const generics) with the generics
///   spelled out in brackets first:
///   `impl_sequence_eq!(['s, T: Copy] Window<'s, T>)`
///
/// # Examples
///
/// ```
/// use sovran_anyeq::impl_sequence_eq;
///
/// struct Path(Vec<u32>);
///
/// impl<'a> IntoIterator for &'a Path {
///     type Item = &'a u32;
///     type IntoIter = std::slice::Iter<'a, u32>;
///
///     fn into_iter(self) -> Self::IntoIter {
///         self.0.iter()
///     }
/// }
///
/// impl_sequence_eq!(Path);
///
/// assert!(Path(vec![1, 2]) == Path(vec![1, 2]));
/// assert!(Path(vec![1, 2]) != Path(vec![1]));
/// ```
#[macro_export]
macro_rules! impl_sequence_eq {
    ([$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> ::core::cmp::PartialEq for $ty
        where
            Self: $crate::SequenceEq,
        {
            fn eq(&self, other: &Self) -> bool {
                $crate::SequenceEq::sequence_eq(self, other)
            }
        }
    };
    ($ty:ident < $($param:ident),+ >) => {
        $crate::impl_sequence_eq!([$($param),+] $ty<$($param),+>);
    };
    ($ty:path) => {
        impl ::core::cmp::PartialEq for $ty
        where
            Self: $crate::SequenceEq,
        {
            fn eq(&self, other: &Self) -> bool {
                $crate::SequenceEq::sequence_eq(self, other)
            }
        }
    };
}
