//! # sovran-anyeq
//!
//! Runtime equality for type-erased values.
//!
//! `sovran-anyeq` lets code compare two values whose concrete type is only
//! known at runtime. Values are erased into an [`AnyValue`], which remembers
//! the identity of the held type. A [`ComparerRegistry`] maps each type
//! identity to the function that decides equality for it, so comparing two
//! erased values is a lookup followed by a call.
//!
//! ## Key Features
//!
//! - **Open dispatch**: any type can take part by registering a comparer
//! - **Seeded**: the built-in integer, float and text types work out of the box
//! - **Checked**: values are read back through `TypeId` checks, never unchecked casts
//! - **No hidden globals**: the registry is an ordinary value you own and pass around
//! - **Sequence equality**: an opt-in element-wise `==` for iterable types
//!
//! ## Usage Examples
//!
//! ### Comparing Erased Values
//!
//! ```rust
//! use sovran_anyeq::{AnyValue, ComparerRegistry, EqualityError};
//!
//! fn main() -> Result<(), EqualityError> {
//!     let registry = ComparerRegistry::new();
//!
//!     let a = AnyValue::new(42i32);
//!     let b = AnyValue::new(42i32);
//!     let c = AnyValue::new("42");
//!
//!     // Same type, compared by the registered comparer
//!     assert!(registry.equals(&a, &b)?);
//!
//!     // Different types are simply unequal
//!     assert!(!registry.equals(&a, &c)?);
//!
//!     // When the type is known, no registry is needed
//!     assert!(a.eq_value(&42i32)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Registering Your Own Types
//!
//! ```rust
//! use sovran_anyeq::{AnyValue, ComparerRegistry, EqualityError};
//!
//! #[derive(Clone)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let mut registry = ComparerRegistry::new();
//! let p1 = AnyValue::new(Point { x: 1, y: 2 });
//! let p2 = AnyValue::new(Point { x: 1, y: 2 });
//!
//! // Nothing is registered for Point yet
//! match registry.equals(&p1, &p2) {
//!     Ok(equal) => println!("Equal: {}", equal),
//!     Err(EqualityError::UnregisteredComparer { type_name }) => {
//!         println!("Register a comparer for {}", type_name)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! registry.register(|a: &Point, b: &Point| a.x == b.x && a.y == b.y);
//! assert_eq!(registry.equals(&p1, &p2), Ok(true));
//! ```
//!
//! ### Using `==` on Erased Values
//!
//! ```rust
//! use sovran_anyeq::{AnyValue, ComparerRegistry};
//!
//! let registry = ComparerRegistry::new();
//! let haystack = vec![AnyValue::new(1u16), AnyValue::new(String::from("x"))];
//! let needle = AnyValue::new(String::from("x"));
//!
//! let found = haystack
//!     .iter()
//!     .map(|v| registry.bind(v))
//!     .position(|v| v == needle);
//! assert_eq!(found, Some(1));
//! ```
//!
//! ### Sharing a Registry Between Threads
//!
//! The registry does no locking of its own. Wrap it when it is shared:
//!
//! ```rust
//! use sovran_anyeq::{AnyValue, ComparerRegistry};
//! use std::sync::{Arc, RwLock};
//! use std::thread;
//!
//! let registry = Arc::new(RwLock::new(ComparerRegistry::new()));
//!
//! let reader = {
//!     let registry = Arc::clone(&registry);
//!     thread::spawn(move || {
//!         registry
//!             .read()
//!             .unwrap()
//!             .equals(&AnyValue::new(1u64), &AnyValue::new(1u64))
//!     })
//! };
//!
//! assert_eq!(reader.join().unwrap(), Ok(true));
//! ```

mod any_value;
mod comparer;
mod dispatch;
mod error;
mod registry;
mod sequence;

pub use any_value::AnyValue;
pub use dispatch::{equals, equals_value, DispatchEq};
pub use error::EqualityError;
pub use registry::ComparerRegistry;
pub use sequence::{sequence_eq, SequenceEq};

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
