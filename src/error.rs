use std::fmt;

/// Errors that can occur when comparing type-erased values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EqualityError {
    /// Both values hold the same type, but no comparer is registered for it
    UnregisteredComparer {
        /// Name of the held type, as reported by `std::any::type_name`
        type_name: &'static str,
    },
    /// An erased value was read back as a type other than the one it holds
    DowncastMismatch {
        /// The type the caller asked for
        expected: &'static str,
        /// The type actually stored
        found: &'static str,
    },
}

impl fmt::Display for EqualityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EqualityError::UnregisteredComparer { type_name } => {
                write!(f, "Equal function for type {} is unregistered", type_name)
            }
            EqualityError::DowncastMismatch { expected, found } => {
                write!(f, "Downcast mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for EqualityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_message_names_type() {
        let err = EqualityError::UnregisteredComparer {
            type_name: "my_crate::Point",
        };
        assert_eq!(
            err.to_string(),
            "Equal function for type my_crate::Point is unregistered"
        );
    }

    #[test]
    fn test_mismatch_message() {
        let err = EqualityError::DowncastMismatch {
            expected: "i32",
            found: "alloc::string::String",
        };
        assert!(err.to_string().starts_with("Downcast mismatch"));
        assert!(err.to_string().contains("expected i32"));
        assert!(err.to_string().contains("found alloc::string::String"));
    }
}
