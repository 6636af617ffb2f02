//! Error enums for group construction and value conversion.

use thiserror::Error;

/// Structural problems detected while scanning a destination container.
///
/// These are recorded on the [`Group`](crate::Group) rather than returned, so
/// several groups can be built before any of them is checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GroupError {
    /// The container does not have a struct shape.
    #[error("provided data is not a reference to a struct")]
    NotAStructureReference,

    /// A `short` annotation holds more than a single character.
    #[error("short names can only be 1 character: field '{field}' has short name '{short}'")]
    ShortNameTooLong {
        /// Field carrying the offending annotation.
        field: String,
        /// Raw annotation value.
        short: String,
    },
}

/// Failures reported by the value conversion layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The raw string could not be coerced into the destination type.
    #[error("invalid value '{value}' for {target}: {reason}")]
    Malformed {
        /// Raw string supplied on the command line.
        value: String,
        /// Name of the destination type.
        target: &'static str,
        /// Explanation from the underlying parser.
        reason: String,
    },

    /// A coercion annotation such as `base` holds an unusable value.
    #[error("invalid `{key}` annotation '{value}': {reason}")]
    InvalidTag {
        /// Annotation key.
        key: &'static str,
        /// Annotation value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConvertError {
    /// Builds a [`ConvertError::Malformed`] for the destination type `T`.
    pub(crate) fn malformed<T>(value: &str, reason: impl ToString) -> Self {
        Self::Malformed {
            value: value.to_owned(),
            target: std::any::type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}
