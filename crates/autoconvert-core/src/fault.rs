//! Runtime faults returned by generated functions

use thiserror::Error;

/// Result type alias for generated conversion functions
pub type ConvertResult<T> = Result<T, ConvertFault>;

/// Why a generated conversion did not succeed.
///
/// Exactly one fault is returned per failed call. Nested failures keep the
/// inner fault as `cause`, reachable through [`std::error::Error::source`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertFault {
    /// A required key was absent, or a nested value was not map-shaped
    #[error("missing key: {key}")]
    MissingKey { key: String },

    /// A value was present but could not be converted to the declared type
    #[error("type mismatch for key {key}: expected {expected}")]
    TypeMismatch { key: String, expected: String },

    /// An explicit null was found where the declared type is not nullable
    #[error("null value for non-nullable key: {key}")]
    NullViolation { key: String },

    /// A nested convertible value failed to convert
    #[error("nested conversion failed for key {key}")]
    NestedConversion {
        key: String,
        #[source]
        cause: Box<ConvertFault>,
    },
}

impl ConvertFault {
    pub fn missing_key(key: impl Into<String>) -> Self {
        ConvertFault::MissingKey { key: key.into() }
    }

    pub fn type_mismatch(key: impl Into<String>, expected: impl Into<String>) -> Self {
        ConvertFault::TypeMismatch {
            key: key.into(),
            expected: expected.into(),
        }
    }

    pub fn null_violation(key: impl Into<String>) -> Self {
        ConvertFault::NullViolation { key: key.into() }
    }

    pub fn nested(key: impl Into<String>, cause: ConvertFault) -> Self {
        ConvertFault::NestedConversion {
            key: key.into(),
            cause: Box::new(cause),
        }
    }

    /// The key this fault was raised for, at this level of nesting
    pub fn key(&self) -> &str {
        match self {
            ConvertFault::MissingKey { key }
            | ConvertFault::TypeMismatch { key, .. }
            | ConvertFault::NullViolation { key }
            | ConvertFault::NestedConversion { key, .. } => key,
        }
    }

    /// Returns a stable numeric code for the fault kind
    pub fn code(&self) -> u32 {
        match self {
            ConvertFault::MissingKey { .. } => 1,
            ConvertFault::TypeMismatch { .. } => 2,
            ConvertFault::NullViolation { .. } => 3,
            ConvertFault::NestedConversion { .. } => 4,
        }
    }

    /// Follows `NestedConversion` causes down to the innermost fault
    pub fn root_cause(&self) -> &ConvertFault {
        let mut current = self;
        while let ConvertFault::NestedConversion { cause, .. } = current {
            current = &**cause;
        }
        current
    }

    /// Dotted key path from this fault to its root cause (e.g. `address.street`)
    pub fn key_path(&self) -> String {
        let mut keys = vec![self.key()];
        let mut current = self;
        while let ConvertFault::NestedConversion { cause, .. } = current {
            keys.push(cause.key());
            current = &**cause;
        }
        keys.join(".")
    }
}
