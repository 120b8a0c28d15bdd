//! Error types for generation.
//!
//! Two layers:
//! - [`SchemaFault`]: a type's declaration cannot be turned into a schema. This is a
//!   build diagnostic for one type and never shows up in generated code.
//! - [`GenerateError`]: a failure of one type's generation pass, tagged with the type name
//!   so the caller can report it and carry on with the other types.

use crate::capability::Capability;
use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a type declaration could not be turned into a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaFault {
    #[error("tuple and unit structs are not supported, use named fields")]
    UnnamedFields,

    #[error("generic type parameters are not supported on the target type")]
    GenericTarget,

    #[error("field `{field}` has unsupported type `{ty}`")]
    UnsupportedType { field: String, ty: String },

    #[error("field `{field}` nests `Option` inside `Option`")]
    NestedOption { field: String },

    #[error("field `{field}` is marked nested but `{ty}` is not an annotated convertible type")]
    UnresolvedNestedType { field: String, ty: String },

    #[error("field `{field}` type `{ty}` matches several annotated types: {}", .candidates.join(", "))]
    AmbiguousNestedType {
        field: String,
        ty: String,
        candidates: Vec<String>,
    },

    #[error("field `{field}` type `{ty}` does not request {capability}")]
    MissingNestedCapability {
        field: String,
        ty: String,
        capability: Capability,
    },

    #[error("field `{field}` has generic argument `{argument}` with no resolvable type identity")]
    UnresolvedGenericArgument { field: String, argument: String },

    #[error("field `{field}` uses convertible type `{argument}` as a generic argument")]
    UnsupportedGenericArgument { field: String, argument: String },

    #[error("constructor `{name}` not found in an inherent impl of the type")]
    MissingConstructor { name: String },

    #[error("constructor `{constructor}` parameter `{parameter}` matches no property")]
    UnmatchedConstructorParameter {
        constructor: String,
        parameter: String,
    },

    #[error("unknown capability `{name}` (expected Serialize, Deserialize or Greet)")]
    UnknownCapability { name: String },

    #[error("unknown naming strategy `{selector}`")]
    UnknownNamingStrategy { selector: String },

    #[error("invalid file name suffix `{suffix}`")]
    InvalidSuffix { suffix: String },

    #[error("conflicting `{option}` in repeated requests: `{first}` vs `{second}`")]
    ConflictingRequest {
        option: &'static str,
        first: String,
        second: String,
    },

    #[error("invalid auto_convert attribute: {message}")]
    InvalidAttribute { message: String },

    #[error("fields `{first}` and `{second}` both map to key `{key}`")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("artifact `{file_name}` is also generated for {}", .others.join(", "))]
    ArtifactNameCollision {
        file_name: String,
        others: Vec<String>,
    },

    #[error(
        "constructor `{constructor}` parameter `{parameter}` has type `{found}`, field is `{expected}`"
    )]
    ConstructorParameterType {
        constructor: String,
        parameter: String,
        expected: String,
        found: String,
    },
}

impl SchemaFault {
    /// Returns a stable numeric code for diagnostics
    pub fn code(&self) -> u32 {
        match self {
            SchemaFault::UnnamedFields => 1,
            SchemaFault::GenericTarget => 2,
            SchemaFault::UnsupportedType { .. } => 3,
            SchemaFault::NestedOption { .. } => 4,
            SchemaFault::UnresolvedNestedType { .. } => 5,
            SchemaFault::AmbiguousNestedType { .. } => 6,
            SchemaFault::MissingNestedCapability { .. } => 7,
            SchemaFault::UnresolvedGenericArgument { .. } => 8,
            SchemaFault::UnsupportedGenericArgument { .. } => 9,
            SchemaFault::MissingConstructor { .. } => 10,
            SchemaFault::UnmatchedConstructorParameter { .. } => 11,
            SchemaFault::UnknownCapability { .. } => 12,
            SchemaFault::UnknownNamingStrategy { .. } => 13,
            SchemaFault::InvalidSuffix { .. } => 14,
            SchemaFault::ConflictingRequest { .. } => 15,
            SchemaFault::InvalidAttribute { .. } => 16,
            SchemaFault::DuplicateKey { .. } => 17,
            SchemaFault::ArtifactNameCollision { .. } => 18,
            SchemaFault::ConstructorParameterType { .. } => 19,
        }
    }
}

impl From<darling::Error> for SchemaFault {
    fn from(err: darling::Error) -> Self {
        SchemaFault::InvalidAttribute {
            message: err.to_string(),
        }
    }
}

/// Failure of one type's generation pass.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("cannot generate `{type_name}`: {fault}")]
    Schema {
        type_name: String,
        #[source]
        fault: SchemaFault,
    },

    #[error("cannot write artifact for `{type_name}` to {path:?}")]
    Write {
        type_name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GenerateError {
    pub fn schema(type_name: impl Into<String>, fault: SchemaFault) -> Self {
        GenerateError::Schema {
            type_name: type_name.into(),
            fault,
        }
    }

    /// The type whose pass failed, if the failure belongs to one type
    pub fn type_name(&self) -> Option<&str> {
        match self {
            GenerateError::Schema { type_name, .. } | GenerateError::Write { type_name, .. } => {
                Some(type_name)
            }
            GenerateError::Config(_) => None,
        }
    }
}
