//! autoconvert-core - Runtime support for generated conversion code
//!
//! Artifacts written by `autoconvert-codegen` implement the traits in this crate
//! and call its helpers:
//! - [`ToMap`] and [`FromMap`] for conversion to and from a [`Map`]
//! - [`Greet`] for the greeting capability
//! - [`ConvertFault`] for every runtime failure a generated function can return

mod convert;
mod fault;
mod traits;

pub use convert::{
    optional_nested, optional_scalar, put_nested, put_scalar, require_nested, require_scalar,
};
pub use fault::{ConvertFault, ConvertResult};
pub use traits::{FromMap, Greet, ToMap};

pub use serde_json::Value;

/// The generic key-value representation generated code converts to and from.
pub type Map = serde_json::Map<String, Value>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConvertFault, ConvertResult, FromMap, Greet, Map, ToMap, Value};
}
