//! # autoconvert
//!
//! Generated conversions between Rust structs and generic key-value maps.
//!
//! A struct declares what it wants; a build step writes the implementations:
//! - **Serialize**: [`ToMap::to_map`] turns the value into a [`Map`]
//! - **Deserialize**: [`FromMap::from_map`] rebuilds it, all-or-nothing
//! - **Greet**: [`Greet::say_hello`] prints a greeting
//!
//! ## Quick Start
//!
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! autoconvert = "0.1"
//!
//! [build-dependencies]
//! autoconvert-codegen = "0.1"
//! ```
//!
//! `build.rs`:
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     autoconvert_codegen::Builder::new()
//!         .source("src/models.rs")
//!         .runtime_crate("::autoconvert")
//!         .generate()?;
//!     Ok(())
//! }
//! ```
//!
//! `src/models.rs`:
//!
//! ```ignore
//! use autoconvert::prelude::*;
//!
//! #[derive(Debug, PartialEq, AutoConvert)]
//! #[auto_convert(capabilities(Serialize, Deserialize))]
//! pub struct Restaurant {
//!     pub price: f32,
//! }
//!
//! include!(concat!(env!("OUT_DIR"), "/RestaurantAutoConvert.rs"));
//!
//! let map = Restaurant { price: 5.0 }.to_map()?;
//! assert_eq!(Restaurant::from_map(&map)?, Restaurant { price: 5.0 });
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`autoconvert_core`] - Runtime traits, helpers and [`ConvertFault`]
//! - [`autoconvert_macros`] - The `AutoConvert` derive

// Re-export the runtime, including the helpers generated code calls
pub use autoconvert_core::{
    ConvertFault, ConvertResult, FromMap, Greet, Map, ToMap, Value, optional_nested,
    optional_scalar, put_nested, put_scalar, require_nested, require_scalar,
};

// Re-export macros
pub use autoconvert_macros::AutoConvert;

pub use serde_json;

/// Prelude module for convenient imports.
///
/// Use `use autoconvert::prelude::*;` to import the capability traits, the
/// fault type and the derive.
pub mod prelude {
    pub use crate::{ConvertFault, ConvertResult, FromMap, Greet, Map, ToMap, Value};

    pub use autoconvert_macros::AutoConvert;
}
