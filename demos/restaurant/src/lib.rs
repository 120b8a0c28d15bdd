//! restaurant-demo - Example autoconvert consumer
//!
//! The types in [`models`] declare their capabilities with
//! `#[derive(AutoConvert)]`; `build.rs` generates the implementations and
//! each type includes its artifact from `OUT_DIR`.

pub mod models;

pub use models::{Address, Host, Manager, Marker, Restaurant, Venue};
