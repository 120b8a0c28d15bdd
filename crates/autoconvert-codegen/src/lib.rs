//! autoconvert-codegen - Schema extraction and code synthesis
//!
//! Reads Rust sources, finds structs declared with `#[derive(AutoConvert)]` /
//! `#[auto_convert(...)]`, and writes one artifact per type implementing the
//! requested capabilities against `autoconvert-core`.
//!
//! # Pipeline
//!
//! ```text
//! sources ──► TypeRegistry ──► extract_schema ──► TypeSchema
//!                                                    │
//!                       synth::{serialize, deserialize, greet}
//!                                                    │
//!                                                    ▼
//!                      ImplBlock IR ──► Emitter ──► GeneratedArtifact ──► ArtifactWriter
//! ```
//!
//! Each type gets its own pass. A [`SchemaFault`] aborts that pass only and is
//! reported with the type name; the other types are still generated.
//!
//! # Entry points
//!
//! - [`Builder`] for `build.rs`
//! - [`Generator`] for driving runs directly (the CLI uses this)

pub mod attrs;
pub mod builder;
pub mod capability;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generator;
pub mod ir;
pub mod naming;
pub mod registry;
pub mod render;
pub mod schema;
pub mod source;
pub mod synth;

pub use builder::Builder;
pub use capability::{Capability, CapabilitySet};
pub use config::{ConfigError, GeneratorConfig};
pub use emit::{ArtifactWriter, FsArtifactWriter, GeneratedArtifact, WrittenArtifact};
pub use error::{GenerateError, SchemaFault};
pub use generator::{GenerationReport, Generator};
pub use naming::NamingStrategy;
pub use registry::{DeclaredType, TypeRegistry};
pub use schema::{PropertyDescriptor, PropertyKind, TypeSchema};
