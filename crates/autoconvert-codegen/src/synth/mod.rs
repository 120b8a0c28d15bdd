//! Synthesizers: one per capability, each turning a [`TypeSchema`] into an
//! [`ImplBlock`].
//!
//! Synthesis is pure. It reads the schema, dispatches on [`PropertyKind`] and
//! returns IR; nothing here touches the filesystem.
//!
//! [`PropertyKind`]: crate::schema::PropertyKind

pub mod deserialize;
pub mod greet;
pub mod serialize;

use crate::capability::Capability;
use crate::ir::ImplBlock;
use crate::schema::{PropertyDescriptor, TypeSchema};
use tracing::debug;

/// Synthesize one block per requested capability, in canonical order.
pub fn synthesize(schema: &TypeSchema) -> Vec<ImplBlock> {
    schema
        .capabilities
        .iter()
        .map(|&capability| synthesize_capability(schema, capability))
        .collect()
}

pub fn synthesize_capability(schema: &TypeSchema, capability: Capability) -> ImplBlock {
    debug!(
        type_name = %schema.qualified_name(),
        %capability,
        "Synthesizing capability"
    );

    match capability {
        Capability::Serialize => serialize::synthesize(schema),
        Capability::Deserialize => deserialize::synthesize(schema),
        Capability::Greet => greet::synthesize(schema),
    }
}

/// Type name reported in `TypeMismatch` faults: the full declared identity
/// with `Option` stripped, e.g. `f32` or `Vec<String>`.
fn expected_type(property: &PropertyDescriptor) -> String {
    property.ty.to_string()
}

#[cfg(test)]
#[path = "synth_tests.rs"]
mod synth_tests;
