//! Schema model driving synthesis.
//!
//! A [`TypeSchema`] is built once per generation pass by the extractor and
//! is read-only afterwards. Synthesizers dispatch over the closed
//! [`PropertyKind`] set and never look at `syn` types.
//!
//! # Structure
//!
//! - [`TypeSchema`]: the target type, its properties, and how to construct it
//! - [`PropertyDescriptor`]: one field with its classification
//! - [`ConstructorParameter`]: one construction argument, matched to a property by name
//! - [`TypeIdent`]: a type path with ordered type arguments

use crate::capability::CapabilitySet;
use crate::naming::NamingStrategy;
use std::fmt;

/// Identity of a declared type: its path and ordered type arguments.
///
/// Displays as Rust source, e.g. `std::collections::HashMap<String, u32>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeIdent {
    /// Path as written, segments joined with `::`
    pub path: String,

    /// Type arguments of the last segment
    pub args: Vec<TypeIdent>,
}

impl TypeIdent {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(path: impl Into<String>, args: Vec<TypeIdent>) -> Self {
        Self {
            path: path.into(),
            args,
        }
    }

    /// Last path segment (`Address` for `crate::models::Address`)
    pub fn simple_name(&self) -> &str {
        self.path.rsplit("::").next().unwrap_or(&self.path)
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }

    pub fn is_option(&self) -> bool {
        matches!(
            self.path.as_str(),
            "Option" | "std::option::Option" | "core::option::Option" | "::std::option::Option"
        )
    }
}

impl fmt::Display for TypeIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// The closed set of property shapes synthesis handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Scalar,
    NullableScalar,
    NestedConvertible,
    NullableNestedConvertible,
    /// A non-convertible type with type arguments; nullability is read from the descriptor
    Generic,
}

/// One property of the target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name used for key resolution (raw prefix stripped)
    pub name: String,

    /// Identifier as it must appear in Rust source (`r#type` for `type`)
    pub ident: String,

    /// Declared type, with `Option` stripped when `nullable`
    pub ty: TypeIdent,

    pub nullable: bool,

    /// The declared type requests the Serialize/Deserialize family itself
    pub nested_convertible: bool,

    /// Ordered type arguments, empty for non-generic types
    pub generic_args: Vec<TypeIdent>,
}

impl PropertyDescriptor {
    pub fn kind(&self) -> PropertyKind {
        match (self.nested_convertible, self.nullable) {
            (true, false) => PropertyKind::NestedConvertible,
            (true, true) => PropertyKind::NullableNestedConvertible,
            (false, _) if !self.generic_args.is_empty() => PropertyKind::Generic,
            (false, false) => PropertyKind::Scalar,
            (false, true) => PropertyKind::NullableScalar,
        }
    }
}

/// A construction argument, matched to a property by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorParameter {
    pub name: String,

    /// Index into [`TypeSchema::properties`]
    pub property: usize,
}

/// How deserialization builds the value once every parameter resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construction {
    /// `Self { a, b, .. }`, parameters are all fields in declaration order
    StructLiteral,

    /// `Self::name(a, b, ..)`, parameters follow the function signature
    Function(String),
}

/// Structural description of one target type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSchema {
    pub name: String,

    /// Module path of the declaration, e.g. `crate::models`
    pub namespace: String,

    pub capabilities: CapabilitySet,

    pub naming: NamingStrategy,

    /// Output file stem suffix
    pub suffix: String,

    /// Serialization order
    pub properties: Vec<PropertyDescriptor>,

    /// Deserialization order
    pub parameters: Vec<ConstructorParameter>,

    pub construction: Construction,
}

impl TypeSchema {
    /// Fully qualified type path
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace, self.name)
    }

    /// Key for a property under this schema's naming strategy
    pub fn key_for(&self, property: &PropertyDescriptor) -> String {
        self.naming.resolve(&property.name)
    }

    /// Iterate constructor parameters with their matched properties
    pub fn parameter_properties(
        &self,
    ) -> impl Iterator<Item = (&ConstructorParameter, &PropertyDescriptor)> {
        self.parameters
            .iter()
            .filter_map(|p| self.properties.get(p.property).map(|prop| (p, prop)))
    }

    /// Artifact file name, `<TypeName><suffix>.rs`
    pub fn file_name(&self) -> String {
        format!("{}{}.rs", self.name, self.suffix)
    }
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;
