//! Parsing of `#[auto_convert(...)]` declarations.
//!
//! Type level:
//!
//! ```ignore
//! #[derive(AutoConvert)]
//! #[auto_convert(capabilities(Serialize, Deserialize), naming = "snake_case", suffix = "Map")]
//! #[auto_convert(constructor = "new")]
//! pub struct Restaurant { .. }
//! ```
//!
//! Repeated attributes are merged. Capabilities union and duplicates collapse;
//! `naming`, `suffix` and `constructor` may repeat only with the same value.
//!
//! Field level: `#[auto_convert(nested)]` asserts that the field's type is an
//! annotated convertible type, turning a lookup miss into a schema fault.
//!
//! The same parsing backs the `AutoConvert` derive, so an attribute the
//! derive accepts is one the generator accepts.

use crate::capability::{Capability, CapabilitySet};
use crate::config::is_valid_suffix;
use crate::error::SchemaFault;
use crate::naming::NamingStrategy;
use darling::FromMeta;
use darling::util::PathList;
use std::fmt::Display;
use syn::punctuated::Punctuated;
use syn::{Attribute, Meta, Token};

/// Attribute name for declarations
pub const ATTRIBUTE: &str = "auto_convert";

/// Derive macro name marking a type as annotated
pub const DERIVE: &str = "AutoConvert";

#[derive(Debug, Default, FromMeta)]
struct TypeArgs {
    capabilities: Option<PathList>,
    naming: Option<String>,
    suffix: Option<String>,
    constructor: Option<String>,
}

#[derive(Debug, Default, FromMeta)]
struct FieldArgs {
    #[darling(default)]
    nested: bool,
}

/// The merged type-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeRequest {
    pub capabilities: CapabilitySet,
    pub naming: Option<NamingStrategy>,
    pub suffix: Option<String>,
    pub constructor: Option<String>,
}

impl TypeRequest {
    /// Merge every `#[auto_convert]` attribute in `attrs`.
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self, SchemaFault> {
        let mut request = TypeRequest::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
            let args = match &attr.meta {
                Meta::Path(_) => TypeArgs::default(),
                meta => TypeArgs::from_meta(meta)?,
            };
            request.merge(args)?;
        }

        Ok(request)
    }

    /// Whether the type exposes the Serialize/Deserialize family
    pub fn is_convertible(&self) -> bool {
        self.capabilities.iter().any(|c| c.is_conversion())
    }

    fn merge(&mut self, args: TypeArgs) -> Result<(), SchemaFault> {
        if let Some(paths) = args.capabilities {
            for path in paths.iter() {
                let capability = path
                    .get_ident()
                    .and_then(|ident| Capability::from_ident(&ident.to_string()))
                    .ok_or_else(|| SchemaFault::UnknownCapability {
                        name: quote::quote!(#path).to_string().replace(' ', ""),
                    })?;
                self.capabilities.insert(capability);
            }
        }

        if let Some(selector) = args.naming {
            let naming = selector
                .parse::<NamingStrategy>()
                .map_err(|selector| SchemaFault::UnknownNamingStrategy { selector })?;
            merge_value(&mut self.naming, naming, "naming")?;
        }

        if let Some(suffix) = args.suffix {
            if !is_valid_suffix(&suffix) {
                return Err(SchemaFault::InvalidSuffix { suffix });
            }
            merge_value(&mut self.suffix, suffix, "suffix")?;
        }

        if let Some(constructor) = args.constructor {
            if syn::parse_str::<syn::Ident>(&constructor).is_err() {
                return Err(SchemaFault::InvalidAttribute {
                    message: format!("constructor `{constructor}` is not an identifier"),
                });
            }
            merge_value(&mut self.constructor, constructor, "constructor")?;
        }

        Ok(())
    }
}

/// Field-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldOptions {
    pub nested: bool,
}

impl FieldOptions {
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self, SchemaFault> {
        let mut options = FieldOptions::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
            if let Meta::Path(_) = attr.meta {
                continue;
            }
            let args = FieldArgs::from_meta(&attr.meta)?;
            options.nested |= args.nested;
        }

        Ok(options)
    }
}

/// Whether a declaration carries `#[derive(AutoConvert)]` or `#[auto_convert]`.
pub fn is_annotated(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .any(|attr| attr.path().is_ident(ATTRIBUTE) || derives_auto_convert(attr))
}

fn derives_auto_convert(attr: &Attribute) -> bool {
    if !attr.path().is_ident("derive") {
        return false;
    }

    attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
        .map(|paths| {
            paths
                .iter()
                .any(|p| p.segments.last().is_some_and(|s| s.ident == DERIVE))
        })
        .unwrap_or(false)
}

fn merge_value<T>(slot: &mut Option<T>, value: T, option: &'static str) -> Result<(), SchemaFault>
where
    T: PartialEq + Display,
{
    match slot {
        Some(existing) if *existing != value => Err(SchemaFault::ConflictingRequest {
            option,
            first: existing.to_string(),
            second: value.to_string(),
        }),
        _ => {
            *slot = Some(value);
            Ok(())
        }
    }
}
