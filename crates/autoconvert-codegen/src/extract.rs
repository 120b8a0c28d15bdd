//! Schema extraction: turning an annotated struct into a [`TypeSchema`].
//!
//! Extraction is the only place that looks at `syn` syntax trees for a type.
//! Everything downstream works off the schema.
//!
//! # Limitations
//!
//! - Tuple and unit structs are not supported when a conversion is requested
//! - Generic target types are not supported, including Greet-only ones: generated
//!   impls name the type without parameters
//! - Field types must be paths (`Vec<u8>`, `crate::models::Address`); references,
//!   tuples and arrays are faults
//! - A convertible type may not appear as a generic argument (`Vec<Address>`)
//! - Two properties may not map to the same key under the naming strategy
//! - Constructor parameters must be declared with their field's type; type
//!   aliases and `impl Trait` parameters are not seen through

use crate::attrs::FieldOptions;
use crate::capability::Capability;
use crate::config::GeneratorConfig;
use crate::error::SchemaFault;
use crate::registry::{DeclaredType, Lookup, TypeRegistry};
use crate::schema::{Construction, ConstructorParameter, PropertyDescriptor, TypeIdent, TypeSchema};
use quote::ToTokens;
use std::collections::HashMap;
use syn::ext::IdentExt;
use syn::{Fields, FnArg, GenericArgument, Pat, PathArguments, Type};

/// Build the schema for one declared type.
pub fn extract_schema(
    declared: &DeclaredType,
    registry: &TypeRegistry,
    config: &GeneratorConfig,
) -> Result<TypeSchema, SchemaFault> {
    let request = declared.request.clone()?;
    let item = &declared.item;

    if !item.generics.params.is_empty() {
        return Err(SchemaFault::GenericTarget);
    }

    let mut schema = TypeSchema {
        name: declared.name.clone(),
        namespace: declared.namespace.clone(),
        capabilities: request.capabilities.clone(),
        naming: request.naming.unwrap_or_default(),
        suffix: request
            .suffix
            .clone()
            .unwrap_or_else(|| config.default_suffix.clone()),
        properties: Vec::new(),
        parameters: Vec::new(),
        construction: Construction::StructLiteral,
    };

    // Greeting needs nothing beyond the type name.
    if !request.is_convertible() {
        return Ok(schema);
    }

    let Fields::Named(fields) = &item.fields else {
        return Err(SchemaFault::UnnamedFields);
    };

    let extractor = FieldExtractor {
        declared,
        registry,
        requested: request
            .capabilities
            .iter()
            .copied()
            .filter(|c| c.is_conversion())
            .collect(),
    };

    for field in &fields.named {
        schema.properties.push(extractor.property(field)?);
    }
    check_unique_keys(&schema)?;

    match &request.constructor {
        Some(name) => {
            schema.parameters = constructor_parameters(declared, registry, name, &schema)?;
            schema.construction = Construction::Function(name.clone());
        }
        None => {
            schema.parameters = schema
                .properties
                .iter()
                .enumerate()
                .map(|(property, p)| ConstructorParameter {
                    name: p.name.clone(),
                    property,
                })
                .collect();
        }
    }

    Ok(schema)
}

struct FieldExtractor<'a> {
    declared: &'a DeclaredType,
    registry: &'a TypeRegistry,

    /// Conversion capabilities the owner requests
    requested: Vec<Capability>,
}

impl FieldExtractor<'_> {
    fn property(&self, field: &syn::Field) -> Result<PropertyDescriptor, SchemaFault> {
        let Some(ident) = &field.ident else {
            return Err(SchemaFault::UnnamedFields);
        };
        let name = ident.unraw().to_string();
        let options = FieldOptions::from_attributes(&field.attrs)?;

        let declared_ty = type_ident(&field.ty, &name)?;
        let (ty, nullable) = strip_option(declared_ty, &name)?;

        let nested_convertible = if ty.is_generic() {
            if options.nested {
                return Err(SchemaFault::UnresolvedNestedType {
                    field: name,
                    ty: ty.to_string(),
                });
            }
            false
        } else {
            self.is_nested_convertible(&ty, &name, options.nested)?
        };

        for argument in &ty.args {
            self.check_generic_argument(argument, &name)?;
        }

        Ok(PropertyDescriptor {
            name,
            ident: ident.to_string(),
            generic_args: ty.args.clone(),
            ty,
            nullable,
            nested_convertible,
        })
    }

    fn is_nested_convertible(
        &self,
        ty: &TypeIdent,
        field: &str,
        marked_nested: bool,
    ) -> Result<bool, SchemaFault> {
        let unresolved = || SchemaFault::UnresolvedNestedType {
            field: field.to_string(),
            ty: ty.to_string(),
        };

        let target = match self.registry.resolve(ty, &self.declared.namespace) {
            Lookup::Found(target) => target,
            Lookup::NotFound if marked_nested => return Err(unresolved()),
            Lookup::NotFound => return Ok(false),
            Lookup::Ambiguous(candidates) => {
                return Err(SchemaFault::AmbiguousNestedType {
                    field: field.to_string(),
                    ty: ty.to_string(),
                    candidates,
                });
            }
        };

        let nested = match &target.request {
            Ok(request) if request.is_convertible() => request,
            _ if marked_nested => return Err(unresolved()),
            _ => return Ok(false),
        };

        if let Some(&capability) = self
            .requested
            .iter()
            .find(|c| !nested.capabilities.contains(*c))
        {
            return Err(SchemaFault::MissingNestedCapability {
                field: field.to_string(),
                ty: ty.to_string(),
                capability,
            });
        }

        Ok(true)
    }

    fn check_generic_argument(
        &self,
        argument: &TypeIdent,
        field: &str,
    ) -> Result<(), SchemaFault> {
        let convertible = match self.registry.resolve(argument, &self.declared.namespace) {
            Lookup::Found(target) => target
                .request
                .as_ref()
                .is_ok_and(|request| request.is_convertible()),
            Lookup::Ambiguous(_) => true,
            Lookup::NotFound => false,
        };

        if convertible && !argument.is_generic() {
            return Err(SchemaFault::UnsupportedGenericArgument {
                field: field.to_string(),
                argument: argument.to_string(),
            });
        }

        for inner in &argument.args {
            self.check_generic_argument(inner, field)?;
        }

        Ok(())
    }
}

/// Reject two properties resolving to the same key.
fn check_unique_keys(schema: &TypeSchema) -> Result<(), SchemaFault> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for property in &schema.properties {
        let key = schema.key_for(property);
        if let Some(first) = seen.get(key.as_str()) {
            return Err(SchemaFault::DuplicateKey {
                first: first.to_string(),
                second: property.name.clone(),
                key,
            });
        }
        seen.insert(key, &property.name);
    }

    Ok(())
}

/// Strip one level of `Option`, reporting whether the field is nullable.
fn strip_option(ty: TypeIdent, field: &str) -> Result<(TypeIdent, bool), SchemaFault> {
    if !ty.is_option() {
        return Ok((ty, false));
    }

    let mut args = ty.args.into_iter();
    match (args.next(), args.next()) {
        (Some(inner), None) if inner.is_option() => Err(SchemaFault::NestedOption {
            field: field.to_string(),
        }),
        (Some(inner), None) => Ok((inner, true)),
        _ => Err(SchemaFault::UnsupportedType {
            field: field.to_string(),
            ty: "Option".to_string(),
        }),
    }
}

/// Convert a field type into a [`TypeIdent`].
fn type_ident(ty: &Type, field: &str) -> Result<TypeIdent, SchemaFault> {
    let unsupported = || SchemaFault::UnsupportedType {
        field: field.to_string(),
        ty: tokens_text(ty),
    };

    let type_path = match ty {
        Type::Group(group) => return type_ident(&group.elem, field),
        Type::Paren(paren) => return type_ident(&paren.elem, field),
        Type::Path(type_path) if type_path.qself.is_none() => type_path,
        _ => return Err(unsupported()),
    };

    let path = &type_path.path;
    let mut segments = Vec::with_capacity(path.segments.len() + 1);
    if path.leading_colon.is_some() {
        segments.push(String::new());
    }

    let mut args = Vec::new();
    let last = path.segments.len().saturating_sub(1);
    for (i, segment) in path.segments.iter().enumerate() {
        segments.push(segment.ident.to_string());

        match &segment.arguments {
            PathArguments::None => {}
            PathArguments::AngleBracketed(bracketed) if i == last => {
                for argument in &bracketed.args {
                    args.push(generic_argument(argument, field)?);
                }
            }
            _ => return Err(unsupported()),
        }
    }

    Ok(TypeIdent::with_args(segments.join("::"), args))
}

fn generic_argument(argument: &GenericArgument, field: &str) -> Result<TypeIdent, SchemaFault> {
    let unresolved = || SchemaFault::UnresolvedGenericArgument {
        field: field.to_string(),
        argument: tokens_text(argument),
    };

    match argument {
        GenericArgument::Type(Type::Infer(_)) => Err(unresolved()),
        GenericArgument::Type(ty) => type_ident(ty, field),
        _ => Err(unresolved()),
    }
}

/// Match the named constructor's parameters to properties by name.
fn constructor_parameters(
    declared: &DeclaredType,
    registry: &TypeRegistry,
    constructor: &str,
    schema: &TypeSchema,
) -> Result<Vec<ConstructorParameter>, SchemaFault> {
    let missing = || SchemaFault::MissingConstructor {
        name: constructor.to_string(),
    };
    let signature = registry
        .associated_fn(declared, constructor)
        .ok_or_else(missing)?;

    let mut parameters = Vec::with_capacity(signature.inputs.len());
    for input in &signature.inputs {
        let FnArg::Typed(typed) = input else {
            // A method taking `self` cannot build the value.
            return Err(missing());
        };

        let name = match &*typed.pat {
            Pat::Ident(pat) => pat.ident.unraw().to_string(),
            other => tokens_text(other),
        };

        let property = schema
            .properties
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| SchemaFault::UnmatchedConstructorParameter {
                constructor: constructor.to_string(),
                parameter: name.clone(),
            })?;

        let expected = declared_type(&schema.properties[property]);
        let matches =
            type_ident(&typed.ty, &name).is_ok_and(|found| same_type(&found, &expected));
        if !matches {
            return Err(SchemaFault::ConstructorParameterType {
                constructor: constructor.to_string(),
                parameter: name,
                expected: expected.to_string(),
                found: tokens_text(&*typed.ty),
            });
        }

        parameters.push(ConstructorParameter { name, property });
    }

    Ok(parameters)
}

/// The field's type as declared, `Option` included.
fn declared_type(property: &PropertyDescriptor) -> TypeIdent {
    if property.nullable {
        TypeIdent::with_args("Option", vec![property.ty.clone()])
    } else {
        property.ty.clone()
    }
}

/// Compare by last segment and arguments, so `HashMap` and
/// `std::collections::HashMap` are the same type.
fn same_type(a: &TypeIdent, b: &TypeIdent) -> bool {
    let same_name = a.simple_name() == b.simple_name() || (a.is_option() && b.is_option());

    same_name
        && a.args.len() == b.args.len()
        && a.args.iter().zip(&b.args).all(|(x, y)| same_type(x, y))
}

fn tokens_text(tokens: &impl ToTokens) -> String {
    tokens.to_token_stream().to_string()
}
