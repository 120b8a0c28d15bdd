//! autoconvert-macros - Derive macro for autoconvert declarations
//!
//! `#[derive(AutoConvert)]` marks a struct for generation and declares the
//! `#[auto_convert(...)]` helper attribute. The derive itself emits no code:
//! implementations come from the artifacts `autoconvert-codegen` writes.
//! What it does is validate the declaration at compile time, with the same
//! parser the generator uses, so a typo fails the build at the attribute
//! instead of surfacing later as a generation fault.

use autoconvert_codegen::attrs::{FieldOptions, TypeRequest};
use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro declaring a type's capabilities
///
/// # Example
///
/// ```ignore
/// use autoconvert::AutoConvert;
///
/// #[derive(AutoConvert)]
/// #[auto_convert(capabilities(Serialize, Deserialize), naming = "snake_case")]
/// pub struct Restaurant {
///     pub price: f32,
/// }
///
/// include!(concat!(env!("OUT_DIR"), "/RestaurantAutoConvert.rs"));
/// ```
#[proc_macro_derive(AutoConvert, attributes(auto_convert))]
pub fn derive_auto_convert(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match validate(&input) {
        Ok(()) => TokenStream::new(),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn validate(input: &DeriveInput) -> syn::Result<()> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "AutoConvert can only be derived for structs",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "AutoConvert does not support generic types",
        ));
    }

    let request = TypeRequest::from_attributes(&input.attrs).map_err(|fault| {
        syn::Error::new(attribute_span(&input.attrs, input.ident.span()), fault)
    })?;

    if request.is_convertible() && matches!(data.fields, Fields::Unnamed(_) | Fields::Unit) {
        return Err(syn::Error::new(
            input.ident.span(),
            "Serialize and Deserialize require named fields",
        ));
    }

    for field in &data.fields {
        FieldOptions::from_attributes(&field.attrs).map_err(|fault| {
            syn::Error::new(attribute_span(&field.attrs, field.span()), fault)
        })?;
    }

    Ok(())
}

/// Span of the first `#[auto_convert]` attribute, or `fallback`
fn attribute_span(attrs: &[syn::Attribute], fallback: Span) -> Span {
    attrs
        .iter()
        .find(|a| a.path().is_ident(autoconvert_codegen::attrs::ATTRIBUTE))
        .map(|a| a.span())
        .unwrap_or(fallback)
}
