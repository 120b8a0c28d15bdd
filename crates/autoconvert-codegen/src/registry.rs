//! Registry of annotated types discovered across all sources.
//!
//! Discovery runs once per generation run, before any pass starts. The
//! registry is read-only afterwards and is what the extractor consults to
//! decide whether a field's type is itself convertible.

use crate::attrs::{self, TypeRequest};
use crate::error::SchemaFault;
use crate::schema::TypeIdent;
use crate::source::SourceFile;
use syn::ext::IdentExt;
use syn::{ImplItem, Item, Type};

/// An annotated struct found in the sources.
#[derive(Debug, Clone)]
pub struct DeclaredType {
    pub name: String,

    /// Module path of the declaration
    pub namespace: String,

    pub item: syn::ItemStruct,

    /// Parsed declaration, or the fault that stops it from being generated
    pub request: Result<TypeRequest, SchemaFault>,
}

impl DeclaredType {
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace, self.name)
    }
}

/// An associated function from an inherent `impl` block.
#[derive(Debug, Clone)]
struct AssociatedFn {
    namespace: String,
    type_name: String,
    signature: syn::Signature,
}

/// Result of resolving a field type against the registry.
#[derive(Debug)]
pub enum Lookup<'a> {
    NotFound,
    Found(&'a DeclaredType),
    Ambiguous(Vec<String>),
}

/// All annotated types of one generation run.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<DeclaredType>,
    functions: Vec<AssociatedFn>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sources(sources: &[SourceFile]) -> Self {
        let mut registry = Self::new();
        for source in sources {
            registry.add_file(&source.syntax, &source.namespace);
        }
        registry
    }

    /// Register every annotated struct and inherent associated function in a file.
    pub fn add_file(&mut self, file: &syn::File, namespace: &str) {
        self.collect(&file.items, namespace);
    }

    /// Annotated types in discovery order
    pub fn types(&self) -> &[DeclaredType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Find an annotated type by its qualified name
    pub fn get(&self, qualified_name: &str) -> Option<&DeclaredType> {
        self.types
            .iter()
            .find(|t| t.qualified_name() == qualified_name)
    }

    /// Resolve a field type as written in `from_namespace`.
    ///
    /// A single-segment name may have been imported from anywhere, so it
    /// matches any registered type of that name, preferring one declared in
    /// the same module. A multi-segment path is qualified and matched exactly.
    pub fn resolve(&self, ty: &TypeIdent, from_namespace: &str) -> Lookup<'_> {
        let name = ty.simple_name();
        let candidates: Vec<&DeclaredType> =
            self.types.iter().filter(|t| t.name == name).collect();

        if ty.path.contains("::") {
            let qualified = qualify(&ty.path, from_namespace);
            return match candidates
                .into_iter()
                .find(|t| Some(t.qualified_name()) == qualified)
            {
                Some(found) => Lookup::Found(found),
                None => Lookup::NotFound,
            };
        }

        match candidates.as_slice() {
            [] => Lookup::NotFound,
            [only] => Lookup::Found(*only),
            many => match many.iter().find(|t| t.namespace == from_namespace) {
                Some(local) => Lookup::Found(*local),
                None => Lookup::Ambiguous(many.iter().map(|t| t.qualified_name()).collect()),
            },
        }
    }

    /// Find an associated function of a declared type by name.
    pub fn associated_fn(&self, declared: &DeclaredType, name: &str) -> Option<&syn::Signature> {
        self.functions
            .iter()
            .find(|f| {
                f.namespace == declared.namespace
                    && f.type_name == declared.name
                    && f.signature.ident == name
            })
            .map(|f| &f.signature)
    }

    fn collect(&mut self, items: &[Item], namespace: &str) {
        for item in items {
            match item {
                Item::Struct(s) if attrs::is_annotated(&s.attrs) => {
                    self.types.push(DeclaredType {
                        name: s.ident.unraw().to_string(),
                        namespace: namespace.to_string(),
                        item: s.clone(),
                        request: TypeRequest::from_attributes(&s.attrs),
                    });
                }
                Item::Impl(imp) if imp.trait_.is_none() => {
                    let Some(type_name) = impl_type_name(&imp.self_ty) else {
                        continue;
                    };
                    for impl_item in &imp.items {
                        if let ImplItem::Fn(f) = impl_item {
                            self.functions.push(AssociatedFn {
                                namespace: namespace.to_string(),
                                type_name: type_name.clone(),
                                signature: f.sig.clone(),
                            });
                        }
                    }
                }
                Item::Mod(m) => {
                    if let Some((_, items)) = &m.content {
                        let child = format!("{namespace}::{}", m.ident.unraw());
                        self.collect(items, &child);
                    }
                }
                _ => {}
            }
        }
    }
}

fn impl_type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(tp) if tp.qself.is_none() && tp.path.segments.len() == 1 => tp
            .path
            .segments
            .last()
            .map(|s| s.ident.unraw().to_string()),
        _ => None,
    }
}

/// Turn a path as written in `from_namespace` into a `crate::`-rooted path.
fn qualify(path: &str, from_namespace: &str) -> Option<String> {
    let mut segments: Vec<&str> = path.trim_start_matches("::").split("::").collect();
    let mut base: Vec<&str> = from_namespace.split("::").collect();

    match segments.first().copied() {
        Some("crate") => Some(segments.join("::")),
        Some("self") => {
            segments.remove(0);
            base.extend(segments);
            Some(base.join("::"))
        }
        Some("super") => {
            while segments.first() == Some(&"super") {
                segments.remove(0);
                base.pop();
                if base.is_empty() {
                    return None;
                }
            }
            base.extend(segments);
            Some(base.join("::"))
        }
        _ => {
            base.extend(segments);
            Some(base.join("::"))
        }
    }
}
