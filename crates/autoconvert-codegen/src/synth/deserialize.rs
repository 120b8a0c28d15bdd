//! Deserialize synthesis: `impl FromMap`.
//!
//! Every constructor parameter is bound with a fallible helper call before
//! the value is built, so the generated function either returns the first
//! fault in parameter order or a fully constructed value.

use super::expected_type;
use crate::capability::Capability;
use crate::ir::{Callee, Expr, Function, ImplBlock, Param, Stmt, Ty};
use crate::schema::{Construction, PropertyDescriptor, PropertyKind, TypeSchema};

pub fn synthesize(schema: &TypeSchema) -> ImplBlock {
    let map = input_name(schema);
    let mut body = Vec::with_capacity(schema.parameters.len() + 1);

    for (_, property) in schema.parameter_properties() {
        body.push(Stmt::Let {
            name: property.ident.clone(),
            mutable: false,
            value: Expr::propagate(fetch(schema, property, &map)),
        });
    }

    let value = match &schema.construction {
        Construction::StructLiteral => Expr::StructLit(
            schema
                .parameter_properties()
                .map(|(_, p)| (p.ident.clone(), Expr::local(&p.ident)))
                .collect(),
        ),
        Construction::Function(name) => Expr::Call {
            callee: Callee::SelfAssoc(name.clone()),
            turbofish: None,
            args: schema
                .parameter_properties()
                .map(|(_, p)| Expr::local(&p.ident))
                .collect(),
        },
    };
    body.push(Stmt::Tail(Expr::ok(value)));

    ImplBlock {
        capability: Capability::Deserialize,
        trait_name: "FromMap",
        self_ty: schema.name.clone(),
        function: Function {
            name: "from_map",
            takes_self: false,
            params: vec![Param {
                name: map,
                ty: Ty::reference(Ty::Runtime("Map")),
            }],
            ret: Ty::result(Ty::SelfType),
            body,
        },
    }
}

fn fetch(schema: &TypeSchema, property: &PropertyDescriptor, map: &str) -> Expr {
    let key = Expr::str(schema.key_for(property));
    let input = Expr::local(map);

    let (helper, args) = match (property.kind(), property.nullable) {
        (PropertyKind::NestedConvertible, _) => ("require_nested", vec![input, key]),
        (PropertyKind::NullableNestedConvertible, _) => ("optional_nested", vec![input, key]),
        (_, false) => (
            "require_scalar",
            vec![input, key, Expr::str(expected_type(property))],
        ),
        (_, true) => (
            "optional_scalar",
            vec![input, key, Expr::str(expected_type(property))],
        ),
    };

    Expr::runtime_call(helper, args).with_turbofish(property.ty.to_string())
}

/// Name of the input map, chosen so no parameter binding shadows it.
fn input_name(schema: &TypeSchema) -> String {
    if schema.parameters.is_empty() {
        return String::from("_map");
    }

    let mut name = String::from("map");
    while schema
        .parameter_properties()
        .any(|(_, p)| p.ident == name)
    {
        name.push('_');
    }
    name
}
