#![allow(non_snake_case)]

use super::*;
use crate::capability::CapabilitySet;
use crate::ir::{Callee, Expr, Stmt};
use crate::naming::NamingStrategy;
use crate::schema::{Construction, ConstructorParameter, PropertyDescriptor, TypeIdent};

fn property(name: &str, ty: TypeIdent, nullable: bool, nested: bool) -> PropertyDescriptor {
    PropertyDescriptor {
        name: name.to_string(),
        ident: name.to_string(),
        generic_args: ty.args.clone(),
        ty,
        nullable,
        nested_convertible: nested,
    }
}

fn schema(properties: Vec<PropertyDescriptor>, capabilities: &[Capability]) -> TypeSchema {
    let parameters = (0..properties.len())
        .map(|i| ConstructorParameter {
            name: properties[i].name.clone(),
            property: i,
        })
        .collect();

    TypeSchema {
        name: "Venue".into(),
        namespace: "crate".into(),
        capabilities: capabilities.iter().copied().collect::<CapabilitySet>(),
        naming: NamingStrategy::CamelCase,
        suffix: "AutoConvert".into(),
        properties,
        parameters,
        construction: Construction::StructLiteral,
    }
}

/// Keys passed to runtime helpers, in call order
fn keys(stmts: &[Stmt]) -> Vec<String> {
    fn from_expr(expr: &Expr, out: &mut Vec<String>) {
        match expr {
            Expr::Try(inner) => from_expr(inner, out),
            Expr::Call {
                callee: Callee::Runtime(_),
                args,
                ..
            } => {
                if let Some(Expr::Str(key)) = args.get(1) {
                    out.push(key.clone());
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    for stmt in stmts {
        match stmt {
            Stmt::Let { value, .. } | Stmt::Expr(value) => from_expr(value, &mut out),
            Stmt::IfLetSome { then, .. } => out.extend(keys(then)),
            Stmt::Tail(_) => {}
        }
    }
    out
}

fn helpers(stmts: &[Stmt]) -> Vec<&'static str> {
    let mut out = Vec::new();
    for stmt in stmts {
        let expr = match stmt {
            Stmt::Let { value, .. } | Stmt::Expr(value) => value,
            Stmt::IfLetSome { then, .. } => {
                out.extend(helpers(then));
                continue;
            }
            Stmt::Tail(_) => continue,
        };
        if let Expr::Try(inner) = expr
            && let Expr::Call {
                callee: Callee::Runtime(name),
                ..
            } = inner.as_ref()
        {
            out.push(*name);
        }
    }
    out
}

#[test]
fn synthesize___one_block_per_capability_in_canonical_order() {
    let schema = schema(
        vec![property("price", TypeIdent::new("f32"), false, false)],
        &[Capability::Greet, Capability::Serialize, Capability::Deserialize],
    );

    let blocks = synthesize(&schema);

    let order: Vec<_> = blocks.iter().map(|b| b.capability).collect();
    assert_eq!(order, Capability::ALL.to_vec());
}

#[test]
fn synthesize___empty_capabilities___no_blocks() {
    let schema = schema(Vec::new(), &[]);

    assert!(synthesize(&schema).is_empty());
}

#[test]
fn serialize___dispatches_on_property_kind() {
    let schema = schema(
        vec![
            property("display_name", TypeIdent::new("String"), false, false),
            property("phone", TypeIdent::new("String"), true, false),
            property("address", TypeIdent::new("Address"), false, true),
            property("manager", TypeIdent::new("Manager"), true, true),
            property(
                "tags",
                TypeIdent::with_args("Vec", vec![TypeIdent::new("String")]),
                false,
                false,
            ),
        ],
        &[Capability::Serialize],
    );

    let block = serialize::synthesize(&schema);

    assert_eq!(block.trait_name, "ToMap");
    assert_eq!(
        helpers(&block.function.body),
        vec!["put_scalar", "put_scalar", "put_nested", "put_nested", "put_scalar"]
    );
    assert!(matches!(block.function.body[2], Stmt::IfLetSome { .. }));
    assert!(matches!(block.function.body[4], Stmt::IfLetSome { .. }));
}

#[test]
fn deserialize___dispatches_on_property_kind() {
    let schema = schema(
        vec![
            property("display_name", TypeIdent::new("String"), false, false),
            property("phone", TypeIdent::new("String"), true, false),
            property("address", TypeIdent::new("Address"), false, true),
            property("manager", TypeIdent::new("Manager"), true, true),
            property(
                "tags",
                TypeIdent::with_args("Vec", vec![TypeIdent::new("String")]),
                true,
                false,
            ),
        ],
        &[Capability::Deserialize],
    );

    let block = deserialize::synthesize(&schema);

    assert_eq!(block.trait_name, "FromMap");
    assert_eq!(
        helpers(&block.function.body),
        vec![
            "require_scalar",
            "optional_scalar",
            "require_nested",
            "optional_nested",
            "optional_scalar"
        ]
    );
}

#[test]
fn serialize_and_deserialize___use_same_keys() {
    let schema = schema(
        vec![
            property("display_name", TypeIdent::new("String"), false, false),
            property("zip_code", TypeIdent::new("String"), true, false),
            property("home_address", TypeIdent::new("Address"), false, true),
        ],
        &[Capability::Serialize, Capability::Deserialize],
    );

    let written = keys(&serialize::synthesize(&schema).function.body);
    let read = keys(&deserialize::synthesize(&schema).function.body);

    assert_eq!(written, vec!["displayName", "zipCode", "homeAddress"]);
    assert_eq!(written, read);
}

#[test]
fn deserialize___constructor_function___called_with_parameter_order() {
    let mut schema = schema(
        vec![
            property("name", TypeIdent::new("String"), false, false),
            property("years", TypeIdent::new("u32"), false, false),
        ],
        &[Capability::Deserialize],
    );
    schema.construction = Construction::Function("new".into());
    schema.parameters = vec![
        ConstructorParameter {
            name: "years".into(),
            property: 1,
        },
        ConstructorParameter {
            name: "name".into(),
            property: 0,
        },
    ];

    let block = deserialize::synthesize(&schema);

    let Some(Stmt::Tail(Expr::Ok(value))) = block.function.body.last() else {
        panic!("expected Ok tail");
    };
    assert_eq!(
        **value,
        Expr::Call {
            callee: Callee::SelfAssoc("new".into()),
            turbofish: None,
            args: vec![Expr::local("years"), Expr::local("name")],
        }
    );
}

#[test]
fn deserialize___field_named_map___input_renamed() {
    let schema = schema(
        vec![property(
            "map",
            TypeIdent::with_args(
                "HashMap",
                vec![TypeIdent::new("String"), TypeIdent::new("u8")],
            ),
            false,
            false,
        )],
        &[Capability::Deserialize],
    );

    let block = deserialize::synthesize(&schema);

    assert_eq!(block.function.params[0].name, "map_");
}

#[test]
fn greet___prints_greeting() {
    let schema = schema(Vec::new(), &[Capability::Greet]);

    let block = greet::synthesize(&schema);

    assert_eq!(block.function.name, "say_hello");
    assert_eq!(
        block.function.body[0],
        Stmt::Expr(Expr::Println("Hello".into()))
    );
}
