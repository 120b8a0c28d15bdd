#![allow(non_snake_case)]

use super::*;
use crate::capability::Capability;
use test_case::test_case;

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

#[test]
fn TypeIdent___display___renders_generic_arguments() {
    let ty = TypeIdent::with_args(
        "std::collections::HashMap",
        vec![
            TypeIdent::new("String"),
            TypeIdent::with_args("Vec", vec![TypeIdent::new("u32")]),
        ],
    );

    assert_eq!(
        ty.to_string(),
        "std::collections::HashMap<String, Vec<u32>>"
    );
}

#[test]
fn TypeIdent___simple_name___returns_last_segment() {
    assert_eq!(TypeIdent::new("crate::models::Address").simple_name(), "Address");
    assert_eq!(TypeIdent::new("Address").simple_name(), "Address");
}

#[test_case("Option", true)]
#[test_case("std::option::Option", true)]
#[test_case("core::option::Option", true)]
#[test_case("OptionSet", false)]
fn TypeIdent___is_option___matches_known_paths(path: &str, expected: bool) {
    assert_eq!(TypeIdent::new(path).is_option(), expected);
}

#[test_case(false, false, "f32", PropertyKind::Scalar ; "scalar")]
#[test_case(true, false, "f32", PropertyKind::NullableScalar ; "nullable scalar")]
#[test_case(false, true, "Address", PropertyKind::NestedConvertible ; "nested")]
#[test_case(true, true, "Address", PropertyKind::NullableNestedConvertible ; "nullable nested")]
fn PropertyDescriptor___kind___classifies(
    nullable: bool,
    nested: bool,
    ty: &str,
    expected: PropertyKind,
) {
    let prop = property("p", TypeIdent::new(ty), nullable, nested);

    assert_eq!(prop.kind(), expected);
}

#[test]
fn PropertyDescriptor___kind___generic_regardless_of_nullability() {
    let ty = TypeIdent::with_args("Vec", vec![TypeIdent::new("String")]);

    assert_eq!(
        property("tags", ty.clone(), false, false).kind(),
        PropertyKind::Generic
    );
    assert_eq!(
        property("tags", ty, true, false).kind(),
        PropertyKind::Generic
    );
}

#[test]
fn TypeSchema___file_name___appends_suffix() {
    let schema = TypeSchema {
        name: "Restaurant".into(),
        namespace: "crate::models".into(),
        capabilities: [Capability::Serialize].into_iter().collect(),
        naming: NamingStrategy::SnakeCase,
        suffix: "AutoConvert".into(),
        properties: vec![property("openHours", TypeIdent::new("u8"), false, false)],
        parameters: vec![ConstructorParameter {
            name: "openHours".into(),
            property: 0,
        }],
        construction: Construction::StructLiteral,
    };

    assert_eq!(schema.file_name(), "RestaurantAutoConvert.rs");
    assert_eq!(schema.qualified_name(), "crate::models::Restaurant");
    assert_eq!(schema.key_for(&schema.properties[0]), "open_hours");
    assert_eq!(schema.parameter_properties().count(), 1);
}
