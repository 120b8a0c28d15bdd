//! End-to-end tests against the artifacts generated by `build.rs`.
//!
//! Tests use triple-underscore naming: `subject___condition___expected_outcome`

#![allow(non_snake_case)]

use autoconvert::prelude::*;
use restaurant_demo::{Address, Host, Manager, Restaurant, Venue};
use serde_json::json;
use std::collections::HashMap;
use std::error::Error;
use test_case::test_case;

fn map(value: serde_json::Value) -> Map {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn venue() -> Venue {
    Venue {
        display_name: "Chez Rust".into(),
        address: Address {
            city: "Lyon".into(),
            zip_code: Some("69001".into()),
        },
        manager: Some(Manager::new("Ada".into(), 7)),
        tags: vec!["bistro".into(), "late".into()],
        ratings: HashMap::from([("food".to_string(), 5)]),
        phone: None,
    }
}

// ============================================================================
// Restaurant scenarios
// ============================================================================

#[test]
fn Restaurant___to_map___writes_price() {
    let map = Restaurant { price: 5.0 }.to_map().unwrap();

    assert_eq!(serde_json::Value::Object(map), json!({ "price": 5.0 }));
}

#[test]
fn Restaurant___from_empty_map___missing_key() {
    let fault = Restaurant::from_map(&Map::new()).unwrap_err();

    assert_eq!(fault, ConvertFault::missing_key("price"));
}

#[test]
fn Restaurant___from_map___builds_value() {
    let restaurant = Restaurant::from_map(&map(json!({ "price": 5.0 }))).unwrap();

    assert_eq!(restaurant, Restaurant { price: 5.0 });
}

#[test]
fn Restaurant___wrong_shape___type_mismatch() {
    let fault = Restaurant::from_map(&map(json!({ "price": "oops" }))).unwrap_err();

    assert_eq!(fault, ConvertFault::type_mismatch("price", "f32"));
}

#[test]
fn Restaurant___explicit_null___null_violation() {
    let fault = Restaurant::from_map(&map(json!({ "price": null }))).unwrap_err();

    assert_eq!(fault, ConvertFault::null_violation("price"));
}

// ============================================================================
// Venue: naming, nesting, nullability, generics
// ============================================================================

#[test]
fn Venue___to_map___uses_strategy_keys_and_nested_maps() {
    let map = venue().to_map().unwrap();

    assert_eq!(
        serde_json::Value::Object(map),
        json!({
            "displayName": "Chez Rust",
            "address": { "City": "Lyon", "ZipCode": "69001" },
            "manager": { "name": "Ada", "years": 7 },
            "tags": ["bistro", "late"],
            "ratings": { "food": 5 },
        })
    );
}

#[test]
fn Venue___round_trip___preserves_value() {
    let original = venue();

    let restored = Venue::from_map(&original.to_map().unwrap()).unwrap();

    assert_eq!(restored, original);
}

#[test]
fn Venue___absent_and_null_optionals___read_as_none() {
    let venue = Venue::from_map(&map(json!({
        "displayName": "Chez Rust",
        "address": { "City": "Lyon", "ZipCode": null },
        "tags": [],
        "ratings": {},
        "phone": null,
    })))
    .unwrap();

    assert_eq!(venue.manager, None);
    assert_eq!(venue.phone, None);
    assert_eq!(venue.address.zip_code, None);
}

#[test]
fn Venue___nested_fault___wrapped_with_cause() {
    let fault = Venue::from_map(&map(json!({
        "displayName": "Chez Rust",
        "address": { "City": 42 },
        "tags": [],
        "ratings": {},
    })))
    .unwrap_err();

    assert!(matches!(fault, ConvertFault::NestedConversion { ref key, .. } if key == "address"));
    let cause = fault.source().unwrap().downcast_ref::<ConvertFault>().unwrap();
    assert_eq!(*cause, ConvertFault::type_mismatch("City", "String"));
    assert_eq!(fault.key_path(), "address.City");
}

#[test]
fn Venue___nested_not_a_map___missing_key() {
    let fault = Venue::from_map(&map(json!({
        "displayName": "Chez Rust",
        "address": "Lyon",
        "tags": [],
        "ratings": {},
    })))
    .unwrap_err();

    assert_eq!(fault, ConvertFault::missing_key("address"));
}

#[test_case(json!({}), ConvertFault::missing_key("displayName") ; "first missing key")]
#[test_case(
    json!({ "displayName": "x", "address": { "City": "Lyon" }, "tags": "bistro" }),
    ConvertFault::type_mismatch("tags", "Vec<String>")
    ; "generic identity in mismatch"
)]
#[test_case(
    json!({ "displayName": 1, "tags": "bistro" }),
    ConvertFault::type_mismatch("displayName", "String")
    ; "first fault in field order wins"
)]
fn Venue___invalid_map___returns_single_first_fault(input: serde_json::Value, expected: ConvertFault) {
    let result = Venue::from_map(&map(input));

    assert_eq!(result.unwrap_err(), expected);
}

#[test]
fn Venue___say_hello___succeeds() {
    assert!(venue().say_hello().is_ok());
}

// ============================================================================
// Constructor and greeting-only types
// ============================================================================

#[test]
fn Manager___from_map___uses_constructor() {
    let manager = Manager::from_map(&map(json!({ "name": "Ada", "years": 7 }))).unwrap();

    assert_eq!(manager, Manager::new("Ada".into(), 7));
}

#[test]
fn Manager___negative_years___type_mismatch() {
    let fault = Manager::from_map(&map(json!({ "name": "Ada", "years": -1 }))).unwrap_err();

    assert_eq!(fault, ConvertFault::type_mismatch("years", "u32"));
}

#[test]
fn Host___say_hello___succeeds() {
    assert_eq!(Host.say_hello(), Ok(()));
}
