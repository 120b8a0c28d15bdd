#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// to_snake_case tests

#[test_case("displayName", "display_name" ; "lower camel")]
#[test_case("DisplayName", "display_name" ; "pascal")]
#[test_case("price", "price" ; "single word")]
#[test_case("userID", "user_id" ; "trailing acronym")]
#[test_case("already_snake", "already_snake" ; "already snake")]
#[test_case("", "" ; "empty")]
fn to_snake_case___input___converts(input: &str, expected: &str) {
    assert_eq!(to_snake_case(input), expected);
}

// to_camel_case tests

#[test_case("display_name", "displayName" ; "snake")]
#[test_case("foo_bar_baz", "fooBarBaz" ; "three words")]
#[test_case("foo__bar", "fooBar" ; "consecutive underscores")]
#[test_case("_leading", "leading" ; "leading underscore")]
#[test_case("trailing_", "trailing" ; "trailing underscore")]
#[test_case("simple", "simple" ; "single word")]
fn to_camel_case___input___converts(input: &str, expected: &str) {
    assert_eq!(to_camel_case(input), expected);
}

// to_pascal_case tests

#[test]
fn to_pascal_case___snake_case___converts() {
    assert_eq!(to_pascal_case("display_name"), "DisplayName");
}

#[test]
fn to_pascal_case___camel_case___capitalizes_first() {
    assert_eq!(to_pascal_case("displayName"), "DisplayName");
}

#[test]
fn capitalize___preserves_rest_of_string() {
    assert_eq!(capitalize("helloWorld"), "HelloWorld");
    assert_eq!(capitalize(""), "");
}

// NamingStrategy tests

#[test_case("identity", NamingStrategy::Identity)]
#[test_case("snake_case", NamingStrategy::SnakeCase)]
#[test_case("camel_case", NamingStrategy::CamelCase)]
#[test_case("pascal_case", NamingStrategy::PascalCase)]
fn NamingStrategy___from_str___parses_selector(selector: &str, expected: NamingStrategy) {
    let strategy: NamingStrategy = selector.parse().unwrap();

    assert_eq!(strategy, expected);
    assert_eq!(strategy.as_str(), selector);
}

#[test]
fn NamingStrategy___from_str_unknown___returns_selector() {
    let err = "kebab-case".parse::<NamingStrategy>().unwrap_err();

    assert_eq!(err, "kebab-case");
}

#[test]
fn NamingStrategy___default___is_identity() {
    assert_eq!(NamingStrategy::default(), NamingStrategy::Identity);
    assert_eq!(NamingStrategy::default().resolve("displayName"), "displayName");
}
