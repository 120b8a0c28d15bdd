//! Conversion helpers called by generated code
//!
//! Each helper maps one property-shape variant to a single fallible step, so a
//! generated body is a flat sequence of `helper(..)?` calls.
//!
//! Absent optional values are never written: a `None` property omits its key.
//! On the way back, an absent key and an explicit null both read as `None`.

use crate::{ConvertFault, ConvertResult, FromMap, Map, ToMap, Value};
use serde::Serialize;
use serde::de::{Deserialize, DeserializeOwned};

/// Insert a scalar or generic-container value under `key`.
pub fn put_scalar<T>(map: &mut Map, key: &str, value: &T, expected: &str) -> ConvertResult<()>
where
    T: Serialize + ?Sized,
{
    let value =
        serde_json::to_value(value).map_err(|_| ConvertFault::type_mismatch(key, expected))?;
    map.insert(key.to_owned(), value);
    Ok(())
}

/// Insert a nested convertible value under `key` as a nested map.
pub fn put_nested<T>(map: &mut Map, key: &str, value: &T) -> ConvertResult<()>
where
    T: ToMap + ?Sized,
{
    let nested = value
        .to_map()
        .map_err(|cause| ConvertFault::nested(key, cause))?;
    map.insert(key.to_owned(), Value::Object(nested));
    Ok(())
}

/// Fetch a non-nullable scalar or generic-container value.
pub fn require_scalar<T>(map: &Map, key: &str, expected: &str) -> ConvertResult<T>
where
    T: DeserializeOwned,
{
    match map.get(key) {
        None => Err(ConvertFault::missing_key(key)),
        Some(Value::Null) => Err(ConvertFault::null_violation(key)),
        Some(value) => convert_value(value, key, expected),
    }
}

/// Fetch a nullable scalar or generic-container value.
pub fn optional_scalar<T>(map: &Map, key: &str, expected: &str) -> ConvertResult<Option<T>>
where
    T: DeserializeOwned,
{
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => convert_value(value, key, expected).map(Some),
    }
}

/// Fetch and convert a non-nullable nested map.
pub fn require_nested<T>(map: &Map, key: &str) -> ConvertResult<T>
where
    T: FromMap,
{
    match map.get(key) {
        None => Err(ConvertFault::missing_key(key)),
        Some(Value::Null) => Err(ConvertFault::null_violation(key)),
        Some(Value::Object(nested)) => convert_nested(nested, key),
        Some(_) => Err(ConvertFault::missing_key(key)),
    }
}

/// Fetch and convert a nullable nested map.
pub fn optional_nested<T>(map: &Map, key: &str) -> ConvertResult<Option<T>>
where
    T: FromMap,
{
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(nested)) => convert_nested(nested, key).map(Some),
        Some(_) => Err(ConvertFault::missing_key(key)),
    }
}

fn convert_value<T>(value: &Value, key: &str, expected: &str) -> ConvertResult<T>
where
    T: DeserializeOwned,
{
    <T as Deserialize>::deserialize(value).map_err(|_| ConvertFault::type_mismatch(key, expected))
}

fn convert_nested<T>(nested: &Map, key: &str) -> ConvertResult<T>
where
    T: FromMap,
{
    T::from_map(nested).map_err(|cause| ConvertFault::nested(key, cause))
}
