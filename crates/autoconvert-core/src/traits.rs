//! Capability traits implemented by generated artifacts

use crate::{ConvertResult, Map};

/// Serialize capability: convert a value into a [`Map`].
pub trait ToMap {
    fn to_map(&self) -> ConvertResult<Map>;
}

/// Deserialize capability: build a value from a [`Map`].
///
/// Implementations are all-or-nothing. Every field is resolved before the
/// value is constructed, and the first fault in field order is returned.
pub trait FromMap: Sized {
    fn from_map(map: &Map) -> ConvertResult<Self>;
}

/// Greeting capability, a side-effecting function with no schema dependency.
pub trait Greet {
    fn say_hello(&self) -> ConvertResult<()>;
}
