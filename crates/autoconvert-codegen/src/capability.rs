//! The closed set of capabilities a type can request.

use std::collections::BTreeSet;
use std::fmt;

/// A generated capability.
///
/// The derived ordering is the canonical emission order: Serialize,
/// Deserialize, Greet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Serialize,
    Deserialize,
    Greet,
}

/// A deduplicated, canonically ordered set of capabilities.
pub type CapabilitySet = BTreeSet<Capability>;

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::Serialize,
        Capability::Deserialize,
        Capability::Greet,
    ];

    /// Parse a capability from the identifier used in `capabilities(...)`.
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "Serialize" => Some(Capability::Serialize),
            "Deserialize" => Some(Capability::Deserialize),
            "Greet" => Some(Capability::Greet),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Serialize => "Serialize",
            Capability::Deserialize => "Deserialize",
            Capability::Greet => "Greet",
        }
    }

    /// Whether a nested property needs its type to expose this capability too.
    pub fn is_conversion(self) -> bool {
        matches!(self, Capability::Serialize | Capability::Deserialize)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a capability set as a comma-separated list in canonical order.
pub fn describe(set: &CapabilitySet) -> String {
    set.iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
