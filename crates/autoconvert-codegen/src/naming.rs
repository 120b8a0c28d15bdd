//! Naming strategies mapping property names to map keys.
//!
//! # Supported Strategies
//!
//! | Selector | Input | Output |
//! |----------|-------|--------|
//! | `identity` | `displayName` | `displayName` |
//! | `snake_case` | `displayName` | `display_name` |
//! | `camel_case` | `display_name` | `displayName` |
//! | `pascal_case` | `display_name` | `DisplayName` |
//!
//! The strategy chosen for a type is stored in its schema and used by every
//! synthesizer, so the key written for a property is the key read back.

use std::fmt;
use std::str::FromStr;

/// A deterministic property-name to key-name mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamingStrategy {
    #[default]
    Identity,
    SnakeCase,
    CamelCase,
    PascalCase,
}

impl NamingStrategy {
    /// Map a property name to its key.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoconvert_codegen::NamingStrategy;
    ///
    /// assert_eq!(NamingStrategy::Identity.resolve("displayName"), "displayName");
    /// assert_eq!(NamingStrategy::SnakeCase.resolve("displayName"), "display_name");
    /// assert_eq!(NamingStrategy::CamelCase.resolve("display_name"), "displayName");
    /// ```
    pub fn resolve(self, property: &str) -> String {
        match self {
            NamingStrategy::Identity => property.to_string(),
            NamingStrategy::SnakeCase => to_snake_case(property),
            NamingStrategy::CamelCase => to_camel_case(property),
            NamingStrategy::PascalCase => to_pascal_case(property),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NamingStrategy::Identity => "identity",
            NamingStrategy::SnakeCase => "snake_case",
            NamingStrategy::CamelCase => "camel_case",
            NamingStrategy::PascalCase => "pascal_case",
        }
    }
}

impl FromStr for NamingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(NamingStrategy::Identity),
            "snake_case" => Ok(NamingStrategy::SnakeCase),
            "camel_case" => Ok(NamingStrategy::CamelCase),
            "pascal_case" => Ok(NamingStrategy::PascalCase),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert lowerCamelCase (or PascalCase) to snake_case.
///
/// Existing underscores are kept; an uppercase letter starts a new word
/// unless it follows another uppercase letter or an underscore.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c.is_uppercase() {
            if let Some(p) = prev
                && p != '_'
                && !p.is_uppercase()
            {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        prev = Some(c);
    }

    result
}

/// Convert snake_case to camelCase.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert snake_case or camelCase to PascalCase.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(capitalize).collect()
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
