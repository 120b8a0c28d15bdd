//! Build-level generator configuration, loaded from `autoconvert.toml`.
//!
//! ```toml
//! indent_width = 4
//! default_suffix = "AutoConvert"
//! runtime_crate = "::autoconvert_core"
//! read_only = true
//! ```
//!
//! Every key is optional. None of them changes the meaning of generated code:
//! `indent_width` only affects rendering and `runtime_crate` only names the path
//! the generated code reaches the runtime through.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or validating a [`GeneratorConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("indent_width must be a positive integer, got {0}")]
    InvalidIndentWidth(usize),

    #[error("default_suffix `{0}` must not contain path separators or dots")]
    InvalidSuffix(String),

    #[error("runtime_crate `{0}` is not a Rust path")]
    InvalidRuntimeCrate(String),
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Spaces per indentation level in rendered code
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Suffix used when a type does not declare its own
    #[serde(default = "default_suffix")]
    pub default_suffix: String,

    /// Path generated code uses to reach the runtime crate
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,

    /// Mark artifacts read-only after writing them
    #[serde(default = "default_read_only")]
    pub read_only: bool,
}

fn default_indent_width() -> usize {
    4
}

fn default_suffix() -> String {
    "AutoConvert".to_string()
}

fn default_runtime_crate() -> String {
    "::autoconvert_core".to_string()
}

fn default_read_only() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            default_suffix: default_suffix(),
            runtime_crate: default_runtime_crate(),
            read_only: default_read_only(),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::InvalidIndentWidth(self.indent_width));
        }

        if !is_valid_suffix(&self.default_suffix) {
            return Err(ConfigError::InvalidSuffix(self.default_suffix.clone()));
        }

        if !is_rust_path(&self.runtime_crate) {
            return Err(ConfigError::InvalidRuntimeCrate(self.runtime_crate.clone()));
        }

        Ok(())
    }
}

/// Check that a suffix can be appended to a type name to form a file stem
pub(crate) fn is_valid_suffix(suffix: &str) -> bool {
    !suffix.contains(['/', '\\', '.'])
}

fn is_rust_path(path: &str) -> bool {
    syn::parse_str::<syn::Path>(path).is_ok()
}
