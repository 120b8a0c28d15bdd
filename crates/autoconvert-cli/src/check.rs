//! `autoconvert check`

use crate::generate::DEFAULT_CONFIG;
use anyhow::{Context, Result};
use autoconvert_codegen::GeneratorConfig;
use std::path::PathBuf;

/// Validate a config file and print its effective values.
pub fn run(config_path: Option<PathBuf>) -> Result<GeneratorConfig> {
    let path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    println!("Checking config: {}", path.display());

    let config = GeneratorConfig::from_file(&path)
        .with_context(|| format!("Invalid config {}", path.display()))?;

    println!("✓ indent_width: {}", config.indent_width);
    println!("✓ default_suffix: {}", config.default_suffix);
    println!("✓ runtime_crate: {}", config.runtime_crate);
    println!("✓ read_only: {}", config.read_only);
    println!("\nConfig is valid!");

    Ok(config)
}
