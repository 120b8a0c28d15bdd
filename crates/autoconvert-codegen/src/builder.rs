//! Build-script integration.
//!
//! The [`Builder`] provides a fluent API for generating artifacts from a
//! `build.rs`, writing them to `OUT_DIR` by default.

use crate::config::GeneratorConfig;
use crate::emit::FsArtifactWriter;
use crate::generator::{GenerationReport, Generator};
use crate::registry::TypeRegistry;
use crate::source::collect_sources;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Builder for a generation run.
///
/// # Example
///
/// ```no_run
/// // build.rs
/// fn main() -> anyhow::Result<()> {
///     autoconvert_codegen::Builder::new()
///         .source("src/models.rs")
///         .runtime_crate("::autoconvert")
///         .generate()?;
///     Ok(())
/// }
/// ```
///
/// The generated files are then pulled in next to their types:
///
/// ```ignore
/// include!(concat!(env!("OUT_DIR"), "/RestaurantAutoConvert.rs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    sources: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    config: Option<GeneratorConfig>,
    config_file: Option<PathBuf>,
    indent_width: Option<usize>,
    runtime_crate: Option<String>,
    read_only: Option<bool>,
    rerun_directives: bool,
}

impl Builder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rerun_directives: true,
            ..Default::default()
        }
    }

    /// Add a source file or directory to scan for annotated types.
    #[must_use]
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(path.into());
        self
    }

    /// Directory artifacts are written to (default: `$OUT_DIR`)
    #[must_use]
    pub fn out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(path.into());
        self
    }

    /// Base configuration, replacing the defaults.
    #[must_use]
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load the base configuration from a TOML file.
    #[must_use]
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = Some(width);
        self
    }

    /// Path generated code uses to reach the runtime, e.g. `::autoconvert`
    #[must_use]
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = Some(path.into());
        self
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    /// Print `cargo:rerun-if-changed` for each source (default: on)
    #[must_use]
    pub fn rerun_directives(mut self, enabled: bool) -> Self {
        self.rerun_directives = enabled;
        self
    }

    /// Resolve the effective configuration: file or explicit base, then overrides.
    pub fn resolved_config(&self) -> Result<GeneratorConfig> {
        let mut config = match (&self.config_file, &self.config) {
            (Some(path), _) => GeneratorConfig::from_file(path)
                .with_context(|| format!("Failed to load config {path:?}"))?,
            (None, Some(config)) => config.clone(),
            (None, None) => GeneratorConfig::default(),
        };

        if let Some(width) = self.indent_width {
            config.indent_width = width;
        }
        if let Some(runtime) = &self.runtime_crate {
            config.runtime_crate = runtime.clone();
        }
        if let Some(read_only) = self.read_only {
            config.read_only = read_only;
        }

        config.validate().context("Invalid generator configuration")?;
        Ok(config)
    }

    /// Run generation, failing if any type could not be generated.
    pub fn generate(self) -> Result<GenerationReport> {
        let config = self.resolved_config()?;

        let out_dir = match &self.out_dir {
            Some(dir) => dir.clone(),
            None => std::env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .context("OUT_DIR is not set; call out_dir() outside build scripts")?,
        };

        if self.rerun_directives {
            for source in &self.sources {
                println!("cargo:rerun-if-changed={}", source.display());
            }
            if let Some(path) = &self.config_file {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }

        let sources = collect_sources(&self.sources)?;
        let registry = TypeRegistry::from_sources(&sources);
        let mut writer = FsArtifactWriter::new(out_dir);
        let report = Generator::new(config).generate(&registry, &mut writer);

        if !report.is_success() {
            let failures: Vec<String> = report.failures.iter().map(|f| f.to_string()).collect();
            anyhow::bail!(
                "autoconvert generation failed for {} type(s):\n{}",
                failures.len(),
                failures.join("\n")
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
#[path = "builder/builder_tests.rs"]
mod builder_tests;
