//! `autoconvert generate`

use anyhow::{Context, Result};
use autoconvert_codegen::source::collect_sources;
use autoconvert_codegen::{Builder, FsArtifactWriter, GenerationReport, Generator, TypeRegistry};
use std::path::{Path, PathBuf};
use tracing::info;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG: &str = "autoconvert.toml";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub sources: Vec<PathBuf>,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub indent: Option<usize>,
    pub runtime_crate: Option<String>,

    /// Leave artifacts writable regardless of config
    pub no_read_only: bool,
}

/// Run one generation over all sources.
///
/// Per-type faults are collected in the report; only setup failures (bad
/// config, unreadable sources) are errors.
pub fn run(options: &GenerateOptions) -> Result<GenerationReport> {
    let mut builder = Builder::new();
    if let Some(path) = config_path(options.config.as_deref()) {
        info!(path = %path.display(), "Using config");
        builder = builder.config_file(path);
    }
    if let Some(indent) = options.indent {
        builder = builder.indent_width(indent);
    }
    if let Some(runtime) = &options.runtime_crate {
        builder = builder.runtime_crate(runtime.clone());
    }
    if options.no_read_only {
        builder = builder.read_only(false);
    }
    let config = builder.resolved_config()?;

    let sources = collect_sources(&options.sources).context("Failed to load sources")?;
    let registry = TypeRegistry::from_sources(&sources);
    info!(
        sources = sources.len(),
        types = registry.len(),
        "Discovered annotated types"
    );

    let mut writer = FsArtifactWriter::new(&options.output);
    Ok(Generator::new(config).generate(&registry, &mut writer))
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG);
            default.is_file().then_some(default)
        }
    }
}

/// Human-readable summary, one line per type.
pub fn summary(report: &GenerationReport) -> Vec<String> {
    let mut lines = Vec::new();

    for written in &report.written {
        lines.push(format!(
            "✓ {} -> {}",
            written.type_name,
            written.path.display()
        ));
    }
    for skipped in &report.skipped {
        lines.push(format!("- {skipped} (no capabilities requested)"));
    }
    for failure in &report.failures {
        lines.push(format!("✗ {failure}"));
    }

    lines.push(format!(
        "\n{} generated, {} skipped, {} failed",
        report.written.len(),
        report.skipped.len(),
        report.failures.len()
    ));
    lines
}
