//! Loading Rust source files and deriving their module paths.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A parsed source file and the module path its items live in.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Location on disk, if the source came from a file
    pub path: Option<PathBuf>,

    /// Module path, e.g. `crate::models`
    pub namespace: String,

    pub syntax: syn::File,
}

impl SourceFile {
    /// Parse Rust source text under an explicit module path.
    pub fn parse(source: &str, namespace: impl Into<String>) -> Result<Self> {
        let syntax = syn::parse_file(source).context("Failed to parse Rust source")?;

        Ok(SourceFile {
            path: None,
            namespace: namespace.into(),
            syntax,
        })
    }

    /// Read and parse a file, deriving its module path from its location.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?;
        let mut file = Self::parse(&content, namespace_for(path))
            .with_context(|| format!("Failed to parse {path:?}"))?;
        file.path = Some(path.to_path_buf());
        Ok(file)
    }
}

/// Load every `.rs` file named by `paths`, walking directories recursively.
///
/// Files are returned in sorted path order so registry contents, and with
/// them generated output, do not depend on directory iteration order.
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();

    files.iter().map(|path| SourceFile::load(path)).collect()
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to read directory {dir:?}"))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory {dir:?}"))?
            .path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }

    Ok(())
}

/// Derive a module path from a file location.
///
/// Components after the last `src` directory become modules; `lib.rs`,
/// `main.rs` and `mod.rs` name their parent module.
///
/// # Examples
///
/// ```
/// use autoconvert_codegen::source::namespace_for;
/// use std::path::Path;
///
/// assert_eq!(namespace_for(Path::new("src/lib.rs")), "crate");
/// assert_eq!(namespace_for(Path::new("src/models.rs")), "crate::models");
/// assert_eq!(namespace_for(Path::new("src/shop/mod.rs")), "crate::shop");
/// ```
pub fn namespace_for(path: &Path) -> String {
    let components: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let start = components
        .iter()
        .rposition(|c| c == "src")
        .map(|i| i + 1)
        .unwrap_or(components.len().saturating_sub(1));

    let mut modules: Vec<String> = components[start..].to_vec();
    if let Some(last) = modules.pop() {
        let stem = last.strip_suffix(".rs").unwrap_or(&last);
        if !matches!(stem, "lib" | "main" | "mod") {
            modules.push(stem.to_string());
        }
    }

    std::iter::once("crate".to_string())
        .chain(modules)
        .collect::<Vec<_>>()
        .join("::")
}
