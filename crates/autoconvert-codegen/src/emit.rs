//! Output emission: assembling synthesized blocks into one artifact per type
//! and persisting it.
//!
//! Persistence goes through [`ArtifactWriter`] so tests can observe writes
//! and read-only marking without touching the filesystem.

use crate::capability::{self, Capability};
use crate::config::GeneratorConfig;
use crate::ir::ImplBlock;
use crate::render::Renderer;
use crate::schema::TypeSchema;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// First line of every artifact
pub const HEADER: &str = "// @generated by autoconvert. Read-only, do not edit.";

/// One generated file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Qualified name of the type the artifact implements capabilities for
    pub type_name: String,

    pub file_name: String,

    /// Capabilities implemented, one block each
    pub capabilities: Vec<Capability>,

    pub content: String,
}

impl GeneratedArtifact {
    /// SHA-256 of the content, hex encoded
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.content.as_bytes()))
    }
}

/// Assembles rendered blocks into artifacts.
#[derive(Debug, Clone)]
pub struct Emitter {
    renderer: Renderer,
}

impl Emitter {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            renderer: Renderer::new(&config.runtime_crate, config.indent_width),
        }
    }

    /// Assemble one artifact from a type's synthesized blocks.
    ///
    /// Blocks are deduplicated by capability and emitted in canonical order.
    /// With no blocks there is nothing to emit and `None` is returned.
    pub fn assemble(
        &self,
        schema: &TypeSchema,
        blocks: impl IntoIterator<Item = ImplBlock>,
    ) -> Option<GeneratedArtifact> {
        let mut unique = BTreeMap::new();
        for block in blocks {
            unique.entry(block.capability).or_insert(block);
        }

        if unique.is_empty() {
            return None;
        }

        let capabilities: Vec<Capability> = unique.keys().copied().collect();

        let mut content = String::new();
        content.push_str(HEADER);
        content.push('\n');
        content.push_str(&format!("// Type: {}\n", schema.qualified_name()));
        content.push_str(&format!(
            "// Capabilities: {}\n",
            capability::describe(&unique.keys().copied().collect())
        ));
        for block in unique.values() {
            content.push('\n');
            content.push_str(&self.renderer.render_impl(block));
        }

        Some(GeneratedArtifact {
            type_name: schema.qualified_name(),
            file_name: schema.file_name(),
            capabilities,
            content,
        })
    }
}

/// Destination for generated artifacts.
pub trait ArtifactWriter {
    /// Create or replace the artifact's file, returning its path.
    fn write(&mut self, artifact: &GeneratedArtifact) -> io::Result<PathBuf>;

    /// Mark a written file read-only. Marking an already read-only file succeeds.
    fn mark_read_only(&mut self, path: &Path) -> io::Result<()>;
}

/// Outcome of persisting one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub type_name: String,
    pub path: PathBuf,
    pub digest: String,
    pub read_only: bool,
}

/// Write an artifact and, if requested, mark it read-only.
///
/// Read-only marking is best-effort: a failure is logged and reported through
/// [`WrittenArtifact::read_only`], never as an error.
pub fn persist(
    writer: &mut dyn ArtifactWriter,
    artifact: &GeneratedArtifact,
    read_only: bool,
) -> io::Result<WrittenArtifact> {
    let path = writer.write(artifact)?;
    info!(
        type_name = %artifact.type_name,
        path = %path.display(),
        "Generated file"
    );

    let marked = read_only
        && match writer.mark_read_only(&path) {
            Ok(()) => {
                info!(path = %path.display(), "Generated file set read-only");
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to set generated file read-only");
                false
            }
        };

    Ok(WrittenArtifact {
        type_name: artifact.type_name.clone(),
        path,
        digest: artifact.digest(),
        read_only: marked,
    })
}

/// Writes artifacts into a directory.
///
/// Files are written to a temporary file in the same directory and renamed
/// into place, so a reader never sees a partially written artifact.
#[derive(Debug, Clone)]
pub struct FsArtifactWriter {
    dir: PathBuf,
}

impl FsArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactWriter for FsArtifactWriter {
    fn write(&mut self, artifact: &GeneratedArtifact) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&artifact.file_name);

        let mut temp = NamedTempFile::new_in(&self.dir)?;
        temp.write_all(artifact.content.as_bytes())?;
        temp.as_file().sync_all()?;

        // A previous run left the file read-only.
        if path.exists() {
            make_writable(&path)?;
        }
        temp.persist(&path).map_err(|err| err.error)?;

        Ok(path)
    }

    fn mark_read_only(&mut self, path: &Path) -> io::Result<()> {
        let mut permissions = fs::metadata(path)?.permissions();
        if permissions.readonly() {
            return Ok(());
        }
        permissions.set_readonly(true);
        fs::set_permissions(path, permissions)
    }
}

#[allow(clippy::permissions_set_readonly_false)]
fn make_writable(path: &Path) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    if permissions.readonly() {
        permissions.set_readonly(false);
        fs::set_permissions(path, permissions)?;
    }
    Ok(())
}
