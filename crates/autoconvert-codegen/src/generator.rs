//! Generation runs: one pass per declared type.
//!
//! A pass is extract → synthesize → assemble → persist. Passes share nothing
//! but the read-only registry, and a failing pass never stops the others.
//! All artifacts are assembled before the first write, since artifact file
//! names must be unique across the run.

use crate::config::GeneratorConfig;
use crate::emit::{self, ArtifactWriter, Emitter, GeneratedArtifact, WrittenArtifact};
use crate::error::{GenerateError, SchemaFault};
use crate::extract::extract_schema;
use crate::registry::{DeclaredType, TypeRegistry};
use crate::synth;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A type's qualified name and the outcome of assembling its artifact
type PlannedArtifact = (String, Result<Option<GeneratedArtifact>, SchemaFault>);

/// Summary of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<WrittenArtifact>,

    /// Types with nothing to emit
    pub skipped: Vec<String>,

    pub failures: Vec<GenerateError>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives generation for every type in a registry.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    emitter: Emitter,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let emitter = Emitter::new(&config);
        Self { config, emitter }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produce the artifact for one type without writing it.
    ///
    /// Returns `Ok(None)` when the type requests no capability.
    pub fn generate_type(
        &self,
        declared: &DeclaredType,
        registry: &TypeRegistry,
    ) -> Result<Option<GeneratedArtifact>, SchemaFault> {
        let schema = extract_schema(declared, registry, &self.config)?;
        let blocks = synth::synthesize(&schema);
        Ok(self.emitter.assemble(&schema, blocks))
    }

    /// Run one pass per registered type, writing artifacts through `writer`.
    ///
    /// Every artifact is assembled before anything is written, so types whose
    /// artifacts would share a file name all fail instead of overwriting each
    /// other.
    pub fn generate(
        &self,
        registry: &TypeRegistry,
        writer: &mut dyn ArtifactWriter,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();

        let planned: Vec<PlannedArtifact> = registry
            .types()
            .iter()
            .map(|declared| {
                (
                    declared.qualified_name(),
                    self.generate_type(declared, registry),
                )
            })
            .collect();
        let owners = file_owners(&planned);

        for (type_name, outcome) in planned {
            let outcome = outcome.and_then(|artifact| claim(artifact, &type_name, &owners));
            let artifact = match outcome {
                Ok(Some(artifact)) => artifact,
                Ok(None) => {
                    debug!(type_name = %type_name, "No capabilities requested, skipping");
                    report.skipped.push(type_name);
                    continue;
                }
                Err(fault) => {
                    warn!(type_name = %type_name, code = fault.code(), "{fault}");
                    report.failures.push(GenerateError::schema(type_name, fault));
                    continue;
                }
            };

            match emit::persist(writer, &artifact, self.config.read_only) {
                Ok(written) => report.written.push(written),
                Err(source) => {
                    warn!(type_name = %type_name, error = %source, "Failed to write artifact");
                    report.failures.push(GenerateError::Write {
                        path: artifact.file_name.into(),
                        type_name,
                        source,
                    });
                }
            }
        }

        report
    }
}

/// Types producing each artifact file name in a run
fn file_owners(planned: &[PlannedArtifact]) -> BTreeMap<String, Vec<String>> {
    let mut owners: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (type_name, outcome) in planned {
        if let Ok(Some(artifact)) = outcome {
            owners
                .entry(artifact.file_name.clone())
                .or_default()
                .push(type_name.clone());
        }
    }
    owners
}

/// Fail an artifact whose file name another type also produces.
fn claim(
    artifact: Option<GeneratedArtifact>,
    type_name: &str,
    owners: &BTreeMap<String, Vec<String>>,
) -> Result<Option<GeneratedArtifact>, SchemaFault> {
    let Some(artifact) = artifact else {
        return Ok(None);
    };

    let others: Vec<String> = owners
        .get(&artifact.file_name)
        .into_iter()
        .flatten()
        .filter(|owner| owner.as_str() != type_name)
        .cloned()
        .collect();

    if others.is_empty() {
        Ok(Some(artifact))
    } else {
        Err(SchemaFault::ArtifactNameCollision {
            file_name: artifact.file_name,
            others,
        })
    }
}
