//! # Single-Artifact Validation Engine
//!
//! Drives one artifact through four phases:
//!
//! ```text
//! loading ──▶ resolving-schema ──▶ validating ──▶ done
//!    │               │                  │
//!    └─ load error   └─ no schema       └─ schema load error
//!       (fail)          (pass, warn)       (fail)
//! ```
//!
//! Findings within a phase are collected in full; the only early exits are
//! the three terminal edges above. Nothing is retried and no artifact is
//! written. The engine holds no mutable state, so validating the same
//! unchanged file twice yields identical results.

use std::path::{Path, PathBuf};

use aidev_core::{ArtifactKind, Finding, Warning};

use crate::loader::load_document;
use crate::resolver::SchemaResolver;
use crate::tier::ValidationTier;

/// The phase a validation run ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The artifact could not be loaded.
    Loading,
    /// No schema was available; the artifact is unvalidated.
    ResolvingSchema,
    /// The schema could not be loaded.
    Validating,
    /// The tier ran to completion.
    Done,
}

/// Outcome of validating one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    artifact: PathBuf,
    schema: Option<PathBuf>,
    ended_in: Phase,
    warnings: Vec<Warning>,
    findings: Vec<Finding>,
}

impl ValidationResult {
    fn new(artifact: &Path) -> Self {
        Self {
            artifact: artifact.to_path_buf(),
            schema: None,
            ended_in: Phase::Loading,
            warnings: Vec::new(),
            findings: Vec::new(),
        }
    }

    /// True iff no findings were recorded. Warnings never affect this.
    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    /// The validated artifact.
    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    /// The schema the artifact was checked against, once resolved.
    pub fn schema(&self) -> Option<&Path> {
        self.schema.as_deref()
    }

    /// The phase the run ended in.
    pub fn ended_in(&self) -> Phase {
        self.ended_in
    }

    /// Whether the artifact parsed as JSON.
    pub fn document_loaded(&self) -> bool {
        self.ended_in != Phase::Loading
    }

    /// Advisory conditions, in order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Findings, in order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings rendered as the lines shown to operators.
    pub fn error_messages(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }
}

/// Validates artifacts with one resolver and one tier.
pub struct ValidationEngine {
    resolver: SchemaResolver,
    tier: Box<dyn ValidationTier>,
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("contracts_dir", &self.resolver.contracts_dir())
            .field("tier", &self.tier.name())
            .finish()
    }
}

impl ValidationEngine {
    /// Create an engine from a resolver and the tier selected at startup.
    pub fn new(resolver: SchemaResolver, tier: Box<dyn ValidationTier>) -> Self {
        Self { resolver, tier }
    }

    /// The active tier.
    pub fn tier(&self) -> &dyn ValidationTier {
        self.tier.as_ref()
    }

    /// The schema resolver.
    pub fn resolver(&self) -> &SchemaResolver {
        &self.resolver
    }

    /// Validate `artifact`, against `schema_override` when given, otherwise
    /// against the schema registered for its file name.
    pub fn validate(&self, artifact: &Path, schema_override: Option<&Path>) -> ValidationResult {
        let mut result = ValidationResult::new(artifact);

        // loading
        let document = match load_document(artifact) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::debug!(artifact = %artifact.display(), error = %e, "artifact failed to load");
                result.findings.push(e.into());
                return result;
            }
        };

        // resolving-schema
        result.ended_in = Phase::ResolvingSchema;
        let schema_path = match schema_override {
            Some(path) => path.to_path_buf(),
            None => match self.resolver.resolve(artifact) {
                Some(path) => path,
                None => {
                    tracing::debug!(artifact = %artifact.display(), "no schema mapping");
                    result.warnings.push(Warning::NoSchemaMapping);
                    return result;
                }
            },
        };
        if !schema_path.exists() {
            tracing::debug!(schema = %schema_path.display(), "schema file missing");
            result.warnings.push(Warning::SchemaNotFound {
                path: schema_path.display().to_string(),
            });
            return result;
        }
        result.schema = Some(schema_path.clone());

        // validating
        result.ended_in = Phase::Validating;
        let schema = match load_document(&schema_path) {
            Ok(schema) => schema,
            Err(e) => {
                result.findings.push(Finding::SchemaError {
                    reason: e.to_string(),
                });
                return result;
            }
        };

        let kind = artifact
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(ArtifactKind::from_file_name);
        result.findings = self.tier.check(kind, &document, &schema, &schema_path);
        result.ended_in = Phase::Done;

        tracing::debug!(
            artifact = %artifact.display(),
            tier = self.tier.name(),
            findings = result.findings.len(),
            "artifact validated"
        );
        result
    }
}
