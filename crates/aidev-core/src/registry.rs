//! # Artifact Registry
//!
//! The static mapping from artifact file name to schema file name, plus the
//! [`ArtifactKind`] tag for the artifacts that carry domain rules.
//!
//! Lookup is by exact file name. A name that is not registered is not an
//! error; the caller decides how to report it.

/// Default location of the schema documents, relative to the project root.
pub const DEFAULT_CONTRACTS_DIR: &str = "L3 - Workflows & Contracts/contracts";

/// Default root of the artifact tree, relative to the project root.
pub const DEFAULT_ARTIFACTS_DIR: &str = "ARTIFACTS";

const STANDARD_ENTRIES: &[(&str, &str)] = &[
    ("product-requirements-packet.json", "pm-output-schema.json"),
    ("architecture-handover-packet.json", "architect-output-schema.json"),
    ("architecture-assessment.json", "architecture-assessment-schema.json"),
    ("frontend-implementation-report.json", "frontend-output-schema.json"),
    ("backend-implementation-report.json", "backend-output-schema.json"),
    ("ai-implementation-report.json", "ai-engineer-output-schema.json"),
    ("qa-test-report.json", "qa-output-schema.json"),
    ("deployment-report.json", "devops-output-schema.json"),
    ("stage-completion-signal.json", "stage-completion-signal-schema.json"),
    ("workflow-state.json", "workflow-state-schema.json"),
    ("safety-review-report.json", "safety-output-schema.json"),
    ("governance-review-report.json", "governance-output-schema.json"),
    ("code-health-report.json", "code-health-output-schema.json"),
    ("orchestrator-log.json", "controller-output-schema.json"),
    ("project-config.json", "project-config-schema.json"),
];

/// Read-only artifact → schema table.
///
/// `Copy` and backed by `'static` data, so it can be handed to every
/// component without sharing or locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
    entries: &'static [(&'static str, &'static str)],
}

impl Registry {
    /// Build a registry over a custom table.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// The registry of the fifteen workflow artifacts.
    pub const fn standard() -> Self {
        Self::new(STANDARD_ENTRIES)
    }

    /// Schema file name for an artifact file name, by exact match.
    pub fn schema_for(&self, artifact_name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(artifact, _)| *artifact == artifact_name)
            .map(|(_, schema)| *schema)
    }

    /// All registered artifact names, sorted alphabetically.
    pub fn artifact_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.iter().map(|(a, _)| *a).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered artifacts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Artifacts that carry domain-specific rules in addition to their schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// `stage-completion-signal.json`
    StageCompletionSignal,
    /// `workflow-state.json`
    WorkflowState,
}

impl ArtifactKind {
    /// Every kind with domain rules.
    pub fn all() -> &'static [ArtifactKind] {
        &[Self::StageCompletionSignal, Self::WorkflowState]
    }

    /// The artifact file name identifying this kind.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::StageCompletionSignal => "stage-completion-signal.json",
            Self::WorkflowState => "workflow-state.json",
        }
    }

    /// Resolve a kind from an exact artifact file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.file_name() == name)
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::StageCompletionSignal => "stage-completion signal",
            Self::WorkflowState => "workflow state",
        };
        write!(f, "{s}")
    }
}
