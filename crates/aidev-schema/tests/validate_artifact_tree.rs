//! Integration test: validate artifacts laid out the way a workflow leaves
//! them on disk, a contracts directory of schemas next to an `ARTIFACTS/`
//! tree with one subdirectory per stage.
//!
//! Covers the engine end to end through both tiers and the batch driver.

use std::path::{Path, PathBuf};

use aidev_core::{Finding, Registry, Warning};
use aidev_schema::{
    select_tier, validate_tree, Phase, SchemaResolver, StructuralTier, ValidationEngine,
    ValidationTier,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

const SIGNAL_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Stage Completion Signal",
  "type": "object",
  "required": ["agent", "stage", "status", "timestamp"],
  "properties": {
    "agent": {"type": "string"},
    "stage": {"type": "string"},
    "status": {
      "type": "string",
      "enum": ["completed", "completed_with_warnings", "failed", "blocked", "requires_human_intervention"]
    },
    "timestamp": {"type": "string"},
    "blocking_issues": {"type": "array"}
  }
}"#;

const QA_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "required": ["test_summary", "coverage"],
  "properties": {
    "test_summary": {"type": "object"},
    "coverage": {"type": "number", "minimum": 0, "maximum": 100}
  }
}"#;

struct Project {
    dir: TempDir,
}

impl Project {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let contracts = dir.path().join("contracts");
        std::fs::create_dir_all(&contracts).unwrap();
        std::fs::write(
            contracts.join("stage-completion-signal-schema.json"),
            SIGNAL_SCHEMA,
        )
        .unwrap();
        std::fs::write(contracts.join("qa-output-schema.json"), QA_SCHEMA).unwrap();
        std::fs::create_dir_all(dir.path().join("ARTIFACTS")).unwrap();
        Self { dir }
    }

    fn contracts(&self) -> PathBuf {
        self.dir.path().join("contracts")
    }

    fn artifacts(&self) -> PathBuf {
        self.dir.path().join("ARTIFACTS")
    }

    fn write(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.artifacts().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, body).unwrap();
        path
    }

    fn write_json(&self, rel: &str, value: &Value) -> PathBuf {
        self.write(rel, &serde_json::to_string_pretty(value).unwrap())
    }

    fn engine(&self, tier: Box<dyn ValidationTier>) -> ValidationEngine {
        ValidationEngine::new(SchemaResolver::new(Registry::standard(), self.contracts()), tier)
    }

    fn structural(&self) -> ValidationEngine {
        self.engine(Box::new(StructuralTier))
    }
}

fn good_signal() -> Value {
    json!({
        "agent": "product_manager",
        "stage": "requirements",
        "status": "completed",
        "timestamp": "2024-01-01T00:00:00Z"
    })
}

#[test]
fn well_formed_signal_passes() {
    let project = Project::new();
    let path = project.write_json("system/stage-completion-signal.json", &good_signal());

    let result = project.structural().validate(&path, None);
    assert!(result.is_success(), "{:?}", result.findings());
    assert!(result.findings().is_empty());
    assert!(result.warnings().is_empty());
    assert_eq!(result.ended_in(), Phase::Done);
    assert_eq!(
        result.schema().and_then(Path::file_name).unwrap(),
        "stage-completion-signal-schema.json"
    );
}

#[test]
fn signal_missing_agent_fails() {
    let project = Project::new();
    let mut doc = good_signal();
    doc.as_object_mut().unwrap().remove("agent");
    let path = project.write_json("system/stage-completion-signal.json", &doc);

    let result = project.structural().validate(&path, None);
    assert!(!result.is_success());
    assert!(result
        .error_messages()
        .contains(&"missing required field: agent".to_string()));
}

#[test]
fn blocked_signal_without_issues_fails() {
    let project = Project::new();
    let mut doc = good_signal();
    doc["status"] = json!("blocked");
    let path = project.write_json("system/stage-completion-signal.json", &doc);

    let result = project.structural().validate(&path, None);
    assert!(!result.is_success());
    assert!(matches!(result.findings(), [Finding::SoftInvariant(_)]));
}

#[test]
fn invalid_json_stops_before_schema() {
    let project = Project::new();
    let path = project.write("qa/qa-test-report.json", "{\"coverage\": 80,");

    let result = project.structural().validate(&path, None);
    assert!(!result.document_loaded());
    assert_eq!(result.ended_in(), Phase::Loading);
    assert!(result.schema().is_none());
    assert!(matches!(result.findings(), [Finding::Syntax { .. }]));
}

#[test]
fn unregistered_artifact_passes_with_one_warning() {
    let project = Project::new();
    let path = project.write_json("scratch/notes.json", &json!({"anything": true}));

    let result = project.structural().validate(&path, None);
    assert!(result.is_success());
    assert!(result.findings().is_empty());
    assert_eq!(result.warnings(), &[Warning::NoSchemaMapping]);
}

#[test]
fn registered_artifact_without_schema_file_passes_with_warning() {
    let project = Project::new();
    let path = project.write_json("devops/deployment-report.json", &json!({}));

    let result = project.structural().validate(&path, None);
    assert!(result.is_success());
    assert!(matches!(result.warnings(), [Warning::SchemaNotFound { .. }]));
}

#[test]
fn explicit_schema_overrides_registry() {
    let project = Project::new();
    let path = project.write_json("scratch/notes.json", &json!({"coverage": 12}));
    let schema = project.contracts().join("qa-output-schema.json");

    let result = project.structural().validate(&path, Some(&schema));
    assert_eq!(
        result.error_messages(),
        vec!["missing required field: test_summary".to_string()]
    );
}

#[cfg(feature = "conformance")]
#[test]
fn conformance_tier_checks_types_and_ranges() {
    let project = Project::new();
    let path = project.write_json(
        "qa/qa-test-report.json",
        &json!({"test_summary": [], "coverage": 140}),
    );

    let structural = project.structural().validate(&path, None);
    assert!(structural.is_success());

    let full = project.engine(select_tier(false)).validate(&path, None);
    assert_eq!(full.findings().len(), 2, "{:?}", full.findings());
    let messages = full.error_messages();
    assert!(messages.iter().any(|m| m.starts_with("/test_summary: ")));
    assert!(messages.iter().any(|m| m.starts_with("/coverage: ")));
}

#[test]
fn forced_basic_engine_runs_domain_rules() {
    let project = Project::new();
    let mut doc = good_signal();
    doc["agent"] = json!("intern");
    let path = project.write_json("system/stage-completion-signal.json", &doc);

    let result = project.engine(select_tier(true)).validate(&path, None);
    assert_eq!(result.findings().len(), 1);
    assert!(result.error_messages()[0].starts_with("invalid agent: 'intern'"));
}

#[test]
fn batch_counts_match_valid_and_invalid_files() {
    let project = Project::new();
    project.write_json("system/stage-completion-signal.json", &good_signal());
    project.write_json("qa/qa-test-report.json", &json!({"test_summary": {}, "coverage": 91}));
    project.write_json("scratch/notes.json", &json!({}));
    project.write("frontend/broken.json", "not json");
    project.write_json("qa/rerun/qa-test-report.json", &json!({"coverage": 40}));

    let mut order = Vec::new();
    let report = validate_tree(&project.structural(), &project.artifacts(), |r| {
        order.push(r.artifact().to_path_buf());
    })
    .unwrap();

    assert_eq!(report.total, 5);
    assert_eq!(report.passed, 3);
    assert_eq!(report.failed, 2);
    assert!(!report.is_success());
    assert_eq!(order.len(), 5);
}

#[test]
fn batch_of_valid_files_succeeds() {
    let project = Project::new();
    project.write_json("system/stage-completion-signal.json", &good_signal());
    project.write_json("scratch/notes.json", &json!([1, 2, 3]));

    let report = validate_tree(&project.structural(), &project.artifacts(), |_| {}).unwrap();
    assert_eq!((report.total, report.passed, report.failed), (2, 2, 0));
    assert!(report.is_success());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Validating the same unchanged file twice yields identical results.
    #[test]
    fn validation_is_idempotent(
        agent in "[a-z_]{0,20}",
        status in prop::sample::select(vec!["completed", "blocked", "done", ""]),
        ts in prop::sample::select(vec!["2024-01-01T00:00:00Z", "2024-01-01", "yesterday", ""]),
    ) {
        let project = Project::new();
        let path = project.write_json(
            "system/stage-completion-signal.json",
            &json!({"agent": agent, "stage": "qa_testing", "status": status, "timestamp": ts}),
        );
        let engine = project.structural();
        let first = engine.validate(&path, None);
        let second = engine.validate(&path, None);
        prop_assert_eq!(first, second);
    }
}
