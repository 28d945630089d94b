//! # Domain Rules
//!
//! Artifact-specific semantic checks that run in the structural tier, on top
//! of the schema's required-field list. Each [`ArtifactKind`] maps to exactly
//! one [`DomainValidator`]; adding a kind means adding a variant and an arm
//! in [`validator_for`], never touching the engine.
//!
//! Rules never stop early: every finding for a document is returned.

use aidev_core::{
    parse_iso8601, Agent, ArtifactKind, ClosedSet, ExecutionMode, Finding, SignalStatus, Stage,
};
use serde_json::Value;

use crate::structural::require_fields;

/// A domain rule set: document in, ordered findings out.
pub type DomainValidator = fn(&Value) -> Vec<Finding>;

const SIGNAL_REQUIRED: &[&str] = &["agent", "stage", "status", "timestamp"];

const WORKFLOW_STATE_REQUIRED: &[&str] = &[
    "workflow_id",
    "execution_mode",
    "current_stage",
    "stages",
    "created_at",
    "updated_at",
];

/// The rule set for an artifact kind.
pub fn validator_for(kind: ArtifactKind) -> DomainValidator {
    match kind {
        ArtifactKind::StageCompletionSignal => validate_stage_completion_signal,
        ArtifactKind::WorkflowState => validate_workflow_state,
    }
}

/// Rules for `stage-completion-signal.json`.
pub fn validate_stage_completion_signal(document: &Value) -> Vec<Finding> {
    let mut findings = require_fields(document, SIGNAL_REQUIRED.iter().copied());

    findings.extend(check_member::<Agent>(document, "agent"));
    findings.extend(check_member::<Stage>(document, "stage"));
    findings.extend(check_member::<SignalStatus>(document, "status"));

    if let Some(ts) = document.get("timestamp") {
        findings.extend(check_timestamp(ts));
    }

    let blocked = document
        .get("status")
        .and_then(SignalStatus::from_json)
        .is_some_and(|s| s == SignalStatus::Blocked);
    let has_issues = document.get("blocking_issues").is_some_and(is_truthy);
    if blocked && !has_issues {
        findings.push(Finding::SoftInvariant(
            "status is 'blocked' but no blocking_issues provided".to_string(),
        ));
    }

    findings
}

/// Rules for `workflow-state.json`.
pub fn validate_workflow_state(document: &Value) -> Vec<Finding> {
    let mut findings = require_fields(document, WORKFLOW_STATE_REQUIRED.iter().copied());

    findings.extend(check_member::<ExecutionMode>(document, "execution_mode"));

    findings
}

/// `InvalidEnum` when `field` holds a value outside `T`. Absent and `null`
/// fields are left to the presence rules.
fn check_member<T: ClosedSet>(document: &Value, field: &str) -> Option<Finding> {
    let value = document.get(field).filter(|v| !v.is_null())?;
    if T::from_json(value).is_some() {
        return None;
    }
    Some(Finding::InvalidEnum {
        field: field.to_string(),
        value: render(value),
        valid: T::valid_values(),
    })
}

fn check_timestamp(value: &Value) -> Option<Finding> {
    if !is_truthy(value) {
        return Some(Finding::EmptyTimestamp);
    }
    match value.as_str() {
        Some(s) if parse_iso8601(s).is_some() => None,
        _ => Some(Finding::InvalidTimestamp {
            value: render(value),
        }),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Emptiness as workflow tooling writes it: `null`, `false`, zero, and
/// empty strings, arrays, and objects all count as "not provided".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        /// Any agent string outside the registered set yields exactly one
        /// invalid-enum finding naming that value.
        #[test]
        fn unknown_agent_yields_one_invalid_enum(agent in "[a-z_]{1,24}") {
            prop_assume!(!Agent::valid_values().contains(&agent.as_str()));
            let doc = json!({
                "agent": agent.clone(),
                "stage": "deployment",
                "status": "completed",
                "timestamp": "2024-01-01T00:00:00Z"
            });
            let findings = validate_stage_completion_signal(&doc);
            prop_assert_eq!(findings.len(), 1);
            let expected = format!("invalid agent: '{}'", agent);
            prop_assert!(findings[0].to_string().starts_with(&expected));
        }

        /// Rule evaluation is a pure function of the document.
        #[test]
        fn rules_are_deterministic(status in "[a-z_]{0,12}", ts in "[0-9TZ:-]{0,20}") {
            let doc = json!({"agent": "qa_engineer", "status": status, "timestamp": ts});
            prop_assert_eq!(
                validate_stage_completion_signal(&doc),
                validate_stage_completion_signal(&doc)
            );
        }
    }
}
