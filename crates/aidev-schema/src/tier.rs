//! # Validation Tiers
//!
//! The engine checks a loaded document against its schema through a
//! [`ValidationTier`]. Exactly one tier is chosen per process by
//! [`select_tier`] and injected into the engine:
//!
//! | tier | when | checks |
//! |---|---|---|
//! | [`ConformanceTier`] | feature `conformance` and not forced basic | everything the schema declares |
//! | [`StructuralTier`] | otherwise | `required` list + domain rules |
//!
//! When the conformance tier is active it replaces the structural tier and
//! the domain rules entirely for every artifact.

use std::path::Path;

use aidev_core::{ArtifactKind, Finding};
use serde_json::Value;

use crate::domain;
use crate::structural::check_required_fields;

/// Whether the conformance capability was compiled into this build.
pub const CONFORMANCE_AVAILABLE: bool = cfg!(feature = "conformance");

/// A strategy for checking a document against its schema.
pub trait ValidationTier: Send + Sync {
    /// Short name shown in diagnostics.
    fn name(&self) -> &'static str;

    /// True for the full-conformance tier.
    fn is_conformance(&self) -> bool;

    /// Check `document` against `schema`, loaded from `schema_path`.
    ///
    /// `kind` is set when the artifact has domain rules. Returns every
    /// finding, in the order they were produced.
    fn check(
        &self,
        kind: Option<ArtifactKind>,
        document: &Value,
        schema: &Value,
        schema_path: &Path,
    ) -> Vec<Finding>;
}

/// Required fields from the schema, then the artifact's domain rules.
///
/// A domain finding identical to one already reported (typically the same
/// missing field) is collapsed into the earlier one, so each problem is
/// listed and counted once.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralTier;

impl ValidationTier for StructuralTier {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn is_conformance(&self) -> bool {
        false
    }

    fn check(
        &self,
        kind: Option<ArtifactKind>,
        document: &Value,
        schema: &Value,
        _schema_path: &Path,
    ) -> Vec<Finding> {
        let mut findings = check_required_fields(document, schema);
        if let Some(kind) = kind {
            // Schema and domain rules often both require the same field.
            for finding in domain::validator_for(kind)(document) {
                if !findings.contains(&finding) {
                    findings.push(finding);
                }
            }
        }
        findings
    }
}

/// Full JSON Schema conformance via the `jsonschema` crate.
#[cfg(feature = "conformance")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConformanceTier;

#[cfg(feature = "conformance")]
impl ValidationTier for ConformanceTier {
    fn name(&self) -> &'static str {
        "conformance"
    }

    fn is_conformance(&self) -> bool {
        true
    }

    fn check(
        &self,
        _kind: Option<ArtifactKind>,
        document: &Value,
        schema: &Value,
        schema_path: &Path,
    ) -> Vec<Finding> {
        crate::conformance::check_conformance(document, schema, schema_path)
    }
}

/// Pick the tier for this process.
///
/// `force_basic` selects the structural tier even when conformance is
/// compiled in.
pub fn select_tier(force_basic: bool) -> Box<dyn ValidationTier> {
    #[cfg(feature = "conformance")]
    {
        if !force_basic {
            return Box::new(ConformanceTier);
        }
    }

    #[cfg(not(feature = "conformance"))]
    let _ = force_basic;

    Box::new(StructuralTier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signal_schema() -> Value {
        json!({
            "type": "object",
            "required": ["agent", "stage", "status", "timestamp"],
            "properties": {"agent": {"type": "string"}}
        })
    }

    #[test]
    fn structural_tier_collapses_duplicate_missing_fields() {
        let doc = json!({"stage": "requirements", "status": "completed", "timestamp": "2024-01-01"});
        let findings = StructuralTier.check(
            Some(ArtifactKind::StageCompletionSignal),
            &doc,
            &signal_schema(),
            Path::new("s.json"),
        );
        assert_eq!(findings, vec![Finding::MissingField("agent".to_string())]);
    }

    #[test]
    fn structural_tier_without_kind_skips_domain_rules() {
        let doc = json!({
            "agent": "intern",
            "stage": "requirements",
            "status": "completed",
            "timestamp": "2024-01-01"
        });
        let findings = StructuralTier.check(None, &doc, &signal_schema(), Path::new("s.json"));
        assert!(findings.is_empty());

        let findings = StructuralTier.check(
            Some(ArtifactKind::StageCompletionSignal),
            &doc,
            &signal_schema(),
            Path::new("s.json"),
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn structural_tier_does_not_check_types() {
        let doc = json!({"agent": 1, "stage": 2, "status": 3, "timestamp": 4});
        let findings = StructuralTier.check(None, &doc, &signal_schema(), Path::new("s.json"));
        assert!(findings.is_empty());
    }

    #[test]
    fn forced_basic_selects_structural() {
        let tier = select_tier(true);
        assert_eq!(tier.name(), "structural");
        assert!(!tier.is_conformance());
    }

    #[test]
    fn default_selection_follows_feature() {
        let tier = select_tier(false);
        assert_eq!(tier.is_conformance(), CONFORMANCE_AVAILABLE);
    }

    #[cfg(feature = "conformance")]
    #[test]
    fn conformance_tier_ignores_domain_rules() {
        // Passes the schema; would fail the domain enum rule.
        let doc = json!({
            "agent": "intern",
            "stage": "requirements",
            "status": "completed",
            "timestamp": "2024-01-01"
        });
        let findings = ConformanceTier.check(
            Some(ArtifactKind::StageCompletionSignal),
            &doc,
            &signal_schema(),
            Path::new("s.json"),
        );
        assert!(findings.is_empty(), "{findings:?}");
    }
}
