//! # Roles, Stages, and Statuses — Closed Value Sets
//!
//! The workflow has exactly ten agent roles, ten stages, five completion
//! statuses, and two execution modes. Each set is an exhaustive enum; the
//! wire form is `snake_case`, and [`ClosedSet::valid_values`] derives the
//! string table used in diagnostics from the variants themselves.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A closed set of string values backed by an enum.
pub trait ClosedSet: Sized + Copy + DeserializeOwned + 'static {
    /// Every member, in registry order.
    fn all() -> &'static [Self];

    /// Wire form of a member.
    fn as_str(&self) -> &'static str;

    /// Wire forms of every member, in registry order.
    fn valid_values() -> Vec<&'static str> {
        Self::all().iter().map(Self::as_str).collect()
    }

    /// Decode a member from a JSON value, `None` when the value is not a
    /// member of the set.
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}

/// An agent role that can emit a stage-completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agent {
    /// Owns the requirements stage.
    ProductManager,
    /// Owns the architecture stage.
    SystemArchitect,
    /// Frontend implementation.
    FrontendEngineer,
    /// Backend implementation.
    BackendEngineer,
    /// AI feature implementation.
    AiEngineer,
    /// Test planning and execution.
    QaEngineer,
    /// Deployment.
    DevopsEngineer,
    /// Safety review.
    SafetyAgent,
    /// Governance review.
    GovernanceAgent,
    /// Code health assessment.
    CodeHealthAgent,
}

impl ClosedSet for Agent {
    fn all() -> &'static [Self] {
        &[
            Self::ProductManager,
            Self::SystemArchitect,
            Self::FrontendEngineer,
            Self::BackendEngineer,
            Self::AiEngineer,
            Self::QaEngineer,
            Self::DevopsEngineer,
            Self::SafetyAgent,
            Self::GovernanceAgent,
            Self::CodeHealthAgent,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::ProductManager => "product_manager",
            Self::SystemArchitect => "system_architect",
            Self::FrontendEngineer => "frontend_engineer",
            Self::BackendEngineer => "backend_engineer",
            Self::AiEngineer => "ai_engineer",
            Self::QaEngineer => "qa_engineer",
            Self::DevopsEngineer => "devops_engineer",
            Self::SafetyAgent => "safety_agent",
            Self::GovernanceAgent => "governance_agent",
            Self::CodeHealthAgent => "code_health_agent",
        }
    }
}

/// A workflow stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Product requirements.
    Requirements,
    /// System architecture.
    Architecture,
    /// Frontend implementation.
    FrontendImplementation,
    /// Backend implementation.
    BackendImplementation,
    /// AI implementation.
    AiImplementation,
    /// QA testing.
    QaTesting,
    /// Deployment.
    Deployment,
    /// Safety review.
    SafetyReview,
    /// Governance review.
    GovernanceReview,
    /// Code health assessment.
    CodeHealthAssessment,
}

impl ClosedSet for Stage {
    fn all() -> &'static [Self] {
        &[
            Self::Requirements,
            Self::Architecture,
            Self::FrontendImplementation,
            Self::BackendImplementation,
            Self::AiImplementation,
            Self::QaTesting,
            Self::Deployment,
            Self::SafetyReview,
            Self::GovernanceReview,
            Self::CodeHealthAssessment,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Requirements => "requirements",
            Self::Architecture => "architecture",
            Self::FrontendImplementation => "frontend_implementation",
            Self::BackendImplementation => "backend_implementation",
            Self::AiImplementation => "ai_implementation",
            Self::QaTesting => "qa_testing",
            Self::Deployment => "deployment",
            Self::SafetyReview => "safety_review",
            Self::GovernanceReview => "governance_review",
            Self::CodeHealthAssessment => "code_health_assessment",
        }
    }
}

/// Outcome reported by a stage-completion signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStatus {
    /// Stage finished cleanly.
    Completed,
    /// Stage finished with non-blocking issues.
    CompletedWithWarnings,
    /// Stage failed.
    Failed,
    /// Stage cannot proceed; `blocking_issues` must say why.
    Blocked,
    /// Stage is waiting on a person.
    RequiresHumanIntervention,
}

impl ClosedSet for SignalStatus {
    fn all() -> &'static [Self] {
        &[
            Self::Completed,
            Self::CompletedWithWarnings,
            Self::Failed,
            Self::Blocked,
            Self::RequiresHumanIntervention,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::CompletedWithWarnings => "completed_with_warnings",
            Self::Failed => "failed",
            Self::Blocked => "blocked",
            Self::RequiresHumanIntervention => "requires_human_intervention",
        }
    }
}

/// How much of the workflow a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Every stage runs.
    FullSystem,
    /// Abbreviated path for small features.
    FastFeature,
}

impl ClosedSet for ExecutionMode {
    fn all() -> &'static [Self] {
        &[Self::FullSystem, Self::FastFeature]
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::FullSystem => "full_system",
            Self::FastFeature => "fast_feature",
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display!(Agent, Stage, SignalStatus, ExecutionMode);
