//! # Findings Taxonomy
//!
//! Structured findings for artifact validation, built with `thiserror`.
//!
//! A [`Finding`] is a hard problem: any finding makes the artifact fail.
//! A [`Warning`] is advisory and never affects the outcome. The `Display`
//! form of each variant is exactly the line shown to operators, so tests
//! and CI logs can match on it.

use thiserror::Error;

/// A validation problem recorded against a single artifact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The artifact (or schema) file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: String,
    },

    /// The file exists but is not well-formed JSON.
    #[error("invalid JSON syntax: {message}")]
    Syntax {
        /// Parser diagnostic, including line and column.
        message: String,
    },

    /// Any other I/O failure while reading the file.
    #[error("error reading file: {reason}")]
    Io {
        /// Underlying I/O error message.
        reason: String,
    },

    /// The schema document could not be loaded or compiled.
    #[error("schema error: {reason}")]
    SchemaError {
        /// Why the schema was rejected.
        reason: String,
    },

    /// A required top-level field is absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field holds a value outside its registered set.
    #[error("invalid {field}: '{value}' (valid: {joined})", joined = .valid.join(", "))]
    InvalidEnum {
        /// Name of the offending field.
        field: String,
        /// The value found in the document.
        value: String,
        /// The registered values, in registry order.
        valid: Vec<&'static str>,
    },

    /// The `timestamp` field is present but empty.
    #[error("empty timestamp")]
    EmptyTimestamp,

    /// The `timestamp` field does not parse as ISO 8601.
    #[error("invalid timestamp format: '{value}' (expected ISO 8601)")]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
    },

    /// A violation reported by the schema-conformance capability.
    #[error("{path}: {message}")]
    ConformanceViolation {
        /// JSON Pointer into the document, or `(root)`.
        path: String,
        /// Violation message from the conformance capability.
        message: String,
    },

    /// A cross-field rule that is advisory in wording but still fails the
    /// artifact (e.g. `blocked` without `blocking_issues`).
    #[error("{0} (warning)")]
    SoftInvariant(String),
}

/// Advisory conditions that never fail an artifact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The artifact file name has no entry in the registry.
    #[error("no schema mapping for this artifact")]
    NoSchemaMapping,

    /// The resolved schema path does not exist on disk.
    #[error("schema not found: {path}")]
    SchemaNotFound {
        /// The resolved schema path.
        path: String,
    },
}
