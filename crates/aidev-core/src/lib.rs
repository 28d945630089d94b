#![deny(missing_docs)]

//! # aidev-core — Foundational Types for the Contract Validator
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies, only `serde`, `serde_json`,
//! `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **The registry is immutable configuration.** The artifact → schema
//!    table and the closed value sets are compiled in as `static` data. A
//!    validation run can never observe a different registry than the one
//!    before it.
//!
//! 2. **Closed sets are enums.** [`Agent`], [`Stage`], [`SignalStatus`] and
//!    [`ExecutionMode`] are exhaustive Rust enums; the string tables printed
//!    in diagnostics are derived from them, never maintained separately.
//!
//! 3. **Findings are typed.** Every problem reported for an artifact is a
//!    [`Finding`] variant; its `Display` form is the line the CLI prints.

pub mod error;
pub mod registry;
pub mod roles;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{Finding, Warning};
pub use registry::{ArtifactKind, Registry, DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACTS_DIR};
pub use roles::{Agent, ClosedSet, ExecutionMode, SignalStatus, Stage};
pub use temporal::parse_iso8601;
