//! # aidev-schema — Artifact Validation Engine
//!
//! Validates the JSON artifacts produced by workflow stages against the
//! contract schemas named in the [`aidev_core::Registry`].
//!
//! ## Pipeline
//!
//! [`ValidationEngine::validate`] drives one artifact through
//! `loading → resolving-schema → validating → done`:
//!
//! - [`loader`] reads and parses the document, classifying failures.
//! - [`resolver`] maps the artifact file name to its schema path.
//! - a [`ValidationTier`] checks the document against the schema.
//!
//! ## Tiers
//!
//! Two tiers implement [`ValidationTier`] and one is chosen at startup by
//! [`select_tier`]:
//!
//! - [`ConformanceTier`] (cargo feature `conformance`, on by default) hands
//!   the whole check to the `jsonschema` crate.
//! - [`StructuralTier`] checks the schema's `required` list and then runs
//!   the [`domain`] rules for artifacts that have them.
//!
//! ## Batch and diagnostics
//!
//! [`batch::validate_tree`] runs the engine over every JSON file in an
//! artifact tree and aggregates the counts; [`deps::check_dependencies`]
//! reports which tier is active and how many schemas are on disk.

pub mod batch;
#[cfg(feature = "conformance")]
pub mod conformance;
pub mod deps;
pub mod domain;
pub mod engine;
pub mod loader;
pub mod resolver;
pub mod structural;
pub mod tier;

// Re-export primary types.
pub use batch::{validate_tree, BatchError, BatchReport};
pub use deps::{check_dependencies, DependencyReport};
pub use engine::{Phase, ValidationEngine, ValidationResult};
pub use loader::{load_document, LoadError};
pub use resolver::SchemaResolver;
#[cfg(feature = "conformance")]
pub use tier::ConformanceTier;
pub use tier::{select_tier, StructuralTier, ValidationTier, CONFORMANCE_AVAILABLE};
