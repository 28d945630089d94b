//! # Dependency Diagnostics
//!
//! Reports which validation tier is compiled in and active, whether the
//! contracts directory is present, and what the tool is running on. Purely
//! informational: nothing here affects validation.

use std::path::{Path, PathBuf};

use crate::engine::ValidationEngine;
use crate::tier::CONFORMANCE_AVAILABLE;

/// Snapshot of the validation environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReport {
    /// Whether the `conformance` feature was compiled in.
    pub conformance_compiled: bool,
    /// Name of the tier the engine is using.
    pub active_tier: &'static str,
    /// Contracts directory the resolver reads schemas from.
    pub contracts_dir: PathBuf,
    /// Number of `*.json` files directly in `contracts_dir`, or `None` when
    /// the directory is missing.
    pub schema_count: Option<usize>,
    /// Version of this crate.
    pub tool_version: &'static str,
    /// Target operating system.
    pub os: &'static str,
    /// Target architecture.
    pub arch: &'static str,
}

impl DependencyReport {
    /// True when the engine performs full schema conformance checking.
    pub fn full_validation_active(&self) -> bool {
        self.conformance_compiled && self.active_tier == "conformance"
    }
}

/// Inspect `engine` and its contracts directory.
pub fn check_dependencies(engine: &ValidationEngine) -> DependencyReport {
    let contracts_dir = engine.resolver().contracts_dir().to_path_buf();
    let schema_count = count_schema_files(&contracts_dir);
    tracing::debug!(
        contracts_dir = %contracts_dir.display(),
        ?schema_count,
        tier = engine.tier().name(),
        "dependency check"
    );
    DependencyReport {
        conformance_compiled: CONFORMANCE_AVAILABLE,
        active_tier: engine.tier().name(),
        contracts_dir,
        schema_count,
        tool_version: env!("CARGO_PKG_VERSION"),
        os: std::env::consts::OS,
        arch: std::env::consts::ARCH,
    }
}

/// Count `*.json` files directly inside `dir`.
pub fn count_schema_files(dir: &Path) -> Option<usize> {
    let entries = std::fs::read_dir(dir).ok()?;
    let count = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .count();
    Some(count)
}
