//! # Batch Validation
//!
//! Runs the [`ValidationEngine`] over every `*.json` file under an artifact
//! root and aggregates the outcome. One artifact's failure never stops the
//! scan; unreadable subdirectories are logged and skipped.
//!
//! Files are visited in sorted path order so output is stable, but the
//! report's meaning depends only on its counts.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::{ValidationEngine, ValidationResult};

/// Errors that prevent a batch from running at all.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The artifact root does not exist or is not a directory.
    #[error("artifacts directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The artifact root could not be listed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of artifacts validated.
    pub total: usize,
    /// Number that passed.
    pub passed: usize,
    /// Number that failed.
    pub failed: usize,
    /// Per-artifact results, in visiting order.
    pub results: Vec<ValidationResult>,
}

impl BatchReport {
    /// True iff no artifact failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Results of the failed artifacts.
    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    fn record(&mut self, result: ValidationResult) {
        self.total += 1;
        if result.is_success() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }
}

/// Validate every JSON file under `root`.
///
/// `observer` sees each result as soon as it is produced, before the next
/// file is read.
///
/// # Errors
///
/// [`BatchError::RootNotFound`] when `root` is not a directory, and
/// [`BatchError::Io`] when it cannot be listed.
pub fn validate_tree(
    engine: &ValidationEngine,
    root: &Path,
    mut observer: impl FnMut(&ValidationResult),
) -> Result<BatchReport, BatchError> {
    let files = find_json_files(root)?;
    tracing::info!(root = %root.display(), count = files.len(), "validating artifact tree");

    let mut report = BatchReport::default();
    for path in &files {
        let result = engine.validate(path, None);
        observer(&result);
        report.record(result);
    }

    tracing::info!(
        total = report.total,
        passed = report.passed,
        failed = report.failed,
        "batch complete"
    );
    Ok(report)
}

/// Recursively collect `*.json` files under `root`, sorted.
///
/// # Errors
///
/// Fails only for the root itself; problems below it are logged.
pub fn find_json_files(root: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !root.is_dir() {
        return Err(BatchError::RootNotFound(root.to_path_buf()));
    }
    let mut results = Vec::new();
    for entry in std::fs::read_dir(root)? {
        visit(entry, &mut results);
    }
    results.sort();
    Ok(results)
}

fn walk_for_json(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during artifact walk"
            );
            return;
        }
    };
    for entry in entries {
        visit(entry, acc);
    }
}

fn visit(entry: std::io::Result<std::fs::DirEntry>, acc: &mut Vec<PathBuf>) {
    let entry = match entry {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read directory entry");
            return;
        }
    };
    let path = entry.path();
    // Symlinked directories are not followed, which rules out cycles.
    let Ok(file_type) = entry.file_type() else {
        return;
    };
    if file_type.is_dir() {
        walk_for_json(&path, acc);
    } else if path.extension().is_some_and(|ext| ext == "json") && path.is_file() {
        acc.push(path);
    }
}
