//! # Reports
//!
//! The three operator-facing runs (single artifact, whole tree, dependency
//! check) and their plain-text output. Each `run_*` returns the process exit
//! code: 0 on success, 1 on validation failure.

use std::io::Write;
use std::path::Path;

use aidev_schema::{
    check_dependencies, validate_tree, BatchError, DependencyReport, ValidationEngine,
    ValidationResult,
};
use anyhow::{Context, Result};

const RULE: &str = "----------------------------------------";
const DOUBLE_RULE: &str = "========================================";

/// Validate one artifact and print its block.
pub fn run_single(
    out: &mut impl Write,
    engine: &ValidationEngine,
    artifact: &Path,
    schema: Option<&Path>,
) -> Result<u8> {
    let result = engine.validate(artifact, schema);
    write_result(out, &result)?;
    Ok(if result.is_success() { 0 } else { 1 })
}

/// Validate every JSON file under `artifacts_dir` and print a summary.
pub fn run_all(out: &mut impl Write, engine: &ValidationEngine, artifacts_dir: &Path) -> Result<u8> {
    writeln!(out, "Validating all artifacts...")?;
    writeln!(out, "{DOUBLE_RULE}")?;

    // The observer cannot return errors, so the first write failure is kept
    // and reported after the walk.
    let mut write_err = None;
    let outcome = validate_tree(engine, artifacts_dir, |result| {
        if write_err.is_none() {
            write_err = write_result(&mut *out, result).err();
        }
    });
    if let Some(e) = write_err {
        return Err(e).context("failed to write report");
    }

    let report = match outcome {
        Ok(report) => report,
        Err(BatchError::RootNotFound(dir)) => {
            writeln!(out, "ERROR: artifacts directory not found: {}", dir.display())?;
            return Ok(1);
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to scan artifacts at {}", artifacts_dir.display())
            })
        }
    };

    writeln!(out)?;
    writeln!(out, "{DOUBLE_RULE}")?;
    writeln!(out, "Summary: {}/{} passed", report.passed, report.total)?;
    if report.is_success() {
        writeln!(out, "All artifacts passed validation")?;
        Ok(0)
    } else {
        writeln!(out, "{} artifact(s) failed validation", report.failed)?;
        Ok(1)
    }
}

/// Print the validation environment. Always exits 0.
pub fn run_check_deps(out: &mut impl Write, engine: &ValidationEngine) -> Result<u8> {
    let report = check_dependencies(engine);
    write_dependency_report(out, &report)?;
    Ok(0)
}

/// One artifact's block, in the order the phases ran.
pub fn write_result(out: &mut impl Write, result: &ValidationResult) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Validating: {}", result.artifact().display())?;
    writeln!(out, "{RULE}")?;

    if result.document_loaded() {
        writeln!(out, "  JSON syntax: OK")?;
    }
    for warning in result.warnings() {
        writeln!(out, "  WARNING: {warning}")?;
    }
    if let Some(name) = result.schema().and_then(Path::file_name) {
        writeln!(out, "  Schema: {}", name.to_string_lossy())?;
    }

    if result.is_success() {
        writeln!(out, "  PASSED")?;
    } else {
        for finding in result.findings() {
            writeln!(out, "  ERROR: {finding}")?;
        }
        writeln!(out, "  FAILED with {} error(s)", result.findings().len())?;
    }
    Ok(())
}

/// The `--check-deps` text.
pub fn write_dependency_report(
    out: &mut impl Write,
    report: &DependencyReport,
) -> std::io::Result<()> {
    writeln!(out, "Checking validation dependencies...")?;
    writeln!(out)?;
    writeln!(
        out,
        "  validate: {} ({}/{})",
        report.tool_version, report.os, report.arch
    )?;

    if report.full_validation_active() {
        writeln!(out, "  ✓ jsonschema: available (full validation)")?;
    } else if report.conformance_compiled {
        writeln!(
            out,
            "  ✗ jsonschema: disabled by --basic (basic validation only)"
        )?;
    } else {
        writeln!(out, "  ✗ jsonschema: not compiled in (basic validation only)")?;
        writeln!(out)?;
        writeln!(
            out,
            "  To enable full JSON Schema validation, build with the conformance feature:"
        )?;
        writeln!(out, "    cargo install aidev-cli --features conformance")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "  Contracts directory: {}",
        report.contracts_dir.display()
    )?;
    match report.schema_count {
        Some(n) => writeln!(out, "  ✓ Found {n} schema files")?,
        None => writeln!(out, "  ✗ Contracts directory not found")?,
    }
    Ok(())
}
