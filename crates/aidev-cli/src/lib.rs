//! # aidev-cli — Artifact Validation Command
//!
//! Library half of the `validate` binary: project layout discovery and the
//! human-readable reports. `main.rs` only parses arguments, sets up tracing,
//! and maps the returned code to the process exit status.
//!
//! ```bash
//! validate ARTIFACTS/system/stage-completion-signal.json
//! validate ARTIFACTS/qa/qa-test-report.json path/to/qa-output-schema.json
//! validate --all
//! validate --check-deps
//! ```
//!
//! Every report writes to a caller-supplied [`std::io::Write`] so the exact
//! output can be asserted in tests.

pub mod layout;
pub mod report;

use aidev_core::Registry;

/// Text shown after clap's generated help: the artifact names the registry
/// recognizes, sorted.
pub fn supported_artifacts_help(registry: &Registry) -> String {
    let mut text = String::from("Supported artifacts:");
    for name in registry.artifact_names() {
        text.push_str("\n  - ");
        text.push_str(name);
    }
    text
}
