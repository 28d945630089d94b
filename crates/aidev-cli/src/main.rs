//! # validate entry point
//!
//! Parses command-line arguments, resolves the project layout, selects the
//! validation tier, and dispatches to one of the reports.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use aidev_cli::layout::{resolve_root, Layout};
use aidev_cli::report::{run_all, run_check_deps, run_single};
use aidev_cli::supported_artifacts_help;
use aidev_core::Registry;
use aidev_schema::{select_tier, SchemaResolver, ValidationEngine};

/// Validate workflow artifacts against their contract schemas.
///
/// Uses full JSON Schema validation when available, otherwise required
/// fields plus the built-in domain rules.
#[derive(Parser, Debug)]
#[command(name = "validate", version, about, long_about = None)]
struct Cli {
    /// Artifact file to validate.
    #[arg(value_name = "ARTIFACT", conflicts_with_all = ["all", "check_deps"])]
    artifact: Option<PathBuf>,

    /// Schema to validate against instead of the registered one.
    #[arg(value_name = "SCHEMA", requires = "artifact")]
    schema: Option<PathBuf>,

    /// Validate every JSON file under the artifacts directory.
    #[arg(long, conflicts_with = "check_deps")]
    all: bool,

    /// Report which validation capabilities are available.
    #[arg(long)]
    check_deps: bool,

    /// Project root. Defaults to the nearest ancestor holding ARTIFACTS/ or
    /// the contracts directory.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Directory containing the schema documents.
    #[arg(long)]
    contracts_dir: Option<PathBuf>,

    /// Root of the artifact tree for --all.
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Use structural validation even when full schema validation is
    /// available.
    #[arg(long)]
    basic: bool,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let registry = Registry::standard();
    let mut command = Cli::command().after_help(supported_artifacts_help(&registry));
    let cli = match Cli::from_arg_matches(&command.clone().get_matches()) {
        Ok(cli) => cli,
        Err(e) => e.format(&mut command).exit(),
    };

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.artifact.is_none() && !cli.all && !cli.check_deps {
        // Usage problems are reported on stdout alongside the help text.
        if let Err(e) = command.print_help() {
            tracing::error!("{e}");
        }
        return ExitCode::from(1);
    }

    let root = resolve_root(cli.root.as_deref());
    let layout = Layout::from_root(root).with_overrides(cli.contracts_dir, cli.artifacts_dir);
    tracing::debug!(
        root = %layout.root.display(),
        contracts_dir = %layout.contracts_dir.display(),
        artifacts_dir = %layout.artifacts_dir.display(),
        "resolved project layout"
    );

    let tier = select_tier(cli.basic);
    tracing::info!(tier = tier.name(), "validation tier selected");
    let engine = ValidationEngine::new(SchemaResolver::new(registry, &layout.contracts_dir), tier);

    let mut out = std::io::stdout().lock();
    let result = if cli.check_deps {
        run_check_deps(&mut out, &engine)
    } else if cli.all {
        run_all(&mut out, &engine, &layout.artifacts_dir)
    } else if let Some(artifact) = cli.artifact.as_deref() {
        run_single(&mut out, &engine, artifact, cli.schema.as_deref())
    } else {
        Ok(1)
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
