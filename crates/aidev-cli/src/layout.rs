//! # Project Layout
//!
//! Locates the contracts directory and the artifact tree. The project root
//! is the first ancestor of the working directory that contains either
//! `ARTIFACTS/` or the contracts directory; explicit command-line paths
//! override anything derived from it.

use std::path::{Path, PathBuf};

use aidev_core::{DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACTS_DIR};

/// Resolved directories for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Project root the defaults were derived from.
    pub root: PathBuf,
    /// Directory holding the schema documents.
    pub contracts_dir: PathBuf,
    /// Root of the artifact tree walked by `--all`.
    pub artifacts_dir: PathBuf,
}

impl Layout {
    /// The default layout under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            contracts_dir: root.join(DEFAULT_CONTRACTS_DIR),
            artifacts_dir: root.join(DEFAULT_ARTIFACTS_DIR),
            root,
        }
    }

    /// Replace derived directories with explicitly given ones.
    pub fn with_overrides(
        mut self,
        contracts_dir: Option<PathBuf>,
        artifacts_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = contracts_dir {
            self.contracts_dir = dir;
        }
        if let Some(dir) = artifacts_dir {
            self.artifacts_dir = dir;
        }
        self
    }
}

/// Walk up from `start` to the first directory that looks like a project
/// root.
pub fn discover_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(DEFAULT_ARTIFACTS_DIR).is_dir() || dir.join(DEFAULT_CONTRACTS_DIR).is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// The project root for this invocation: `explicit` if given, otherwise the
/// discovered root, otherwise the current directory.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_root(&cwd).unwrap_or_else(|| {
        tracing::warn!("could not locate project root; using current directory");
        cwd
    })
}
