//! # Schema Resolution
//!
//! Maps an artifact path to the schema that governs it: the artifact's file
//! name is looked up in the [`Registry`] and the schema file name is joined
//! onto the contracts directory. Whether the schema exists on disk is the
//! engine's concern, not the resolver's.

use std::path::{Path, PathBuf};

use aidev_core::Registry;

/// Resolves artifact file names to schema paths.
#[derive(Debug, Clone)]
pub struct SchemaResolver {
    registry: Registry,
    contracts_dir: PathBuf,
}

impl SchemaResolver {
    /// Create a resolver over `registry`, rooted at `contracts_dir`.
    pub fn new(registry: Registry, contracts_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            contracts_dir: contracts_dir.into(),
        }
    }

    /// The directory schema file names are resolved against.
    pub fn contracts_dir(&self) -> &Path {
        &self.contracts_dir
    }

    /// The registry used for lookups.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Schema path for `artifact`, or `None` if its file name is not
    /// registered.
    pub fn resolve(&self, artifact: &Path) -> Option<PathBuf> {
        let name = artifact.file_name()?.to_str()?;
        self.registry
            .schema_for(name)
            .map(|schema| self.contracts_dir.join(schema))
    }
}
