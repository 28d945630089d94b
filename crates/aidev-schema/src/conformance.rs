//! # Schema Conformance
//!
//! Full JSON Schema validation through the `jsonschema` crate. The draft is
//! detected from the schema's `$schema` keyword.
//!
//! ## Schema Resolution
//!
//! Contract schemas reference each other by file name (`"$ref":
//! "common-types.json#/definitions/issue"`). [`LocalSchemaRetriever`] resolves
//! every external `$ref` to a sibling file of the schema being compiled, so
//! validation never touches the network.

use std::path::{Path, PathBuf};

use aidev_core::Finding;
use jsonschema::{Retrieve, Uri};
use serde_json::Value;

use crate::loader::load_document;

/// Resolves `$ref` URIs to files in the contracts directory.
///
/// Only the last path segment of the URI is used, so `common.json`,
/// `json-schema:///common.json`, and `https://example.org/contracts/common.json`
/// all resolve to `<base_dir>/common.json`.
struct LocalSchemaRetriever {
    base_dir: Option<PathBuf>,
}

impl Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let base_dir = self
            .base_dir
            .as_ref()
            .ok_or_else(|| format!("cannot resolve {uri_str}: schema has no directory"))?;

        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);
        let path = base_dir.join(filename);
        load_document(&path).map_err(|e| format!("cannot resolve {uri_str}: {e}").into())
    }
}

/// Validate `document` against `schema`, reporting every violation.
///
/// A schema that cannot be compiled yields a single
/// [`Finding::SchemaError`]; otherwise each violation becomes a
/// [`Finding::ConformanceViolation`] carrying the JSON Pointer of the
/// offending value (`(root)` for the document itself).
pub fn check_conformance(document: &Value, schema: &Value, schema_path: &Path) -> Vec<Finding> {
    let retriever = LocalSchemaRetriever {
        base_dir: schema_path.parent().map(Path::to_path_buf),
    };

    let validator = match jsonschema::options().with_retriever(retriever).build(schema) {
        Ok(v) => v,
        Err(e) => {
            return vec![Finding::SchemaError {
                reason: e.to_string(),
            }]
        }
    };

    validator
        .iter_errors(document)
        .map(|err| {
            let path = err.instance_path.to_string();
            Finding::ConformanceViolation {
                path: if path.is_empty() {
                    "(root)".to_string()
                } else {
                    path
                },
                message: err.to_string(),
            }
        })
        .collect()
}
