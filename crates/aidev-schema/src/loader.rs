//! # Document Loader
//!
//! Reads a JSON document from disk. Every failure is returned as a
//! [`LoadError`] value; the three classes are kept apart so that callers
//! can tell a typo in a path from a truncated file.

use std::io::ErrorKind;
use std::path::Path;

use aidev_core::Finding;
use serde_json::Value;
use thiserror::Error;

/// Why a document could not be loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Nothing exists at the path.
    #[error("file not found: {path}")]
    NotFound {
        /// The requested path.
        path: String,
    },

    /// The file was read but is not valid JSON.
    #[error("invalid JSON syntax: {message}")]
    Syntax {
        /// `serde_json` diagnostic with line and column.
        message: String,
    },

    /// Any other read failure (permissions, directories, invalid UTF-8).
    #[error("error reading file: {reason}")]
    Io {
        /// Underlying I/O error message.
        reason: String,
    },
}

impl From<LoadError> for Finding {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound { path } => Finding::NotFound { path },
            LoadError::Syntax { message } => Finding::Syntax { message },
            LoadError::Io { reason } => Finding::Io { reason },
        }
    }
}

/// Read and parse the JSON document at `path`.
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io {
            reason: e.to_string(),
        },
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::Syntax {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, br#"{"workflow_id": "wf-1", "stages": {}}"#).unwrap();

        let value = load_document(&path).unwrap();
        assert_eq!(value, json!({"workflow_id": "wf-1", "stages": {}}));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }), "got {err:?}");
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_json_is_syntax_error_with_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{\"agent\": \"qa_engineer\",\n").unwrap();

        match load_document(&path).unwrap_err() {
            LoadError::Syntax { message } => assert!(message.contains("line"), "{message}"),
            other => panic!("expected Syntax, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            load_document(&path).unwrap_err(),
            LoadError::Io { .. }
        ));
    }

    #[test]
    fn converts_into_finding() {
        let finding: Finding = LoadError::Syntax {
            message: "EOF while parsing".to_string(),
        }
        .into();
        assert_eq!(finding.to_string(), "invalid JSON syntax: EOF while parsing");
    }
}
