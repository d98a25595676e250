//! Error types for reading source and reference files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading source lines or resolving keys.
///
/// A key with no matching reference line is not an error; it resolves to
/// [`genemap_model::Resolution::NotFound`].
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source table could not be opened.
    #[error("source file not found: {path}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reference file could not be opened.
    #[error("reference file not found: {path}")]
    MissingReferenceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed while reading an already opened file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The matching reference line has too few tab-separated columns.
    #[error(
        "malformed reference line {line} in {path}: expected column {column}, found {found} columns"
    )]
    MalformedLine {
        path: PathBuf,
        line: usize,
        column: usize,
        found: usize,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_display() {
        let err = IngestError::MalformedLine {
            path: PathBuf::from("/refs/mgi.rpt"),
            line: 7,
            column: 10,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed reference line 7 in /refs/mgi.rpt: expected column 10, found 3 columns"
        );
    }

    #[test]
    fn test_missing_reference_display() {
        let err = IngestError::MissingReferenceFile {
            path: PathBuf::from("/refs/zdb.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "reference file not found: /refs/zdb.txt");
    }
}
