//! Reference file lookups.
//!
//! A lookup returns the value at a fixed 0-indexed column of the first
//! reference line whose raw text contains the key as a substring. Columns are
//! split on a single tab.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use genemap_model::Resolution;
use tracing::{debug, trace};

use crate::error::{IngestError, Result};
use crate::lines::open_reference;

/// Something that can answer reference lookups.
pub trait ReferenceLookup {
    fn lookup(&mut self, reference: &Path, key: &str, column: usize) -> Result<Resolution>;
}

/// Scan `path` from the start for the first line containing `key`.
///
/// The file is opened for this call only and closed before returning. An
/// empty key resolves to [`Resolution::NotFound`] without touching the file.
///
/// # Errors
///
/// [`IngestError::MissingReferenceFile`] if the file cannot be opened and
/// [`IngestError::MalformedLine`] if the matching line is too short.
pub fn resolve(path: &Path, key: &str, column: usize) -> Result<Resolution> {
    if key.is_empty() {
        return Ok(Resolution::NotFound);
    }
    for line in open_reference(path)? {
        let (line_number, text) = line?;
        if text.contains(key) {
            trace!(path = %path.display(), line = line_number, "reference line matched");
            return column_value(path, line_number, &text, column).map(Resolution::Found);
        }
    }
    Ok(Resolution::NotFound)
}

fn column_value(path: &Path, line_number: usize, text: &str, column: usize) -> Result<String> {
    text.split('\t')
        .nth(column)
        .map(str::to_string)
        .ok_or_else(|| IngestError::MalformedLine {
            path: path.to_path_buf(),
            line: line_number,
            column,
            found: text.split('\t').count(),
        })
}

/// Re-scans the reference file on every lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanResolver;

impl ReferenceLookup for ScanResolver {
    fn lookup(&mut self, reference: &Path, key: &str, column: usize) -> Result<Resolution> {
        resolve(reference, key, column)
    }
}

/// Reads each reference file once and answers lookups from memory.
///
/// Answers are identical to [`resolve`]: the first line containing the key
/// wins, and a malformed matching line is still an error. Repeated
/// `(file, key, column)` lookups are served from a memo.
#[derive(Debug, Default)]
pub struct PreloadedResolver {
    files: HashMap<PathBuf, Vec<String>>,
    memo: HashMap<(PathBuf, String, usize), Resolution>,
}

impl PreloadedResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reference files held in memory.
    #[must_use]
    pub fn loaded_files(&self) -> usize {
        self.files.len()
    }

    fn lines_for(&mut self, path: &Path) -> Result<&[String]> {
        if !self.files.contains_key(path) {
            let lines = open_reference(path)?
                .map(|line| line.map(|(_, text)| text))
                .collect::<Result<Vec<_>>>()?;
            debug!(path = %path.display(), lines = lines.len(), "reference file preloaded");
            self.files.insert(path.to_path_buf(), lines);
        }
        Ok(self.files.get(path).map_or(&[][..], Vec::as_slice))
    }
}

impl ReferenceLookup for PreloadedResolver {
    fn lookup(&mut self, reference: &Path, key: &str, column: usize) -> Result<Resolution> {
        if key.is_empty() {
            return Ok(Resolution::NotFound);
        }
        let memo_key = (reference.to_path_buf(), key.to_string(), column);
        if let Some(hit) = self.memo.get(&memo_key) {
            return Ok(hit.clone());
        }
        let lines = self.lines_for(reference)?;
        let resolution = match lines.iter().position(|text| text.contains(key)) {
            Some(idx) => Resolution::Found(column_value(reference, idx + 1, &lines[idx], column)?),
            None => Resolution::NotFound,
        };
        self.memo.insert(memo_key, resolution.clone());
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn reference(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_first_containing_line_wins() {
        let file = reference("ZDB-GENE-001\tA\tB\tENSDARG001\nZDB-GENE-001\tA\tB\tENSDARG002\n");
        let got = resolve(file.path(), "ZDB-GENE-001", 3).unwrap();
        assert_eq!(got, Resolution::Found("ENSDARG001".into()));
    }

    #[test]
    fn test_substring_match_anywhere_in_line() {
        let file = reference("x\ty\tzz MGI:97490 zz\tvalue\n");
        let got = resolve(file.path(), "MGI:97490", 0).unwrap();
        assert_eq!(got, Resolution::Found("x".into()));
    }

    #[test]
    fn test_absent_key_is_not_found() {
        let file = reference("ZDB-GENE-001\tA\tB\tENSDARG001\n");
        assert_eq!(
            resolve(file.path(), "ZDB-GENE-999", 3).unwrap(),
            Resolution::NotFound
        );
    }

    #[test]
    fn test_empty_key_does_not_open_file() {
        let got = resolve(Path::new("/nonexistent/ref.txt"), "", 3).unwrap();
        assert_eq!(got, Resolution::NotFound);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = resolve(Path::new("/nonexistent/ref.txt"), "ZDB", 3);
        assert!(matches!(
            result,
            Err(IngestError::MissingReferenceFile { .. })
        ));
    }

    #[test]
    fn test_short_matching_line_is_error() {
        let file = reference("header\nZDB-GENE-001\tA\n");
        let result = resolve(file.path(), "ZDB-GENE-001", 3);
        match result {
            Err(IngestError::MalformedLine {
                line,
                column,
                found,
                ..
            }) => {
                assert_eq!((line, column, found), (2, 3, 2));
            }
            other => panic!("expected malformed line, got {other:?}"),
        }
    }

    #[test]
    fn test_last_column_has_no_terminator() {
        let file = reference("ZDB-GENE-001\tA\tB\tENSDARG001\r\n");
        let got = resolve(file.path(), "ZDB-GENE-001", 3).unwrap();
        assert_eq!(got.as_str(), "ENSDARG001");
    }

    #[test]
    fn test_preloaded_matches_scan() {
        let file = reference("a\t1\nb\t2\nab\t3\n");
        let mut preloaded = PreloadedResolver::new();
        for key in ["a", "b", "ab", "zz", ""] {
            assert_eq!(
                preloaded.lookup(file.path(), key, 1).unwrap(),
                resolve(file.path(), key, 1).unwrap(),
                "key {key:?}"
            );
        }
        assert_eq!(preloaded.loaded_files(), 1);
    }

    #[test]
    fn test_preloaded_reports_malformed_line() {
        let file = reference("key\n");
        let mut preloaded = PreloadedResolver::new();
        let result = preloaded.lookup(file.path(), "key", 2);
        assert!(matches!(result, Err(IngestError::MalformedLine { line: 1, .. })));
    }

    #[test]
    fn test_scan_resolver_is_idempotent() {
        let file = reference("k\tv\n");
        let mut scan = ScanResolver;
        let first = scan.lookup(file.path(), "k", 1).unwrap();
        let second = scan.lookup(file.path(), "k", 1).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "k\tv\n");
    }
}
