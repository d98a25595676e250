//! Line streaming shared by the source reader and the resolvers.

use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Forward-only iterator over the lines of a file.
///
/// Yields `(line_number, text)` with 1-based line numbers. Line terminators
/// are stripped and invalid UTF-8 is replaced rather than rejected.
pub struct TextLines {
    path: PathBuf,
    inner: Split<BufReader<File>>,
    line_number: usize,
}

impl TextLines {
    pub(crate) fn new(path: &Path, file: File) -> Self {
        Self {
            path: path.to_path_buf(),
            inner: BufReader::new(file).split(b'\n'),
            line_number: 0,
        }
    }
}

impl Iterator for TextLines {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = match self.inner.next()? {
            Ok(bytes) => bytes,
            Err(source) => {
                return Some(Err(IngestError::FileRead {
                    path: self.path.clone(),
                    source,
                }));
            }
        };
        self.line_number += 1;
        let mut text = String::from_utf8_lossy(&bytes).into_owned();
        if text.ends_with('\r') {
            text.pop();
        }
        Some(Ok((self.line_number, text)))
    }
}

/// Open the source table for streaming.
pub fn read_source_lines(path: &Path) -> Result<TextLines> {
    let file = File::open(path).map_err(|source| IngestError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TextLines::new(path, file))
}

/// Open a reference file for one scan.
pub(crate) fn open_reference(path: &Path) -> Result<TextLines> {
    let file = File::open(path).map_err(|source| IngestError::MissingReferenceFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(TextLines::new(path, file))
}
