//! Two-column TSV writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use genemap_model::ResolutionRecord;

/// Render one output row.
///
/// A newline is appended only when `resolved_value` does not already end in
/// one, so every row carries exactly one terminator.
#[must_use]
pub fn format_record(display_id: &str, resolved_value: &str) -> String {
    let mut row = String::with_capacity(display_id.len() + resolved_value.len() + 2);
    row.push_str(display_id);
    row.push('\t');
    row.push_str(resolved_value);
    if !row.ends_with('\n') {
        row.push('\n');
    }
    row
}

/// Appends mapping rows to an output sink in the order they are written.
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
    rows: usize,
}

impl RecordWriter<File> {
    /// Create (or truncate) the output file, creating parent directories.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("create output {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            rows: 0,
        }
    }

    pub fn write_record(&mut self, display_id: &str, resolved_value: &str) -> Result<()> {
        self.inner
            .write_all(format_record(display_id, resolved_value).as_bytes())
            .context("write output record")?;
        self.rows += 1;
        Ok(())
    }

    pub fn write(&mut self, record: &ResolutionRecord) -> Result<()> {
        self.write_record(&record.display_id, &record.resolved_value)
    }

    /// Rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and hand back the sink.
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(std::io::IntoInnerError::into_error)
            .context("flush output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genemap_model::Resolution;

    #[test]
    fn value_without_newline_gets_one() {
        assert_eq!(format_record("GENEA", "ENSDARG01"), "GENEA\tENSDARG01\n");
    }

    #[test]
    fn value_with_newline_keeps_exactly_one() {
        assert_eq!(format_record("GENEA", "ENSDARG01\n"), "GENEA\tENSDARG01\n");
    }

    #[test]
    fn writer_keeps_input_order() {
        let mut writer = RecordWriter::new(Vec::new());
        writer.write_record("b", "2").unwrap();
        writer
            .write(&ResolutionRecord::new("a", &Resolution::NotFound))
            .unwrap();
        assert_eq!(writer.rows(), 2);

        let bytes = writer.finish().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "b\t2\na\tNot found\n");
    }
}
