use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use genemap_model::RunSummary;
use tracing::info;

/// Write `summary` as pretty-printed JSON.
pub fn write_summary_json(path: &Path, summary: &RunSummary) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)
        .with_context(|| format!("write summary {}", path.display()))?;
    info!(path = %path.display(), "run summary written");
    Ok(())
}
