//! The mapping run: classify each source line, resolve its key, write a row.

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span, trace};

use genemap_ingest::{
    PreloadedResolver, ReferenceLookup, ScanResolver, classify_and_extract, read_source_lines,
};
use genemap_model::{
    FamilyRule, GeneMapConfig, IdentifierFamily, Resolution, ResolutionRecord, RunSummary,
};
use genemap_output::RecordWriter;

/// How reference files are consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Reopen and rescan the reference file for every gene.
    #[default]
    Scan,
    /// Load each reference file once and answer from memory.
    Preload,
}

/// Run a full mapping with the resolver selected by `mode`.
pub fn run_mapping(config: &GeneMapConfig, mode: LookupMode) -> Result<RunSummary> {
    config.validate().context("invalid family table")?;
    match mode {
        LookupMode::Scan => run_with(config, &mut ScanResolver),
        LookupMode::Preload => run_with(config, &mut PreloadedResolver::new()),
    }
}

/// Run a full mapping against any [`ReferenceLookup`].
///
/// The source is opened before the output so a missing source never
/// truncates a previous result file.
pub fn run_with<R: ReferenceLookup>(config: &GeneMapConfig, resolver: &mut R) -> Result<RunSummary> {
    let source_path = config.source_path();
    let output_path = config.output_path();
    let span = info_span!(
        "map",
        source = %source_path.display(),
        output = %output_path.display()
    );
    let _guard = span.enter();

    let order: Vec<IdentifierFamily> = config.families.iter().map(|rule| rule.family).collect();
    let lines = read_source_lines(&source_path)?;
    let mut writer = RecordWriter::create(&output_path)?;
    let mut summary = RunSummary::new(&source_path, &output_path);

    for line in lines {
        let (line_number, text) = line?;
        summary.lines_read += 1;

        let Some(extraction) = classify_and_extract(&text, order.iter().copied()) else {
            summary.skipped += 1;
            debug!(line = line_number, "no identifier family matched");
            continue;
        };
        let rule = rule_for(&config.families, extraction.family)?;
        let reference = config.reference_path(rule);
        let resolution = resolver
            .lookup(&reference, &extraction.lookup_key, rule.column)
            .with_context(|| {
                format!(
                    "resolve {} id on source line {line_number}",
                    extraction.family
                )
            })?;
        trace!(
            line = line_number,
            family = %extraction.family,
            display_id = %extraction.display_id,
            key = %extraction.lookup_key,
            value = %resolution,
            "resolved"
        );

        let found = matches!(&resolution, Resolution::Found(value) if !value.is_empty());
        summary.record(extraction.family, found);
        writer.write(&ResolutionRecord::new(extraction.display_id, &resolution))?;
    }
    writer.finish()?;

    info!(
        lines = summary.lines_read,
        rows = summary.rows_written(),
        found = summary.total_found(),
        not_found = summary.total_not_found(),
        skipped = summary.skipped,
        "mapping complete"
    );
    Ok(summary)
}

fn rule_for(families: &[FamilyRule], family: IdentifierFamily) -> Result<&FamilyRule> {
    families
        .iter()
        .find(|rule| rule.family == family)
        .ok_or_else(|| anyhow!("no reference configured for family {family}"))
}
