//! Tests for genemap-model types.

use genemap_model::{IdentifierFamily, NOT_FOUND, Resolution, ResolutionRecord, RunSummary};

#[test]
fn summary_serializes_with_family_labels() {
    let mut summary = RunSummary::new("resources/KBGenes_2016.tsv", "result.tsv");
    summary.lines_read = 3;
    summary.skipped = 1;
    summary.record(IdentifierFamily::XbGene, false);
    summary.record(IdentifierFamily::Mgi, true);

    let json = serde_json::to_string(&summary).expect("serialize summary");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse summary");
    assert_eq!(value["families"]["XB_GENE"]["not_found"], 1);
    assert_eq!(value["families"]["MGI"]["found"], 1);

    let round: RunSummary = serde_json::from_str(&json).expect("deserialize summary");
    assert_eq!(round, summary);
}

#[test]
fn record_from_not_found_uses_sentinel() {
    let record = ResolutionRecord::new("Shh", &Resolution::NotFound);
    assert_eq!(record.resolved_value, NOT_FOUND);
}

#[test]
fn families_keep_default_precedence() {
    let triggers: Vec<_> = IdentifierFamily::ALL.iter().map(|f| f.trigger()).collect();
    assert_eq!(triggers, vec!["ZDB", "MGI", "nih", "XB-GENE"]);
}
