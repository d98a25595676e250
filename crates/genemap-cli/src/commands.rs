use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Color, Table};
use tracing::info;

use genemap_cli::pipeline::{LookupMode, run_mapping};
use genemap_model::{GeneMapConfig, RunSummary};
use genemap_output::write_summary_json;

use crate::cli::{FamiliesArgs, MapArgs};
use crate::summary::{apply_table_style, header_cell};

pub fn run_map(args: &MapArgs) -> Result<RunSummary> {
    let mut config = load_config(&args.base_dir, args.config.as_deref())?;
    if let Some(output) = &args.output {
        config = config.with_output(output);
    }
    let mode = if args.preload {
        LookupMode::Preload
    } else {
        LookupMode::Scan
    };
    info!(base_dir = %args.base_dir.display(), ?mode, "starting gene mapping");
    let summary = run_mapping(&config, mode)?;
    if let Some(path) = &args.summary_json {
        write_summary_json(path, &summary)?;
    }
    Ok(summary)
}

pub fn run_families(args: &FamiliesArgs) -> Result<()> {
    let config = load_config(&args.base_dir, args.config.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Family"),
        header_cell("Trigger"),
        header_cell("Description"),
        header_cell("Reference"),
        header_cell("Column"),
        header_cell("Present"),
    ]);
    apply_table_style(&mut table);
    for (idx, rule) in config.families.iter().enumerate() {
        let reference = config.reference_path(rule);
        let present = if reference.is_file() {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("missing").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(idx + 1).set_alignment(CellAlignment::Right),
            Cell::new(rule.family.label()),
            Cell::new(rule.family.trigger()),
            Cell::new(rule.family.description()),
            Cell::new(reference.display()),
            Cell::new(rule.column).set_alignment(CellAlignment::Right),
            present,
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_config(base_dir: &Path, explicit: Option<&Path>) -> Result<GeneMapConfig> {
    GeneMapConfig::load(base_dir, explicit)
        .with_context(|| format!("load config for {}", base_dir.display()))
}
