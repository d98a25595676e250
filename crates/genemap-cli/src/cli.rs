//! CLI argument definitions for the gene mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "genemap",
    version,
    about = "Map ZDB, MGI, Entrez and Xenbase gene ids to reference identifiers",
    long_about = "Extract gene identifiers from a tagged source table and resolve each one \
                  against its family's reference file.\n\n\
                  Writes a two-column TSV of display id and resolved id (or \"Not found\")."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags and RUST_LOG).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map every recognised gene in the source table.
    Map(MapArgs),

    /// Show the effective family table.
    Families(FamiliesArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Base directory holding `resources/` and receiving `result.tsv`.
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: PathBuf,

    /// Config file (default: <BASE_DIR>/genemap.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output file (default: <BASE_DIR>/result.tsv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Load each reference file into memory once instead of rescanning it
    /// for every gene.
    #[arg(long = "preload")]
    pub preload: bool,

    /// Also write the run summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FamiliesArgs {
    /// Base directory used to resolve reference paths.
    #[arg(value_name = "BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Config file (default: <BASE_DIR>/genemap.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
