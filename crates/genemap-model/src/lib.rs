//! Core types for gene identifier mapping.
//!
//! - [`IdentifierFamily`]: the closed set of recognised id conventions
//! - [`Extraction`], [`Resolution`], [`ResolutionRecord`]: per-line values
//! - [`RunSummary`]: per-family found / not-found counts
//! - [`GeneMapConfig`]: base directory, file locations and the ordered family table

pub mod config;
pub mod error;
pub mod family;
pub mod record;
pub mod summary;

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_OUTPUT, DEFAULT_SOURCE, FamilyRule, GeneMapConfig,
    default_family_table,
};
pub use error::{ModelError, Result};
pub use family::IdentifierFamily;
pub use record::{Extraction, NOT_FOUND, Resolution, ResolutionRecord};
pub use summary::{FamilyCounts, RunSummary};
