//! Per-run counters.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::family::IdentifierFamily;

/// Found / not-found tallies for one family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyCounts {
    pub found: usize,
    pub not_found: usize,
}

impl FamilyCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.found + self.not_found
    }
}

/// Outcome of one mapping run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Source lines read, recognised or not.
    pub lines_read: usize,
    /// Lines that matched no family and produced no row.
    pub skipped: usize,
    pub families: BTreeMap<IdentifierFamily, FamilyCounts>,
}

impl RunSummary {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, family: IdentifierFamily, found: bool) {
        let counts = self.families.entry(family).or_default();
        if found {
            counts.found += 1;
        } else {
            counts.not_found += 1;
        }
    }

    /// Rows written to the output file.
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.families.values().map(FamilyCounts::total).sum()
    }

    #[must_use]
    pub fn total_found(&self) -> usize {
        self.families.values().map(|c| c.found).sum()
    }

    #[must_use]
    pub fn total_not_found(&self) -> usize {
        self.families.values().map(|c| c.not_found).sum()
    }
}
