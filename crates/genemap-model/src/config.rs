//! Run configuration: base directory, file locations and the family table.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::family::IdentifierFamily;

/// Config file looked up in the base directory when none is given explicitly.
pub const CONFIG_FILE_NAME: &str = "genemap.toml";

pub const DEFAULT_SOURCE: &str = "resources/KBGenes_2016.tsv";
pub const DEFAULT_OUTPUT: &str = "result.tsv";

/// One entry of the ordered family table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRule {
    pub family: IdentifierFamily,
    /// Reference file, relative to the base directory unless absolute.
    pub reference: PathBuf,
    /// 0-indexed tab-separated column holding the resolved id.
    pub column: usize,
}

impl FamilyRule {
    #[must_use]
    pub fn new(family: IdentifierFamily, reference: impl Into<PathBuf>, column: usize) -> Self {
        Self {
            family,
            reference: reference.into(),
            column,
        }
    }

    /// Built-in reference file and column for a family.
    #[must_use]
    pub fn default_for(family: IdentifierFamily) -> Self {
        match family {
            IdentifierFamily::Zdb => Self::new(family, "resources/ensembl_1_to_1.txt", 3),
            IdentifierFamily::Mgi => Self::new(family, "resources/MGI_Gene_Model_Coord.rpt", 10),
            IdentifierFamily::Nih => Self::new(family, "resources/gene2ensembl.tsv", 2),
            IdentifierFamily::XbGene => {
                Self::new(family, "resources/GenePageEnsemblModelMapping.txt", 3)
            }
        }
    }
}

/// Default family table: every family, in precedence order.
#[must_use]
pub fn default_family_table() -> Vec<FamilyRule> {
    IdentifierFamily::ALL
        .iter()
        .copied()
        .map(FamilyRule::default_for)
        .collect()
}

/// On-disk shape of `genemap.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    families: Option<Vec<FamilyRule>>,
}

/// Everything a mapping run needs to locate its files.
///
/// The table order is the classification precedence: the first family whose
/// trigger appears in a line wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneMapConfig {
    pub base_dir: PathBuf,
    pub source: PathBuf,
    pub output: PathBuf,
    pub families: Vec<FamilyRule>,
}

impl GeneMapConfig {
    /// Built-in layout rooted at `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            source: PathBuf::from(DEFAULT_SOURCE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            families: default_family_table(),
        }
    }

    /// Load configuration for `base_dir`.
    ///
    /// Reads `explicit` when given, otherwise `<base_dir>/genemap.toml` if it
    /// exists, otherwise falls back to the built-in layout.
    pub fn load(base_dir: impl Into<PathBuf>, explicit: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.into();
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = base_dir.join(CONFIG_FILE_NAME);
                candidate.is_file().then_some(candidate)
            }
        };
        let Some(path) = path else {
            return Ok(Self::new(base_dir));
        };
        let contents = std::fs::read_to_string(&path).map_err(|source| ModelError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_toml_str(base_dir, &contents, &path)
    }

    /// Parse a TOML document layered over the built-in layout.
    pub fn from_toml_str(base_dir: impl Into<PathBuf>, contents: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|source| ModelError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::new(base_dir);
        if let Some(source) = file.source {
            config.source = source;
        }
        if let Some(output) = file.output {
            config.output = output;
        }
        if let Some(families) = file.families {
            config.families = families;
        }
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub fn with_families(mut self, families: Vec<FamilyRule>) -> Self {
        self.families = families;
        self
    }

    /// Reject tables that are empty or list a family twice.
    pub fn validate(&self) -> Result<()> {
        if self.families.is_empty() {
            return Err(ModelError::EmptyFamilyTable);
        }
        let mut seen = BTreeSet::new();
        for rule in &self.families {
            if !seen.insert(rule.family) {
                return Err(ModelError::DuplicateFamily {
                    family: rule.family,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.source)
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    #[must_use]
    pub fn reference_path(&self, rule: &FamilyRule) -> PathBuf {
        self.resolve(&rule.reference)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_resources_layout() {
        let config = GeneMapConfig::new("/data/run");
        assert_eq!(
            config.source_path(),
            PathBuf::from("/data/run/resources/KBGenes_2016.tsv")
        );
        assert_eq!(config.output_path(), PathBuf::from("/data/run/result.tsv"));
        let families: Vec<_> = config.families.iter().map(|r| r.family).collect();
        assert_eq!(families, IdentifierFamily::ALL.to_vec());
        assert_eq!(config.families[1].column, 10);
    }

    #[test]
    fn absolute_paths_are_not_rebased() {
        let config = GeneMapConfig::new("/data/run").with_output("/tmp/out.tsv");
        assert_eq!(config.output_path(), PathBuf::from("/tmp/out.tsv"));
    }

    #[test]
    fn duplicate_family_is_rejected() {
        let config = GeneMapConfig::new("/data").with_families(vec![
            FamilyRule::default_for(IdentifierFamily::Mgi),
            FamilyRule::default_for(IdentifierFamily::Mgi),
        ]);
        assert!(matches!(
            config.validate(),
            Err(ModelError::DuplicateFamily {
                family: IdentifierFamily::Mgi
            })
        ));
    }

    #[test]
    fn empty_family_table_is_rejected() {
        let config = GeneMapConfig::new("/data").with_families(Vec::new());
        assert!(matches!(config.validate(), Err(ModelError::EmptyFamilyTable)));
    }
}
