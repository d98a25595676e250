//! Gene identifier families recognised in source lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A gene identifier naming convention.
///
/// Each family is recognised by a trigger substring and carries its own rule
/// for deriving the lookup key from a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentifierFamily {
    /// Zebrafish Information Network ids (`ZDB-GENE-...`).
    Zdb,
    /// Mouse Genome Informatics ids (`MGI:...`).
    Mgi,
    /// NCBI Entrez gene links (`...nih.gov/gene/<id>`).
    Nih,
    /// Xenbase gene pages (`XB-GENE-...`).
    XbGene,
}

impl IdentifierFamily {
    /// All families in default precedence order.
    pub const ALL: [Self; 4] = [Self::Zdb, Self::Mgi, Self::Nih, Self::XbGene];

    /// Substring whose presence in a line selects this family.
    #[must_use]
    pub const fn trigger(&self) -> &'static str {
        match self {
            Self::Zdb => "ZDB",
            Self::Mgi => "MGI",
            Self::Nih => "nih",
            Self::XbGene => "XB-GENE",
        }
    }

    /// Short label used in logs and summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Zdb => "ZDB",
            Self::Mgi => "MGI",
            Self::Nih => "NIH",
            Self::XbGene => "XB_GENE",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Zdb => "ZFIN gene ids resolved through Ensembl 1:1 orthologs",
            Self::Mgi => "MGI accession ids resolved through gene model coordinates",
            Self::Nih => "Entrez gene links resolved through gene2ensembl",
            Self::XbGene => "Xenbase gene names resolved through Ensembl model mapping",
        }
    }

    /// Returns true if `line` contains this family's trigger substring.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.trigger())
    }
}

impl fmt::Display for IdentifierFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nih_trigger_is_case_sensitive() {
        assert!(IdentifierFamily::Nih.matches("https://www.ncbi.nlm.nih.gov/gene/42"));
        assert!(!IdentifierFamily::Nih.matches("NIH gene 42"));
    }

    #[test]
    fn serde_uses_screaming_names() {
        let parsed: IdentifierFamily = toml::from_str::<Wrapper>("family = \"XB_GENE\"")
            .unwrap()
            .family;
        assert_eq!(parsed, IdentifierFamily::XbGene);
    }

    #[derive(Deserialize)]
    struct Wrapper {
        family: IdentifierFamily,
    }
}
