//! Intermediate values produced while mapping one source line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::family::IdentifierFamily;

/// Sentinel written when a lookup key has no match in its reference file.
pub const NOT_FOUND: &str = "Not found";

/// Identifier pulled out of a recognised source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub family: IdentifierFamily,
    /// Leading tag content, written as the first output column.
    pub display_id: String,
    /// Substring searched for in the family's reference file. May be empty
    /// when the family's delimiters are missing from the line.
    pub lookup_key: String,
}

/// Outcome of a reference lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Column value of the first reference line containing the key.
    Found(String),
    NotFound,
}

impl Resolution {
    /// Value as written to the output, with the sentinel for misses.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(value) => value,
            Self::NotFound => NOT_FOUND,
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub display_id: String,
    pub resolved_value: String,
}

impl ResolutionRecord {
    /// Pair a display id with a resolution.
    ///
    /// A found value that is empty (an empty reference column) falls back to
    /// the sentinel so the second column is never blank.
    #[must_use]
    pub fn new(display_id: impl Into<String>, resolution: &Resolution) -> Self {
        let value = resolution.as_str();
        let resolved_value = if value.trim_end_matches(['\r', '\n']).is_empty() {
            NOT_FOUND.to_string()
        } else {
            value.to_string()
        };
        Self {
            display_id: display_id.into(),
            resolved_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_renders_sentinel() {
        assert_eq!(Resolution::NotFound.to_string(), "Not found");
        assert!(!Resolution::NotFound.is_found());
    }

    #[test]
    fn empty_found_value_falls_back_to_sentinel() {
        let record = ResolutionRecord::new("GENEA", &Resolution::Found(String::new()));
        assert_eq!(record.resolved_value, NOT_FOUND);
    }

    #[test]
    fn found_value_is_kept() {
        let record = ResolutionRecord::new("GENEA", &Resolution::Found("ENSDARG01".into()));
        assert_eq!(record.display_id, "GENEA");
        assert_eq!(record.resolved_value, "ENSDARG01");
    }
}
