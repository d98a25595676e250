use std::path::PathBuf;

use thiserror::Error;

use crate::family::IdentifierFamily;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("family table is empty")]
    EmptyFamilyTable,

    #[error("family {family} is listed more than once")]
    DuplicateFamily { family: IdentifierFamily },
}

pub type Result<T> = std::result::Result<T, ModelError>;
