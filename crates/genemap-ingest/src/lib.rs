//! Source line classification and reference resolution.
//!
//! # Features
//!
//! - **Classification**: pick the identifier family of a source line and cut
//!   out its display id and lookup key
//! - **Resolution**: find the first reference line containing a key and
//!   return one of its tab-separated columns
//! - **Streaming**: forward-only, lossy UTF-8 line readers
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use genemap_ingest::{classify_and_extract, resolve};
//! use genemap_model::IdentifierFamily;
//!
//! let line = "<GENEA>...ZDB-GENE-001...>";
//! let extraction = classify_and_extract(line, IdentifierFamily::ALL).unwrap();
//! let value = resolve(Path::new("resources/ensembl_1_to_1.txt"), &extraction.lookup_key, 3)?;
//! ```

mod classify;
mod error;
mod lines;
mod resolve;

// === Error Types ===
pub use error::{IngestError, Result};

// === Classification ===
pub use classify::{classify_and_extract, extract};

// === Line Streaming ===
pub use lines::{TextLines, read_source_lines};

// === Resolution ===
pub use resolve::{PreloadedResolver, ReferenceLookup, ScanResolver, resolve};
