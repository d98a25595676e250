//! Gene mapping output generation.
//!
//! - **TSV records**: `display_id<TAB>resolved_value`, one row per
//!   recognised source line, each ending in exactly one newline
//! - **Run summary**: optional JSON report of per-family counts

mod summary;
mod tsv;

pub use summary::write_summary_json;
pub use tsv::{RecordWriter, format_record};
