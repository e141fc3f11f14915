//! Output writers for snapshot data.
//!
//! This module handles:
//! - JSON snapshots (stable, byte-comparable)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_snapshot, snapshot_to_string, validate_path, write_snapshot, WriteOutcome};
pub use summary::generate_text_summary;
