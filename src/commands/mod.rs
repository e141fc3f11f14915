//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod snapshot;
pub mod utils;

// Re-export main command functions
pub use models::SnapshotArgs;
pub use snapshot::{execute_snapshot, validate_args};
pub use utils::{display_schema, display_version, validate_snapshot_file};
