//! JSON snapshot output writer.
//!
//! Writes Snapshot structs as pretty-printed JSON (2-space indent, one
//! trailing newline) and skips the write when nothing but the timestamp
//! changed since the previous run.

use crate::parser::schema::Snapshot;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs;
use std::fs::File;
use std::path::Path;

/// Result of a snapshot write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File written, with its size in bytes
    Written(usize),

    /// Existing file already holds the same snapshot
    Unchanged,
}

/// Render a snapshot to its on-disk text form
///
/// **Public** - useful for tests and byte comparison
pub fn snapshot_to_string(snapshot: &Snapshot) -> Result<String, OutputError> {
    let mut rendered = serde_json::to_string_pretty(snapshot)
        .map_err(OutputError::SerializationFailed)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write a snapshot to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `snapshot` - Snapshot data to write
/// * `output_path` - Path to output JSON file
///
/// # Returns
/// `WriteOutcome::Unchanged` if the existing file differs only in
/// `generatedAt`, otherwise `WriteOutcome::Written`
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_snapshot(
    snapshot: &Snapshot,
    output_path: impl AsRef<Path>,
) -> Result<WriteOutcome, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing snapshot to: {}", output_path.display());

    validate_path(output_path)?;

    if is_unchanged(snapshot, output_path)? {
        info!("No changes since previous snapshot, leaving {} untouched", output_path.display());
        return Ok(WriteOutcome::Unchanged);
    }

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let rendered = snapshot_to_string(snapshot)?;
    fs::write(output_path, rendered.as_bytes()).map_err(OutputError::WriteFailed)?;

    info!("Snapshot written successfully ({} bytes)", rendered.len());

    Ok(WriteOutcome::Written(rendered.len()))
}

/// Compare against the file on disk with the old timestamp carried over
///
/// **Private** - an unreadable or unparsable previous file counts as changed
fn is_unchanged(snapshot: &Snapshot, path: &Path) -> Result<bool, OutputError> {
    let Ok(existing) = fs::read_to_string(path) else {
        return Ok(false);
    };

    let previous: Snapshot = match serde_json::from_str(&existing) {
        Ok(previous) => previous,
        Err(e) => {
            debug!("Previous snapshot unreadable, overwriting: {}", e);
            return Ok(false);
        }
    };

    let candidate = Snapshot {
        generated_at: previous.generated_at,
        ..snapshot.clone()
    };

    Ok(snapshot_to_string(&candidate)? == existing)
}

/// Validate that output path is writable
///
/// **Public** - shared by the CLI for early validation
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a snapshot from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_snapshot(input_path: impl AsRef<Path>) -> Result<Snapshot, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading snapshot from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let snapshot: Snapshot =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Snapshot loaded: version {}, {} chains",
        snapshot.version,
        snapshot.chain_order.len()
    );

    Ok(snapshot)
}
