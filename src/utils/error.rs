//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The aggregation engine itself has no failure modes and exposes no errors.

use thiserror::Error;

/// Errors raised while building the run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name} threshold: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Retail threshold {retail} exceeds mega-holder threshold {mega_holder}")]
    InvertedThresholds { retail: f64, mega_holder: f64 },

    #[error("Invalid total supply: {0}")]
    InvalidTotalSupply(f64),

    #[error("Cannot read denylist {path}: {source}")]
    DenylistUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed denylist: {0}")]
    MalformedDenylist(#[from] serde_json::Error),
}

/// Errors that can occur while loading raw balance rows
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid source response: {0}")]
    InvalidResponse(String),

    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid chain specification: {0}")]
    InvalidChainSpec(String),

    #[error("Chain key appears more than once: {0}")]
    DuplicateChain(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
