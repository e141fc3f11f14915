//! Configuration and constants for the snapshot engine.

use super::error::ConfigError;
use crate::parser::address::normalize_address;
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default timeout for requests against the holder source
pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Minimum balance for an address to count as a retail holder
pub const DEFAULT_RETAIL_THRESHOLD: f64 = 1_000.0;

/// Balances above this are mega-holders and never count as retail
pub const DEFAULT_MEGA_HOLDER_THRESHOLD: f64 = 20_000_000_000.0;

/// Key and label of the cross-chain aggregate
pub const COMBINED_KEY: &str = "combined";
pub const COMBINED_LABEL: &str = "Combined";

/// Top-N cut-offs reported for every holder list
pub const TOP_N_LEVELS: &[usize] = &[10, 25, 50, 100];

/// Histogram bracket over absolute balance, half-open `[min, max)`.
/// `max == None` means unbounded above.
#[derive(Debug, Clone, Copy)]
pub struct Bracket {
    pub label: &'static str,
    pub min: f64,
    pub max: Option<f64>,
}

impl Bracket {
    pub fn contains(&self, balance: f64) -> bool {
        balance >= self.min && self.max.map_or(true, |max| balance < max)
    }
}

pub const DISTRIBUTION_BRACKETS: &[Bracket] = &[
    Bracket { label: "1K-10K", min: 1_000.0, max: Some(10_000.0) },
    Bracket { label: "10K-100K", min: 10_000.0, max: Some(100_000.0) },
    Bracket { label: "100K-1M", min: 100_000.0, max: Some(1_000_000.0) },
    Bracket { label: "1M-10M", min: 1_000_000.0, max: Some(10_000_000.0) },
    Bracket { label: "10M-100M", min: 10_000_000.0, max: Some(100_000_000.0) },
    Bracket { label: "100M+", min: 100_000_000.0, max: None },
];

// Keys the holder source may wrap its row array in
pub const ROW_FIELD_NAMES: &[&str] = &["rows", "result", "data", "records"];

/// Thresholds and denylist fixed for the duration of one run.
///
/// Built once by the driver and shared read-only by every per-chain
/// aggregation.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub retail_threshold: f64,
    pub mega_holder_threshold: f64,
    denylist: HashSet<String>,
}

impl EngineConfig {
    /// Create a validated configuration.
    ///
    /// Denylist entries go through the same normalization as record
    /// addresses, so matching is case- and encoding-insensitive. Empty
    /// entries are ignored.
    ///
    /// # Errors
    /// * `ConfigError::InvalidThreshold` - a threshold is negative or not finite
    /// * `ConfigError::InvertedThresholds` - retail threshold above mega-holder threshold
    pub fn new<I, S>(
        retail_threshold: f64,
        mega_holder_threshold: f64,
        denylist: I,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_threshold("retail", retail_threshold)?;
        check_threshold("mega-holder", mega_holder_threshold)?;

        if retail_threshold > mega_holder_threshold {
            return Err(ConfigError::InvertedThresholds {
                retail: retail_threshold,
                mega_holder: mega_holder_threshold,
            });
        }

        let denylist: HashSet<String> = denylist
            .into_iter()
            .filter_map(|raw| normalize_address(Some(raw.as_ref())))
            .collect();

        debug!(
            "Engine config: retail >= {}, mega-holder > {}, {} denylisted addresses",
            retail_threshold,
            mega_holder_threshold,
            denylist.len()
        );

        Ok(Self {
            retail_threshold,
            mega_holder_threshold,
            denylist,
        })
    }

    /// Check a normalized address against the denylist
    pub fn is_denylisted(&self, address: &str) -> bool {
        self.denylist.contains(address)
    }

    pub fn denylist_len(&self) -> usize {
        self.denylist.len()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            retail_threshold: DEFAULT_RETAIL_THRESHOLD,
            mega_holder_threshold: DEFAULT_MEGA_HOLDER_THRESHOLD,
            denylist: HashSet::new(),
        }
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidThreshold { name, value });
    }
    Ok(())
}

/// Load a denylist file.
///
/// Accepts either a JSON array of address strings or plain text with one
/// address per line. Blank lines and lines starting with `#` are skipped.
pub fn load_denylist(path: impl AsRef<Path>) -> Result<Vec<String>, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::DenylistUnreadable {
        path: path.display().to_string(),
        source: e,
    })?;

    let entries = parse_denylist(&contents)?;
    debug!("Loaded {} denylist entries from {}", entries.len(), path.display());

    Ok(entries)
}

fn parse_denylist(contents: &str) -> Result<Vec<String>, ConfigError> {
    if contents.trim_start().starts_with('[') {
        let entries: Vec<String> = serde_json::from_str(contents)?;
        return Ok(entries);
    }

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
