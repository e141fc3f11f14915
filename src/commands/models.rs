use crate::source::ChainSpec;
use crate::utils::config::{DEFAULT_MEGA_HOLDER_THRESHOLD, DEFAULT_RETAIL_THRESHOLD};
use std::path::PathBuf;

/// Arguments for the snapshot command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SnapshotArgs {
    /// Local JSON file with rows for every chain
    pub input: Option<PathBuf>,

    /// Holder source endpoint (used when no input file is given)
    pub source_url: Option<String>,

    /// Bearer token for the holder source
    pub api_key: Option<String>,

    /// Chains to fetch from the holder source, in output order
    pub chains: Vec<ChainSpec>,

    /// Denylist file (JSON array or one address per line)
    pub denylist: Option<PathBuf>,

    /// Minimum balance for a retail holder
    pub retail_threshold: f64,

    /// Balances above this are excluded as mega-holders
    pub mega_holder_threshold: f64,

    /// Token total supply reported in the snapshot
    pub total_supply: f64,

    /// Output path for the JSON snapshot
    pub output: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for SnapshotArgs {
    fn default() -> Self {
        Self {
            input: None,
            source_url: None,
            api_key: None,
            chains: Vec::new(),
            denylist: None,
            retail_threshold: DEFAULT_RETAIL_THRESHOLD,
            mega_holder_threshold: DEFAULT_MEGA_HOLDER_THRESHOLD,
            total_supply: 0.0,
            output: PathBuf::from("holders.json"),
            print_summary: false,
        }
    }
}
