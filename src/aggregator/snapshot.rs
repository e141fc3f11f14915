//! Snapshot assembly.
//!
//! Pure composition of already-computed aggregates; no statistics are
//! calculated here beyond delegating to the combiner.

use super::combiner::combine_chains;
use crate::parser::schema::{ChainAggregate, Snapshot, Thresholds, Totals};
use crate::utils::config::{EngineConfig, SCHEMA_VERSION};
use chrono::{DateTime, SecondsFormat, Utc};

/// Assemble the output snapshot
///
/// # Arguments
/// * `config` - Thresholds used for the run
/// * `total_supply` - Token total supply reported as-is
/// * `chains` - Per-chain aggregates in chain order
/// * `generated_at` - Run timestamp
pub fn assemble_snapshot(
    config: &EngineConfig,
    total_supply: f64,
    chains: Vec<ChainAggregate>,
    generated_at: DateTime<Utc>,
) -> Snapshot {
    let combined = combine_chains(&chains);
    let chain_order: Vec<String> = chains.iter().map(|c| c.key.clone()).collect();

    Snapshot {
        version: SCHEMA_VERSION.to_string(),
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        thresholds: Thresholds {
            retail: config.retail_threshold,
            mega_holder: config.mega_holder_threshold,
        },
        totals: Totals { total_supply },
        chains: chains.into_iter().map(|c| (c.key.clone(), c)).collect(),
        combined,
        chain_order,
    }
}
