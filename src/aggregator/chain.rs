//! Per-chain aggregation of classified balance rows.
//!
//! A chain's rows are folded into a `ChainTally`, which is then frozen into
//! an immutable `ChainAggregate` with its holder list sorted and metrics
//! computed. Chains share nothing but the read-only config, so a batch of
//! chains is aggregated in parallel.

use super::classifier::{classify_record, Classification};
use super::metrics::compute_metrics;
use crate::parser::records::{BalanceRecord, ChainInput};
use crate::parser::schema::{ChainAggregate, Holder};
use crate::utils::config::EngineConfig;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Running totals for one chain
#[derive(Debug, Clone, Default)]
struct ChainTally {
    holders: Vec<(String, f64)>,
    excluded_addresses: BTreeSet<String>,
    excluded_balance: f64,
    total_processed: f64,
    dropped: usize,
    sub_threshold: usize,
}

impl ChainTally {
    /// Fold one classified row into the tally
    fn absorb(mut self, classification: Classification) -> Self {
        if let Some(balance) = classification.processed_balance() {
            self.total_processed += balance;
        }

        match classification {
            Classification::Dropped => self.dropped += 1,
            Classification::Excluded { address, balance } => {
                self.excluded_addresses.insert(address);
                self.excluded_balance += balance;
            }
            Classification::Retail { address, balance } => self.holders.push((address, balance)),
            Classification::SubThreshold { .. } => self.sub_threshold += 1,
        }

        self
    }
}

/// Aggregate one chain's rows
///
/// **Public** - main entry point for per-chain aggregation
///
/// # Arguments
/// * `key` - Chain key
/// * `label` - Chain label attached to every holder
/// * `records` - Raw rows in source order
/// * `config` - Thresholds and denylist
///
/// # Returns
/// Aggregate with holders sorted by balance (descending); ties keep
/// source order
pub fn aggregate_chain(
    key: &str,
    label: &str,
    records: &[BalanceRecord],
    config: &EngineConfig,
) -> ChainAggregate {
    debug!("Aggregating {} rows for chain {}", records.len(), key);

    let foreign = count_foreign_rows(key, records);
    if foreign > 0 {
        warn!(
            "Chain {}: {} rows are tagged with another chain; counting them under {}",
            key, foreign, key
        );
    }

    let tally = records
        .iter()
        .map(|record| classify_record(record, config))
        .fold(ChainTally::default(), ChainTally::absorb);

    if tally.dropped > 0 {
        debug!("Chain {}: dropped {} unusable rows", key, tally.dropped);
    }

    let mut holders: Vec<Holder> = tally
        .holders
        .into_iter()
        .map(|(address, balance)| Holder {
            address,
            balance,
            chain: label.to_string(),
        })
        .collect();

    sort_holders(&mut holders);

    let total_retail_supply: f64 = holders.iter().map(|h| h.balance).sum();
    let metrics = compute_metrics(&holders, total_retail_supply);

    info!(
        "Chain {}: {} retail holders, {} excluded, {} below threshold",
        key,
        holders.len(),
        tally.excluded_addresses.len(),
        tally.sub_threshold
    );

    ChainAggregate {
        key: key.to_string(),
        label: label.to_string(),
        retail_holder_count: holders.len(),
        holders,
        total_retail_supply,
        excluded_addresses: tally.excluded_addresses,
        excluded_balance: tally.excluded_balance,
        total_processed: tally.total_processed,
        metrics,
    }
}

/// Aggregate several chains in parallel
///
/// Results come back in the same order as `inputs`.
pub fn aggregate_chains(inputs: &[ChainInput], config: &EngineConfig) -> Vec<ChainAggregate> {
    inputs
        .par_iter()
        .map(|input| aggregate_chain(&input.key, input.display_label(), &input.records, config))
        .collect()
}

/// Rows whose own `chain` tag names a different chain than `key`
///
/// Untagged rows belong to whichever chain they were loaded under.
fn count_foreign_rows(key: &str, records: &[BalanceRecord]) -> usize {
    records
        .iter()
        .filter_map(|record| record.chain.as_deref())
        .filter(|tag| !tag.eq_ignore_ascii_case(key))
        .count()
}

/// Stable sort, largest balance first
pub(crate) fn sort_holders(holders: &mut [Holder]) {
    holders.sort_by(|a, b| b.balance.total_cmp(&a.balance));
}
