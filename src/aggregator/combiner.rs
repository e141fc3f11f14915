//! Merge per-chain aggregates into one cross-chain view.
//!
//! Metrics are never summed across chains; they are recomputed from the
//! concatenated holder list.

use super::chain::sort_holders;
use super::metrics::compute_metrics;
use crate::parser::schema::{ChainAggregate, CombinedAggregate, Holder};
use crate::utils::config::{COMBINED_KEY, COMBINED_LABEL};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Combine chain aggregates
///
/// **Public** - main entry point for the cross-chain view
///
/// # Arguments
/// * `chains` - Per-chain aggregates in chain order
///
/// # Returns
/// Combined aggregate. An address held on two chains appears twice in
/// `holders` (once per chain) but once in `excluded_addresses`.
pub fn combine_chains(chains: &[ChainAggregate]) -> CombinedAggregate {
    let mut holders: Vec<Holder> = chains
        .iter()
        .flat_map(|chain| chain.holders.iter().cloned())
        .collect();
    sort_holders(&mut holders);

    let total_retail_supply: f64 = holders.iter().map(|h| h.balance).sum();

    let excluded_addresses: BTreeSet<String> = chains
        .iter()
        .flat_map(|chain| chain.excluded_addresses.iter().cloned())
        .collect();

    let mut excluded_balances: BTreeMap<String, f64> = BTreeMap::new();
    let mut total_processed_by_chain: BTreeMap<String, f64> = BTreeMap::new();

    for chain in chains {
        *excluded_balances.entry(chain.key.clone()).or_insert(0.0) += chain.excluded_balance;
        *total_processed_by_chain.entry(chain.key.clone()).or_insert(0.0) += chain.total_processed;
    }

    let excluded_balance = chains.iter().map(|c| c.excluded_balance).sum();
    let total_processed = chains.iter().map(|c| c.total_processed).sum();

    debug!(
        "Combined {} chains: {} holders, {} excluded addresses",
        chains.len(),
        holders.len(),
        excluded_addresses.len()
    );

    let metrics = compute_metrics(&holders, total_retail_supply);

    CombinedAggregate {
        key: COMBINED_KEY.to_string(),
        label: COMBINED_LABEL.to_string(),
        retail_holder_count: holders.len(),
        holders,
        total_retail_supply,
        excluded_addresses,
        excluded_balance,
        excluded_balances,
        total_processed,
        total_processed_by_chain,
        metrics,
    }
}
