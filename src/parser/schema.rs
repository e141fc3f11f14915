//! Output JSON schema definitions for snapshot data.
//!
//! This module defines the structure of the snapshot file we write to disk.
//! All mappings are ordered so that serialization is byte-stable across runs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Top-level snapshot written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the snapshot was generated
    pub generated_at: String,

    pub thresholds: Thresholds,

    pub totals: Totals,

    /// Per-chain aggregates keyed by chain key
    pub chains: BTreeMap<String, ChainAggregate>,

    /// Cross-chain view recomputed from every chain's holders
    pub combined: CombinedAggregate,

    /// Chain keys in the order they were supplied
    pub chain_order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub retail: f64,
    pub mega_holder: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_supply: f64,
}

/// A retail holder after normalization and filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holder {
    /// Canonical lower-case `0x` address
    pub address: String,

    pub balance: f64,

    /// Label of the chain this balance was read from
    pub chain: String,
}

/// Aggregated holder data for one chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAggregate {
    pub key: String,
    pub label: String,

    /// Retail holders, descending by balance
    pub holders: Vec<Holder>,

    pub total_retail_supply: f64,
    pub retail_holder_count: usize,

    pub excluded_addresses: BTreeSet<String>,
    pub excluded_balance: f64,

    /// Sum of every non-dropped balance, excluded and sub-threshold included
    pub total_processed: f64,

    pub metrics: MetricsReport,
}

/// Aggregated holder data across all chains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAggregate {
    pub key: String,
    pub label: String,
    pub holders: Vec<Holder>,
    pub total_retail_supply: f64,
    pub retail_holder_count: usize,
    pub excluded_addresses: BTreeSet<String>,
    pub excluded_balance: f64,
    pub excluded_balances: BTreeMap<String, f64>,
    pub total_processed: f64,
    pub total_processed_by_chain: BTreeMap<String, f64>,
    pub metrics: MetricsReport,
}

/// Concentration statistics over one holder list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    /// Keyed by N (10, 25, 50, 100)
    pub top_n: BTreeMap<usize, TopNShare>,
    pub gini: f64,
    pub std_dev: f64,
    pub distribution: Vec<DistributionBucket>,
}

/// Share of supply held by the N largest holders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopNShare {
    pub count: usize,
    pub balance: f64,

    /// Percentage of total retail supply, two decimals
    pub percentage: String,
}

/// One histogram bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBucket {
    pub label: String,
    pub count: usize,
    pub total_balance: f64,
}
