//! Aggregation of balance rows into holder snapshots.
//!
//! This module transforms raw balance rows into:
//! - Classified rows (retail, excluded, sub-threshold, dropped)
//! - Per-chain holder aggregates
//! - A combined cross-chain aggregate
//! - Concentration metrics for each holder list

pub mod chain;
pub mod classifier;
pub mod combiner;
pub mod metrics;
pub mod snapshot;

// Re-export main types and functions
pub use chain::{aggregate_chain, aggregate_chains};
pub use classifier::{classify, classify_record, Classification};
pub use combiner::combine_chains;
pub use metrics::{calculate_distribution, calculate_gini, calculate_std_dev, calculate_top_n, compute_metrics};
pub use snapshot::assemble_snapshot;
