//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Canonicalizing holder addresses
//! - Reading loosely typed balance rows
//! - Defining output schema

pub mod address;
pub mod records;
pub mod schema;

// Re-export main types
pub use address::normalize_address;
pub use records::{parse_balance, BalanceRecord, ChainInput};
pub use schema::{
    ChainAggregate, CombinedAggregate, DistributionBucket, Holder, MetricsReport, Snapshot,
    Thresholds, TopNShare, Totals,
};
