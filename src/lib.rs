//! Holder Distribution
//!
//! Aggregates token-holder balance rows from one or more chains into a
//! deterministic snapshot of how holdings are distributed: retail holder
//! lists, exclusions, top-N shares, Gini coefficient, standard deviation
//! and a balance histogram, per chain and combined.
//!
//! This crate provides the core implementation for the
//! `holder-snapshot` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! holder-snapshot snapshot --input rows.json --total-supply 1000000000 --summary
//! holder-snapshot --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod source;
pub mod utils;
