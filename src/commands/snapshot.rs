//! Snapshot command implementation.
//!
//! The snapshot command:
//! 1. Builds the engine configuration (thresholds, denylist)
//! 2. Loads raw balance rows from a file or the holder source
//! 3. Aggregates every chain
//! 4. Assembles the snapshot with the combined view
//! 5. Writes the JSON output

use super::models::SnapshotArgs;
use crate::aggregator::{aggregate_chains, assemble_snapshot};
use crate::output::{generate_text_summary, validate_path, write_snapshot, WriteOutcome};
use crate::parser::records::ChainInput;
use crate::source::{ensure_unique_keys, fetch_chain_inputs, read_chain_inputs, HttpSource};
use crate::utils::config::{load_denylist, EngineConfig};
use crate::utils::error::ConfigError;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

/// Execute the snapshot command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Snapshot command arguments
///
/// # Returns
/// Whether the output file was written or left unchanged
///
/// # Errors
/// * Invalid configuration or unreadable denylist
/// * Input file or holder source failures
/// * No rows for any chain
/// * File write errors
pub fn execute_snapshot(args: SnapshotArgs) -> Result<WriteOutcome> {
    let start_time = Instant::now();

    // Step 1: Build configuration
    info!("Step 1/5: Building configuration...");
    let config = build_config(&args)?;

    // Step 2: Load rows
    info!("Step 2/5: Loading balance rows...");
    let inputs = load_inputs(&args)?;
    ensure_unique_keys(inputs.iter().map(|c| c.key.as_str()))?;

    let total_rows: usize = inputs.iter().map(|c| c.records.len()).sum();
    if total_rows == 0 {
        anyhow::bail!("No balance rows returned for any chain");
    }
    debug!("Loaded {} rows across {} chains", total_rows, inputs.len());

    // Step 3: Aggregate chains
    info!("Step 3/5: Aggregating {} chains...", inputs.len());
    let chains = aggregate_chains(&inputs, &config);

    for chain in &chains {
        info!("{}: {}", chain.label, chain.metrics.summary());
    }

    // Step 4: Assemble snapshot
    info!("Step 4/5: Assembling snapshot...");
    let snapshot = assemble_snapshot(&config, args.total_supply, chains, Utc::now());
    info!("Combined: {}", snapshot.combined.metrics.summary());

    // Step 5: Write output
    info!("Step 5/5: Writing snapshot...");
    let outcome = write_snapshot(&snapshot, &args.output)
        .context("Failed to write snapshot JSON")?;

    match outcome {
        WriteOutcome::Written(_) => info!("✓ Snapshot written to: {}", args.output.display()),
        WriteOutcome::Unchanged => info!("✓ No changes, {} left as is", args.output.display()),
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("SNAPSHOT SUMMARY");
        println!("{}", "=".repeat(80));
        println!("{}", generate_text_summary(&snapshot));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Snapshot completed in {:.2}s", elapsed.as_secs_f64());

    Ok(outcome)
}

/// Build the engine configuration from arguments
///
/// **Private** - internal helper for execute_snapshot
fn build_config(args: &SnapshotArgs) -> Result<EngineConfig> {
    let denylist = match &args.denylist {
        Some(path) => load_denylist(path).context("Failed to load denylist")?,
        None => Vec::new(),
    };

    let config = EngineConfig::new(args.retail_threshold, args.mega_holder_threshold, denylist)
        .context("Invalid thresholds")?;

    info!(
        "Thresholds: retail >= {}, mega-holder > {}, {} denylisted",
        config.retail_threshold,
        config.mega_holder_threshold,
        config.denylist_len()
    );

    Ok(config)
}

/// Load chain inputs from the file or the holder source
///
/// **Private** - internal helper for execute_snapshot
fn load_inputs(args: &SnapshotArgs) -> Result<Vec<ChainInput>> {
    if let Some(path) = &args.input {
        return read_chain_inputs(path)
            .with_context(|| format!("Failed to read input {}", path.display()));
    }

    let url = args
        .source_url
        .as_deref()
        .context("No input file or source URL given")?;

    let source = HttpSource::new(url, args.api_key.clone())
        .context("Failed to create source client")?;

    fetch_chain_inputs(&source, &args.chains).context("Failed to fetch holder rows")
}

/// Validate snapshot arguments
///
/// **Public** - can be called before execute_snapshot for early validation
pub fn validate_args(args: &SnapshotArgs) -> Result<()> {
    match (&args.input, &args.source_url) {
        (Some(_), Some(_)) => anyhow::bail!("Use either --input or --source-url, not both"),
        (None, None) => anyhow::bail!("One of --input or --source-url is required"),
        (None, Some(url)) => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("Source URL must start with http:// or https://");
            }
            if args.chains.is_empty() {
                anyhow::bail!("At least one --chain is required with --source-url");
            }
            ensure_unique_keys(args.chains.iter().map(|c| c.key.as_str()))?;
        }
        (Some(_), None) => {
            if !args.chains.is_empty() {
                anyhow::bail!("--chain only applies to --source-url");
            }
        }
    }

    if !args.total_supply.is_finite() || args.total_supply < 0.0 {
        return Err(ConfigError::InvalidTotalSupply(args.total_supply).into());
    }

    validate_path(&args.output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChainSpec;
    use std::path::PathBuf;

    fn file_args() -> SnapshotArgs {
        SnapshotArgs {
            input: Some(PathBuf::from("rows.json")),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_file() {
        assert!(validate_args(&file_args()).is_ok());
    }

    #[test]
    fn test_validate_args_no_source() {
        assert!(validate_args(&SnapshotArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_both_sources() {
        let args = SnapshotArgs {
            source_url: Some("https://indexer.example".to_string()),
            ..file_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_url_needs_chains() {
        let mut args = SnapshotArgs {
            source_url: Some("https://indexer.example".to_string()),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());

        args.chains = vec![ChainSpec { key: "ethereum".into(), label: "Ethereum".into() }];
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_repeated_chain() {
        let args = SnapshotArgs {
            source_url: Some("https://indexer.example".to_string()),
            chains: vec![
                ChainSpec { key: "ethereum".into(), label: "Ethereum".into() },
                ChainSpec { key: "ethereum".into(), label: "Mainnet".into() },
            ],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_invalid_url_scheme() {
        let args = SnapshotArgs {
            source_url: Some("ftp://indexer.example".to_string()),
            chains: vec![ChainSpec { key: "base".into(), label: "Base".into() }],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_bad_total_supply() {
        let args = SnapshotArgs {
            total_supply: f64::NAN,
            ..file_args()
        };
        assert!(validate_args(&args).is_err());

        let args = SnapshotArgs {
            total_supply: -5.0,
            ..file_args()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_config_rejects_inverted_thresholds() {
        let args = SnapshotArgs {
            retail_threshold: 10.0,
            mega_holder_threshold: 1.0,
            ..file_args()
        };
        assert!(build_config(&args).is_err());
    }
}
