use crate::output::read_snapshot;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a snapshot JSON file
pub fn validate_snapshot_file(file_path: PathBuf) -> Result<()> {
    println!("Validating snapshot: {}", file_path.display());

    let snapshot = read_snapshot(&file_path)?;

    println!("✓ Valid snapshot JSON");
    println!("  Version: {}", snapshot.version);
    println!("  Generated: {}", snapshot.generated_at);
    println!("  Chains: {}", snapshot.chain_order.join(", "));
    println!("  Retail Holders: {}", snapshot.combined.retail_holder_count);
    println!("  Retail Supply: {:.2}", snapshot.combined.total_retail_supply);
    println!("  Gini: {:.4}", snapshot.combined.metrics.gini);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Holder Distribution Snapshot Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  generatedAt: string          - ISO 8601 timestamp");
        println!("  thresholds: object           - retail / megaHolder limits");
        println!("  totals: object               - totalSupply");
        println!("  chains: object               - Per-chain aggregates by key");
        println!("    holders: array             - {{address, balance, chain}}, largest first");
        println!("    totalRetailSupply: number  - Sum of holder balances");
        println!("    retailHolderCount: number  - Number of holders");
        println!("    excludedAddresses: array   - Denylisted and mega-holder addresses");
        println!("    excludedBalance: number    - Balance held by excluded addresses");
        println!("    totalProcessed: number     - Every counted balance");
        println!("    metrics: object            - topN, gini, stdDev, distribution");
        println!("  combined: object             - Cross-chain aggregate");
        println!("    excludedBalances: object   - Excluded balance per chain");
        println!("    totalProcessedByChain: object - Processed balance per chain");
        println!("  chainOrder: array            - Chain keys in input order");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Holder Distribution v{}", env!("CARGO_PKG_VERSION"));
    println!("Snapshot Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Multi-chain token holder aggregation and distribution metrics.");
}
