//! Plain-text snapshot summary for the terminal.

use crate::parser::schema::{MetricsReport, Snapshot};

/// Render a per-chain and combined summary table
pub fn generate_text_summary(snapshot: &Snapshot) -> String {
    let mut lines = Vec::new();

    lines.push("  HOLDER DISTRIBUTION".to_string());
    lines.push(format!(
        "  Retail threshold: {} | Mega-holder threshold: {} | Total supply: {}",
        snapshot.thresholds.retail, snapshot.thresholds.mega_holder, snapshot.totals.total_supply
    ));
    lines.push(String::new());
    lines.push(format!(
        "  {:<16} {:>10} {:>22} {:>9} {:>9} {:>8}",
        "Chain", "Holders", "Retail Supply", "Top 10", "Top 100", "Gini"
    ));
    lines.push(format!("  {}", "-".repeat(79)));

    for key in &snapshot.chain_order {
        if let Some(chain) = snapshot.chains.get(key) {
            lines.push(format_row(
                &chain.label,
                chain.retail_holder_count,
                chain.total_retail_supply,
                &chain.metrics,
            ));
        }
    }

    let combined = &snapshot.combined;
    lines.push(format!("  {}", "-".repeat(79)));
    lines.push(format_row(
        &combined.label,
        combined.retail_holder_count,
        combined.total_retail_supply,
        &combined.metrics,
    ));

    lines.push(String::new());
    lines.push("  BALANCE DISTRIBUTION (combined)".to_string());
    for bucket in &combined.metrics.distribution {
        lines.push(format!(
            "  {:<10} {:>10} holders {:>22.2}",
            bucket.label, bucket.count, bucket.total_balance
        ));
    }

    lines.join("\n")
}

fn format_row(label: &str, holders: usize, supply: f64, metrics: &MetricsReport) -> String {
    let pct = |n: usize| {
        metrics
            .top_n
            .get(&n)
            .map(|s| format!("{}%", s.percentage))
            .unwrap_or_default()
    };

    // Truncate long labels for display
    let label = if label.chars().count() > 16 {
        format!("{}...", label.chars().take(13).collect::<String>())
    } else {
        label.to_string()
    };

    format!(
        "  {:<16} {:>10} {:>22.2} {:>9} {:>9} {:>8.4}",
        label,
        holders,
        supply,
        pct(10),
        pct(100),
        metrics.gini
    )
}
