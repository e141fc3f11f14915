//! Calculate concentration metrics over a holder list.
//!
//! Top-N shares show how much of the retail supply sits with the largest
//! holders; Gini and standard deviation summarize inequality; the histogram
//! buckets holders by absolute balance.

use crate::parser::schema::{DistributionBucket, Holder, MetricsReport, TopNShare};
use crate::utils::config::{DISTRIBUTION_BRACKETS, TOP_N_LEVELS};
use log::debug;
use std::collections::BTreeMap;

/// Compute the full metrics report
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `holders` - Holder list, already sorted by balance (descending)
/// * `total_supply` - Denominator for top-N percentages
///
/// # Returns
/// Metrics report; all-zero for an empty list
pub fn compute_metrics(holders: &[Holder], total_supply: f64) -> MetricsReport {
    debug!("Computing metrics over {} holders (supply {})", holders.len(), total_supply);

    let balances: Vec<f64> = holders.iter().map(|h| h.balance).collect();

    MetricsReport {
        top_n: calculate_top_n(holders, total_supply),
        gini: calculate_gini(&balances),
        std_dev: calculate_std_dev(&balances),
        distribution: calculate_distribution(holders),
    }
}

/// Calculate top-N shares for every configured N
///
/// Holders are expected in descending order; no re-sort happens here.
pub fn calculate_top_n(holders: &[Holder], total_supply: f64) -> BTreeMap<usize, TopNShare> {
    TOP_N_LEVELS
        .iter()
        .map(|&n| (n, create_top_n_share(holders, n, total_supply)))
        .collect()
}

/// Create the share held by the first `n` holders
///
/// **Public** - used directly by tests
pub fn create_top_n_share(holders: &[Holder], n: usize, total_supply: f64) -> TopNShare {
    let top = &holders[..n.min(holders.len())];
    let balance: f64 = top.iter().map(|h| h.balance).sum();

    TopNShare {
        count: top.len(),
        balance,
        percentage: format_percentage(balance, total_supply),
    }
}

/// Percentage with two decimals, "0.00" when the supply is not positive
pub fn format_percentage(part: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.2}", part / total * 100.0)
    } else {
        "0.00".to_string()
    }
}

/// Gini coefficient of a balance list
///
/// Order of input does not matter. Returns 0 for an empty list or a zero
/// total.
pub fn calculate_gini(balances: &[f64]) -> f64 {
    if balances.is_empty() {
        return 0.0;
    }

    let mut sorted = balances.to_vec();
    sorted.sort_by(f64::total_cmp);

    let total: f64 = sorted.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let n = sorted.len() as f64;

    // Ascending position i (1-based) carries weight n - i + 1
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, v)| (n - i as f64) * v)
        .sum();

    let gini = (n + 1.0 - 2.0 * weighted / total) / n;

    gini.clamp(0.0, 1.0)
}

/// Population standard deviation
pub fn calculate_std_dev(balances: &[f64]) -> f64 {
    if balances.is_empty() {
        return 0.0;
    }

    let n = balances.len() as f64;
    let mean = balances.iter().sum::<f64>() / n;
    let variance = balances.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    variance.sqrt()
}

/// Bucket holders into the fixed balance brackets
///
/// Holders under the lowest bracket floor are not counted anywhere.
pub fn calculate_distribution(holders: &[Holder]) -> Vec<DistributionBucket> {
    DISTRIBUTION_BRACKETS
        .iter()
        .map(|bracket| {
            let (count, total_balance) = holders
                .iter()
                .filter(|h| bracket.contains(h.balance))
                .fold((0usize, 0.0f64), |(count, total), h| (count + 1, total + h.balance));

            DistributionBucket {
                label: bracket.label.to_string(),
                count,
                total_balance,
            }
        })
        .collect()
}

impl MetricsReport {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        let top = |n: usize| {
            self.top_n
                .get(&n)
                .map(|s| s.percentage.as_str())
                .unwrap_or("0.00")
        };

        format!(
            "Top 10: {}% | Top 100: {}% | Gini: {:.4} | StdDev: {:.2}",
            top(10),
            top(100),
            self.gini,
            self.std_dev
        )
    }
}
