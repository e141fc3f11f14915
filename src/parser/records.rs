//! Raw balance rows as delivered by the holder source.
//!
//! Rows are loosely typed: the address may be missing or hex-escaped and
//! the balance may arrive as a JSON number or a numeric string. Nothing is
//! rejected here; unusable rows are dropped later by the classifier.

use serde::{Deserialize, Serialize};

/// A single holder balance row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Holder address in whatever encoding the source used
    #[serde(default, alias = "holder", alias = "wallet")]
    pub address: Option<String>,

    /// Balance as a number or numeric string
    #[serde(default, alias = "amount", alias = "value")]
    pub balance: serde_json::Value,

    /// Chain tag attached by the source; the chain the row was loaded under
    /// wins, a differing tag is only warned about
    #[serde(default)]
    pub chain: Option<String>,
}

impl BalanceRecord {
    /// Build a record from already-typed values
    pub fn new(address: impl Into<String>, balance: f64, chain: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            balance: serde_json::json!(balance),
            chain: Some(chain.into()),
        }
    }

    /// Parsed balance, `None` unless it is a finite number
    pub fn parsed_balance(&self) -> Option<f64> {
        parse_balance(&self.balance)
    }
}

/// Parse a balance field into a finite `f64`.
pub fn parse_balance(value: &serde_json::Value) -> Option<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite())
}

/// All rows for one chain, in source order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainInput {
    /// Stable chain identifier (e.g. "ethereum")
    pub key: String,

    /// Human-readable name attached to every holder from this chain
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub records: Vec<BalanceRecord>,
}

impl ChainInput {
    pub fn new(key: impl Into<String>, label: impl Into<String>, records: Vec<BalanceRecord>) -> Self {
        Self {
            key: key.into(),
            label: Some(label.into()),
            records,
        }
    }

    /// Label to report, falling back to the key
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_balance_number_and_string() {
        assert_eq!(parse_balance(&json!(12.5)), Some(12.5));
        assert_eq!(parse_balance(&json!("1000")), Some(1000.0));
        assert_eq!(parse_balance(&json!(" 42.25 ")), Some(42.25));
    }

    #[test]
    fn test_parse_balance_rejects_garbage() {
        assert_eq!(parse_balance(&json!("abc")), None);
        assert_eq!(parse_balance(&json!("NaN")), None);
        assert_eq!(parse_balance(&json!("inf")), None);
        assert_eq!(parse_balance(&json!(null)), None);
        assert_eq!(parse_balance(&json!(true)), None);
    }

    #[test]
    fn test_deserialize_aliases() {
        let record: BalanceRecord =
            serde_json::from_value(json!({"holder": "\\xab", "amount": "5", "chain": "base"})).unwrap();

        assert_eq!(record.address.as_deref(), Some("\\xab"));
        assert_eq!(record.parsed_balance(), Some(5.0));
        assert_eq!(record.chain.as_deref(), Some("base"));
    }

    #[test]
    fn test_missing_fields_default() {
        let record: BalanceRecord = serde_json::from_value(json!({})).unwrap();
        assert!(record.address.is_none());
        assert_eq!(record.parsed_balance(), None);
    }

    #[test]
    fn test_display_label_falls_back_to_key() {
        let input: ChainInput = serde_json::from_value(json!({"key": "eth"})).unwrap();
        assert_eq!(input.display_label(), "eth");
        assert!(input.records.is_empty());
    }
}
