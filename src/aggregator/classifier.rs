//! Exclusion and threshold classification of balance rows.
//!
//! Every row lands in exactly one class. The exclusion check (denylist or
//! mega-holder) runs before the retail threshold check, so a denylisted
//! address is excluded even when its balance is tiny.

use crate::parser::records::BalanceRecord;
use crate::parser::address::normalize_address;
use crate::utils::config::EngineConfig;

/// Outcome of classifying one row
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Missing address or non-numeric balance; not counted anywhere
    Dropped,

    /// Denylisted or above the mega-holder threshold
    Excluded { address: String, balance: f64 },

    /// Retail holder
    Retail { address: String, balance: f64 },

    /// Below the retail threshold; only counted in the processed total
    SubThreshold { balance: f64 },
}

impl Classification {
    /// Balance contributing to the processed total, if any
    pub fn processed_balance(&self) -> Option<f64> {
        match self {
            Classification::Dropped => None,
            Classification::Excluded { balance, .. }
            | Classification::Retail { balance, .. }
            | Classification::SubThreshold { balance } => Some(*balance),
        }
    }
}

/// Classify a normalized address and parsed balance
pub fn classify(address: Option<String>, balance: Option<f64>, config: &EngineConfig) -> Classification {
    let (address, balance) = match (address, balance) {
        (Some(address), Some(balance)) if !address.is_empty() && balance.is_finite() => {
            (address, balance)
        }
        _ => return Classification::Dropped,
    };

    if config.is_denylisted(&address) || balance > config.mega_holder_threshold {
        return Classification::Excluded { address, balance };
    }

    if balance >= config.retail_threshold {
        Classification::Retail { address, balance }
    } else {
        Classification::SubThreshold { balance }
    }
}

/// Normalize and classify a raw row
pub fn classify_record(record: &BalanceRecord, config: &EngineConfig) -> Classification {
    classify(
        normalize_address(record.address.as_deref()),
        record.parsed_balance(),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig::new(1_000.0, 20_000_000_000.0, ["0xdead"]).unwrap()
    }

    #[test]
    fn test_retail() {
        let c = classify(Some("0xabc".into()), Some(5_000.0), &config());
        assert_eq!(
            c,
            Classification::Retail { address: "0xabc".into(), balance: 5_000.0 }
        );
    }

    #[test]
    fn test_retail_threshold_is_inclusive() {
        let c = classify(Some("0xabc".into()), Some(1_000.0), &config());
        assert!(matches!(c, Classification::Retail { .. }));
    }

    #[test]
    fn test_mega_holder_excluded() {
        let c = classify(Some("0xabc".into()), Some(25_000_000_000.0), &config());
        assert!(matches!(c, Classification::Excluded { .. }));
        assert_eq!(c.processed_balance(), Some(25_000_000_000.0));
    }

    #[test]
    fn test_mega_holder_threshold_is_inclusive_for_retail() {
        let c = classify(Some("0xabc".into()), Some(20_000_000_000.0), &config());
        assert!(matches!(c, Classification::Retail { .. }));
    }

    #[test]
    fn test_denylist_precedes_retail_check() {
        let c = classify(Some("0xdead".into()), Some(5_000.0), &config());
        assert!(matches!(c, Classification::Excluded { .. }));

        // Below threshold but denylisted is still excluded
        let c = classify(Some("0xdead".into()), Some(1.0), &config());
        assert!(matches!(c, Classification::Excluded { .. }));
    }

    #[test]
    fn test_sub_threshold() {
        let c = classify(Some("0xabc".into()), Some(999.0), &config());
        assert_eq!(c, Classification::SubThreshold { balance: 999.0 });
    }

    #[test]
    fn test_dropped() {
        assert_eq!(classify(None, Some(5.0), &config()), Classification::Dropped);
        assert_eq!(classify(Some(String::new()), Some(5.0), &config()), Classification::Dropped);
        assert_eq!(classify(Some("0xabc".into()), None, &config()), Classification::Dropped);
        assert_eq!(classify(Some("0xabc".into()), Some(f64::NAN), &config()), Classification::Dropped);
        assert_eq!(Classification::Dropped.processed_balance(), None);
    }

    #[test]
    fn test_classify_record_normalizes() {
        let record = BalanceRecord::new("\\xDEAD", 5_000.0, "ethereum");
        assert!(matches!(classify_record(&record, &config()), Classification::Excluded { .. }));
    }
}
