use chrono::{TimeZone, Utc};
use holder_distribution::aggregator::{aggregate_chains, assemble_snapshot};
use holder_distribution::output::{read_snapshot, snapshot_to_string, validate_path, write_snapshot, WriteOutcome};
use holder_distribution::parser::records::{BalanceRecord, ChainInput};
use holder_distribution::parser::schema::Snapshot;
use holder_distribution::utils::config::EngineConfig;
use std::path::Path;

fn create_test_snapshot(extra_holder: bool, minute: u32) -> Snapshot {
    let config = EngineConfig::new(1_000.0, 20_000_000_000.0, ["0xdead"]).unwrap();
    let mut eth = vec![
        BalanceRecord::new("0xAAA", 1_500.0, "ethereum"),
        BalanceRecord::new("0xdead", 9_000.0, "ethereum"),
    ];
    if extra_holder {
        eth.push(BalanceRecord::new("0xccc", 2_500.0, "ethereum"));
    }
    let inputs = vec![
        ChainInput::new("ethereum", "Ethereum", eth),
        ChainInput::new("base", "Base", vec![BalanceRecord::new("\\xBBB", 40_000.0, "base")]),
    ];

    let chains = aggregate_chains(&inputs, &config);
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, minute, 0).unwrap();
    assemble_snapshot(&config, 1_000_000_000.0, chains, at)
}

#[test]
fn test_rendering_is_stable() {
    let a = snapshot_to_string(&create_test_snapshot(false, 0)).unwrap();
    let b = snapshot_to_string(&create_test_snapshot(false, 0)).unwrap();

    assert_eq!(a, b);
    assert!(a.ends_with("}\n"));
    // 2-space indentation
    assert!(a.contains("\n  \"generatedAt\": \"2024-06-01T12:00:00.000Z\""));
}

#[test]
fn test_json_field_layout() {
    let rendered = snapshot_to_string(&create_test_snapshot(false, 0)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["chainOrder"], serde_json::json!(["ethereum", "base"]));
    assert_eq!(value["thresholds"]["megaHolder"], serde_json::json!(20_000_000_000.0));
    assert_eq!(value["chains"]["base"]["holders"][0]["address"], "0xbbb");
    assert_eq!(value["chains"]["ethereum"]["excludedAddresses"], serde_json::json!(["0xdead"]));
    assert_eq!(value["combined"]["key"], "combined");
    assert_eq!(value["combined"]["metrics"]["topN"]["10"]["count"], 2);
    assert_eq!(value["combined"]["totalProcessedByChain"]["ethereum"], serde_json::json!(10_500.0));
    assert!(value["combined"]["metrics"]["distribution"].is_array());
}

#[test]
fn test_write_then_validate_roundtrip() {
    let snapshot = create_test_snapshot(false, 0);
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/holders.json");

    write_snapshot(&snapshot, &path).unwrap();
    let loaded = read_snapshot(&path).unwrap();

    assert_eq!(loaded.chain_order, snapshot.chain_order);
    assert_eq!(loaded.combined.retail_holder_count, 2);
    assert_eq!(loaded.chains["ethereum"].excluded_balance, 9_000.0);
}

#[test]
fn test_no_changes_short_circuit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("holders.json");

    assert!(matches!(
        write_snapshot(&create_test_snapshot(false, 0), &path).unwrap(),
        WriteOutcome::Written(_)
    ));
    assert_eq!(
        write_snapshot(&create_test_snapshot(false, 30), &path).unwrap(),
        WriteOutcome::Unchanged
    );

    // A real data change is written, timestamp included
    assert!(matches!(
        write_snapshot(&create_test_snapshot(true, 45), &path).unwrap(),
        WriteOutcome::Written(_)
    ));
    let loaded = read_snapshot(&path).unwrap();
    assert_eq!(loaded.generated_at, "2024-06-01T12:45:00.000Z");
    assert_eq!(loaded.combined.retail_holder_count, 3);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}
