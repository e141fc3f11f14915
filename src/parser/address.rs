//! Address canonicalization.
//!
//! Indexers hand addresses back in more than one encoding: `0x`-prefixed
//! hex, bare hex, or an escaped-hex dump of a binary column (`\x...`).
//! Everything is folded into lower-case `0x` form so addresses compare
//! equal across chains and against the denylist.

/// Normalize a raw address string.
///
/// Returns `None` for missing or empty input. No trimming, length or
/// checksum validation is done; malformed strings pass through.
pub fn normalize_address(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    let lowered = raw.to_lowercase();

    if lowered.starts_with("0x") {
        Some(lowered)
    } else if let Some(body) = lowered.strip_prefix("\\x") {
        Some(format!("0x{}", body))
    } else {
        Some(format!("0x{}", lowered))
    }
}
