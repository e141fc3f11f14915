//! Row sources feeding the aggregation engine.
//!
//! Rows come either from a local JSON file or from the holder indexing
//! service over HTTP. Either way the result is one `ChainInput` per chain.

pub mod file;
pub mod http;

pub use file::read_chain_inputs;
pub use http::{extract_rows, HttpSource};

use crate::parser::records::ChainInput;
use crate::utils::error::SourceError;
use std::collections::HashSet;

/// Chain requested on the command line, written `key` or `key:Label`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    pub key: String,
    pub label: String,
}

impl std::str::FromStr for ChainSpec {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, label) = match s.split_once(':') {
            Some((key, label)) => (key.trim(), label.trim()),
            None => (s.trim(), s.trim()),
        };

        if key.is_empty() || label.is_empty() {
            return Err(SourceError::InvalidChainSpec(s.to_string()));
        }

        Ok(Self {
            key: key.to_string(),
            label: label.to_string(),
        })
    }
}

/// Fetch every requested chain from the HTTP source, in order
pub fn fetch_chain_inputs(source: &HttpSource, chains: &[ChainSpec]) -> Result<Vec<ChainInput>, SourceError> {
    chains
        .iter()
        .map(|spec| {
            let records = source.fetch_chain(&spec.key)?;
            Ok::<_, SourceError>(ChainInput::new(spec.key.clone(), spec.label.clone(), records))
        })
        .collect()
}

/// Reject inputs that name the same chain key twice
///
/// Chains are keyed by `key` in the snapshot, so a repeat would silently
/// replace the earlier chain there while the combined view still counts both.
pub fn ensure_unique_keys<'a, I>(keys: I) -> Result<(), SourceError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(SourceError::DuplicateChain(key.to_string()));
        }
    }
    Ok(())
}
