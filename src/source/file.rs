//! Local JSON input with rows for every chain.

use crate::parser::records::ChainInput;
use crate::utils::error::SourceError;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct InputDocument {
    chains: Vec<ChainInput>,
}

/// Read chain inputs from a JSON file
///
/// Expected shape: `{ "chains": [ { "key", "label", "records": [...] } ] }`
pub fn read_chain_inputs(path: impl AsRef<Path>) -> Result<Vec<ChainInput>, SourceError> {
    let path = path.as_ref();
    debug!("Reading chain inputs from: {}", path.display());

    let file = File::open(path)?;
    let document: InputDocument = serde_json::from_reader(BufReader::new(file))?;

    debug!("Loaded {} chains", document.chains.len());

    Ok(document.chains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_chain_inputs() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"chains": [
                {{"key": "ethereum", "label": "Ethereum", "records": [{{"address": "0x1", "balance": "5"}}]}},
                {{"key": "base"}}
            ]}}"#
        )
        .unwrap();

        let inputs = read_chain_inputs(file.path()).unwrap();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].records.len(), 1);
        assert_eq!(inputs[1].display_label(), "base");
    }

    #[test]
    fn test_missing_file() {
        let result = read_chain_inputs("/definitely/not/here.json");
        assert!(matches!(result, Err(SourceError::ReadFailed(_))));
    }
}
