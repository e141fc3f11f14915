//! HTTP client for pulling balance rows from the holder indexing service.

use crate::parser::records::BalanceRecord;
use crate::utils::config::{DEFAULT_SOURCE_TIMEOUT, ROW_FIELD_NAMES};
use crate::utils::error::SourceError;
use log::{debug, info};
use reqwest::blocking::Client;

/// Client for fetching holder rows, one request per chain
pub struct HttpSource {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpSource {
    /// Create a new source client
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(DEFAULT_SOURCE_TIMEOUT)
            .build()
            .map_err(SourceError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// Fetch all rows for a chain
    pub fn fetch_chain(&self, chain_key: &str) -> Result<Vec<BalanceRecord>, SourceError> {
        info!("Fetching holder rows for chain: {}", chain_key);

        let mut request = self.client.get(&self.endpoint).query(&[("chain", chain_key)]);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(SourceError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let body: serde_json::Value = response.json().map_err(SourceError::RequestFailed)?;
        let records = extract_rows(body)?;

        debug!("Chain {}: received {} rows", chain_key, records.len());

        Ok(records)
    }
}

/// Pull the row array out of a source response
///
/// Accepts a bare array or an object wrapping it under one of the known
/// field names.
pub fn extract_rows(body: serde_json::Value) -> Result<Vec<BalanceRecord>, SourceError> {
    let rows = match body {
        serde_json::Value::Array(_) => body,
        serde_json::Value::Object(mut obj) => ROW_FIELD_NAMES
            .iter()
            .find_map(|name| obj.remove(*name).filter(|v| v.is_array()))
            .ok_or_else(|| {
                SourceError::InvalidResponse("Response object has no row array".to_string())
            })?,
        _ => {
            return Err(SourceError::InvalidResponse(
                "Response must be a JSON array or object".to_string(),
            ))
        }
    };

    Ok(serde_json::from_value(rows)?)
}
