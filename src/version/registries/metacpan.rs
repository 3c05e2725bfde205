//! MetaCPAN client for fetching published CPAN module versions

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;
use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registry::Registry;

pub const DEFAULT_METACPAN_REGISTRY: &str = "https://fastapi.metacpan.org";

/// MetaCPAN registry client
pub struct MetaCpanRegistry {
    client: Client,
    base_url: String,
}

impl Default for MetaCpanRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_METACPAN_REGISTRY.to_string())
    }
}

impl MetaCpanRegistry {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Response of the `download_url` endpoint
#[derive(Debug, Deserialize)]
struct DownloadUrlResponse {
    version: Box<RawValue>,
}

/// MetaCPAN reports versions either as strings or as bare numbers
///
/// Numbers are taken from the raw JSON token so trailing zeros survive
/// (`1.10` must not become `1.1`).
fn published_version(raw: &RawValue) -> Result<String, RegistryError> {
    let token = raw.get();
    if token.starts_with('"') {
        return serde_json::from_str::<String>(token)
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()));
    }

    match serde_json::from_str::<Value>(token) {
        Ok(Value::Number(_)) => Ok(token.to_string()),
        _ => Err(RegistryError::InvalidResponse(format!(
            "unexpected version value: {}",
            token
        ))),
    }
}

#[async_trait]
impl Registry for MetaCpanRegistry {
    fn name(&self) -> &'static str {
        "CPAN"
    }

    async fn fetch_latest_version(&self, module_name: &str) -> Result<String, RegistryError> {
        let url = format!("{}/v1/download_url/{}", self.base_url, module_name);
        debug!("Fetching MetaCPAN module: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(module_name.to_string()));
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "MetaCPAN API returned status {}",
                response.status()
            )));
        }

        let body: DownloadUrlResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        let version = published_version(&body.version)?;
        debug!("Found version {} for module {}", version, module_name);

        Ok(version)
    }
}
