//! HTTP client for the public geography service
//!
//! Issues `GET {base_url}/{UF}` and decodes the JSON array of municipalities.
//! Any non-2xx status is a failure.

use std::time::Duration;

use reqwest::Client;

use super::municipality::{Municipality, parse_municipalities};
use crate::error::MuniError;
use crate::region::RegionCode;

/// BrasilAPI mirror of the IBGE municipality listing
pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br/api/ibge/municipios/v1";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("muni/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the municipality list of a region
///
/// The worker is generic over this so tests can substitute a counting fake.
#[allow(async_fn_in_trait)]
pub trait MunicipalitySource {
    async fn fetch(&self, region: RegionCode) -> Result<Vec<Municipality>, MuniError>;
}

#[derive(Debug, Clone)]
pub struct BrasilApiClient {
    client: Client,
    base_url: String,
}

impl BrasilApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MuniError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MuniError::Client(e.to_string()))?;

        Ok(Self::from_client(client, base_url))
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full request URL for a region
    pub fn endpoint(&self, region: RegionCode) -> String {
        format!("{}/{}", self.base_url, region)
    }
}

impl MunicipalitySource for BrasilApiClient {
    async fn fetch(&self, region: RegionCode) -> Result<Vec<Municipality>, MuniError> {
        let url = self.endpoint(region);

        #[cfg(debug_assertions)]
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MuniError::Network {
                region: region.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MuniError::Status {
                region: region.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| MuniError::Network {
            region: region.to_string(),
            message: e.to_string(),
        })?;

        parse_municipalities(region, &body)
    }
}

/// Fetch one region to completion on a throwaway runtime
///
/// Used by the non-interactive search mode, where there is no UI loop to
/// keep responsive.
pub fn fetch_blocking<S: MunicipalitySource>(
    source: &S,
    region: RegionCode,
) -> Result<Vec<Municipality>, MuniError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(source.fetch(region))
}
