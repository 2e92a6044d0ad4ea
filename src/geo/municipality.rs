use serde::Deserialize;

use crate::error::MuniError;
use crate::region::RegionCode;

/// One municipality as returned by the geography service
///
/// Only `nome` is required; any other upstream field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Municipality {
    #[serde(rename = "nome")]
    pub name: String,
}

impl Municipality {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Decode the service's JSON array, preserving upstream order
pub fn parse_municipalities(region: RegionCode, body: &str) -> Result<Vec<Municipality>, MuniError> {
    serde_json::from_str(body).map_err(|e| MuniError::Decode {
        region: region.to_string(),
        message: e.to_string(),
    })
}
