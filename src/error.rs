use thiserror::Error;

#[derive(Debug, Error)]
pub enum MuniError {
    #[error(
        "Invalid region code: {0}\n\nExpected a Brazilian state abbreviation such as SP, RJ or MG."
    )]
    InvalidRegion(String),

    #[error("Network error fetching municipalities for {region}: {message}")]
    Network { region: String, message: String },

    #[error("Geography service returned HTTP {status} for {region}")]
    Status { region: String, status: u16 },

    #[error("Failed to decode municipalities for {region}: {message}")]
    Decode { region: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
