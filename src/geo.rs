//! Geography data: the municipality model, the HTTP client for the public
//! geography service, the per-region cache and the background fetch worker.

pub mod cache;
pub mod client;
pub mod loader;
pub mod municipality;
pub mod worker;

pub use cache::MunicipalityCache;
pub use client::{BrasilApiClient, DEFAULT_BASE_URL, MunicipalitySource};
pub use loader::{LoadStatus, MunicipalityLoader};
pub use municipality::Municipality;
pub use worker::{FetchRequest, FetchResponse};
