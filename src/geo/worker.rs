//! Fetch Worker Thread
//!
//! Runs geography service requests in a background thread so the UI keeps
//! handling keys while a region's list downloads. Requests and responses
//! travel over std channels; each carries the id assigned by the loader.
//!
//! Uses a single-threaded tokio runtime for the async HTTP client. Requests
//! are served in arrival order.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use super::client::MunicipalitySource;
use super::municipality::Municipality;
use crate::region::RegionCode;

/// Request to load one region's municipality list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub region: RegionCode,
    /// Unique ID for tracking this request
    pub request_id: u64,
}

/// Outcome of a fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    Loaded {
        region: RegionCode,
        request_id: u64,
        municipalities: Vec<Municipality>,
    },
    /// Network, status or decode failure. Already logged by the worker.
    Failed {
        region: RegionCode,
        request_id: u64,
        message: String,
    },
}

impl FetchResponse {
    pub fn region(&self) -> RegionCode {
        match self {
            FetchResponse::Loaded { region, .. } | FetchResponse::Failed { region, .. } => *region,
        }
    }

    pub fn request_id(&self) -> u64 {
        match self {
            FetchResponse::Loaded { request_id, .. } | FetchResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }
}

const WORKER_THREAD_NAME: &str = "muni-fetch";

/// Spawn the fetch worker thread
///
/// The worker owns `source` and serves requests until the request channel
/// closes. Panics inside the worker are caught and logged instead of being
/// printed over the TUI.
pub fn spawn_worker<S>(
    source: S,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) where
    S: MunicipalitySource + Send + 'static,
{
    // The default hook prints to stderr, which corrupts the TUI. Other
    // threads keep the previous hook so the terminal is still restored.
    let prev_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if thread::current().name() == Some(WORKER_THREAD_NAME) {
            log::error!("Fetch worker panic: {}", panic_message_from_info(panic_info));
        } else {
            prev_hook(panic_info);
        }
    }));

    let spawned = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime for fetch worker: {}", e);
                        return;
                    }
                };

                rt.block_on(worker_loop(source, request_rx, response_tx));
            }));

            if let Err(e) = result {
                let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("Fetch worker thread panicked: {}", panic_msg);
            }
        });

    // Without a worker the request channel is closed and every region
    // resolves to an empty list
    if let Err(e) = spawned {
        log::error!("Failed to spawn fetch worker: {}", e);
    }
}

fn panic_message_from_info(info: &panic::PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic in fetch worker".to_string()
    }
}

/// Serve requests until the channel closes
///
/// Blocking `recv()` is fine: this runtime lives on its own thread and only
/// ever drives one request at a time.
async fn worker_loop<S: MunicipalitySource>(
    source: S,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    log::debug!("Fetch worker thread started");

    while let Ok(request) = request_rx.recv() {
        let response = handle_request(&source, request).await;
        if response_tx.send(response).is_err() {
            break;
        }
    }

    log::debug!("Fetch worker thread shutting down");
}

async fn handle_request<S: MunicipalitySource>(source: &S, request: FetchRequest) -> FetchResponse {
    let FetchRequest { region, request_id } = request;

    match source.fetch(region).await {
        Ok(municipalities) => {
            log::debug!(
                "Fetch {} for {} returned {} municipalities",
                request_id,
                region,
                municipalities.len()
            );
            FetchResponse::Loaded {
                region,
                request_id,
                municipalities,
            }
        }
        Err(e) => {
            log::error!("Failed to fetch municipalities for {}: {}", region, e);
            FetchResponse::Failed {
                region,
                request_id,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
