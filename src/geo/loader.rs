//! Cache-or-fetch front end used by the app
//!
//! Owns the session cache and the channels to the fetch worker. A cache miss
//! dispatches one request; the response is stored when the UI loop polls.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::cache::MunicipalityCache;
use super::municipality::Municipality;
use super::worker::{FetchRequest, FetchResponse};
use crate::region::RegionCode;

/// Whether a region's list can be used right away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Cached; read it with [`MunicipalityLoader::municipalities`]
    Ready,
    /// A fetch is in flight; the region is reported by a later `poll`
    Pending,
}

#[derive(Debug, Default)]
pub struct MunicipalityLoader {
    cache: MunicipalityCache,
    request_tx: Option<Sender<FetchRequest>>,
    response_rx: Option<Receiver<FetchResponse>>,
    next_request_id: u64,
}

impl MunicipalityLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn cache(&self) -> &MunicipalityCache {
        &self.cache
    }

    pub fn municipalities(&self, region: RegionCode) -> Option<&[Municipality]> {
        self.cache.get(region)
    }

    pub fn is_loading(&self, region: RegionCode) -> bool {
        self.cache.is_in_flight(region)
    }

    /// Make sure `region` is cached or on its way
    ///
    /// Dispatches at most one fetch per region for the whole session. Without
    /// a worker the region resolves immediately to an empty list.
    pub fn request(&mut self, region: RegionCode) -> LoadStatus {
        if !self.cache.needs_fetch(region) {
            return if self.cache.contains(region) {
                LoadStatus::Ready
            } else {
                LoadStatus::Pending
            };
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let sent = match &self.request_tx {
            Some(tx) => tx.send(FetchRequest { region, request_id }).is_ok(),
            None => false,
        };

        if sent {
            #[cfg(debug_assertions)]
            log::debug!("Dispatched fetch {} for {}", request_id, region);
            self.cache.mark_in_flight(region);
            LoadStatus::Pending
        } else {
            log::error!("Fetch worker unavailable, no municipalities for {}", region);
            self.request_tx = None;
            self.cache.store(region, Vec::new());
            LoadStatus::Ready
        }
    }

    /// Drain finished fetches into the cache
    ///
    /// Returns the regions that resolved during this call, in arrival order.
    /// Failures resolve to an empty list.
    pub fn poll(&mut self) -> Vec<RegionCode> {
        let mut resolved = Vec::new();
        let Some(rx) = &self.response_rx else {
            return resolved;
        };

        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(response) => {
                    let region = response.region();
                    log::debug!("Fetch {} for {} resolved", response.request_id(), region);
                    let municipalities = match response {
                        FetchResponse::Loaded { municipalities, .. } => municipalities,
                        FetchResponse::Failed { .. } => Vec::new(),
                    };
                    self.cache.store(region, municipalities);
                    log::debug!("{} regions cached", self.cache.len());
                    resolved.push(region);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            log::error!("Fetch worker disconnected");
            self.request_tx = None;
            self.response_rx = None;
            for region in self.cache.in_flight_regions() {
                self.cache.store(region, Vec::new());
                resolved.push(region);
            }
        }

        resolved
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
