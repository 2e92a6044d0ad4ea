use std::collections::{HashMap, HashSet};

use super::municipality::Municipality;
use crate::region::RegionCode;

/// Per-region municipality lists for the session
///
/// Entries are never invalidated. The first stored result for a region is
/// final, including an empty one, so a region is fetched at most once.
/// Regions with a fetch still in flight are tracked separately so an
/// in-flight region is not fetched twice either.
#[derive(Debug, Default)]
pub struct MunicipalityCache {
    entries: HashMap<RegionCode, Vec<Municipality>>,
    in_flight: HashSet<RegionCode>,
}

impl MunicipalityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: RegionCode) -> Option<&[Municipality]> {
        self.entries.get(&region).map(Vec::as_slice)
    }

    pub fn contains(&self, region: RegionCode) -> bool {
        self.entries.contains_key(&region)
    }

    pub fn is_in_flight(&self, region: RegionCode) -> bool {
        self.in_flight.contains(&region)
    }

    /// Whether a fetch should be dispatched for `region`
    pub fn needs_fetch(&self, region: RegionCode) -> bool {
        !self.contains(region) && !self.is_in_flight(region)
    }

    pub fn mark_in_flight(&mut self, region: RegionCode) {
        self.in_flight.insert(region);
    }

    pub fn in_flight_regions(&self) -> Vec<RegionCode> {
        self.in_flight.iter().copied().collect()
    }

    /// Store a completed fetch, returning false if the region was already cached
    pub fn store(&mut self, region: RegionCode, municipalities: Vec<Municipality>) -> bool {
        self.in_flight.remove(&region);
        if self.entries.contains_key(&region) {
            return false;
        }
        self.entries.insert(region, municipalities);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
