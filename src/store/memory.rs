//! In-memory store implementations for testing and embedding

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::core::{AnchorId, AnchorPosition, AnchorSample, BeaconId, PositionEstimate};
use crate::store::{
    BeaconLocationStore, ListenerRegistry, RangeSampleStore, StoreResult,
};

/// In-memory listener registry
///
/// Anchors iterate in ascending id order, so selection tie-breaks are
/// reproducible across runs.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    anchors: BTreeMap<AnchorId, AnchorPosition>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an anchor, replacing any previous position for its id
    pub fn add_anchor(&mut self, anchor_id: AnchorId, lat: f64, lon: f64) {
        self.anchors.insert(
            anchor_id,
            AnchorPosition {
                anchor_id,
                lat,
                lon,
            },
        );
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}

impl ListenerRegistry for MemoryRegistry {
    fn anchor_ids(&self) -> StoreResult<Vec<AnchorId>> {
        Ok(self.anchors.keys().copied().collect())
    }

    fn position(&self, anchor_id: AnchorId) -> StoreResult<Option<AnchorPosition>> {
        Ok(self.anchors.get(&anchor_id).cloned())
    }
}

/// In-memory range sample store keeping only the most recent sample per
/// (anchor, beacon) pair
#[derive(Debug, Default)]
pub struct MemorySampleStore {
    samples: BTreeMap<(AnchorId, BeaconId), AnchorSample>,
}

impl MemorySampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a range measurement; an older sample for the same pair is
    /// superseded, a newer existing sample is kept
    pub fn record(&mut self, beacon_id: BeaconId, sample: AnchorSample) {
        let key = (sample.anchor_id, beacon_id);
        match self.samples.get(&key) {
            Some(existing) if existing.observed_at_ms > sample.observed_at_ms => {}
            _ => {
                self.samples.insert(key, sample);
            }
        }
    }
}

impl RangeSampleStore for MemorySampleStore {
    fn latest_sample(
        &self,
        anchor_id: AnchorId,
        beacon_id: BeaconId,
    ) -> StoreResult<Option<AnchorSample>> {
        Ok(self.samples.get(&(anchor_id, beacon_id)).cloned())
    }
}

/// In-memory beacon location sink
///
/// Writes go through `&self` like the trait demands, so the map sits
/// behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryLocationStore {
    positions: Mutex<HashMap<BeaconId, PositionEstimate>>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded position for a beacon, if any
    pub fn position(&self, beacon_id: BeaconId) -> Option<PositionEstimate> {
        self.positions
            .lock()
            .expect("location store mutex poisoned")
            .get(&beacon_id)
            .cloned()
    }
}

impl BeaconLocationStore for MemoryLocationStore {
    fn record_position(
        &self,
        beacon_id: BeaconId,
        position: &PositionEstimate,
    ) -> StoreResult<()> {
        self.positions
            .lock()
            .expect("location store mutex poisoned")
            .insert(beacon_id, position.clone());
        Ok(())
    }
}
