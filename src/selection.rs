//! Range sample selection
//!
//! Gathers the latest range sample from every registered anchor for one
//! beacon and picks the three most recent as solver input. Selection
//! deliberately keeps only a trailing window of three: the solver is an
//! exact closed form over exactly three anchors, so older samples are
//! dropped rather than fused.

use log::debug;

use crate::core::{
    AnchorSample, BeaconId, RangedAnchor, SolverInput, SOLVER_ANCHOR_COUNT,
};
use crate::error::{LocationError, LocationResult};
use crate::store::{ListenerRegistry, RangeSampleStore};

/// Outcome of sample selection
///
/// `InsufficientData` is a normal, expected outcome early in a beacon's
/// lifetime, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Three resolved anchors with ranges, ordered oldest-first
    Ranged(SolverInput),
    /// Fewer than three anchors have ever heard this beacon
    InsufficientData { usable: usize },
}

/// Selects the anchor subset used for solving
pub struct SampleSelector<'a, R, S> {
    registry: &'a R,
    samples: &'a S,
}

impl<'a, R, S> SampleSelector<'a, R, S>
where
    R: ListenerRegistry,
    S: RangeSampleStore,
{
    pub fn new(registry: &'a R, samples: &'a S) -> Self {
        Self { registry, samples }
    }

    /// Select the three most recent usable samples for a beacon and
    /// resolve their anchors' coordinates
    ///
    /// Anchors with no sample for this beacon are skipped. The stable
    /// ascending sort means equal timestamps keep registry iteration
    /// order, so repeated calls over the same data select the same
    /// anchors. A sample whose anchor the registry cannot resolve is a
    /// hard [`LocationError::UnresolvedAnchor`].
    pub fn select(&self, beacon_id: BeaconId) -> LocationResult<Selection> {
        let mut usable: Vec<AnchorSample> = Vec::new();
        for anchor_id in self.registry.anchor_ids()? {
            if let Some(sample) = self.samples.latest_sample(anchor_id, beacon_id)? {
                usable.push(sample);
            }
        }

        // Stable sort: ties resolve by registry order
        usable.sort_by_key(|sample| sample.observed_at_ms);

        if usable.len() < SOLVER_ANCHOR_COUNT {
            debug!(
                "beacon {}: {} usable sample(s), {} required",
                beacon_id,
                usable.len(),
                SOLVER_ANCHOR_COUNT
            );
            return Ok(Selection::InsufficientData {
                usable: usable.len(),
            });
        }

        let window = &usable[usable.len() - SOLVER_ANCHOR_COUNT..];
        let anchors = [
            self.resolve(&window[0], beacon_id)?,
            self.resolve(&window[1], beacon_id)?,
            self.resolve(&window[2], beacon_id)?,
        ];

        Ok(Selection::Ranged(SolverInput { anchors }))
    }

    fn resolve(&self, sample: &AnchorSample, beacon_id: BeaconId) -> LocationResult<RangedAnchor> {
        let position = self.registry.position(sample.anchor_id)?.ok_or(
            LocationError::UnresolvedAnchor {
                anchor_id: sample.anchor_id,
                beacon_id,
            },
        )?;

        Ok(RangedAnchor {
            position,
            distance_m: sample.distance_m,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AnchorId, AnchorPosition};
    use crate::store::memory::{MemoryRegistry, MemorySampleStore};
    use crate::store::StoreResult;

    fn registry_of(anchors: &[(AnchorId, f64, f64)]) -> MemoryRegistry {
        let mut registry = MemoryRegistry::new();
        for (id, lat, lon) in anchors {
            registry.add_anchor(*id, *lat, *lon);
        }
        registry
    }

    fn sample(anchor_id: AnchorId, distance_m: f64, observed_at_ms: u64) -> AnchorSample {
        AnchorSample {
            anchor_id,
            distance_m,
            observed_at_ms,
        }
    }

    #[test]
    fn test_too_few_samples_is_insufficient_data() {
        let registry = registry_of(&[(1, 0.0, 0.0), (2, 0.0, 1.0), (3, 1.0, 0.0)]);

        for count in 0..3u32 {
            let mut store = MemorySampleStore::new();
            for id in 1..=count {
                store.record(7, sample(id, 50.0, 1000 + id as u64));
            }
            let selector = SampleSelector::new(&registry, &store);
            assert_eq!(
                selector.select(7).unwrap(),
                Selection::InsufficientData {
                    usable: count as usize
                }
            );
        }
    }

    #[test]
    fn test_exactly_three_samples_are_selected_oldest_first() {
        let registry = registry_of(&[(1, 0.0, 0.0), (2, 0.0, 1.0), (3, 1.0, 0.0)]);
        let mut store = MemorySampleStore::new();
        // Recorded out of timestamp order
        store.record(7, sample(2, 20.0, 3000));
        store.record(7, sample(1, 10.0, 1000));
        store.record(7, sample(3, 30.0, 2000));

        let selector = SampleSelector::new(&registry, &store);
        match selector.select(7).unwrap() {
            Selection::Ranged(input) => {
                let ids: Vec<_> = input
                    .anchors
                    .iter()
                    .map(|a| a.position.anchor_id)
                    .collect();
                assert_eq!(ids, vec![1, 3, 2]);
                assert_eq!(input.anchors[0].distance_m, 10.0);
            }
            other => panic!("expected ranged selection, got {:?}", other),
        }
    }

    #[test]
    fn test_more_than_three_keeps_the_most_recent() {
        let registry = registry_of(&[
            (1, 0.0, 0.0),
            (2, 0.0, 1.0),
            (3, 1.0, 0.0),
            (4, 1.0, 1.0),
            (5, 2.0, 2.0),
        ]);
        let mut store = MemorySampleStore::new();
        store.record(7, sample(1, 10.0, 1000));
        store.record(7, sample(2, 20.0, 5000));
        store.record(7, sample(3, 30.0, 2000));
        store.record(7, sample(4, 40.0, 4000));
        store.record(7, sample(5, 50.0, 3000));

        let selector = SampleSelector::new(&registry, &store);
        match selector.select(7).unwrap() {
            Selection::Ranged(input) => {
                let ids: Vec<_> = input
                    .anchors
                    .iter()
                    .map(|a| a.position.anchor_id)
                    .collect();
                // Most recent three, oldest-first within the window
                assert_eq!(ids, vec![5, 4, 2]);
            }
            other => panic!("expected ranged selection, got {:?}", other),
        }
    }

    #[test]
    fn test_anchors_without_samples_are_skipped() {
        let registry = registry_of(&[
            (1, 0.0, 0.0),
            (2, 0.0, 1.0),
            (3, 1.0, 0.0),
            (4, 1.0, 1.0),
        ]);
        let mut store = MemorySampleStore::new();
        store.record(7, sample(1, 10.0, 1000));
        store.record(7, sample(3, 30.0, 2000));
        store.record(7, sample(4, 40.0, 3000));
        // Anchor 2 has never heard beacon 7

        let selector = SampleSelector::new(&registry, &store);
        match selector.select(7).unwrap() {
            Selection::Ranged(input) => {
                let ids: Vec<_> = input
                    .anchors
                    .iter()
                    .map(|a| a.position.anchor_id)
                    .collect();
                assert_eq!(ids, vec![1, 3, 4]);
            }
            other => panic!("expected ranged selection, got {:?}", other),
        }
    }

    #[test]
    fn test_equal_timestamps_select_deterministically() {
        let registry = registry_of(&[
            (1, 0.0, 0.0),
            (2, 0.0, 1.0),
            (3, 1.0, 0.0),
            (4, 1.0, 1.0),
        ]);
        let mut store = MemorySampleStore::new();
        for id in 1..=4 {
            store.record(7, sample(id, id as f64 * 10.0, 1000));
        }

        let selector = SampleSelector::new(&registry, &store);
        let first = selector.select(7).unwrap();
        for _ in 0..10 {
            assert_eq!(selector.select(7).unwrap(), first);
        }

        // Stable sort over registry order: the trailing window is the
        // last three ids in ascending order
        match first {
            Selection::Ranged(input) => {
                let ids: Vec<_> = input
                    .anchors
                    .iter()
                    .map(|a| a.position.anchor_id)
                    .collect();
                assert_eq!(ids, vec![2, 3, 4]);
            }
            other => panic!("expected ranged selection, got {:?}", other),
        }
    }

    /// Registry whose id listing and position lookups disagree, as a
    /// broken deployment would present
    struct InconsistentRegistry;

    impl ListenerRegistry for InconsistentRegistry {
        fn anchor_ids(&self) -> StoreResult<Vec<AnchorId>> {
            Ok(vec![1, 2, 3])
        }

        fn position(&self, anchor_id: AnchorId) -> StoreResult<Option<AnchorPosition>> {
            if anchor_id == 2 {
                return Ok(None);
            }
            Ok(Some(AnchorPosition {
                anchor_id,
                lat: anchor_id as f64,
                lon: 0.0,
            }))
        }
    }

    #[test]
    fn test_unresolved_anchor_is_a_hard_error() {
        let registry = InconsistentRegistry;
        let mut store = MemorySampleStore::new();
        store.record(7, sample(1, 10.0, 1000));
        store.record(7, sample(2, 20.0, 2000));
        store.record(7, sample(3, 30.0, 3000));

        let selector = SampleSelector::new(&registry, &store);
        assert_eq!(
            selector.select(7),
            Err(LocationError::UnresolvedAnchor {
                anchor_id: 2,
                beacon_id: 7
            })
        );
    }
}
