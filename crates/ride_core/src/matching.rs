//! Matching engine: ranks available drivers around a rider.
//!
//! The ranking policy sits behind the [`MatchingAlgorithm`] trait so it can
//! be swapped without touching dispatch; the shipped policy is
//! [`NearestWithinRadius`].

use std::cmp::Ordering;

use crate::spatial::Point;
use crate::store::EntityStore;

/// Maximum rider-to-driver distance considered matchable, in plane units.
pub const DEFAULT_MATCH_RADIUS: f64 = 5.0;

/// Matching parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Inclusive search radius around the rider.
    pub radius: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_MATCH_RADIUS,
        }
    }
}

impl MatchConfig {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// One ranked driver produced by a match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    pub driver_id: String,
    pub distance: f64,
}

/// Ranking policy for pairing a rider with nearby drivers.
pub trait MatchingAlgorithm {
    /// Rank the store's available drivers around `rider_pos`, best first.
    fn rank(
        &self,
        store: &EntityStore,
        rider_pos: Point,
        config: &MatchConfig,
    ) -> Vec<MatchCandidate>;
}

/// Distance-ordered matching: every available driver within the radius,
/// closest first. Equal distances rank by ascending driver ID so the
/// ordering is reproducible regardless of map iteration order.
#[derive(Debug, Default)]
pub struct NearestWithinRadius;

impl MatchingAlgorithm for NearestWithinRadius {
    fn rank(
        &self,
        store: &EntityStore,
        rider_pos: Point,
        config: &MatchConfig,
    ) -> Vec<MatchCandidate> {
        let mut candidates: Vec<MatchCandidate> = store
            .available_drivers()
            .filter_map(|driver| {
                let distance = rider_pos.distance_to(driver.position);
                (distance <= config.radius).then(|| MatchCandidate {
                    driver_id: driver.id.clone(),
                    distance,
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.driver_id.cmp(&b.driver_id))
        });
        candidates
    }
}
