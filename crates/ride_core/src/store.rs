//! Entity store: owns every driver, rider, and ride record plus the
//! per-rider candidate lists produced by matching.

use std::collections::HashMap;

use crate::entities::{Driver, Ride, Rider};
use crate::spatial::Point;

/// Owns all mutable simulation state, keyed by entity ID.
///
/// Adds silently replace any existing record with the same ID; rides are
/// inserted exactly once and never removed.
#[derive(Debug, Default)]
pub struct EntityStore {
    drivers: HashMap<String, Driver>,
    riders: HashMap<String, Rider>,
    rides: HashMap<String, Ride>,
    /// Ranked driver IDs from each rider's most recent match.
    candidates: HashMap<String, Vec<String>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a driver; fresh drivers are always available.
    pub fn add_driver(&mut self, id: &str, position: Point) {
        self.drivers.insert(
            id.to_owned(),
            Driver {
                id: id.to_owned(),
                position,
                available: true,
            },
        );
    }

    /// Insert or replace a rider.
    pub fn add_rider(&mut self, id: &str, position: Point) {
        self.riders.insert(
            id.to_owned(),
            Rider {
                id: id.to_owned(),
                position,
            },
        );
    }

    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.get(id)
    }

    pub fn driver_mut(&mut self, id: &str) -> Option<&mut Driver> {
        self.drivers.get_mut(id)
    }

    pub fn rider(&self, id: &str) -> Option<&Rider> {
        self.riders.get(id)
    }

    pub fn ride(&self, id: &str) -> Option<&Ride> {
        self.rides.get(id)
    }

    pub fn ride_mut(&mut self, id: &str) -> Option<&mut Ride> {
        self.rides.get_mut(id)
    }

    /// Whether a ride ID has already been used. Ride IDs are single-use.
    pub fn contains_ride(&self, id: &str) -> bool {
        self.rides.contains_key(id)
    }

    pub fn insert_ride(&mut self, ride: Ride) {
        debug_assert!(
            !self.rides.contains_key(&ride.id),
            "ride IDs are single-use"
        );
        self.rides.insert(ride.id.clone(), ride);
    }

    /// Drivers currently eligible for matching.
    pub fn available_drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.values().filter(|driver| driver.available)
    }

    /// Replace the rider's candidate list with a fresh ranking. An empty
    /// ranking still overwrites any stale one.
    pub fn set_candidates(&mut self, rider_id: &str, ranked: Vec<String>) {
        self.candidates.insert(rider_id.to_owned(), ranked);
    }

    /// Ranked driver IDs from the rider's most recent match. Empty when the
    /// rider has never been matched.
    pub fn candidates(&self, rider_id: &str) -> &[String] {
        self.candidates
            .get(rider_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
