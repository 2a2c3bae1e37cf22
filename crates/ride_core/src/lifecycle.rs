//! Ride lifecycle transitions: started → stopped.
//!
//! Each transition validates against the store and either commits or
//! rejects with [`InvalidTransition`], leaving the entity graph untouched.

use crate::entities::{Ride, RideState};
use crate::spatial::Point;
use crate::store::EntityStore;

/// A rejected lifecycle transition. The store is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition;

/// Start a ride by claiming the rider's `n`-th ranked driver (1-indexed,
/// so `n = 1` is the closest match).
///
/// Rejects when the ride ID was already used, when `n` falls outside the
/// rider's candidate list (including `n = 0` and riders never matched), or
/// when the chosen driver was claimed since the match ran.
pub fn start_ride(
    store: &mut EntityStore,
    ride_id: &str,
    rider_id: &str,
    n: usize,
) -> Result<(), InvalidTransition> {
    if store.contains_ride(ride_id) {
        return Err(InvalidTransition);
    }

    let driver_id = n
        .checked_sub(1)
        .and_then(|index| store.candidates(rider_id).get(index))
        .cloned()
        .ok_or(InvalidTransition)?;

    let driver = store.driver_mut(&driver_id).ok_or(InvalidTransition)?;
    if !driver.available {
        return Err(InvalidTransition);
    }
    driver.available = false;

    store.insert_ride(Ride {
        id: ride_id.to_owned(),
        rider_id: rider_id.to_owned(),
        driver_id,
        state: RideState::Started,
        dropoff: None,
        duration_minutes: 0,
    });
    Ok(())
}

/// Stop a started ride, recording the dropoff point and elapsed minutes.
///
/// Rejects when the ride does not exist or was already stopped. The ride
/// record is retained for billing.
pub fn stop_ride(
    store: &mut EntityStore,
    ride_id: &str,
    dropoff: Point,
    duration_minutes: u64,
) -> Result<(), InvalidTransition> {
    let ride = store.ride_mut(ride_id).ok_or(InvalidTransition)?;
    if ride.state == RideState::Completed {
        return Err(InvalidTransition);
    }

    ride.state = RideState::Completed;
    ride.dropoff = Some(dropoff);
    ride.duration_minutes = duration_minutes;
    Ok(())
}
