//! Fare calculation for completed rides.
//!
//! The tariff is a fixed formula: base fare plus distance and time
//! components, with a service tax applied on the subtotal. Billing is
//! read-only; the same ride bills to the same amount every time.

use serde::{Deserialize, Serialize};

use crate::entities::RideState;
use crate::store::EntityStore;

/// Fare model parameters. `Default` is the standard city tariff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_minute_rate: f64,
    /// Fraction of the subtotal added as tax (0.20 = 20%).
    pub service_tax: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            base_fare: 50.0,
            per_km_rate: 6.5,
            per_minute_rate: 2.0,
            service_tax: 0.20,
        }
    }
}

impl Tariff {
    pub fn with_base_fare(mut self, base_fare: f64) -> Self {
        self.base_fare = base_fare;
        self
    }

    pub fn with_per_km_rate(mut self, per_km_rate: f64) -> Self {
        self.per_km_rate = per_km_rate;
        self
    }

    pub fn with_per_minute_rate(mut self, per_minute_rate: f64) -> Self {
        self.per_minute_rate = per_minute_rate;
        self
    }

    pub fn with_service_tax(mut self, service_tax: f64) -> Self {
        self.service_tax = service_tax;
        self
    }

    /// Fare for a trip: subtotal of base, distance, and time components,
    /// then the service tax on top.
    pub fn fare(&self, distance: f64, minutes: u64) -> f64 {
        let subtotal = self.base_fare
            + distance * self.per_km_rate
            + minutes as f64 * self.per_minute_rate;
        subtotal + subtotal * self.service_tax
    }
}

/// Why a bill could not be produced. Each variant has its own wire token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingError {
    /// No ride with the given ID.
    UnknownRide,
    /// The ride exists but has not been stopped yet.
    NotCompleted,
}

/// An itemized bill for one completed ride.
#[derive(Debug, Clone, PartialEq)]
pub struct BillStatement {
    pub ride_id: String,
    pub driver_id: String,
    pub amount: f64,
}

/// Round to two decimal places, ties away from zero.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the bill for a completed ride.
///
/// Trip distance is the straight line from the rider's stored position to
/// the recorded dropoff, rounded to two decimals before it enters the fare
/// formula.
pub fn bill(
    store: &EntityStore,
    tariff: &Tariff,
    ride_id: &str,
) -> Result<BillStatement, BillingError> {
    let ride = store.ride(ride_id).ok_or(BillingError::UnknownRide)?;
    if ride.state != RideState::Completed {
        return Err(BillingError::NotCompleted);
    }
    let rider = store.rider(&ride.rider_id).ok_or(BillingError::UnknownRide)?;
    let dropoff = ride.dropoff.ok_or(BillingError::NotCompleted)?;

    let distance = round_to_cents(rider.position.distance_to(dropoff));
    Ok(BillStatement {
        ride_id: ride.id.clone(),
        driver_id: ride.driver_id.clone(),
        amount: tariff.fare(distance, ride.duration_minutes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Ride;
    use crate::spatial::Point;

    #[test]
    fn default_tariff_matches_the_city_model() {
        let tariff = Tariff::default();
        assert_eq!(tariff.base_fare, 50.0);
        assert_eq!(tariff.per_km_rate, 6.5);
        assert_eq!(tariff.per_minute_rate, 2.0);
        assert_eq!(tariff.service_tax, 0.20);
    }

    #[test]
    fn fare_applies_tax_on_the_subtotal() {
        // (50 + 0 * 6.5 + 10 * 2.0) * 1.2 = 84.0
        assert_eq!(Tariff::default().fare(0.0, 10), 84.0);
    }

    #[test]
    fn fare_charges_distance_and_time() {
        // (50 + 6.4 * 6.5 + 32 * 2.0) * 1.2 = 186.72
        let fare = Tariff::default().fare(6.4, 32);
        assert!((fare - 186.72).abs() < 1e-9);
    }

    #[test]
    fn builders_override_individual_rates() {
        let tariff = Tariff::default()
            .with_base_fare(0.0)
            .with_per_km_rate(1.0)
            .with_per_minute_rate(0.0)
            .with_service_tax(0.0);
        assert_eq!(tariff.fare(12.5, 60), 12.5);
    }

    #[test]
    fn rounding_is_ties_away_from_zero() {
        // 0.625 * 100 is exactly 62.5, so this exercises the tie case.
        assert_eq!(round_to_cents(0.625), 0.63);
        assert_eq!(round_to_cents(-0.625), -0.63);
        assert_eq!(round_to_cents(6.403124), 6.4);
    }

    #[test]
    fn bill_uses_rounded_distance() {
        let mut store = EntityStore::new();
        store.add_rider("R1", Point::new(0.0, 0.0));
        store.insert_ride(Ride {
            id: "RIDE-1".to_owned(),
            rider_id: "R1".to_owned(),
            driver_id: "D3".to_owned(),
            state: RideState::Completed,
            dropoff: Some(Point::new(4.0, 5.0)),
            duration_minutes: 32,
        });

        // sqrt(41) = 6.4031... rounds to 6.40 before the formula.
        let statement = bill(&store, &Tariff::default(), "RIDE-1").expect("statement");
        assert_eq!(statement.driver_id, "D3");
        assert!((statement.amount - 186.72).abs() < 1e-9);
    }

    #[test]
    fn bill_rejects_unknown_and_incomplete_rides() {
        let mut store = EntityStore::new();
        store.add_rider("R1", Point::new(0.0, 0.0));
        store.insert_ride(Ride {
            id: "RIDE-1".to_owned(),
            rider_id: "R1".to_owned(),
            driver_id: "D1".to_owned(),
            state: RideState::Started,
            dropoff: None,
            duration_minutes: 0,
        });

        let tariff = Tariff::default();
        assert_eq!(bill(&store, &tariff, "RIDE-9"), Err(BillingError::UnknownRide));
        assert_eq!(bill(&store, &tariff, "RIDE-1"), Err(BillingError::NotCompleted));
    }
}
