//! Command dispatch: executes parsed commands against the store and yields
//! typed responses that render to the exact wire vocabulary.

use std::fmt;

use crate::billing::{bill, BillStatement, BillingError, Tariff};
use crate::command::Command;
use crate::lifecycle::{start_ride, stop_ride};
use crate::matching::{MatchConfig, MatchingAlgorithm, NearestWithinRadius};
use crate::spatial::Point;
use crate::store::EntityStore;
use crate::telemetry::ServiceTelemetry;

/// Outcome of one visible command. `Display` renders the wire line.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    DriversMatched(Vec<String>),
    NoDriversAvailable,
    RiderNotFound(String),
    RideStarted(String),
    RideStopped(String),
    Billed(BillStatement),
    InvalidRide,
    RideNotCompleted,
    UnknownCommand(String),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::DriversMatched(ids) => write!(f, "DRIVERS_MATCHED {}", ids.join(" ")),
            Response::NoDriversAvailable => write!(f, "NO_DRIVERS_AVAILABLE"),
            Response::RiderNotFound(id) => write!(f, "Rider with ID does not exist: {}", id),
            Response::RideStarted(id) => write!(f, "RIDE_STARTED {}", id),
            Response::RideStopped(id) => write!(f, "RIDE_STOPPED {}", id),
            Response::Billed(statement) => write!(
                f,
                "BILL {} {} {:.2}",
                statement.ride_id, statement.driver_id, statement.amount
            ),
            Response::InvalidRide => write!(f, "INVALID_RIDE"),
            Response::RideNotCompleted => write!(f, "RIDE_NOT_COMPLETED"),
            Response::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
        }
    }
}

/// Owns the entity store, the matching policy, and the tariff, and executes
/// commands one at a time.
///
/// Domain errors are reported through [`Response`], never panics; the
/// service is always ready for the next command.
pub struct RideService {
    store: EntityStore,
    matcher: Box<dyn MatchingAlgorithm>,
    match_config: MatchConfig,
    tariff: Tariff,
    telemetry: ServiceTelemetry,
}

impl Default for RideService {
    fn default() -> Self {
        Self::new()
    }
}

impl RideService {
    /// Service with the standard tariff and distance-ordered matching.
    pub fn new() -> Self {
        Self::with_parts(
            Box::new(NearestWithinRadius),
            MatchConfig::default(),
            Tariff::default(),
        )
    }

    /// Service with a custom tariff (e.g. loaded from a config file).
    pub fn with_tariff(tariff: Tariff) -> Self {
        Self::with_parts(Box::new(NearestWithinRadius), MatchConfig::default(), tariff)
    }

    /// Fully custom assembly; used by tests and alternative front ends.
    pub fn with_parts(
        matcher: Box<dyn MatchingAlgorithm>,
        match_config: MatchConfig,
        tariff: Tariff,
    ) -> Self {
        Self {
            store: EntityStore::new(),
            matcher,
            match_config,
            tariff,
            telemetry: ServiceTelemetry::default(),
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn telemetry(&self) -> &ServiceTelemetry {
        &self.telemetry
    }

    /// Execute one command. Add commands mutate silently (`None`); every
    /// other command yields exactly one response.
    pub fn execute(&mut self, command: Command) -> Option<Response> {
        match command {
            Command::AddDriver { id, position } => {
                self.store.add_driver(&id, position);
                self.telemetry.drivers_added += 1;
                None
            }
            Command::AddRider { id, position } => {
                self.store.add_rider(&id, position);
                self.telemetry.riders_added += 1;
                None
            }
            Command::Match { rider_id } => Some(self.match_rider(&rider_id)),
            Command::StartRide {
                ride_id,
                rider_id,
                n,
            } => Some(self.start(&ride_id, &rider_id, n)),
            Command::StopRide {
                ride_id,
                dropoff,
                duration_minutes,
            } => Some(self.stop(&ride_id, dropoff, duration_minutes)),
            Command::Bill { ride_id } => Some(self.bill(&ride_id)),
            Command::Unknown(name) => {
                self.telemetry.unknown_commands += 1;
                Some(Response::UnknownCommand(name))
            }
        }
    }

    fn match_rider(&mut self, rider_id: &str) -> Response {
        self.telemetry.matches_requested += 1;
        let rider_pos = match self.store.rider(rider_id) {
            Some(rider) => rider.position,
            None => {
                self.telemetry.rejected_commands += 1;
                return Response::RiderNotFound(rider_id.to_owned());
            }
        };

        let ranked = self.matcher.rank(&self.store, rider_pos, &self.match_config);
        let ids: Vec<String> = ranked.into_iter().map(|c| c.driver_id).collect();
        self.store.set_candidates(rider_id, ids.clone());

        if ids.is_empty() {
            Response::NoDriversAvailable
        } else {
            self.telemetry.matches_filled += 1;
            Response::DriversMatched(ids)
        }
    }

    fn start(&mut self, ride_id: &str, rider_id: &str, n: usize) -> Response {
        match start_ride(&mut self.store, ride_id, rider_id, n) {
            Ok(()) => {
                self.telemetry.rides_started += 1;
                Response::RideStarted(ride_id.to_owned())
            }
            Err(_) => {
                self.telemetry.rejected_commands += 1;
                Response::InvalidRide
            }
        }
    }

    fn stop(&mut self, ride_id: &str, dropoff: Point, duration_minutes: u64) -> Response {
        match stop_ride(&mut self.store, ride_id, dropoff, duration_minutes) {
            Ok(()) => {
                self.telemetry.rides_stopped += 1;
                Response::RideStopped(ride_id.to_owned())
            }
            Err(_) => {
                self.telemetry.rejected_commands += 1;
                Response::InvalidRide
            }
        }
    }

    fn bill(&mut self, ride_id: &str) -> Response {
        match bill(&self.store, &self.tariff, ride_id) {
            Ok(statement) => {
                self.telemetry.bills_issued += 1;
                Response::Billed(statement)
            }
            Err(BillingError::UnknownRide) => {
                self.telemetry.rejected_commands += 1;
                Response::InvalidRide
            }
            Err(BillingError::NotCompleted) => {
                self.telemetry.rejected_commands += 1;
                Response::RideNotCompleted
            }
        }
    }
}
