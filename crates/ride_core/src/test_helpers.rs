//! Test helpers for common service setup.
//!
//! Shared by integration tests, benches, and examples to avoid repeating
//! fleet construction.

use crate::command::Command;
use crate::service::RideService;
use crate::spatial::Point;

/// Service pre-loaded with the given drivers and riders, all drivers
/// available.
pub fn service_with_fleet(
    drivers: &[(&str, f64, f64)],
    riders: &[(&str, f64, f64)],
) -> RideService {
    let mut service = RideService::new();
    for &(id, x, y) in drivers {
        service.execute(Command::AddDriver {
            id: id.to_owned(),
            position: Point::new(x, y),
        });
    }
    for &(id, x, y) in riders {
        service.execute(Command::AddRider {
            id: id.to_owned(),
            position: Point::new(x, y),
        });
    }
    service
}
