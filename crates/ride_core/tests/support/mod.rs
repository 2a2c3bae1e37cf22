//! Shared fixtures for integration tests.

use ride_core::service::RideService;
use ride_core::test_helpers::service_with_fleet;

/// Three drivers around the origin plus one rider at it.
///
/// D1 at (1,1) and D3 at (2,2) are matchable from the origin; D2 at (4,5)
/// sits outside the default radius.
pub fn standard_fleet() -> RideService {
    service_with_fleet(
        &[("D1", 1.0, 1.0), ("D2", 4.0, 5.0), ("D3", 2.0, 2.0)],
        &[("R1", 0.0, 0.0)],
    )
}
