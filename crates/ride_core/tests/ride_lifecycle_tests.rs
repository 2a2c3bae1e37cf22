mod support;

use ride_core::entities::RideState;
use ride_core::runner::run_script;
use ride_core::spatial::Point;
use ride_core::test_helpers::service_with_fleet;
use support::standard_fleet;

#[test]
fn start_claims_the_nth_closest_driver() {
    let mut service = standard_fleet();
    let lines = run_script(&mut service, "MATCH R1\nSTART_RIDE RIDE-1 R1 2");
    assert_eq!(lines, ["DRIVERS_MATCHED D1 D3", "RIDE_STARTED RIDE-1"]);

    let ride = service.store().ride("RIDE-1").expect("ride");
    assert_eq!(ride.driver_id, "D3");
    assert_eq!(ride.rider_id, "R1");
    assert_eq!(ride.state, RideState::Started);
    assert!(!service.store().driver("D3").expect("driver").available);
}

#[test]
fn reusing_a_ride_id_is_rejected() {
    let mut service = standard_fleet();
    let lines = run_script(
        &mut service,
        "MATCH R1\nSTART_RIDE RIDE-1 R1 1\nSTART_RIDE RIDE-1 R1 2",
    );
    assert_eq!(
        lines,
        ["DRIVERS_MATCHED D1 D3", "RIDE_STARTED RIDE-1", "INVALID_RIDE"]
    );

    // The second driver was not claimed by the rejected start.
    assert!(service.store().driver("D3").expect("driver").available);
}

#[test]
fn out_of_range_selection_is_rejected() {
    let mut service = standard_fleet();
    let lines = run_script(
        &mut service,
        "MATCH R1\nSTART_RIDE RIDE-1 R1 0\nSTART_RIDE RIDE-2 R1 3",
    );
    assert_eq!(
        lines,
        ["DRIVERS_MATCHED D1 D3", "INVALID_RIDE", "INVALID_RIDE"]
    );
}

#[test]
fn start_without_a_prior_match_is_rejected() {
    let mut service = standard_fleet();
    let lines = run_script(&mut service, "START_RIDE RIDE-1 R1 1");
    assert_eq!(lines, ["INVALID_RIDE"]);
    assert!(service.store().ride("RIDE-1").is_none());
}

#[test]
fn a_claimed_driver_cannot_be_claimed_again() {
    // Both riders match the only driver; the second start finds it claimed.
    let mut service = service_with_fleet(
        &[("D1", 1.0, 0.0)],
        &[("R1", 0.0, 0.0), ("R2", 0.5, 0.0)],
    );
    let lines = run_script(
        &mut service,
        "MATCH R1\nMATCH R2\nSTART_RIDE RIDE-1 R1 1\nSTART_RIDE RIDE-2 R2 1",
    );
    assert_eq!(
        lines,
        [
            "DRIVERS_MATCHED D1",
            "DRIVERS_MATCHED D1",
            "RIDE_STARTED RIDE-1",
            "INVALID_RIDE",
        ]
    );
    assert!(service.store().ride("RIDE-2").is_none());
}

#[test]
fn stop_records_dropoff_and_duration() {
    let mut service = standard_fleet();
    let lines = run_script(
        &mut service,
        "MATCH R1\nSTART_RIDE RIDE-1 R1 1\nSTOP_RIDE RIDE-1 4 5 32",
    );
    assert_eq!(
        lines,
        ["DRIVERS_MATCHED D1 D3", "RIDE_STARTED RIDE-1", "RIDE_STOPPED RIDE-1"]
    );

    let ride = service.store().ride("RIDE-1").expect("ride");
    assert_eq!(ride.state, RideState::Completed);
    assert_eq!(ride.dropoff, Some(Point::new(4.0, 5.0)));
    assert_eq!(ride.duration_minutes, 32);
}

#[test]
fn stop_before_start_is_rejected() {
    let mut service = standard_fleet();
    let lines = run_script(&mut service, "STOP_RIDE RIDE-1 4 5 32");
    assert_eq!(lines, ["INVALID_RIDE"]);
}

#[test]
fn double_stop_is_rejected_and_keeps_the_first_record() {
    let mut service = standard_fleet();
    let lines = run_script(
        &mut service,
        "MATCH R1\nSTART_RIDE RIDE-1 R1 1\nSTOP_RIDE RIDE-1 4 5 32\nSTOP_RIDE RIDE-1 9 9 99",
    );
    assert_eq!(lines.last().map(String::as_str), Some("INVALID_RIDE"));

    let ride = service.store().ride("RIDE-1").expect("ride");
    assert_eq!(ride.dropoff, Some(Point::new(4.0, 5.0)));
    assert_eq!(ride.duration_minutes, 32);
}

#[test]
fn availability_never_returns_once_claimed() {
    let mut service = standard_fleet();
    run_script(
        &mut service,
        "MATCH R1\nSTART_RIDE RIDE-1 R1 1\nSTOP_RIDE RIDE-1 4 5 10\nBILL RIDE-1",
    );

    // Even after the ride completed and billed, the driver stays claimed.
    assert!(!service.store().driver("D1").expect("driver").available);
    let lines = run_script(&mut service, "MATCH R1");
    assert_eq!(lines, ["DRIVERS_MATCHED D3"]);
}
