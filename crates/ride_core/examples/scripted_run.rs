//! Runs a small scripted scenario and prints the response lines.
//!
//! Run with: `cargo run --example scripted_run -p ride_core`

use ride_core::runner::run_script;
use ride_core::service::RideService;

const SCRIPT: &str = "\
ADD_DRIVER D1 1 1
ADD_DRIVER D2 4 5
ADD_DRIVER D3 2 2
ADD_RIDER R1 0 0
MATCH R1
START_RIDE RIDE-101 R1 2
STOP_RIDE RIDE-101 4 5 32
BILL RIDE-101
";

fn main() {
    let mut service = RideService::new();
    for line in run_script(&mut service, SCRIPT) {
        println!("{}", line);
    }

    let telemetry = service.telemetry();
    eprintln!(
        "processed: {} drivers, {} riders, {} rides started, {} bills",
        telemetry.drivers_added,
        telemetry.riders_added,
        telemetry.rides_started,
        telemetry.bills_issued
    );
}
