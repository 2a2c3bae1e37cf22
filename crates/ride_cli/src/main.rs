use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::Parser;
use ride_core::billing::Tariff;
use ride_core::runner;
use ride_core::service::RideService;
use ride_core::telemetry::ServiceTelemetry;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "ride_cli",
    about = "Command-driven ride-matching and billing simulator",
    long_about = "Reads a line-oriented command script (ADD_DRIVER, ADD_RIDER, MATCH,\n\
                  START_RIDE, STOP_RIDE, BILL) and prints one response line per\n\
                  visible command to stdout."
)]
struct Cli {
    /// Path to the command script
    input: PathBuf,
    /// Tariff override as a JSON file; omitted fields keep their defaults
    #[arg(long)]
    tariff: Option<PathBuf>,
    /// Print run counters to stderr after processing
    #[arg(long)]
    summary: bool,
}

// ── helpers ────────────────────────────────────────────────────────

fn load_tariff(path: &Path) -> Result<Tariff, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("Error reading the tariff file: {}", err))?;
    serde_json::from_str(&raw).map_err(|err| format!("Error parsing the tariff file: {}", err))
}

fn print_summary(telemetry: &ServiceTelemetry) {
    eprintln!("=== Run Summary ===");
    eprintln!("Drivers added:      {}", telemetry.drivers_added);
    eprintln!("Riders added:       {}", telemetry.riders_added);
    eprintln!(
        "Matches (filled):   {} ({})",
        telemetry.matches_requested, telemetry.matches_filled
    );
    eprintln!("Rides started:      {}", telemetry.rides_started);
    eprintln!("Rides stopped:      {}", telemetry.rides_stopped);
    eprintln!("Bills issued:       {}", telemetry.bills_issued);
    eprintln!("Rejected commands:  {}", telemetry.total_rejections());
}

fn main() {
    let cli = Cli::parse();

    let tariff = match cli.tariff.as_deref().map(load_tariff) {
        Some(Ok(tariff)) => tariff,
        Some(Err(message)) => {
            eprintln!("{}", message);
            exit(1);
        }
        None => Tariff::default(),
    };

    let file = match File::open(&cli.input) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Error reading the file: {}", err);
            exit(1);
        }
    };

    let mut service = RideService::with_tariff(tariff);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = runner::run(&mut service, BufReader::new(file), &mut out) {
        eprintln!("Error scanning the file: {}", err);
        exit(1);
    }
    if let Err(err) = out.flush() {
        eprintln!("Error writing output: {}", err);
        exit(1);
    }

    if cli.summary {
        print_summary(service.telemetry());
    }
}
