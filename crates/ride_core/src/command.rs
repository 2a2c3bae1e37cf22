//! Wire command vocabulary and line tokenization.
//!
//! Lines are whitespace-tokenized. Numeric arguments parse permissively: a
//! malformed or missing numeric token reads as zero and flows through the
//! normal domain checks instead of failing the command. Missing ID tokens
//! read as the empty string for the same reason.

use std::str::FromStr;

use crate::spatial::Point;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddDriver { id: String, position: Point },
    AddRider { id: String, position: Point },
    Match { rider_id: String },
    StartRide { ride_id: String, rider_id: String, n: usize },
    StopRide { ride_id: String, dropoff: Point, duration_minutes: u64 },
    Bill { ride_id: String },
    /// Unrecognized command name, preserved for the error line.
    Unknown(String),
}

impl Command {
    /// Parse a raw input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (&name, args) = tokens.split_first()?;

        Some(match name {
            "ADD_DRIVER" => Command::AddDriver {
                id: arg_str(args, 0),
                position: arg_point(args, 1),
            },
            "ADD_RIDER" => Command::AddRider {
                id: arg_str(args, 0),
                position: arg_point(args, 1),
            },
            "MATCH" => Command::Match {
                rider_id: arg_str(args, 0),
            },
            "START_RIDE" => Command::StartRide {
                ride_id: arg_str(args, 0),
                rider_id: arg_str(args, 1),
                n: arg_num(args, 2),
            },
            "STOP_RIDE" => Command::StopRide {
                ride_id: arg_str(args, 0),
                dropoff: arg_point(args, 1),
                duration_minutes: arg_num(args, 3),
            },
            "BILL" => Command::Bill {
                ride_id: arg_str(args, 0),
            },
            other => Command::Unknown(other.to_owned()),
        })
    }
}

fn arg_str(args: &[&str], index: usize) -> String {
    args.get(index).copied().unwrap_or_default().to_owned()
}

/// Permissive numeric parse: malformed or missing tokens read as zero.
fn arg_num<T: FromStr + Default>(args: &[&str], index: usize) -> T {
    args.get(index)
        .and_then(|token| token.parse().ok())
        .unwrap_or_default()
}

fn arg_point(args: &[&str], index: usize) -> Point {
    Point::new(arg_num(args, index), arg_num(args, index + 1))
}
