use crate::spatial::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: String,
    pub position: Point,
    /// Eligibility for matching. One-way: cleared when a ride claims the
    /// driver, never restored.
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub id: String,
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideState {
    Started,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub id: String,
    pub rider_id: String,
    pub driver_id: String,
    pub state: RideState,
    /// Recorded when the ride stops; `None` while in progress.
    pub dropoff: Option<Point>,
    /// Elapsed trip time in minutes, recorded when the ride stops.
    pub duration_minutes: u64,
}
