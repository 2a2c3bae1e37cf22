//! Run counters: how many commands of each kind the service processed.

/// Aggregated per-run counters, maintained by the dispatch service.
///
/// Counters never affect command output; they exist so a driver program can
/// report what a run did without re-parsing the transcript.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTelemetry {
    pub drivers_added: u64,
    pub riders_added: u64,
    /// MATCH commands processed, including ones that found no driver.
    pub matches_requested: u64,
    /// MATCH commands that produced a non-empty candidate list.
    pub matches_filled: u64,
    pub rides_started: u64,
    pub rides_stopped: u64,
    pub bills_issued: u64,
    /// Commands rejected by a domain check (unknown rider, invalid ride,
    /// uncompleted ride).
    pub rejected_commands: u64,
    /// Lines with an unrecognized command name.
    pub unknown_commands: u64,
}

impl ServiceTelemetry {
    /// Commands that produced any rejection line.
    pub fn total_rejections(&self) -> u64 {
        self.rejected_commands + self.unknown_commands
    }
}
