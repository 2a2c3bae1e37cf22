//! Line runner: drives the service from a line source and surfaces one
//! response line per visible command, in input order.

use std::io::{self, BufRead, Write};

use crate::command::Command;
use crate::service::RideService;

/// Process one raw input line. Blank lines and silent commands yield `None`.
pub fn process_line(service: &mut RideService, line: &str) -> Option<String> {
    let command = Command::parse(line)?;
    service.execute(command).map(|response| response.to_string())
}

/// Drive the service with every line from `input`, writing each visible
/// command's response line to `output`.
pub fn run<R, W>(service: &mut RideService, input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if let Some(response) = process_line(service, &line) {
            writeln!(output, "{}", response)?;
        }
    }
    Ok(())
}

/// Run a multi-line script and collect the response lines. Convenience for
/// tests and examples.
pub fn run_script(service: &mut RideService, script: &str) -> Vec<String> {
    script
        .lines()
        .filter_map(|line| process_line(service, line))
        .collect()
}
