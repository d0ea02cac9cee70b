//! Stdout reporter using std::io.

use std::io::{self, Write};

use zookeep_core::{application::ports::Reporter, error::ZookeepResult};

/// Production reporter: one line per report, straight to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a new console reporter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, line: &str) -> ZookeepResult<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}").map_err(map_io_error)
    }
}

fn map_io_error(e: io::Error) -> zookeep_core::error::ZookeepError {
    use zookeep_core::application::ApplicationError;

    ApplicationError::ReportFailed {
        reason: format!("Failed to write to stdout: {}", e),
    }
    .into()
}
