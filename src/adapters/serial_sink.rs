//! Serial report sink.
//!
//! Implements [`ReportSink`] by printing each telemetry line to the
//! console (UART / USB-CDC on target, stdout on host). Deliberately
//! bypasses the `log` facade: the line layout is a contract with the
//! downstream parser and logger prefixes would break it.

use crate::monitor::ports::ReportSink;

/// Prints every report line to the serial console, newline-terminated.
pub struct SerialReportSink;

impl SerialReportSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for SerialReportSink {
    fn emit_line(&mut self, line: &str) {
        println!("{}", line);
    }
}
