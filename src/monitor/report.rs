//! Telemetry line formatting.
//!
//! One line per report, fixed layout:
//!
//! ```text
//! t=4.3C, avg=4.1C, door=closed, status=OK
//! ```
//!
//! Field order, separators, and the one-decimal float formatting are a
//! compatibility contract with the fleet's log scraper — change nothing
//! here without coordinating a parser update.

use core::fmt::Write;

use super::status::Status;

/// Upper bound on a rendered line. Generous on purpose: even degenerate
/// float values (`f32::MAX` renders ~41 characters at one decimal) fit
/// without truncation.
pub const REPORT_LINE_CAP: usize = 128;

/// Render one telemetry line. No trailing newline — the sink appends its
/// own line terminator.
pub fn format_report_line(
    reading_c: f32,
    average_c: f32,
    door_open: bool,
    status: Status,
) -> heapless::String<REPORT_LINE_CAP> {
    let mut line = heapless::String::new();
    let door = if door_open { "open" } else { "closed" };
    // Capacity is sized so this write cannot fail; if it ever does, a
    // truncated line still beats a panic in the report path.
    let _ = write!(
        line,
        "t={:.1}C, avg={:.1}C, door={}, status={}",
        reading_c, average_c, door, status
    );
    line
}
