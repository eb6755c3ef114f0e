//! Port traits — the hexagonal boundary between decision logic and I/O.
//!
//! Adapters implement these traits; [`MonitorService`](super::service::MonitorService)
//! consumes them through generics, so the decision layer never names a
//! peripheral and runs unchanged against test mocks.

// ── Inbound: sensors ──────────────────────────────────────────

/// Read-side port: instantaneous sensor access.
pub trait SensorPort {
    /// Latest temperature in °C. There is no separate error channel —
    /// a faulted sensor produces an out-of-range value and the status
    /// resolver reports it as `ERROR`.
    fn read_temperature(&mut self) -> f32;

    /// Un-debounced door pin level. `true` = open.
    fn door_raw(&mut self) -> bool;
}

// ── Outbound: indicator ───────────────────────────────────────

/// Write-side port: the status indicator LED.
pub trait IndicatorPort {
    /// Drive the indicator output. Fire-and-forget and idempotent —
    /// the service re-asserts the level every tick.
    fn set_level(&mut self, on: bool);
}

// ── Outbound: telemetry ───────────────────────────────────────

/// Telemetry output port.
pub trait ReportSink {
    /// Emit one report line. `line` carries no terminator; the sink
    /// appends whatever the transport needs.
    fn emit_line(&mut self, line: &str);
}
