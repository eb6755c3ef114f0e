//! Monitor service — the control-loop core.
//!
//! [`MonitorService`] owns the rolling window, the door debouncer, and
//! the indicator pattern engine, and schedules the periodic actions:
//!
//! ```text
//!    SensorPort ──▶ ┌─────────────────────────────┐ ──▶ ReportSink
//!                   │       MonitorService        │
//! IndicatorPort ◀── │ window · debounce · resolve │
//!                   └─────────────────────────────┘
//! ```
//!
//! `tick()` runs every loop iteration with the current monotonic time.
//! The debouncer and the indicator advance on every tick; sampling and
//! reporting fire on independent intervals, each immediately on the
//! first tick so the probe is never silent during startup.

use log::info;

use crate::config::MonitorConfig;
use crate::drivers::led_patterns::LedPatternEngine;

use super::debounce::Debouncer;
use super::history::TempHistory;
use super::ports::{IndicatorPort, ReportSink, SensorPort};
use super::report::format_report_line;
use super::status::{Status, StatusInput, resolve};

/// Result of the most recent sampling action.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorSnapshot {
    /// Latest instantaneous reading (°C).
    pub reading_c: f32,
    /// Rolling average at the last sample (°C).
    pub average_c: f32,
    /// Debounced door state at the last sample.
    pub door_open: bool,
    /// Resolved status.
    pub status: Status,
}

/// Interval check. `None` means the action has never fired and is due
/// immediately — the first loop tick samples and reports at once.
fn due(last: Option<u64>, interval_ms: u32, now_ms: u64) -> bool {
    match last {
        None => true,
        Some(last_ms) => now_ms - last_ms >= u64::from(interval_ms),
    }
}

/// The control-loop core. Owns all decision-layer state.
pub struct MonitorService {
    config: MonitorConfig,
    history: TempHistory,
    debounce: Debouncer,
    pattern: LedPatternEngine,
    snapshot: MonitorSnapshot,
    last_sample_ms: Option<u64>,
    last_report_ms: Option<u64>,
    tick_count: u64,
}

impl MonitorService {
    pub fn new(config: MonitorConfig) -> Self {
        let debounce = Debouncer::new(&config);
        let pattern = LedPatternEngine::new(&config);
        Self {
            config,
            history: TempHistory::new(),
            debounce,
            pattern,
            snapshot: MonitorSnapshot::default(),
            last_sample_ms: None,
            last_report_ms: None,
            tick_count: 0,
        }
    }

    /// Run one control-loop iteration.
    ///
    /// `hw` satisfies both [`SensorPort`] and [`IndicatorPort`] — one
    /// adapter owns the physical board, and the combined bound avoids a
    /// double mutable borrow at the call site.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl SensorPort + IndicatorPort),
        report: &mut impl ReportSink,
    ) {
        self.tick_count += 1;

        // 1. Debounce at tick rate, so door confirmation latency is set
        //    by the debounce interval rather than the sampling period.
        let raw_open = hw.door_raw();
        self.debounce.update(raw_open, now_ms);

        // 2. Sampling action.
        if due(self.last_sample_ms, self.config.sample_interval_ms, now_ms) {
            self.last_sample_ms = Some(now_ms);
            self.sample(hw);
        }

        // 3. Reporting action — reads the snapshot, never the sensors.
        if due(self.last_report_ms, self.config.telemetry_interval_ms, now_ms) {
            self.last_report_ms = Some(now_ms);
            let line = format_report_line(
                self.snapshot.reading_c,
                self.snapshot.average_c,
                self.snapshot.door_open,
                self.snapshot.status,
            );
            report.emit_line(&line);
        }

        // 4. Advance the indicator pattern and re-assert the LED level.
        let level = self.pattern.update(now_ms);
        hw.set_level(level);
    }

    /// Sampling action: read, smooth, resolve, hand the result to the
    /// indicator machine.
    ///
    /// The reading is pushed into the window before validity is judged —
    /// a faulted sensor poisons the average until the window flushes,
    /// which deliberately keeps TOO_WARM asserted while the cabinet
    /// recovers from whatever upset the sensor.
    fn sample(&mut self, hw: &mut impl SensorPort) {
        let reading_c = hw.read_temperature();
        self.history.push(reading_c);

        let average_c = self.history.average();
        let door_open = self.debounce.confirmed_open();

        let status = resolve(&StatusInput {
            reading_valid: self.config.reading_valid(reading_c),
            door_open,
            average_c,
            warm_threshold_c: self.config.warm_threshold_c,
        });

        if status != self.snapshot.status {
            info!("status: {} -> {}", self.snapshot.status, status);
        }
        self.pattern.set_status(status);

        self.snapshot = MonitorSnapshot {
            reading_c,
            average_c,
            door_open,
            status,
        };
    }

    // ── Queries ───────────────────────────────────────────────

    /// Result of the most recent sampling action.
    pub fn snapshot(&self) -> MonitorSnapshot {
        self.snapshot
    }

    /// Currently resolved status.
    pub fn status(&self) -> Status {
        self.snapshot.status
    }

    /// Samples currently held in the averaging window. Saturates at the
    /// window capacity once eviction starts.
    pub fn sample_count(&self) -> usize {
        self.history.count()
    }

    /// Control-loop iterations since boot.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
