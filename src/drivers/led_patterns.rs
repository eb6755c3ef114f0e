//! Status LED pattern engine.
//!
//! Converts the resolved status plus elapsed time into an on/off level
//! for the indicator LED. The control loop calls [`update`] every tick
//! and pushes the returned level to the LED driver.
//!
//! ## Patterns
//!
//! | Status     | Pattern                                  |
//! |------------|------------------------------------------|
//! | `Ok`       | Solid on                                 |
//! | `DoorOpen` | Slow square wave (1000 ms half-period)   |
//! | `TooWarm`  | Fast square wave (200 ms half-period)    |
//! | `Error`    | Triple flash, then a long pause          |
//!
//! The error pattern is a six-phase cycle — on, off, on, off, on,
//! long-off — so a glance tells "sensor fault" apart from an ordinary
//! blink. Phases 0–4 last the flash duration, phase 5 the pause.
//!
//! A status change resets phase and timestamp, so the first `update`
//! after a change asserts the new pattern's first level immediately
//! instead of waiting out the old phase.
//!
//! [`update`]: LedPatternEngine::update

use crate::config::MonitorConfig;
use crate::monitor::status::Status;

/// Phases in one error-pattern cycle (3 flashes = 5 phases, plus pause).
const ERROR_PHASES: u8 = 6;

/// Pattern state machine for the status LED. Stack-allocated, no heap.
#[derive(Debug, Clone)]
pub struct LedPatternEngine {
    slow_blink_ms: u32,
    fast_blink_ms: u32,
    error_flash_ms: u32,
    error_pause_ms: u32,
    status: Status,
    level_on: bool,
    /// `None` = pattern not yet started (boot or fresh status change).
    last_change_ms: Option<u64>,
    /// Position in the error cycle, `0..ERROR_PHASES`. Even = LED on.
    error_phase: u8,
}

impl LedPatternEngine {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            slow_blink_ms: config.slow_blink_ms,
            fast_blink_ms: config.fast_blink_ms,
            error_flash_ms: config.error_flash_ms,
            error_pause_ms: config.error_pause_ms,
            status: Status::Ok,
            level_on: false,
            last_change_ms: None,
            error_phase: 0,
        }
    }

    /// Select the pattern for `status`. A change resets phase and
    /// timestamp so the next [`update`](Self::update) starts the new
    /// pattern at its first level; re-asserting the current status is a
    /// no-op and never disturbs a pattern mid-cycle.
    pub fn set_status(&mut self, status: Status) {
        if status == self.status {
            return;
        }
        self.status = status;
        self.error_phase = 0;
        self.last_change_ms = None;
    }

    /// Advance the pattern and return the level to drive. Called every
    /// control-loop tick; never blocks.
    pub fn update(&mut self, now_ms: u64) -> bool {
        match self.status {
            Status::Ok => {
                // Solid on, no timer involved.
                self.level_on = true;
            }
            Status::DoorOpen => self.square_wave(now_ms, self.slow_blink_ms),
            Status::TooWarm => self.square_wave(now_ms, self.fast_blink_ms),
            Status::Error => self.error_cycle(now_ms),
        }
        self.level_on
    }

    fn square_wave(&mut self, now_ms: u64, half_period_ms: u32) {
        match self.last_change_ms {
            None => {
                // Fresh pattern: assert the high half immediately.
                self.level_on = true;
                self.last_change_ms = Some(now_ms);
            }
            Some(last) if now_ms - last >= u64::from(half_period_ms) => {
                self.level_on = !self.level_on;
                self.last_change_ms = Some(now_ms);
            }
            Some(_) => {}
        }
    }

    /// Phases 0, 2, 4 are flashes; 1 and 3 are short gaps; 5 is the
    /// inter-burst pause.
    fn error_cycle(&mut self, now_ms: u64) {
        match self.last_change_ms {
            None => {
                self.error_phase = 0;
                self.level_on = true;
                self.last_change_ms = Some(now_ms);
            }
            Some(last) => {
                let phase_ms = if self.error_phase == ERROR_PHASES - 1 {
                    self.error_pause_ms
                } else {
                    self.error_flash_ms
                };
                if now_ms - last >= u64::from(phase_ms) {
                    self.error_phase = (self.error_phase + 1) % ERROR_PHASES;
                    self.level_on = self.error_phase % 2 == 0;
                    self.last_change_ms = Some(now_ms);
                }
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Status the engine is currently displaying.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Current output level.
    pub fn level(&self) -> bool {
        self.level_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_engine() -> LedPatternEngine {
        // Defaults: slow 1000 ms, fast 200 ms, error 100/700 ms.
        LedPatternEngine::new(&MonitorConfig::default())
    }

    #[test]
    fn ok_is_solid_on() {
        let mut engine = make_engine();
        assert!(engine.update(0));
        assert!(engine.update(50_000));
        assert!(engine.update(1_000_000));
    }

    #[test]
    fn door_open_slow_square_wave() {
        let mut engine = make_engine();
        engine.set_status(Status::DoorOpen);
        assert!(engine.update(0), "fresh pattern starts high");
        assert!(engine.update(999), "hold through the half-period");
        assert!(!engine.update(1000), "toggle at the boundary");
        assert!(!engine.update(1999));
        assert!(engine.update(2000));
    }

    #[test]
    fn too_warm_fast_square_wave() {
        let mut engine = make_engine();
        engine.set_status(Status::TooWarm);
        assert!(engine.update(0));
        assert!(engine.update(199));
        assert!(!engine.update(200));
        assert!(engine.update(400));
        assert!(!engine.update(600));
    }

    #[test]
    fn error_cycle_walks_six_phases() {
        let mut engine = make_engine();
        engine.set_status(Status::Error);

        // (time, expected phase, expected level)
        let script: [(u64, u8, bool); 7] = [
            (0, 0, true),     // first flash
            (100, 1, false),  // gap
            (200, 2, true),   // second flash
            (300, 3, false),  // gap
            (400, 4, true),   // third flash
            (500, 5, false),  // long pause begins
            (1200, 0, true),  // pause elapsed, cycle restarts
        ];
        for (now, phase, level) in script {
            let got = engine.update(now);
            assert_eq!(engine.error_phase, phase, "phase at t={now}");
            assert_eq!(got, level, "level at t={now}");
        }
    }

    #[test]
    fn error_pause_outlasts_flash_timing() {
        let mut engine = make_engine();
        engine.set_status(Status::Error);
        for now in [0, 100, 200, 300, 400, 500] {
            engine.update(now);
        }
        assert_eq!(engine.error_phase, 5);
        assert!(!engine.update(1199), "pause holds for 700 ms, not 100");
        assert!(engine.update(1200));
        assert_eq!(engine.error_phase, 0);
    }

    #[test]
    fn status_change_asserts_new_pattern_immediately() {
        let mut engine = make_engine();
        engine.set_status(Status::TooWarm);
        assert!(engine.update(0));
        assert!(!engine.update(200), "fast wave in its low half");

        // Mid-low-phase change: next update must go high at once rather
        // than waiting out the fast-wave half-period.
        engine.set_status(Status::DoorOpen);
        assert!(engine.update(250));
    }

    #[test]
    fn reasserting_status_does_not_reset_phase() {
        let mut engine = make_engine();
        engine.set_status(Status::DoorOpen);
        assert!(engine.update(0));
        engine.set_status(Status::DoorOpen); // no-op
        assert!(engine.update(500), "timestamp survives the re-assert");
        assert!(!engine.update(1000), "toggle still due at the original boundary");
    }

    #[test]
    fn engine_starts_dark_until_first_update() {
        let engine = make_engine();
        assert!(!engine.level());
        assert_eq!(engine.status(), Status::Ok);
    }
}
