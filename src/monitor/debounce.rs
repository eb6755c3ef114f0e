//! Non-blocking door-state debouncer.
//!
//! A reed switch bounces for a few milliseconds on every transition, and
//! the door magnet can chatter near its engagement point. The debouncer
//! accepts a new state only after a run of consecutive raw samples agree
//! on it. It takes one sample per configured interval and never suspends
//! the caller; the control loop feeds it every tick and the sampling
//! action reads the confirmed state when it needs it.
//!
//! Confirmation latency is `debounce_samples × debounce_interval_ms`
//! (~50 ms with defaults), independent of the 2 s sampling cadence.

use crate::config::MonitorConfig;

/// Consecutive-agreement debouncer for the door reed switch.
#[derive(Debug, Clone)]
pub struct Debouncer {
    confirmed_open: bool,
    disagree_count: u8,
    required_samples: u8,
    interval_ms: u32,
    last_sample_ms: Option<u64>,
}

impl Debouncer {
    /// Starts with the door confirmed closed — the quiescent state for
    /// the pull-up wiring (the switch only opens when the magnet leaves).
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            confirmed_open: false,
            disagree_count: 0,
            required_samples: config.debounce_samples,
            interval_ms: config.debounce_interval_ms,
            last_sample_ms: None,
        }
    }

    /// Feed the current raw pin level. Call every control-loop tick;
    /// calls closer together than the sample interval are ignored, so the
    /// loop rate does not change the debounce timing.
    pub fn update(&mut self, raw_open: bool, now_ms: u64) {
        if let Some(last) = self.last_sample_ms {
            if now_ms - last < u64::from(self.interval_ms) {
                return;
            }
        }
        self.last_sample_ms = Some(now_ms);

        if raw_open == self.confirmed_open {
            // Any agreeing sample restarts the confirmation run.
            self.disagree_count = 0;
            return;
        }

        self.disagree_count += 1;
        if self.disagree_count >= self.required_samples {
            self.confirmed_open = raw_open;
            self.disagree_count = 0;
        }
    }

    /// Last accepted door state. `true` = open.
    pub fn confirmed_open(&self) -> bool {
        self.confirmed_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_debouncer() -> Debouncer {
        // Defaults: 5 samples, 10 ms apart.
        Debouncer::new(&MonitorConfig::default())
    }

    #[test]
    fn starts_confirmed_closed() {
        let d = make_debouncer();
        assert!(!d.confirmed_open());
    }

    #[test]
    fn short_run_does_not_flip() {
        let mut d = make_debouncer();
        for i in 0..4 {
            d.update(true, i * 10);
        }
        assert!(!d.confirmed_open(), "4 of 5 samples must not confirm");
    }

    #[test]
    fn full_run_flips_exactly_once() {
        let mut d = make_debouncer();
        for i in 0..5 {
            d.update(true, i * 10);
        }
        assert!(d.confirmed_open(), "5th agreeing sample confirms open");

        // Further open samples agree with the new state and change nothing.
        for i in 5..20 {
            d.update(true, i * 10);
        }
        assert!(d.confirmed_open());
    }

    #[test]
    fn agreeing_sample_resets_the_run() {
        let mut d = make_debouncer();
        d.update(true, 0);
        d.update(true, 10);
        d.update(true, 20);
        d.update(true, 30);
        d.update(false, 40); // bounce back — run restarts
        assert!(!d.confirmed_open());

        // A fresh full run is required after the reset.
        for i in 5..9 {
            d.update(true, i * 10);
        }
        assert!(!d.confirmed_open());
        d.update(true, 90);
        assert!(d.confirmed_open());
    }

    #[test]
    fn samples_within_interval_are_ignored() {
        let mut d = make_debouncer();
        // 20 calls only 2 ms apart: fewer than 5 spaced samples accepted.
        for i in 0..20u64 {
            d.update(true, i * 2);
        }
        assert!(
            !d.confirmed_open(),
            "2 ms ticks must not accelerate confirmation"
        );
        // Continue at proper spacing until the run completes.
        for i in 5..10u64 {
            d.update(true, i * 10);
        }
        assert!(d.confirmed_open());
    }

    #[test]
    fn closing_needs_a_full_run_too() {
        let mut d = make_debouncer();
        for i in 0..5 {
            d.update(true, i * 10);
        }
        assert!(d.confirmed_open());

        for i in 5..9 {
            d.update(false, i * 10);
        }
        assert!(d.confirmed_open(), "4 closed samples keep state open");
        d.update(false, 90);
        assert!(!d.confirmed_open());
    }
}
