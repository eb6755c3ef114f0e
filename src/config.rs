//! System configuration parameters.
//!
//! All tunable timing and threshold values for the monitor in one place.
//! The deployed probe runs the build-time defaults below; the struct is
//! serde-capable so a future provisioning channel can ship overrides
//! without touching the decision layer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core monitor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Cadence ---
    /// Temperature sampling interval (ms).
    pub sample_interval_ms: u32,
    /// Telemetry report interval (ms).
    pub telemetry_interval_ms: u32,
    /// Cooperative sleep between control-loop iterations (ms).
    pub loop_tick_ms: u32,

    // --- Temperature thresholds ---
    /// Rolling average strictly above this reports TOO_WARM (°C).
    pub warm_threshold_c: f32,
    /// Readings below this indicate a sensor fault (°C).
    pub temp_valid_min_c: f32,
    /// Readings above this indicate a sensor fault (°C).
    pub temp_valid_max_c: f32,

    // --- Door debounce ---
    /// Consecutive agreeing samples required to accept a new door state.
    pub debounce_samples: u8,
    /// Spacing between debounce samples (ms).
    pub debounce_interval_ms: u32,

    // --- Indicator patterns ---
    /// DOOR_OPEN square-wave half-period (ms).
    pub slow_blink_ms: u32,
    /// TOO_WARM square-wave half-period (ms).
    pub fast_blink_ms: u32,
    /// ERROR pattern flash-phase duration (ms).
    pub error_flash_ms: u32,
    /// ERROR pattern pause-phase duration (ms).
    pub error_pause_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            // Cadence
            sample_interval_ms: 2000,   // 2 s between temperature samples
            telemetry_interval_ms: 5000, // 5 s between report lines
            loop_tick_ms: 10,           // bounds indicator timing resolution

            // Thresholds: 7 °C is the food-safety ceiling for the cabinet;
            // the valid span is the TMP36 datasheet range.
            warm_threshold_c: 7.0,
            temp_valid_min_c: -40.0,
            temp_valid_max_c: 125.0,

            // Debounce: 5 samples × 10 ms ≈ 50 ms to confirm a door edge
            debounce_samples: 5,
            debounce_interval_ms: 10,

            // Indicator
            slow_blink_ms: 1000,
            fast_blink_ms: 200,
            error_flash_ms: 100,
            error_pause_ms: 700,
        }
    }
}

impl MonitorConfig {
    /// Whether `celsius` is inside the sensor's physically plausible range.
    /// Out-of-range readings are treated as a hardware fault by the
    /// status resolver.
    pub fn reading_valid(&self, celsius: f32) -> bool {
        celsius >= self.temp_valid_min_c && celsius <= self.temp_valid_max_c
    }

    /// Boot-time sanity check. A failure here is a build defect, not a
    /// runtime condition — `main()` logs the message and halts.
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            return Err(Error::Config("sample_interval_ms must be > 0"));
        }
        if self.telemetry_interval_ms == 0 {
            return Err(Error::Config("telemetry_interval_ms must be > 0"));
        }
        if self.loop_tick_ms == 0 {
            return Err(Error::Config("loop_tick_ms must be > 0"));
        }
        if self.temp_valid_min_c >= self.temp_valid_max_c {
            return Err(Error::Config("temp valid range is empty"));
        }
        if !self.reading_valid(self.warm_threshold_c) {
            return Err(Error::Config("warm_threshold_c outside valid range"));
        }
        if self.debounce_samples == 0 {
            return Err(Error::Config("debounce_samples must be > 0"));
        }
        if self.debounce_interval_ms == 0 {
            return Err(Error::Config("debounce_interval_ms must be > 0"));
        }
        if self.slow_blink_ms == 0 || self.fast_blink_ms == 0 {
            return Err(Error::Config("blink half-periods must be > 0"));
        }
        if self.error_flash_ms == 0 || self.error_pause_ms == 0 {
            return Err(Error::Config("error pattern phases must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = MonitorConfig::default();
        assert_eq!(c.sample_interval_ms, 2000);
        assert_eq!(c.telemetry_interval_ms, 5000);
        assert!((c.warm_threshold_c - 7.0).abs() < f32::EPSILON);
        assert_eq!(c.debounce_samples, 5);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn timing_ratios_make_sense() {
        let c = MonitorConfig::default();
        assert!(
            c.loop_tick_ms < c.sample_interval_ms,
            "loop must tick several times per sampling interval"
        );
        assert!(
            c.sample_interval_ms <= c.telemetry_interval_ms,
            "reports summarise at least one fresh sample"
        );
        assert!(
            u32::from(c.debounce_samples) * c.debounce_interval_ms < c.sample_interval_ms,
            "door confirmation must fit within one sampling interval"
        );
    }

    #[test]
    fn reading_valid_bounds_are_inclusive() {
        let c = MonitorConfig::default();
        assert!(c.reading_valid(-40.0));
        assert!(c.reading_valid(125.0));
        assert!(!c.reading_valid(-40.1));
        assert!(!c.reading_valid(125.1));
    }

    #[test]
    fn validate_rejects_zero_intervals() {
        let c = MonitorConfig { sample_interval_ms: 0, ..MonitorConfig::default() };
        assert!(c.validate().is_err());

        let c = MonitorConfig { debounce_samples: 0, ..MonitorConfig::default() };
        assert!(c.validate().is_err());

        let c = MonitorConfig { error_pause_ms: 0, ..MonitorConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_valid_range() {
        let c = MonitorConfig {
            temp_valid_min_c: 50.0,
            temp_valid_max_c: -50.0,
            ..MonitorConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let c = MonitorConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let back: MonitorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = MonitorConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let back: MonitorConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(back, c);
    }
}
