//! Hardware adapter — bridges real peripherals to the port traits.
//!
//! Owns the sensor and LED drivers and exposes them through
//! [`SensorPort`] and [`IndicatorPort`]. This is the only module that
//! touches hardware on behalf of the monitor core; on non-espidf targets
//! the underlying drivers read their cfg-gated simulation statics, so
//! the adapter itself compiles unchanged everywhere.

use crate::drivers::status_led::StatusLed;
use crate::monitor::ports::{IndicatorPort, SensorPort};
use crate::sensors::door::DoorSensor;
use crate::sensors::temperature::TemperatureSensor;

/// Concrete adapter combining all board peripherals behind port traits.
pub struct HardwareAdapter {
    temperature: TemperatureSensor,
    door: DoorSensor,
    led: StatusLed,
}

impl HardwareAdapter {
    /// Pass in pre-built drivers (constructed in `main()` where
    /// peripheral ownership is established).
    pub fn new(temperature: TemperatureSensor, door: DoorSensor, led: StatusLed) -> Self {
        Self { temperature, door, led }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_temperature(&mut self) -> f32 {
        self.temperature.read()
    }

    fn door_raw(&mut self) -> bool {
        self.door.read_raw()
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl IndicatorPort for HardwareAdapter {
    fn set_level(&mut self, on: bool) {
        self.led.set(on);
    }
}
