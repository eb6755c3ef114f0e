//! Status LED driver.
//!
//! One push-pull GPIO, active high. The pattern engine decides *when*
//! the LED is on; this driver only carries the level to the pin.
//!
//! On ESP-IDF the level goes out through the `hw_init` GPIO helpers; on
//! host builds those helpers are no-ops and the driver just tracks state
//! for inspection.

use crate::drivers::hw_init;
use crate::pins;

/// Thin stateful wrapper over the status LED pin.
#[derive(Debug)]
pub struct StatusLed {
    on: bool,
}

impl StatusLed {
    /// LED starts dark; the first pattern update lights it.
    pub fn new() -> Self {
        Self { on: false }
    }

    /// Drive the pin. Idempotent — called every control-loop tick.
    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(pins::STATUS_LED_GPIO, on);
        self.on = on;
    }

    /// Last level driven.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
