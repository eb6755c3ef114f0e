//! Indicator driver, hardware initialisation, and peripheral helpers.

pub mod hw_init;
pub mod led_patterns;
pub mod status_led;
