//! Sensor drivers.
//!
//! Each driver compiles for both ESP-IDF and host targets. The host
//! variants read injectable statics (`sim_set_*`) so the decision layer
//! and the adapters can be exercised without hardware.

pub mod door;
pub mod temperature;
