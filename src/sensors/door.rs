//! Reed-switch door sensor.
//!
//! A magnet on the door holds the reed switch closed against a pull-up
//! input: pin LOW = door closed, pin HIGH = door open. The raw level
//! bounces on every swing of the door; debouncing belongs to the
//! decision layer ([`Debouncer`](crate::monitor::debounce::Debouncer)),
//! not to this driver.
//!
//! ## Dual-target design
//!
//! - **ESP-IDF**: reads the GPIO level through the `hw_init` helpers.
//! - **Host/test**: reads a static `AtomicBool` injectable through
//!   [`sim_set_door_open`].

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::AtomicBool;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::pins;

/// Simulated door level for host builds. `false` = closed.
#[cfg(not(target_os = "espidf"))]
static SIM_DOOR_OPEN: AtomicBool = AtomicBool::new(false);

/// Inject a raw door level for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_door_open(open: bool) {
    SIM_DOOR_OPEN.store(open, Ordering::Relaxed);
}

/// Door sensor bound to one input pin.
pub struct DoorSensor {
    _gpio: i32,
}

impl DoorSensor {
    pub fn new(gpio: i32) -> Self {
        Self { _gpio: gpio }
    }

    /// Instantaneous, un-debounced pin level. `true` = open.
    #[cfg(target_os = "espidf")]
    pub fn read_raw(&self) -> bool {
        hw_init::gpio_read(pins::DOOR_SENSOR_GPIO)
    }

    /// Instantaneous, un-debounced pin level. `true` = open.
    #[cfg(not(target_os = "espidf"))]
    pub fn read_raw(&self) -> bool {
        SIM_DOOR_OPEN.load(Ordering::Relaxed)
    }
}
