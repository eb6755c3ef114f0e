//! FridgeProbe Firmware — Main Entry Point
//!
//! Hexagonal layout: one polled control loop over port-trait adapters.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                   │
//! │                                                           │
//! │   HardwareAdapter          SerialReportSink   Monotonic   │
//! │   (Sensor + Indicator)     (ReportSink)       Clock       │
//! │                                                           │
//! │   ─────────────── Port Trait Boundary ───────────────     │
//! │                                                           │
//! │   ┌───────────────────────────────────────────────┐       │
//! │   │          MonitorService (pure logic)          │       │
//! │   │  window · debounce · resolver · LED patterns  │       │
//! │   └───────────────────────────────────────────────┘       │
//! └───────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
pub mod error;
mod pins;

pub mod adapters;
pub mod drivers;
pub mod monitor;
pub mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::serial_sink::SerialReportSink;
use adapters::time::MonotonicClock;
use config::MonitorConfig;
use drivers::status_led::StatusLed;
use monitor::history::HISTORY_CAPACITY;
use monitor::service::MonitorService;
use sensors::door::DoorSensor;
use sensors::temperature::TemperatureSensor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  FridgeProbe v{:<23}║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Configuration (build-time defaults) ────────────────
    let config = MonitorConfig::default();
    if let Err(e) = config.validate() {
        log::error!("{} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    info!(
        "config: sample={}ms report={}ms window={} warm>{:.1}C valid=[{:.1}, {:.1}]C",
        config.sample_interval_ms,
        config.telemetry_interval_ms,
        HISTORY_CAPACITY,
        config.warm_threshold_c,
        config.temp_valid_min_c,
        config.temp_valid_max_c,
    );
    info!(
        "pins: tmp36=GPIO{} door=GPIO{} led=GPIO{}  debounce: {}x{}ms",
        pins::TEMP_ADC_GPIO,
        pins::DOOR_SENSOR_GPIO,
        pins::STATUS_LED_GPIO,
        config.debounce_samples,
        config.debounce_interval_ms,
    );

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        TemperatureSensor::new(pins::TEMP_ADC_GPIO),
        DoorSensor::new(pins::DOOR_SENSOR_GPIO),
        StatusLed::new(),
    );
    let mut report = SerialReportSink::new();
    let clock = MonotonicClock::new();

    // ── 5. Construct the monitor service ──────────────────────
    let loop_tick = std::time::Duration::from_millis(u64::from(config.loop_tick_ms));
    let mut monitor = MonitorService::new(config);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    loop {
        let now_ms = clock.uptime_ms();
        monitor.tick(now_ms, &mut hw, &mut report);

        // Cooperative pause: sets the indicator timing resolution and
        // yields the CPU to the IDF scheduler between iterations.
        std::thread::sleep(loop_tick);
    }
}
