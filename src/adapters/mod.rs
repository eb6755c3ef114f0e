//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements      | Connects to            |
//! |---------------|-----------------|------------------------|
//! | `hardware`    | SensorPort      | ESP32 ADC, GPIO        |
//! |               | IndicatorPort   | ESP32 GPIO             |
//! | `serial_sink` | ReportSink      | Serial console (UART)  |
//! | `time`        | —               | ESP32 system timer     |

pub mod hardware;
pub mod serial_sink;
pub mod time;
