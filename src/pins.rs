//! GPIO / peripheral pin assignments for the FridgeProbe board (ESP32-S3).
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers. Change a pin here and it propagates
//! everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// TMP36 analog temperature sensor (10 mV/°C, 500 mV offset).
/// GPIO 9 = ADC1 channel 8 on the S3.
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// Reed switch on the cabinet door frame, input with pull-up.
/// LOW = closed (door magnet present), HIGH = open.
pub const DOOR_SENSOR_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Indicator
// ---------------------------------------------------------------------------

/// Status LED, push-pull output, active HIGH.
pub const STATUS_LED_GPIO: i32 = 11;
