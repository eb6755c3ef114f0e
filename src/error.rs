//! Unified error types for the FridgeProbe firmware.
//!
//! Startup is the only fallible phase — the control loop itself never
//! returns errors (sensor faults surface as a resolved status instead).
//! All variants carry a `&'static str` so they stay `Copy` and never
//! allocate.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Boot-time failure. `main()` logs the message and halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed (ADC unit, GPIO config).
    Init(&'static str),
    /// Configuration failed its boot-time sanity check.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(msg) => write!(f, "init: {}", msg),
            Self::Config(msg) => write!(f, "config: {}", msg),
        }
    }
}

// ---------------------------------------------------------------------------
// Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
