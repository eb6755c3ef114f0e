//! FridgeProbe firmware library.
//!
//! Exposes the monitor core and its adapters for integration testing and
//! host-side simulation. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` inside the individual modules, so the
//! crate builds for both the flash target and the host.

#![deny(unused_must_use)]

pub mod config;
pub mod error;
pub mod monitor;

pub mod adapters;
pub mod drivers;
pub mod pins;
pub mod sensors;
