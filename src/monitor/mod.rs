//! Monitor core — pure decision logic, zero I/O.
//!
//! This module contains the business rules for the FridgeProbe system:
//! the rolling temperature window, door debouncing, status resolution,
//! report formatting, and the control-loop service that schedules them.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod debounce;
pub mod history;
pub mod ports;
pub mod report;
pub mod service;
pub mod status;
