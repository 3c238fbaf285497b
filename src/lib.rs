//! GasSentry firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod link_rx;

pub mod error;
mod pins;

// Hardware-facing modules compile on the host too; the real peripheral
// code is guarded by cfg attributes inside each.
pub mod adapters;
pub mod drivers;
pub mod sensors;
