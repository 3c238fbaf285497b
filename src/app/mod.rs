//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the GasSentry system:
//! line assembly, command dispatch, severity evaluation, telemetry
//! streaming, and display paging.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod alert;
pub mod command;
pub mod context;
pub mod display;
pub mod line;
pub mod ports;
pub mod service;
pub mod telemetry;
