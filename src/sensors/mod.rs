//! Sensor subsystem — the two MQ-series analog channels.

pub mod gas;

pub use gas::{GasChannel, GasSensorPair};
