//! Unified error types for the GasSentry firmware.
//!
//! Runtime peripheral failures are deliberately *not* routed through here:
//! the core attempts each operation once per tick and continues (a failed
//! ADC read yields 0 raw counts, a failed transmit is dropped, a failed
//! I2C write leaves the panel stale). Only boot-time peripheral
//! initialisation is fatal, so that is the only thing this type carries.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

/// Fatal firmware error.  Constructed only before the control loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
        }
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
