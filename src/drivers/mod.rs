//! Peripheral drivers and one-shot hardware initialisation.

pub mod hw_init;
pub mod lcd1602;
pub mod outputs;
pub mod uart;
