//! Digital actuator output drivers (buzzer, alarm relay, fan).
//!
//! Each output is a dumb on/off GPIO; all alarm policy (severity tiers,
//! beep cadence) lives in the application layer.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

/// One active-high digital output pin with cached state.
pub struct DigitalOutput {
    gpio: i32,
    on: bool,
}

impl DigitalOutput {
    pub fn buzzer() -> Self {
        Self::new(pins::BUZZER_GPIO)
    }

    pub fn relay() -> Self {
        Self::new(pins::RELAY_GPIO)
    }

    pub fn fan() -> Self {
        Self::new(pins::FAN_GPIO)
    }

    fn new(gpio: i32) -> Self {
        Self { gpio, on: false }
    }

    /// Drive the pin.  Redundant writes are forwarded anyway; the write
    /// is idempotent and cheaper than branch-per-tick bookkeeping.
    pub fn set(&mut self, on: bool) {
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
