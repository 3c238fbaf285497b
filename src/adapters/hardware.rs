//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`GasSensorPair`] and all actuator drivers, exposing them
//! through [`SensorPort`] and [`ActuatorPort`].  This is the only
//! module in the system that touches sensing and actuation hardware.
//! On non-espidf targets, the underlying drivers use cfg-gated
//! simulation stubs.

use crate::app::context::GasReading;
use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::outputs::DigitalOutput;
use crate::sensors::{GasChannel, GasSensorPair};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensors: GasSensorPair,
    buzzer: DigitalOutput,
    relay: DigitalOutput,
    fan: DigitalOutput,
}

impl HardwareAdapter {
    pub fn new() -> Self {
        Self {
            sensors: GasSensorPair::new(GasChannel::mq2(), GasChannel::mq135()),
            buzzer: DigitalOutput::buzzer(),
            relay: DigitalOutput::relay(),
            fan: DigitalOutput::fan(),
        }
    }
}

impl Default for HardwareAdapter {
    fn default() -> Self {
        Self::new()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_gas(&mut self) -> GasReading {
        self.sensors.read_both()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set(on);
    }

    fn set_relay(&mut self, on: bool) {
        self.relay.set(on);
    }

    fn set_fan(&mut self, on: bool) {
        self.fan.set(on);
    }

    fn all_off(&mut self) {
        self.buzzer.set(false);
        self.relay.set(false);
        self.fan.set(false);
    }
}
