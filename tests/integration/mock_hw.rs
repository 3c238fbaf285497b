//! Mock hardware adapters for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO/ADC/I2C registers.

use gassentry::app::context::GasReading;
use gassentry::app::ports::{ActuatorPort, DisplayPort, LinkPort, SensorPort};
use gassentry::app::service::AppService;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Buzzer(bool),
    Relay(bool),
    Fan(bool),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub mq2_v: f32,
    pub mq135_v: f32,
    pub calls: Vec<ActuatorCall>,
    pub buzzer: bool,
    pub relay: bool,
    pub fan: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            mq2_v: 0.0,
            mq135_v: 0.0,
            calls: Vec::new(),
            buzzer: false,
            relay: false,
            fan: false,
        }
    }

    pub fn last_call(&self) -> Option<&ActuatorCall> {
        self.calls.last()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_gas(&mut self) -> GasReading {
        GasReading {
            mq2_v: self.mq2_v,
            mq135_v: self.mq135_v,
        }
    }
}

impl ActuatorPort for MockHardware {
    fn set_buzzer(&mut self, on: bool) {
        self.buzzer = on;
        self.calls.push(ActuatorCall::Buzzer(on));
    }

    fn set_relay(&mut self, on: bool) {
        self.relay = on;
        self.calls.push(ActuatorCall::Relay(on));
    }

    fn set_fan(&mut self, on: bool) {
        self.fan = on;
        self.calls.push(ActuatorCall::Fan(on));
    }

    fn all_off(&mut self) {
        self.buzzer = false;
        self.relay = false;
        self.fan = false;
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── CaptureLink ───────────────────────────────────────────────

#[derive(Default)]
pub struct CaptureLink {
    pub bytes: Vec<u8>,
}

#[allow(dead_code)]
impl CaptureLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.bytes).expect("link output must be ASCII")
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Completed `\r\n`-terminated lines, empties dropped.
    pub fn lines(&self) -> Vec<&str> {
        self.text().split("\r\n").filter(|l| !l.is_empty()).collect()
    }
}

impl LinkPort for CaptureLink {
    fn send_raw(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }
}

// ── MockLcd ───────────────────────────────────────────────────

#[derive(Default)]
pub struct MockLcd {
    pub writes: Vec<String>,
    pub clears: usize,
}

#[allow(dead_code)]
impl MockLcd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_write(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl DisplayPort for MockLcd {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn set_cursor(&mut self, _row: u8, _col: u8) {}

    fn write_text(&mut self, text: &str) {
        self.writes.push(text.to_owned());
    }
}

// ── Helpers ───────────────────────────────────────────────────

/// Feed a command line byte-by-byte, terminator included.
pub fn send_line(app: &mut AppService, line: &str) {
    for b in line.bytes() {
        app.feed_byte(b);
    }
    app.feed_byte(b'\r');
}
