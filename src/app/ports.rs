//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, serial link, display) implement
//! these traits.  The [`AppService`](super::service::AppService) consumes
//! them via generics, so the domain core never touches hardware directly.
//!
//! Every port call is a bounded synchronous operation: the underlying
//! driver either completes or times out and returns.  The core never
//! retries — a failed transmit or read is dropped and the loop continues.

use super::context::GasReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per tick for both channels.
pub trait SensorPort {
    /// Read the MQ2 and MQ135 channels as calibrated voltages (0 – 3.3 V).
    fn read_gas(&mut self) -> GasReading;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: three boolean digital lines, logically HIGH = active.
pub trait ActuatorPort {
    /// Drive the buzzer pin.
    fn set_buzzer(&mut self, on: bool);

    /// Drive the ventilation relay coil.
    fn set_relay(&mut self, on: bool);

    /// Drive the exhaust fan gate.
    fn set_fan(&mut self, on: bool);

    /// Kill all actuators — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Serial link port (driven adapter: domain → UART)
// ───────────────────────────────────────────────────────────────

/// Outbound serial link.  This is the *raw* transmit path; the
/// command-pause gate lives in the domain
/// ([`LoopContext::send_gated`](super::context::LoopContext::send_gated)),
/// so CSV rows and the CSV header can bypass it.
pub trait LinkPort {
    /// Transmit bytes verbatim.  A driver-level timeout drops the data.
    fn send_raw(&mut self, bytes: &[u8]);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → 16x2 character LCD)
// ───────────────────────────────────────────────────────────────

/// 2-row, 16-column text display.
pub trait DisplayPort {
    /// Clear the whole display.
    fn clear(&mut self);

    /// Position the cursor at (row 0-1, col 0-15).
    fn set_cursor(&mut self, row: u8, col: u8);

    /// Write a string starting at the current cursor position.
    fn write_text(&mut self, text: &str);
}
