//! System configuration parameters
//!
//! Compiled defaults for the GasSentry system. Configuration is volatile
//! only: thresholds and rates changed over the serial link reset to these
//! values on every power cycle.

use serde::{Deserialize, Serialize};

/// Lowest accepted `BLINK` value (milliseconds).
pub const BLINK_MIN_MS: u16 = 100;
/// Highest accepted `BLINK` value (milliseconds).
pub const BLINK_MAX_MS: u16 = 2000;
/// Lowest accepted `CSV RATE` value (Hz).
pub const CSV_RATE_MIN_HZ: u32 = 1;
/// Highest accepted `CSV RATE` value (Hz).
pub const CSV_RATE_MAX_HZ: u32 = 50;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Gas thresholds ---
    /// MQ2 (combustible gas) alert threshold in volts
    pub mq2_threshold_v: f32,
    /// MQ135 (smoke / air quality) alert threshold in volts
    pub mq135_threshold_v: f32,

    // --- Alerts ---
    /// Alert broadcast / buzzer enable at boot
    pub alert_enabled: bool,
    /// LED blink interval (milliseconds, 100-2000)
    pub blink_interval_ms: u16,

    // --- CSV logging ---
    /// CSV row emission interval (milliseconds, derived from rate in Hz)
    pub csv_interval_ms: u32,

    // --- Timing ---
    /// Periodic voltage-message interval (milliseconds)
    pub sensor_interval_ms: u32,
    /// Telemetry cooldown after a command response (milliseconds)
    pub command_pause_ms: u32,
    /// Display page toggle interval (milliseconds)
    pub page_toggle_ms: u32,
    /// Main loop throttle per iteration (milliseconds)
    pub loop_tick_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Thresholds
            mq2_threshold_v: 2.0,
            mq135_threshold_v: 2.0,

            // Alerts
            alert_enabled: true,
            blink_interval_ms: 500,

            // CSV logging: 100 ms = 10 Hz
            csv_interval_ms: 100,

            // Timing
            sensor_interval_ms: 100, // 10 Hz
            command_pause_ms: 4000,
            page_toggle_ms: 1000,
            loop_tick_ms: 10,
        }
    }
}
