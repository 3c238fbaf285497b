//! Shared loop state.
//!
//! [`LoopContext`] is the single explicit state structure threaded through
//! every component each tick — no ambient globals.  The command dispatcher
//! mutates it, the alert engine / streamer / paginator read it, and the
//! main loop clears the pause window.
//!
//! All timestamps are `u32` milliseconds from the monotonic clock;
//! elapsed-time checks use `wrapping_sub` so the 49.7-day wrap is benign.

use crate::config::SystemConfig;

use super::ports::LinkPort;

/// Voltages sampled from both channels, written once per loop tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GasReading {
    /// MQ2 combustible-gas channel, volts.
    pub mq2_v: f32,
    /// MQ135 smoke / air-quality channel, volts.
    pub mq135_v: f32,
}

/// Per-sensor alert thresholds, volts.  Mutated only by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub mq2_v: f32,
    pub mq135_v: f32,
}

/// Alert behaviour knobs.
///
/// `enabled` is also forced off by `CSV ON` and back on by `CSV OFF` —
/// that coupling is a deliberate side effect of the CSV commands, not an
/// accident, and must survive refactors.
#[derive(Debug, Clone, Copy)]
pub struct AlertConfig {
    pub enabled: bool,
    /// Reported and settable over the link (`BLINK`); the buzzer cadence
    /// itself uses fixed per-sensor durations.
    pub blink_interval_ms: u16,
}

/// CSV streaming mode state.
#[derive(Debug, Clone, Copy)]
pub struct CsvLogConfig {
    pub enabled: bool,
    /// Row spacing, `1000 / rate_hz` for rate_hz in 1..=50.
    pub interval_ms: u32,
    /// Timestamp of the last emitted row.
    pub last_emit_ms: u32,
}

impl CsvLogConfig {
    /// Current rate in Hz as derived from the interval.
    pub fn rate_hz(&self) -> u32 {
        if self.interval_ms == 0 {
            0
        } else {
            1000 / self.interval_ms
        }
    }
}

/// Telemetry cooldown after a command response.
#[derive(Debug, Clone, Copy, Default)]
pub struct PauseState {
    pub paused: bool,
    pub since_ms: u32,
}

/// The shared mutable state for one control session.
#[derive(Debug, Clone)]
pub struct LoopContext {
    pub reading: GasReading,
    pub thresholds: Thresholds,
    pub alert: AlertConfig,
    pub csv: CsvLogConfig,
    pub pause: PauseState,
    /// Cooldown length, from config.
    pub command_pause_ms: u32,
}

impl LoopContext {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            reading: GasReading::default(),
            thresholds: Thresholds {
                mq2_v: config.mq2_threshold_v,
                mq135_v: config.mq135_threshold_v,
            },
            alert: AlertConfig {
                enabled: config.alert_enabled,
                blink_interval_ms: config.blink_interval_ms,
            },
            csv: CsvLogConfig {
                enabled: false,
                interval_ms: config.csv_interval_ms,
                last_emit_ms: 0,
            },
            pause: PauseState::default(),
            command_pause_ms: config.command_pause_ms,
        }
    }

    /// Transmit through the pause gate: dropped while a cooldown window is
    /// active.  Command responses, alert broadcasts and the periodic
    /// voltage messages all go through here; CSV output uses
    /// [`LinkPort::send_raw`] directly.
    pub fn send_gated(&self, link: &mut impl LinkPort, text: &str) {
        if self.pause.paused {
            return;
        }
        link.send_raw(text.as_bytes());
    }

    /// Open the cooldown window: periodic telemetry and alert broadcasts
    /// stop until the main loop closes it after `command_pause_ms`.
    pub fn begin_pause(&mut self, now_ms: u32) {
        self.pause.paused = true;
        self.pause.since_ms = now_ms;
    }

    /// True once the cooldown window has run its course.
    pub fn pause_expired(&self, now_ms: u32) -> bool {
        self.pause.paused && now_ms.wrapping_sub(self.pause.since_ms) >= self.command_pause_ms
    }
}
