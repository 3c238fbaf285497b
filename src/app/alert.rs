//! Alert engine — severity evaluation, actuator control, buzzer cadence.
//!
//! Runs once per loop tick, after the telemetry streamer.  Severity is a
//! pure function of (voltage, threshold) recomputed every tick, never
//! stored.  Relay and fan share a single combined condition.  The buzzer
//! is a two-state timed oscillator, not edge-triggered: its toggle state
//! persists across ticks and is compared against a monotonic timestamp.

use core::fmt::Write;

use heapless::String;

use super::context::LoopContext;
use super::ports::{ActuatorPort, LinkPort};

/// Severity multipliers over the configured threshold.
const MEDIUM_FACTOR: f32 = 1.25;
const HIGH_FACTOR: f32 = 1.5;

/// Buzzer cadence when the MQ2 channel is the active one (ms on / ms off).
const MQ2_BEEP: (u32, u32) = (200, 300);
/// Buzzer cadence when only the MQ135 channel is active.
const MQ135_BEEP: (u32, u32) = (500, 500);

// ───────────────────────────────────────────────────────────────
// Severity
// ───────────────────────────────────────────────────────────────

/// Qualitative alert bucket per sensor.
/// Ordered so `>` comparisons read naturally (`High > Low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Anything above [`Severity::None`] drives the actuators.
    pub fn is_alerting(self) -> bool {
        self > Severity::None
    }
}

/// Bucket a voltage against a threshold.
///
/// High if v > t×1.5, else Medium if v > t×1.25, else Low if v > t,
/// else None.  Strictly-greater comparisons: v == t is still None.
pub fn severity_of(voltage: f32, threshold: f32) -> Severity {
    if voltage > threshold * HIGH_FACTOR {
        Severity::High
    } else if voltage > threshold * MEDIUM_FACTOR {
        Severity::Medium
    } else if voltage > threshold {
        Severity::Low
    } else {
        Severity::None
    }
}

// ───────────────────────────────────────────────────────────────
// Alert engine
// ───────────────────────────────────────────────────────────────

/// Per-tick evaluator owning the buzzer oscillator state.
pub struct AlertEngine {
    buzzer_on: bool,
    buzzer_toggled_ms: u32,
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertEngine {
    pub fn new() -> Self {
        Self {
            buzzer_on: false,
            buzzer_toggled_ms: 0,
        }
    }

    /// Evaluate severities and drive relay, fan, buzzer and the alert
    /// broadcast.  Returns the per-sensor severities for the caller
    /// (display suppression decisions live in the service).
    pub fn tick(
        &mut self,
        ctx: &LoopContext,
        now_ms: u32,
        hw: &mut impl ActuatorPort,
        link: &mut impl LinkPort,
    ) -> (Severity, Severity) {
        let mq2 = severity_of(ctx.reading.mq2_v, ctx.thresholds.mq2_v);
        let mq135 = severity_of(ctx.reading.mq135_v, ctx.thresholds.mq135_v);
        let any = mq2.is_alerting() || mq135.is_alerting();

        // Relay and fan: one combined condition, no independent logic.
        hw.set_relay(any);
        hw.set_fan(any);

        self.drive_buzzer(ctx, now_ms, any, mq2, hw);
        self.broadcast(ctx, mq2, mq135, link);

        (mq2, mq135)
    }

    /// Two-state oscillator with asymmetric on/off durations selected by
    /// the dominant sensor.  When the gating condition is false the pin
    /// goes low immediately; the internal toggle state is left as-is.
    fn drive_buzzer(
        &mut self,
        ctx: &LoopContext,
        now_ms: u32,
        any_alerting: bool,
        mq2: Severity,
        hw: &mut impl ActuatorPort,
    ) {
        let active = ctx.alert.enabled && !ctx.csv.enabled && any_alerting;
        if !active {
            hw.set_buzzer(false);
            return;
        }

        let (beep_on, beep_off) = if mq2.is_alerting() {
            MQ2_BEEP
        } else {
            MQ135_BEEP
        };
        let phase = if self.buzzer_on { beep_off } else { beep_on };
        if now_ms.wrapping_sub(self.buzzer_toggled_ms) >= phase {
            self.buzzer_on = !self.buzzer_on;
            self.buzzer_toggled_ms = now_ms;
        }
        hw.set_buzzer(self.buzzer_on);
    }

    /// One line per sensor currently above None — both can fire the same
    /// tick.  Suppressed by the pause gate, alert disable, and CSV mode.
    fn broadcast(
        &self,
        ctx: &LoopContext,
        mq2: Severity,
        mq135: Severity,
        link: &mut impl LinkPort,
    ) {
        if !ctx.alert.enabled || ctx.pause.paused || ctx.csv.enabled {
            return;
        }
        let mut msg: String<48> = String::new();
        if mq2.is_alerting() {
            let _ = write!(msg, "ALERT! MQ2: {:.2}V\r\n", ctx.reading.mq2_v);
            ctx.send_gated(link, &msg);
        }
        if mq135.is_alerting() {
            msg.clear();
            let _ = write!(msg, "ALERT! MQ135: {:.2}V\r\n", ctx.reading.mq135_v);
            ctx.send_gated(link, &msg);
        }
    }
}
