//! Telemetry streamer — CSV rows or human-readable voltage messages.
//!
//! Two mutually exclusive output modes, checked every tick with CSV taking
//! priority:
//!
//! - **CSV mode**: one `timestamp,mq2,mq135` row per configured interval,
//!   transmitted raw — the pause gate never applies to dataset capture.
//! - **Normal mode**: `MQ2: x.xx, MQ135: y.yy` at a fixed 10 Hz through
//!   the pause-gated path.
//!
//! The streamer runs before the alert engine each tick; that ordering is
//! load-bearing for output interleaving on the link.

use core::fmt::Write;

use heapless::String;

use super::context::LoopContext;
use super::ports::LinkPort;

/// CSV header row, emitted once per `CSV ON`.
pub const CSV_HEADER: &str = "timestamp,mq2,mq135\r\n";

/// Periodic output driver owning the normal-mode emit timer.
pub struct TelemetryStreamer {
    sensor_interval_ms: u32,
    last_sensor_ms: u32,
}

impl TelemetryStreamer {
    pub fn new(sensor_interval_ms: u32) -> Self {
        Self {
            sensor_interval_ms,
            last_sensor_ms: 0,
        }
    }

    /// Emit at most one line for this tick, mode-dependent.
    pub fn tick(&mut self, ctx: &mut LoopContext, now_ms: u32, link: &mut impl LinkPort) {
        if ctx.csv.enabled {
            if now_ms.wrapping_sub(ctx.csv.last_emit_ms) >= ctx.csv.interval_ms {
                let mut row: String<64> = String::new();
                let _ = write!(
                    row,
                    "{},{:.3},{:.3}\r\n",
                    now_ms, ctx.reading.mq2_v, ctx.reading.mq135_v
                );
                // Raw transmit: CSV output is never paused.
                link.send_raw(row.as_bytes());
                ctx.csv.last_emit_ms = now_ms;
            }
        } else if !ctx.pause.paused
            && now_ms.wrapping_sub(self.last_sensor_ms) >= self.sensor_interval_ms
        {
            let mut msg: String<48> = String::new();
            let _ = write!(
                msg,
                "MQ2: {:.2}, MQ135: {:.2}\r\n",
                ctx.reading.mq2_v, ctx.reading.mq135_v
            );
            ctx.send_gated(link, &msg);
            self.last_sensor_ms = now_ms;
        }
    }

    /// Restart the normal-mode cadence (called when a pause window ends so
    /// the first message lands a full interval later).
    pub fn reset_normal_timer(&mut self, now_ms: u32) {
        self.last_sensor_ms = now_ms;
    }
}
