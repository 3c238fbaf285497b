//! Application service — the cooperative per-tick scheduler.
//!
//! [`AppService`] owns the shared context, the line receiver and the three
//! periodic engines, and runs them in a fixed order every tick:
//!
//! ```text
//!  SensorPort ──▶ ┌───────────────────────────────┐ ──▶ LinkPort
//!                 │          AppService           │
//! ActuatorPort ◀──│ streamer · alerts · paginator │ ──▶ DisplayPort
//!                 │  pause expiry · dispatcher    │
//!                 └───────────────────────────────┘
//! ```
//!
//! The ordering (sensors → streamer → alerts/display → pause expiry →
//! command dispatch) is load-bearing: CSV rows must precede alert output
//! within a tick, and a command only runs after the tick's telemetry so
//! its response opens the pause window against fresh timestamps.  Do not
//! reorder.

use log::info;

use crate::config::SystemConfig;

use super::alert::AlertEngine;
use super::command;
use super::context::LoopContext;
use super::display::DisplayPaginator;
use super::line::LineReceiver;
use super::ports::{ActuatorPort, DisplayPort, LinkPort, SensorPort};
use super::telemetry::TelemetryStreamer;

/// The application service orchestrates all domain logic.
pub struct AppService {
    ctx: LoopContext,
    line: LineReceiver,
    streamer: TelemetryStreamer,
    alerts: AlertEngine,
    pager: DisplayPaginator,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            ctx: LoopContext::new(config),
            line: LineReceiver::new(),
            streamer: TelemetryStreamer::new(config.sensor_interval_ms),
            alerts: AlertEngine::new(),
            pager: DisplayPaginator::new(config.page_toggle_ms),
            tick_count: 0,
        }
    }

    /// Feed one received byte into the line assembler.  Called from the
    /// RX-ring drain in the main loop (or directly by tests).
    pub fn feed_byte(&mut self, byte: u8) {
        self.line.push_byte(byte);
    }

    /// Run one full control cycle.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + ActuatorPort),
        link: &mut impl LinkPort,
        display: &mut impl DisplayPort,
    ) {
        self.tick_count += 1;

        // 1. Sample both channels.
        self.ctx.reading = hw.read_gas();

        // 2. Telemetry (CSV rows take priority over voltage messages).
        self.streamer.tick(&mut self.ctx, now_ms, link);

        // 3. Severity evaluation, actuators, broadcast; display paging is
        //    suppressed for the duration of a CSV capture.
        self.alerts.tick(&self.ctx, now_ms, hw, link);
        if !self.ctx.csv.enabled {
            self.pager.tick(&self.ctx, now_ms, display);
        }

        // 4. Close an elapsed pause window.  The original re-arms its
        //    receive interrupt from index zero here, dropping any
        //    half-assembled line — preserved.
        if self.ctx.pause_expired(now_ms) {
            self.ctx.pause.paused = false;
            self.streamer.reset_normal_timer(now_ms);
            self.line.reset();
            info!("command pause window closed");
        }

        // 5. At most one command per iteration.
        if let Some((buf, len)) = self.line.take_line() {
            command::dispatch(
                &buf[..len],
                &mut self.ctx,
                &mut self.pager,
                now_ms,
                link,
                display,
            );
        }
    }

    // ── Queries (test observability) ──────────────────────────

    /// Shared state snapshot.
    pub fn context(&self) -> &LoopContext {
        &self.ctx
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
