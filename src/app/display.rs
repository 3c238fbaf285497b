//! Display paginator — alternating voltage / threshold pages on the LCD.
//!
//! Flips between two pages on a 1000 ms wall-clock cadence, clearing the
//! display at every toggle boundary and redrawing the current page on
//! every tick in between (unconditional redraw, matching the original
//! panel behaviour — do not "optimise" it into dirty tracking).
//!
//! A transient notice (e.g. the `CSV Logging OFF` confirmation) holds the
//! paginator off until its deadline passes, after which the display is
//! cleared and paging resumes.

use core::fmt::Write;

use heapless::String;

use super::context::LoopContext;
use super::ports::DisplayPort;

/// Which page is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Voltage,
    Threshold,
}

pub struct DisplayPaginator {
    page: Page,
    toggle_interval_ms: u32,
    last_toggle_ms: u32,
    notice_deadline_ms: Option<u32>,
}

impl DisplayPaginator {
    pub fn new(toggle_interval_ms: u32) -> Self {
        Self {
            page: Page::Voltage,
            toggle_interval_ms,
            last_toggle_ms: 0,
            notice_deadline_ms: None,
        }
    }

    /// Hold paging and leave whatever is on the display until `now + hold_ms`.
    pub fn hold_notice(&mut self, now_ms: u32, hold_ms: u32) {
        self.notice_deadline_ms = Some(now_ms.wrapping_add(hold_ms));
    }

    /// Current page (test observability).
    pub fn page(&self) -> Page {
        self.page
    }

    /// Advance paging and redraw.  The caller skips this entirely while
    /// CSV logging is active.
    pub fn tick(&mut self, ctx: &LoopContext, now_ms: u32, display: &mut impl DisplayPort) {
        if let Some(deadline) = self.notice_deadline_ms {
            // Wrapping-aware "now < deadline".
            if now_ms.wrapping_sub(deadline) >= u32::MAX / 2 {
                return; // Notice still showing.
            }
            display.clear();
            self.notice_deadline_ms = None;
            self.last_toggle_ms = now_ms;
        }

        if now_ms.wrapping_sub(self.last_toggle_ms) >= self.toggle_interval_ms {
            self.page = match self.page {
                Page::Voltage => Page::Threshold,
                Page::Threshold => Page::Voltage,
            };
            self.last_toggle_ms = now_ms;
            display.clear();
        }

        let mut line: String<17> = String::new();
        match self.page {
            Page::Voltage => {
                let _ = write!(line, "MQ2: {:.2}V", ctx.reading.mq2_v);
                display.set_cursor(0, 0);
                display.write_text(&line);

                line.clear();
                let _ = write!(line, "MQ135: {:.2}V", ctx.reading.mq135_v);
                display.set_cursor(1, 0);
                display.write_text(&line);
            }
            Page::Threshold => {
                let _ = write!(line, "MQ2 Th: {:.2}V", ctx.thresholds.mq2_v);
                display.set_cursor(0, 0);
                display.write_text(&line);

                line.clear();
                let _ = write!(line, "MQ135 Th: {:.2}V", ctx.thresholds.mq135_v);
                display.set_cursor(1, 0);
                display.write_text(&line);
            }
        }
    }
}
