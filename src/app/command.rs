//! Command dispatcher — parses one ready line and mutates shared state.
//!
//! Invoked at most once per loop iteration.  The grammar is matched
//! against the already-uppercased line, most specific prefix first.
//! Responses travel through the pause-gated send path and are therefore
//! swallowed when a previous cooldown window is still open; after sending,
//! most commands open a fresh window so streamed data cannot interleave
//! with command output.
//!
//! Numeric arguments use a permissive prefix parse (strtol/strtod style):
//! a non-numeric argument reads as zero and is accepted.  `SET MQ2 ABC`
//! therefore zeroes the threshold.  This is a known weak point of the
//! protocol, kept for wire compatibility and flagged in tests — do not
//! silently harden it.

use core::fmt::Write;

use log::info;

use super::context::LoopContext;
use super::display::DisplayPaginator;
use super::ports::{DisplayPort, LinkPort};
use super::telemetry::CSV_HEADER;
use crate::config::{BLINK_MAX_MS, BLINK_MIN_MS, CSV_RATE_MAX_HZ, CSV_RATE_MIN_HZ};

use heapless::String;

/// `CSV OFF` confirmation stays on the LCD this long before it clears.
const CSV_OFF_NOTICE_MS: u32 = 1000;

const HELP_TEXT: &str = "> HELP\r\n\
    Available Commands:\r\n\
    SET MQ2 <value>    - Set MQ2 threshold\r\n\
    SET MQ135 <value>  - Set MQ135 threshold\r\n\
    ALERT ON/OFF       - Enable/Disable Alerts\r\n\
    BLINK <ms>         - Set LED blink interval\r\n\
    CSV ON             - Start CSV logging\r\n\
    CSV OFF            - Stop CSV logging\r\n\
    CSV RATE <hz>      - Set logging rate (1-50 Hz)\r\n\
    STATUS             - Show current readings\r\n\
    HELP               - Show this menu\r\n";

/// Dispatch one completed command line.
pub fn dispatch(
    line: &[u8],
    ctx: &mut LoopContext,
    pager: &mut DisplayPaginator,
    now_ms: u32,
    link: &mut impl LinkPort,
    display: &mut impl DisplayPort,
) {
    let mut response: String<160> = String::new();

    if let Some(arg) = line.strip_prefix(b"SET MQ2 ") {
        ctx.thresholds.mq2_v = parse_f32_prefix(arg);
        let _ = write!(
            response,
            "MQ2 threshold set to {:.2}V\r\n",
            ctx.thresholds.mq2_v
        );
        ctx.send_gated(link, &response);
        ctx.begin_pause(now_ms);
    } else if let Some(arg) = line.strip_prefix(b"SET MQ135 ") {
        ctx.thresholds.mq135_v = parse_f32_prefix(arg);
        let _ = write!(
            response,
            "MQ135 threshold set to {:.2}V\r\n",
            ctx.thresholds.mq135_v
        );
        ctx.send_gated(link, &response);
        ctx.begin_pause(now_ms);
    } else if line == b"STATUS" {
        let _ = write!(
            response,
            "> STATUS\r\nMQ2: {:.2}V\r\nMQ135: {:.2}V\r\nAlert: {}\r\nBlink: {}ms\r\nCSV: {}\r\nRate: {} ms\r\n",
            ctx.reading.mq2_v,
            ctx.reading.mq135_v,
            if ctx.alert.enabled { "ON" } else { "OFF" },
            ctx.alert.blink_interval_ms,
            if ctx.csv.enabled { "ON" } else { "OFF" },
            ctx.csv.interval_ms,
        );
        ctx.send_gated(link, &response);
        ctx.begin_pause(now_ms);
    } else if line == b"HELP" {
        ctx.send_gated(link, HELP_TEXT);
        ctx.begin_pause(now_ms);
    } else if line == b"CSV ON" {
        // Side effects by design: continuous logging needs the link
        // unpaused and the alert broadcasts out of the way.
        ctx.csv.enabled = true;
        ctx.pause.paused = false;
        ctx.alert.enabled = false;

        // Header goes out raw — never subject to the pause gate.
        link.send_raw(CSV_HEADER.as_bytes());
        ctx.csv.last_emit_ms = now_ms;
        info!("CSV logging enabled at {} Hz", ctx.csv.rate_hz());

        display.clear();
        display.write_text("CSV LOGGING ON");
        display.set_cursor(1, 0);
        let _ = write!(response, "{} Hz", ctx.csv.rate_hz());
        display.write_text(&response);
    } else if line == b"CSV OFF" {
        ctx.csv.enabled = false;
        ctx.alert.enabled = true;
        ctx.send_gated(link, "> CSV logging DISABLED\r\n");
        ctx.begin_pause(now_ms);
        info!("CSV logging disabled");

        display.clear();
        display.write_text("CSV Logging OFF");
        pager.hold_notice(now_ms, CSV_OFF_NOTICE_MS);
    } else if let Some(arg) = line.strip_prefix(b"CSV RATE ") {
        let rate_hz = parse_u32_prefix(arg);
        if (CSV_RATE_MIN_HZ..=CSV_RATE_MAX_HZ).contains(&rate_hz) {
            ctx.csv.interval_ms = 1000 / rate_hz;
            let _ = write!(
                response,
                "> CSV rate set to {} Hz ({} ms)\r\n",
                rate_hz, ctx.csv.interval_ms
            );
            ctx.send_gated(link, &response);
        } else {
            ctx.send_gated(link, "> Rate must be 1-50 Hz\r\n");
        }
    } else if line == b"ALERT ON" {
        ctx.alert.enabled = true;
        ctx.send_gated(link, "> Bluetooth alerts ENABLED\r\n");
    } else if line == b"ALERT OFF" {
        ctx.alert.enabled = false;
        ctx.send_gated(link, "> Bluetooth alerts DISABLED\r\n");
    } else if let Some(arg) = line.strip_prefix(b"BLINK ") {
        let val = parse_u32_prefix(arg);
        if (u32::from(BLINK_MIN_MS)..=u32::from(BLINK_MAX_MS)).contains(&val) {
            ctx.alert.blink_interval_ms = val as u16;
            let _ = write!(response, "> Blink interval set to {} ms\r\n", val);
            ctx.send_gated(link, &response);
        } else {
            ctx.send_gated(link, "> Blink value out of range (100-2000 ms)\r\n");
        }
    } else {
        let _ = write!(response, "Unknown command: ");
        push_lossy(&mut response, line);
        let _ = write!(response, "\r\nType HELP for commands\r\n");
        ctx.send_gated(link, &response);
        ctx.begin_pause(now_ms);
    }
}

// ───────────────────────────────────────────────────────────────
// Permissive numeric parsing
// ───────────────────────────────────────────────────────────────

/// strtod-style prefix parse: optional sign, digits, optional fraction.
/// Anything unparsable (including an empty argument) yields 0.0.
pub fn parse_f32_prefix(arg: &[u8]) -> f32 {
    let mut it = arg.iter().copied().skip_while(|b| *b == b' ').peekable();

    let mut negative = false;
    if let Some(&b) = it.peek() {
        if b == b'-' || b == b'+' {
            negative = b == b'-';
            it.next();
        }
    }

    let mut value = 0.0f32;
    let mut seen_digit = false;
    while let Some(&b) = it.peek() {
        if b.is_ascii_digit() {
            value = value * 10.0 + f32::from(b - b'0');
            seen_digit = true;
            it.next();
        } else {
            break;
        }
    }

    if it.peek() == Some(&b'.') {
        it.next();
        let mut scale = 0.1f32;
        while let Some(&b) = it.peek() {
            if b.is_ascii_digit() {
                value += f32::from(b - b'0') * scale;
                scale *= 0.1;
                seen_digit = true;
                it.next();
            } else {
                break;
            }
        }
    }

    if !seen_digit {
        return 0.0;
    }
    if negative { -value } else { value }
}

/// atoi-style prefix parse.  Negative or unparsable input yields 0, which
/// the range checks upstream then reject.
pub fn parse_u32_prefix(arg: &[u8]) -> u32 {
    let mut value: u32 = 0;
    let mut seen_digit = false;
    for &b in arg.iter().skip_while(|b| **b == b' ') {
        if b.is_ascii_digit() {
            value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
            seen_digit = true;
        } else {
            break;
        }
    }
    if seen_digit { value } else { 0 }
}

/// Append raw line bytes for the echo, mapping non-printable bytes to '?'.
fn push_lossy(out: &mut String<160>, line: &[u8]) {
    for &b in line {
        let c = if (0x20..0x7F).contains(&b) {
            b as char
        } else {
            '?'
        };
        let _ = out.push(c);
    }
}
