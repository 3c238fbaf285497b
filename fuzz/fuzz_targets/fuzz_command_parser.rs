//! Fuzz target: command dispatcher
//!
//! Feeds arbitrary bytes as a completed command line and asserts the
//! dispatcher never panics and never lets a validated field leave its
//! legal band, regardless of input.
//!
//! cargo fuzz run fuzz_command_parser

#![no_main]

use gassentry::app::command::dispatch;
use gassentry::app::context::LoopContext;
use gassentry::app::display::DisplayPaginator;
use gassentry::app::ports::{DisplayPort, LinkPort};
use gassentry::config::{BLINK_MAX_MS, BLINK_MIN_MS, SystemConfig};
use libfuzzer_sys::fuzz_target;

struct NullLink;
impl LinkPort for NullLink {
    fn send_raw(&mut self, _bytes: &[u8]) {}
}

struct NullDisplay;
impl DisplayPort for NullDisplay {
    fn clear(&mut self) {}
    fn set_cursor(&mut self, _row: u8, _col: u8) {}
    fn write_text(&mut self, _text: &str) {}
}

fuzz_target!(|data: &[u8]| {
    let mut ctx = LoopContext::new(&SystemConfig::default());
    let mut pager = DisplayPaginator::new(1000);
    let mut link = NullLink;
    let mut display = NullDisplay;

    // The line assembler uppercases before dispatch; mirror that here.
    let line: Vec<u8> = data
        .iter()
        .take(63)
        .map(u8::to_ascii_uppercase)
        .collect();

    dispatch(&line, &mut ctx, &mut pager, 0, &mut link, &mut display);

    // Validated fields must stay inside their bands.
    assert!((20..=1000).contains(&ctx.csv.interval_ms));
    assert!(
        (BLINK_MIN_MS..=BLINK_MAX_MS).contains(&ctx.alert.blink_interval_ms),
        "blink interval escaped its band"
    );
});
