//! Fuzz target: `LineReceiver::push_byte`
//!
//! Drives arbitrary byte streams into the line assembler and asserts that
//! every produced line stays within the fixed buffer, carries no
//! terminator bytes, and is fully uppercased.
//!
//! cargo fuzz run fuzz_line_receiver

#![no_main]

use gassentry::app::line::{LINE_CAP, LineReceiver};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut rx = LineReceiver::new();

    for &b in data {
        if rx.push_byte(b) {
            if let Some((line, len)) = rx.take_line() {
                assert!(len < LINE_CAP, "line exceeds buffer capacity");
                for &c in &line[..len] {
                    assert!(c != b'\r' && c != b'\n', "terminator leaked into line");
                    assert!(!c.is_ascii_lowercase(), "line not uppercased");
                }
            }
        }
    }

    // After a reset the receiver must assemble cleanly again.
    rx.reset();
    for &b in b"STATUS\r" {
        rx.push_byte(b);
    }
    assert!(rx.take_line().is_some());
});
