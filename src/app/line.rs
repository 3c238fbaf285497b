//! Line receiver — byte-at-a-time command assembly.
//!
//! Consumes one received byte per invocation (from the RX ring drain in
//! the main loop, which stands in for the per-byte receive interrupt on
//! the original platform).  Bytes are uppercased and accumulated until a
//! terminator (`\r` or `\n`) completes the line and raises the one-shot
//! ready flag.
//!
//! Overflow is lossy by design: if the write position would reach
//! capacity − 1, all progress is silently discarded and assembly restarts.
//! No error is surfaced and none should be added.

/// Buffer capacity including the terminator slot.
pub const LINE_CAP: usize = 64;

/// Per-byte line assembly state machine.
pub struct LineReceiver {
    buf: [u8; LINE_CAP],
    pos: usize,
    ready: bool,
    len: usize,
}

impl Default for LineReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReceiver {
    pub fn new() -> Self {
        Self {
            buf: [0; LINE_CAP],
            pos: 0,
            ready: false,
            len: 0,
        }
    }

    /// Feed one byte.  Returns `true` when a complete line became ready.
    ///
    /// A terminator on an empty buffer (e.g. the `\n` of a `\r\n` pair
    /// whose `\r` already completed the line) is ignored apart from
    /// resetting the position.
    pub fn push_byte(&mut self, byte: u8) -> bool {
        if byte == b'\r' || byte == b'\n' {
            if self.pos > 0 {
                self.len = self.pos;
                self.buf[self.pos] = 0;
                self.ready = true;
            }
            self.pos = 0;
            return self.ready;
        }

        if self.pos < LINE_CAP - 1 {
            self.buf[self.pos] = byte.to_ascii_uppercase();
            self.pos += 1;
        } else {
            // Overflow: discard progress, restart. Lossy by design.
            self.pos = 0;
        }
        false
    }

    /// One-shot ready flag.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Consume the completed line, clearing the flag and the buffer.
    /// Returns `None` when no line is pending.
    pub fn take_line(&mut self) -> Option<([u8; LINE_CAP], usize)> {
        if !self.ready {
            return None;
        }
        let line = self.buf;
        let len = self.len;
        self.buf = [0; LINE_CAP];
        self.len = 0;
        self.ready = false;
        Some((line, len))
    }

    /// Discard any partial line in progress (pause-window re-arm).
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}
