//! Interrupt-side RX byte channel.
//!
//! Received serial bytes are produced by the UART receive path (ISR or a
//! dedicated blocking-read task, depending on platform) and consumed by the
//! main control loop, which feeds them one at a time into the
//! [`LineReceiver`](crate::app::line::LineReceiver) state machine.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ UART RX path │────▶│  Byte Ring   │────▶│  Main Loop   │
//! │ (producer)   │     │  (lock-free) │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Single-producer / single-consumer with atomic head/tail indices — no
//! lock is taken on either side, preserving the original no-lock sharing
//! contract between the receive path and the loop.

use core::sync::atomic::{AtomicU8, Ordering};

/// Maximum number of pending bytes.
/// Power of 2 for efficient ring buffer modulo.
const RX_RING_CAP: usize = 64;

static RX_HEAD: AtomicU8 = AtomicU8::new(0);
static RX_TAIL: AtomicU8 = AtomicU8::new(0);
// SAFETY: RX_BUFFER is accessed under the SPSC discipline only.
// Producer (push_byte): UART RX context — one writer.
// Consumer (pop_byte): main-loop task — one reader.
// The acquire/release pairs on head/tail order the slot writes.
static mut RX_BUFFER: [u8; RX_RING_CAP] = [0; RX_RING_CAP];

/// Push a received byte into the ring.
/// Safe to call from the RX interrupt/task context (lock-free).
/// Returns `false` if the ring is full (byte dropped — lossy by design).
pub fn push_byte(byte: u8) -> bool {
    let head = RX_HEAD.load(Ordering::Relaxed);
    let tail = RX_TAIL.load(Ordering::Acquire);
    let next_head = (head + 1) % RX_RING_CAP as u8;

    if next_head == tail {
        return false; // Ring full — drop byte.
    }

    // SAFETY: Only one producer writes this slot, and the consumer will not
    // read it until the Release store below publishes it.
    unsafe {
        RX_BUFFER[head as usize] = byte;
    }

    RX_HEAD.store(next_head, Ordering::Release);
    true
}

/// Pop the next byte from the ring.
/// Called from the main loop (single consumer).
/// Returns `None` if the ring is empty.
pub fn pop_byte() -> Option<u8> {
    let tail = RX_TAIL.load(Ordering::Relaxed);
    let head = RX_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    let byte = unsafe { RX_BUFFER[tail as usize] };
    RX_TAIL.store((tail + 1) % RX_RING_CAP as u8, Ordering::Release);

    Some(byte)
}

/// Drain all pending bytes into a callback, in FIFO order.
pub fn drain_bytes(mut handler: impl FnMut(u8)) {
    while let Some(byte) = pop_byte() {
        handler(byte);
    }
}

/// Check if the ring is empty.
pub fn is_empty() -> bool {
    let tail = RX_TAIL.load(Ordering::Relaxed);
    let head = RX_HEAD.load(Ordering::Acquire);
    tail == head
}

/// Number of pending bytes.
pub fn pending() -> usize {
    let head = RX_HEAD.load(Ordering::Relaxed) as usize;
    let tail = RX_TAIL.load(Ordering::Relaxed) as usize;
    (head + RX_RING_CAP - tail) % RX_RING_CAP
}
