//! Command-link UART driver.
//!
//! Transmit is a direct blocking write from the main loop.  Receive runs
//! on a dedicated pump thread that blocks on the UART driver and pushes
//! each byte into the lock-free RX ring ([`crate::link_rx`]), which the
//! main loop drains once per tick.

#[cfg(target_os = "espidf")]
use log::{info, warn};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
#[cfg(target_os = "espidf")]
use crate::link_rx;

#[cfg(target_os = "espidf")]
const RX_PUMP_STACK: usize = 3072;
#[cfg(target_os = "espidf")]
const RX_POLL_MS: u32 = 20;

/// Send bytes out the command link.  Blocking, bounded by the driver.
pub fn write(data: &[u8]) {
    #[cfg(target_os = "espidf")]
    hw_init::uart_write(data);
    #[cfg(not(target_os = "espidf"))]
    let _ = data;
}

/// Spawn the RX pump thread.  Bytes that arrive while the ring is full
/// are dropped, matching the receiver's 64-byte line cap.
#[cfg(target_os = "espidf")]
pub fn start_rx_pump() {
    let result = std::thread::Builder::new()
        .name("uart_rx".into())
        .stack_size(RX_PUMP_STACK)
        .spawn(|| {
            info!("uart rx pump started");
            loop {
                if let Some(byte) = hw_init::uart_read_byte(RX_POLL_MS) {
                    if !link_rx::push_byte(byte) {
                        warn!("rx ring full, byte dropped");
                    }
                }
            }
        });
    if result.is_err() {
        warn!("uart rx pump failed to start; command link is TX-only");
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn start_rx_pump() {}
