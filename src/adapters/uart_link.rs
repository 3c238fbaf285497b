//! UART link adapter — implements [`LinkPort`] over the command UART.
//!
//! Transmit only; the receive side flows through the RX ring in
//! [`crate::link_rx`] and never touches this adapter.

use crate::app::ports::LinkPort;
use crate::drivers::uart;

/// Serial command-link transmitter.
#[derive(Default)]
pub struct UartLink;

impl UartLink {
    pub fn new() -> Self {
        Self
    }
}

impl LinkPort for UartLink {
    fn send_raw(&mut self, bytes: &[u8]) {
        uart::write(bytes);
    }
}
