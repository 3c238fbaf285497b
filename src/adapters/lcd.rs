//! LCD adapter — implements [`DisplayPort`] over the 16x2 panel driver.

use crate::app::ports::DisplayPort;
use crate::drivers::lcd1602::Lcd1602;

/// Character display behind the domain's display port.
pub struct LcdDisplay {
    panel: Lcd1602,
}

impl LcdDisplay {
    /// Take ownership of an already-initialised panel.
    pub fn new(panel: Lcd1602) -> Self {
        Self { panel }
    }
}

impl DisplayPort for LcdDisplay {
    fn clear(&mut self) {
        self.panel.clear();
    }

    fn set_cursor(&mut self, row: u8, col: u8) {
        self.panel.set_cursor(row, col);
    }

    fn write_text(&mut self, text: &str) {
        self.panel.print(text);
    }
}
