//! HD44780 16x2 character LCD behind a PCF8574 I2C backpack.
//!
//! The controller runs in 4-bit mode: every byte goes out as two nibbles,
//! each strobed with the enable line high then low, with the backlight
//! bit held on throughout.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes nibble frames over I2C via hw_init.
//! On host/test: renders into an in-memory 2x16 character frame for
//! assertion by tests.

use crate::pins;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

pub const LCD_ROWS: usize = 2;
pub const LCD_COLS: usize = 16;

// PCF8574 bit assignments.
const BACKLIGHT: u8 = 0x08;
const ENABLE: u8 = 0x04;
const REG_SELECT: u8 = 0x01;

pub struct Lcd1602 {
    addr: u8,
    cursor: (u8, u8),
    #[cfg(not(target_os = "espidf"))]
    frame: [[u8; LCD_COLS]; LCD_ROWS],
}

impl Lcd1602 {
    pub fn new() -> Self {
        Self {
            addr: pins::LCD_I2C_ADDR,
            cursor: (0, 0),
            #[cfg(not(target_os = "espidf"))]
            frame: [[b' '; LCD_COLS]; LCD_ROWS],
        }
    }

    /// Power-on initialization: the three-times-0x30 wake dance, then
    /// 4-bit mode, two-line 5x8 font, display on, cursor off.
    pub fn init(&mut self) {
        delay_ms(50);
        for _ in 0..3 {
            self.send_cmd(0x30);
            delay_ms(10);
        }
        self.send_cmd(0x20); // 4-bit mode
        delay_ms(10);
        self.send_cmd(0x28); // two lines, 5x8 font
        delay_ms(2);
        self.send_cmd(0x08); // display off
        delay_ms(2);
        self.send_cmd(0x01); // clear
        delay_ms(5);
        self.send_cmd(0x06); // entry mode: increment, no shift
        delay_ms(2);
        self.send_cmd(0x0C); // display on, cursor off
        delay_ms(2);
    }

    pub fn clear(&mut self) {
        self.send_cmd(0x01);
        delay_ms(2);
        self.cursor = (0, 0);
        #[cfg(not(target_os = "espidf"))]
        {
            self.frame = [[b' '; LCD_COLS]; LCD_ROWS];
        }
    }

    /// Move the write position.  Row 1 starts at DDRAM 0x40.
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        let base = if row == 0 { 0x80 } else { 0xC0 };
        self.send_cmd(base + col);
        self.cursor = (row.min(1), col);
    }

    pub fn print(&mut self, text: &str) {
        for &b in text.as_bytes() {
            self.send_data(b);
        }
    }

    /// Rendered frame contents for one row, trailing spaces trimmed
    /// (host/test builds only).
    #[cfg(not(target_os = "espidf"))]
    pub fn row_text(&self, row: usize) -> &str {
        let bytes = &self.frame[row.min(LCD_ROWS - 1)];
        let end = bytes
            .iter()
            .rposition(|&b| b != b' ')
            .map_or(0, |i| i + 1);
        // Frame cells only ever hold ASCII written through print().
        core::str::from_utf8(&bytes[..end]).unwrap_or("")
    }

    // ── Nibble protocol ───────────────────────────────────────

    fn send_cmd(&mut self, cmd: u8) {
        self.send_byte(cmd, 0);
    }

    fn send_data(&mut self, data: u8) {
        self.send_byte(data, REG_SELECT);
        #[cfg(not(target_os = "espidf"))]
        {
            let (row, col) = self.cursor;
            if (col as usize) < LCD_COLS {
                self.frame[row as usize][col as usize] = data;
            }
            self.cursor.1 = col.saturating_add(1);
        }
    }

    #[cfg(target_os = "espidf")]
    fn send_byte(&mut self, byte: u8, rs: u8) {
        let hi = byte & 0xF0;
        let lo = (byte << 4) & 0xF0;
        let frame = [
            hi | BACKLIGHT | ENABLE | rs,
            hi | BACKLIGHT | rs,
            lo | BACKLIGHT | ENABLE | rs,
            lo | BACKLIGHT | rs,
        ];
        hw_init::i2c_write(self.addr, &frame);
    }

    #[cfg(not(target_os = "espidf"))]
    fn send_byte(&mut self, _byte: u8, _rs: u8) {
        let _ = (self.addr, BACKLIGHT, ENABLE);
    }
}

impl Default for Lcd1602 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "espidf")]
fn delay_ms(ms: u32) {
    esp_idf_svc::hal::delay::FreeRtos::delay_ms(ms);
}

#[cfg(not(target_os = "espidf"))]
fn delay_ms(_ms: u32) {}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;

    #[test]
    fn print_lands_at_cursor() {
        let mut lcd = Lcd1602::new();
        lcd.init();
        lcd.set_cursor(0, 0);
        lcd.print("MQ2: 1.23V");
        lcd.set_cursor(1, 0);
        lcd.print("MQ135: 0.45V");
        assert_eq!(lcd.row_text(0), "MQ2: 1.23V");
        assert_eq!(lcd.row_text(1), "MQ135: 0.45V");
    }

    #[test]
    fn clear_blanks_both_rows() {
        let mut lcd = Lcd1602::new();
        lcd.print("garbage");
        lcd.clear();
        assert_eq!(lcd.row_text(0), "");
        assert_eq!(lcd.row_text(1), "");
    }

    #[test]
    fn writes_past_column_16_are_dropped() {
        let mut lcd = Lcd1602::new();
        lcd.set_cursor(0, 14);
        lcd.print("ABCD");
        assert_eq!(lcd.row_text(0).len(), LCD_COLS);
        assert!(lcd.row_text(0).ends_with("AB"));
    }
}
