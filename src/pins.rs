//! GPIO / peripheral pin assignments for the GasSentry main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ-2 combustible-gas sensor — analog voltage via resistive divider.
/// ADC1 channel 3 (GPIO 4 on ESP32-S3).
pub const MQ2_ADC_GPIO: i32 = 4;
/// ADC1 channel index for the MQ-2.
pub const MQ2_ADC_CHANNEL: u32 = 3;

/// MQ-135 smoke / air-quality sensor — analog voltage via resistive divider.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const MQ135_ADC_GPIO: i32 = 5;
/// ADC1 channel index for the MQ-135.
pub const MQ135_ADC_CHANNEL: u32 = 4;

// ---------------------------------------------------------------------------
// Actuators — digital outputs, HIGH = active
// ---------------------------------------------------------------------------

/// Piezo buzzer (direct drive).
pub const BUZZER_GPIO: i32 = 6;
/// Relay module coil input (ventilation mains switch).
pub const RELAY_GPIO: i32 = 7;
/// Exhaust fan MOSFET gate.
pub const FAN_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// I²C bus — 16x2 character LCD behind a PCF8574 backpack
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;

/// 7-bit PCF8574 backpack address, pre-shifted for the 8-bit write form.
pub const LCD_I2C_ADDR: u8 = 0x27;

// ---------------------------------------------------------------------------
// UART — remote command link (HC-05 style serial bridge)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
/// Link baud rate.
pub const UART_BAUD: u32 = 9600;
