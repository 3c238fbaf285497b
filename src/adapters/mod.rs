//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to              |
//! |-------------|--------------|--------------------------|
//! | `hardware`  | SensorPort   | ESP32 ADC oneshot        |
//! |             | ActuatorPort | ESP32 GPIO outputs       |
//! | `lcd`       | DisplayPort  | HD44780 over I2C         |
//! | `uart_link` | LinkPort     | Command UART TX          |
//! | `time`      | —            | ESP32 high-res timer     |

pub mod hardware;
pub mod lcd;
pub mod time;
pub mod uart_link;
