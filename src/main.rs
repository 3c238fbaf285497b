//! Gas Sentry Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-cadence cooperative loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter      UartLink        LcdDisplay         │
//! │  (Sensor+Actuator)    (LinkPort)      (DisplayPort)      │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           AppService (pure logic)              │      │
//! │  │  telemetry · alerts · paging · commands        │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  link_rx byte ring · MonotonicClock (10 ms tick)         │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use gassentry::adapters::hardware::HardwareAdapter;
use gassentry::adapters::lcd::LcdDisplay;
use gassentry::adapters::time::MonotonicClock;
use gassentry::adapters::uart_link::UartLink;
use gassentry::app::service::AppService;
use gassentry::config::SystemConfig;
use gassentry::drivers::lcd1602::Lcd1602;
use gassentry::{drivers, link_rx};

const SPLASH_HOLD_MS: u64 = 1500;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("Gas Sentry v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Boot splash ────────────────────────────────────────
    let mut panel = Lcd1602::new();
    panel.init();
    panel.print("Gas Sentry");
    panel.set_cursor(1, 0);
    panel.print("System Ready");
    std::thread::sleep(std::time::Duration::from_millis(SPLASH_HOLD_MS));
    panel.clear();

    // ── 4. Construct adapters + app service ───────────────────
    let config = SystemConfig::default();
    let mut hw = HardwareAdapter::new();
    let mut link = UartLink::new();
    let mut display = LcdDisplay::new(panel);
    let clock = MonotonicClock::new();
    let mut app = AppService::new(&config);

    drivers::uart::start_rx_pump();

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        let now_ms = clock.now_ms();

        link_rx::drain_bytes(|byte| app.feed_byte(byte));
        app.tick(now_ms, &mut hw, &mut link, &mut display);

        std::thread::sleep(std::time::Duration::from_millis(u64::from(
            config.loop_tick_ms,
        )));
    }
}
