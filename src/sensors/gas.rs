//! MQ-series analog gas sensor channels.
//!
//! Reads the analog voltage output of an MQ2 (combustible gas) or MQ135
//! (smoke / air quality) sensor through an ESP32-S3 ADC channel and scales
//! the 12-bit raw count to volts against the 3.3 V rail.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the configured ADC1 channel via the oneshot API
//! (initialised by hw_init).
//! On host/test: reads from per-channel static `AtomicU16`s for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::app::context::GasReading;
use crate::pins;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Supply rail / ADC full-scale reference, volts.
const VREF: f32 = 3.3;
/// 12-bit ADC full scale.
const ADC_MAX: f32 = 4095.0;

#[cfg(not(target_os = "espidf"))]
static SIM_MQ2_ADC: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_MQ135_ADC: AtomicU16 = AtomicU16::new(0);

/// Inject a raw MQ2 ADC count (host/test builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_mq2_adc(raw: u16) {
    SIM_MQ2_ADC.store(raw, Ordering::Relaxed);
}

/// Inject a raw MQ135 ADC count (host/test builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_mq135_adc(raw: u16) {
    SIM_MQ135_ADC.store(raw, Ordering::Relaxed);
}

/// One analog channel.
pub struct GasChannel {
    adc_channel: u32,
    #[cfg(not(target_os = "espidf"))]
    sim: &'static AtomicU16,
}

impl GasChannel {
    /// MQ2 channel on its board-assigned ADC input.
    pub fn mq2() -> Self {
        Self {
            adc_channel: pins::MQ2_ADC_CHANNEL,
            #[cfg(not(target_os = "espidf"))]
            sim: &SIM_MQ2_ADC,
        }
    }

    /// MQ135 channel on its board-assigned ADC input.
    pub fn mq135() -> Self {
        Self {
            adc_channel: pins::MQ135_ADC_CHANNEL,
            #[cfg(not(target_os = "espidf"))]
            sim: &SIM_MQ135_ADC,
        }
    }

    /// Sample the channel and return calibrated volts (0 – 3.3).
    /// A failed ADC read surfaces as 0 raw counts, not an error.
    pub fn read_volts(&mut self) -> f32 {
        let raw = self.read_adc();
        f32::from(raw) * VREF / ADC_MAX
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(self.adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        let _ = self.adc_channel;
        self.sim.load(Ordering::Relaxed)
    }
}

/// Both channels, sampled together once per loop tick.
pub struct GasSensorPair {
    mq2: GasChannel,
    mq135: GasChannel,
}

impl GasSensorPair {
    pub fn new(mq2: GasChannel, mq135: GasChannel) -> Self {
        Self { mq2, mq135 }
    }

    pub fn read_both(&mut self) -> GasReading {
        GasReading {
            mq2_v: self.mq2.read_volts(),
            mq135_v: self.mq135.read_volts(),
        }
    }
}
