//! Combined climate sensor: NTC thermistor + analog humidity element.
//!
//! Temperature: 10 kΩ @ 25 °C NTC (B = 3950) in a voltage-divider with a
//! fixed 10 kΩ resistor, converted with the simplified Beta
//! (Steinhart-Hart) equation.  Humidity: HIH-4030-class ratiometric
//! element, linear voltage-to-RH transfer.
//!
//! A reading is valid only if **both** channels are off the rails; a railed
//! channel means a disconnected or shorted probe, and the whole pair is
//! rejected so the caller never sees a half-updated climate sample.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from static atomics for injection.

use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

use log::debug;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(2048);
static SIM_HUMIDITY_ADC: AtomicU16 = AtomicU16::new(2048);

/// Inject raw ADC counts for both climate channels (host/test only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_climate_adc(temp_raw: u16, humidity_raw: u16) {
    SIM_TEMP_ADC.store(temp_raw, Ordering::Relaxed);
    SIM_HUMIDITY_ADC.store(humidity_raw, Ordering::Relaxed);
}

// NTC thermistor constants.
const R25: f32 = 10_000.0;
const BETA: f32 = 3950.0;
const T25_K: f32 = 298.15;
const R_DIVIDER: f32 = 10_000.0;

// ADC and supply.
const ADC_MAX: f32 = 4095.0;
const V_REF: f32 = 3.3;
/// A channel within this margin of either rail is treated as faulted.
const RAIL_MARGIN_V: f32 = 0.01;

// HIH-4030 transfer: Vout = Vsupply * (0.0062 * RH + 0.16).
const HUMIDITY_OFFSET: f32 = 0.16;
const HUMIDITY_SLOPE: f32 = 0.0062;

/// One calibrated temperature + humidity pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

pub struct ClimateSensor {
    _temp_adc_gpio: i32,
    _humidity_adc_gpio: i32,
}

impl ClimateSensor {
    pub fn new(temp_adc_gpio: i32, humidity_adc_gpio: i32) -> Self {
        Self {
            _temp_adc_gpio: temp_adc_gpio,
            _humidity_adc_gpio: humidity_adc_gpio,
        }
    }

    /// Read both channels.  Err means at least one channel is railed and
    /// the whole pair must be discarded by the caller.
    pub fn read(&mut self) -> Result<ClimateReading, SensorError> {
        let temp_raw = self.read_temp_adc();
        let humidity_raw = self.read_humidity_adc();

        let temperature_c = adc_to_celsius(temp_raw)?;
        let humidity_pct = adc_to_relative_humidity(humidity_raw)?;

        debug!(
            "climate: {:.1}C {:.0}%RH (raw {}/{})",
            temperature_c, humidity_pct, temp_raw, humidity_raw
        );
        Ok(ClimateReading {
            temperature_c,
            humidity_pct,
        })
    }

    #[cfg(target_os = "espidf")]
    fn read_temp_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_TEMP)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_temp_adc(&self) -> u16 {
        SIM_TEMP_ADC.load(Ordering::Relaxed)
    }

    #[cfg(target_os = "espidf")]
    fn read_humidity_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_HUMIDITY)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_humidity_adc(&self) -> u16 {
        SIM_HUMIDITY_ADC.load(Ordering::Relaxed)
    }
}

fn channel_voltage(raw: u16) -> Result<f32, SensorError> {
    let voltage = (raw as f32 / ADC_MAX) * V_REF;
    if voltage <= RAIL_MARGIN_V || voltage >= (V_REF - RAIL_MARGIN_V) {
        return Err(SensorError::OutOfRange);
    }
    Ok(voltage)
}

fn adc_to_celsius(raw: u16) -> Result<f32, SensorError> {
    let voltage = channel_voltage(raw)?;
    let r_ntc = R_DIVIDER * voltage / (V_REF - voltage);
    let inv_t = (1.0 / T25_K) + (1.0 / BETA) * (r_ntc / R25).ln();
    if inv_t <= 0.0 {
        return Err(SensorError::OutOfRange);
    }
    Ok((1.0 / inv_t) - 273.15)
}

fn adc_to_relative_humidity(raw: u16) -> Result<f32, SensorError> {
    let voltage = channel_voltage(raw)?;
    let rh = (voltage / V_REF - HUMIDITY_OFFSET) / HUMIDITY_SLOPE;
    Ok(rh.clamp(0.0, 100.0))
}
