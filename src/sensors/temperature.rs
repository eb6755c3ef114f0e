//! TMP36 analog temperature sensor.
//!
//! The part outputs 0.5 V at 0 °C and gains 10 mV per degree — a plain
//! linear conversion, no divider network or lookup table.
//!
//! ## Conversion
//!
//! ```text
//! celsius = (raw / 4096 × 3.3 V − 0.5 V) × 100
//! ```
//!
//! Example: 620 counts → 0.4995 V → ≈ 0 °C.
//!
//! ## Dual-target design
//!
//! - **ESP-IDF**: reads ADC1 CH8 through the oneshot unit configured in
//!   `hw_init`.
//! - **Host/test**: reads a static `AtomicU16` injectable through
//!   [`sim_set_temp_adc`].

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::AtomicU16;
#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::Ordering;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

/// Simulated raw ADC counts for host builds. Defaults to ≈ 4 °C —
/// a healthy cabinet.
#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(670);

/// Inject a raw ADC value for host-side tests and simulation.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

/// Full-scale ADC counts (12-bit oneshot read).
const ADC_COUNTS: f32 = 4096.0;
/// ADC reference voltage at 12 dB attenuation.
const V_REF: f32 = 3.3;
/// TMP36 output at 0 °C.
const TMP36_OFFSET_V: f32 = 0.5;
/// TMP36 gain: 10 mV/°C.
const TMP36_SCALE_C_PER_V: f32 = 100.0;

/// TMP36 driver bound to one ADC pin.
pub struct TemperatureSensor {
    _adc_gpio: i32,
}

impl TemperatureSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self { _adc_gpio: adc_gpio }
    }

    /// Instantaneous reading in °C.
    ///
    /// A disconnected sensor floats the input near 0 counts (≈ −50 °C)
    /// and a short pins it at full scale (≈ +280 °C); both land far
    /// outside the valid range, so the status resolver reports ERROR
    /// without this driver needing an error channel.
    pub fn read(&self) -> f32 {
        self.adc_to_celsius(self.read_adc())
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        hw_init::adc1_read(hw_init::ADC1_CH_TEMP)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_TEMP_ADC.load(Ordering::Relaxed)
    }

    fn adc_to_celsius(&self, raw: u16) -> f32 {
        let voltage = (f32::from(raw) / ADC_COUNTS) * V_REF;
        (voltage - TMP36_OFFSET_V) * TMP36_SCALE_C_PER_V
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.1
    }

    #[test]
    fn conversion_matches_tmp36_datasheet_points() {
        let sensor = TemperatureSensor::new(9);
        // 620 counts ≈ 0.4995 V ≈ 0 °C
        assert!(close(sensor.adc_to_celsius(620), 0.0));
        // 1241 counts ≈ 1.0 V ≈ 50 °C
        assert!(close(sensor.adc_to_celsius(1241), 50.0));
        // 670 counts ≈ 4 °C — nominal cabinet temperature
        assert!(close(sensor.adc_to_celsius(670), 4.0));
    }

    #[test]
    fn rail_readings_land_outside_valid_range() {
        let sensor = TemperatureSensor::new(9);
        // Floating input: 0 counts = -50 °C.
        assert!(sensor.adc_to_celsius(0) < -40.0);
        // Shorted to rail: full scale ≈ +280 °C.
        assert!(sensor.adc_to_celsius(4095) > 125.0);
    }

    #[test]
    fn sim_injection_reaches_read() {
        let sensor = TemperatureSensor::new(9);
        sim_set_temp_adc(1241);
        assert!(close(sensor.read(), 50.0));
        sim_set_temp_adc(670);
        assert!(close(sensor.read(), 4.0));
    }
}
