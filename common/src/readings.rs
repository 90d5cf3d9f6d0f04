//! Per-sensor reading types.
//!
//! Every reading carries a `valid` flag. The zero-valued `Default` is the
//! "nothing this cycle" reading a session hands out on any failure; its
//! numeric fields must never be plotted or classified.

use core::fmt;

/// Common surface of the three reading types.
pub trait Reading: Copy + Default + fmt::Display {
    /// Check if the reading came from a successful, plausible measurement.
    fn is_valid(&self) -> bool;

    /// Check if the raw values make physical sense.
    ///
    /// A bus transfer can succeed and still return a value the sensor only
    /// reports while it is warming up (e.g. 0 ppm CO2).
    fn is_plausible(&self) -> bool { true }

    /// Mark the reading as valid.
    fn validated(self) -> Self;
}

// =============================================================================
// CO2 / Temperature / Humidity
// =============================================================================

/// Output of the photoacoustic CO2 sensor (SCD4x class).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Co2Reading {
    /// CO2 concentration in ppm.
    pub co2_ppm: u16,
    /// Temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity in percent.
    pub humidity_percent: f32,
    pub valid: bool,
}

impl Co2Reading {
    /// Create an unvalidated reading from raw sensor values.
    pub const fn new(
        co2_ppm: u16,
        temperature_c: f32,
        humidity_percent: f32,
    ) -> Self {
        Self {
            co2_ppm,
            temperature_c,
            humidity_percent,
            valid: false,
        }
    }
}

impl Reading for Co2Reading {
    fn is_valid(&self) -> bool { self.valid }

    fn is_plausible(&self) -> bool { self.co2_ppm != 0 }

    fn validated(self) -> Self { Self { valid: true, ..self } }
}

impl fmt::Display for Co2Reading {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "Co2: {}ppm\tTemperature: {:.2}°C\tHumidity: {:.2}%",
            self.co2_ppm, self.temperature_c, self.humidity_percent
        )
    }
}

// =============================================================================
// Particulate Matter
// =============================================================================

/// Mass concentrations from the optical particulate sensor (SPS30 class), in µg/m³.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ParticulateReading {
    pub pm1_0: f32,
    pub pm2_5: f32,
    pub pm4_0: f32,
    pub pm10: f32,
    pub valid: bool,
}

impl ParticulateReading {
    /// Create an unvalidated reading from raw sensor values.
    pub const fn new(
        pm1_0: f32,
        pm2_5: f32,
        pm4_0: f32,
        pm10: f32,
    ) -> Self {
        Self {
            pm1_0,
            pm2_5,
            pm4_0,
            pm10,
            valid: false,
        }
    }
}

impl Reading for ParticulateReading {
    fn is_valid(&self) -> bool { self.valid }

    fn validated(self) -> Self { Self { valid: true, ..self } }
}

impl fmt::Display for ParticulateReading {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "PM1: {:.2}μg/m3\tPM2.5: {:.2}μg/m3\tPM4.0: {:.2}μg/m3\tPM10.0: {:.2}μg/m3",
            self.pm1_0, self.pm2_5, self.pm4_0, self.pm10
        )
    }
}

// =============================================================================
// Volatile Organic Compounds
// =============================================================================

/// Output of the metal-oxide gas sensor (SGP30 class).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VocReading {
    /// Total VOC in ppb.
    pub tvoc_ppb: u16,
    /// Current TVOC baseline of the on-chip compensation.
    pub tvoc_baseline: u16,
    /// Equivalent CO2 in ppm.
    pub eco2_ppm: u16,
    /// Current eCO2 baseline of the on-chip compensation.
    pub eco2_baseline: u16,
    pub valid: bool,
}

impl VocReading {
    /// Create an unvalidated reading from raw sensor values.
    pub const fn new(
        tvoc_ppb: u16,
        eco2_ppm: u16,
        tvoc_baseline: u16,
        eco2_baseline: u16,
    ) -> Self {
        Self {
            tvoc_ppb,
            tvoc_baseline,
            eco2_ppm,
            eco2_baseline,
            valid: false,
        }
    }
}

impl Reading for VocReading {
    fn is_valid(&self) -> bool { self.valid }

    fn validated(self) -> Self { Self { valid: true, ..self } }
}

impl fmt::Display for VocReading {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "TVOC: {}ppb\tTVOC baseline: {}\teCO2: {}ppm\teCO2 baseline: {}",
            self.tvoc_ppb, self.tvoc_baseline, self.eco2_ppm, self.eco2_baseline
        )
    }
}
