//! Fixed calibration settings applied every time a sensor starts measuring.
//!
//! Settings are plain values handed to a session at construction. They are
//! never persisted; a power cycle re-applies the compiled-in defaults.

use crate::config::{
    CO2_ALTITUDE_M,
    CO2_TEMPERATURE_OFFSET_C,
    PARTICULATE_FAN_CLEANING_DAYS,
    VOC_ECO2_BASELINE,
    VOC_TVOC_BASELINE,
};

/// Environment compensation for the CO2 sensor.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Co2Settings {
    /// Altitude above sea level, in meters.
    pub altitude_m: u16,
    /// Temperature offset in degrees Celsius.
    pub temperature_offset_c: f32,
}

impl Co2Settings {
    pub const fn new(
        altitude_m: u16,
        temperature_offset_c: f32,
    ) -> Self {
        Self {
            altitude_m,
            temperature_offset_c,
        }
    }
}

impl Default for Co2Settings {
    fn default() -> Self { Self::new(CO2_ALTITUDE_M, CO2_TEMPERATURE_OFFSET_C) }
}

/// Maintenance settings for the particulate sensor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ParticulateSettings {
    /// Interval between automatic fan cleanings, in days.
    pub fan_cleaning_interval_days: u8,
}

impl Default for ParticulateSettings {
    fn default() -> Self {
        Self {
            fan_cleaning_interval_days: PARTICULATE_FAN_CLEANING_DAYS,
        }
    }
}

/// Baselines restored into the VOC sensor's on-chip compensation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VocSettings {
    pub eco2_baseline: u16,
    pub tvoc_baseline: u16,
}

impl Default for VocSettings {
    fn default() -> Self {
        Self {
            eco2_baseline: VOC_ECO2_BASELINE,
            tvoc_baseline: VOC_TVOC_BASELINE,
        }
    }
}
