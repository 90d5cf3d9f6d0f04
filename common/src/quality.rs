//! Overall air-quality verdict.

use crate::readings::{Co2Reading, ParticulateReading, VocReading};
use crate::thresholds::{is_bad_co2, is_bad_humidity};

/// Binary air-quality verdict, recomputed every refresh.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QualityLevel {
    Good,
    Bad,
}

impl QualityLevel {
    /// Text shown in the status cell.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
        }
    }
}

/// Classify the current air quality.
///
/// BAD when CO2 exceeds [`CO2_BAD_PPM`](crate::thresholds::CO2_BAD_PPM) or
/// humidity exceeds [`HUMIDITY_BAD_PERCENT`](crate::thresholds::HUMIDITY_BAD_PERCENT).
/// Particulate and VOC readings are accepted but do not influence the verdict yet.
pub fn judge_quality(
    _voc: &VocReading,
    co2: &Co2Reading,
    _particulate: &ParticulateReading,
) -> QualityLevel {
    if is_bad_co2(co2.co2_ppm) || is_bad_humidity(co2.humidity_percent) {
        QualityLevel::Bad
    } else {
        QualityLevel::Good
    }
}
