//! Air-quality threshold configuration.
//!
//! All thresholds are compile-time constants. Each group carries `const`
//! assertions so a misconfigured threshold fails the build instead of
//! silently flipping the verdict.

use crate::config::CO2_PLOT_RANGE;

// =============================================================================
// CO2 Thresholds
// =============================================================================

/// Above this concentration the room needs ventilation (verdict BAD).
pub const CO2_BAD_PPM: u16 = 1000;

// The threshold must be visible on the CO2 plot
const _: () = assert!((CO2_BAD_PPM as i32) > CO2_PLOT_RANGE.0 && (CO2_BAD_PPM as i32) < CO2_PLOT_RANGE.1);

// =============================================================================
// Humidity Thresholds
// =============================================================================

/// Above this relative humidity mould growth becomes likely (verdict BAD).
pub const HUMIDITY_BAD_PERCENT: f32 = 60.0;

const _: () = assert!(HUMIDITY_BAD_PERCENT > 0.0 && HUMIDITY_BAD_PERCENT < 100.0);

/// Check if a CO2 concentration calls for ventilation.
#[inline]
pub const fn is_bad_co2(co2_ppm: u16) -> bool { co2_ppm > CO2_BAD_PPM }

/// Check if a relative humidity is too high.
#[inline]
pub fn is_bad_humidity(humidity_percent: f32) -> bool { humidity_percent > HUMIDITY_BAD_PERCENT }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bad_co2_boundary() {
        assert!(!is_bad_co2(999));
        assert!(!is_bad_co2(1000), "exactly 1000 ppm is still acceptable");
        assert!(is_bad_co2(1001));
    }

    #[test]
    fn test_is_bad_humidity_boundary() {
        assert!(!is_bad_humidity(59.9));
        assert!(!is_bad_humidity(60.0), "exactly 60% is still acceptable");
        assert!(is_bad_humidity(60.1));
    }
}
