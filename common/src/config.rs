//! Display, layout and sensor configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! The grid is derived from the panel resolution split into thirds. Every
//! cell offset is a `const` so the render pass does no layout arithmetic
//! beyond adding the cell anchor.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (2.7" tri-color e-paper, landscape).
pub const DISPLAY_WIDTH: u32 = 264;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 176;

// =============================================================================
// Grid Layout (3 x 3)
// =============================================================================

/// Width of one grid column.
pub const GRID_DX: u32 = DISPLAY_WIDTH / 3;

/// Height of one grid row.
pub const GRID_DY: u32 = DISPLAY_HEIGHT / 3;

/// Vertical distance from a cell's anchor to its value line.
pub const LINE_HEIGHT: u32 = GRID_DY / 2;

/// Text baseline offset of a cell anchor below the top of its frame.
pub const Y_OFFSET: u32 = 15;

/// Title position relative to the cell anchor.
pub const TITLE_INSET: i32 = 4;

/// Horizontal value position relative to the cell anchor.
pub const VALUE_INSET_X: i32 = 10;

/// Horizontal unit position in a data cell.
pub const DATA_UNIT_INSET_X: i32 = 50;

/// Horizontal unit position in a plot cell (plot values are wider).
pub const PLOT_UNIT_INSET_X: i32 = 55;

/// Unit text sits slightly below the value baseline (small font).
pub const UNIT_DROP: i32 = 3;

// =============================================================================
// Plot Geometry
// =============================================================================

/// Distance from the plot origin to the right edge of the value column.
pub const PLOT_ORIGIN_INSET: i32 = 15;

/// Space above the plotted area.
pub const PLOT_MARGIN_TOP: u32 = 6;

/// Space right of the plotted area reserved for the axis labels.
pub const PLOT_MARGIN_RIGHT: u32 = 20;

/// Space below the plotted area.
pub const PLOT_MARGIN_BOTTOM: u32 = 6;

/// Plotted area width for a one-column plot span.
pub const PLOT_WIDTH: u32 = GRID_DX - PLOT_MARGIN_RIGHT;

/// Plotted area height for a one-row plot span.
pub const PLOT_HEIGHT: u32 = GRID_DY - PLOT_MARGIN_TOP - PLOT_MARGIN_BOTTOM;

/// Gap between the plotted area and its labels.
pub const LEGEND_PADDING: i32 = 3;

/// Label text is raised so its middle sits on the rule it annotates.
pub const LEGEND_FONT_OFFSET: i32 = -3;

// =============================================================================
// History Configuration
// =============================================================================

/// Samples kept per tracked metric: one per pixel of a grid column.
pub const HISTORY_CAPACITY: usize = GRID_DX as usize;

/// Lower bound reported by an empty history.
pub const HISTORY_SENTINEL_MIN: i32 = i16::MIN as i32;

/// Upper bound reported by an empty history.
pub const HISTORY_SENTINEL_MAX: i32 = i16::MAX as i32;

// =============================================================================
// Expected Plot Ranges
// =============================================================================

/// CO2 plot range in ppm (outdoor air up to a poorly ventilated room).
pub const CO2_PLOT_RANGE: (i32, i32) = (400, 1500);

/// Temperature plot range in whole degrees Celsius.
pub const TEMPERATURE_PLOT_RANGE: (i32, i32) = (10, 40);

/// Relative humidity plot range in whole percent.
pub const HUMIDITY_PLOT_RANGE: (i32, i32) = (0, 100);

// =============================================================================
// Sensor Timing and Calibration Defaults
// =============================================================================

/// The CO2 sensor needs more than a second after power-up before it answers.
pub const CO2_POWER_UP_DELAY_MS: u32 = 1000;

/// Wait between triggering a CO2 single shot and polling for its result.
pub const CO2_SINGLE_SHOT_DELAY_MS: u32 = 500;

/// Installation altitude above sea level, in meters.
pub const CO2_ALTITUDE_M: u16 = 0;

/// Self-heating compensation applied by the CO2 sensor, in degrees Celsius.
pub const CO2_TEMPERATURE_OFFSET_C: f32 = 0.0;

/// Particulate sensor fan auto-cleaning interval, in days.
pub const PARTICULATE_FAN_CLEANING_DAYS: u8 = 4;

/// eCO2 baseline from a previous VOC sensor calibration run.
pub const VOC_ECO2_BASELINE: u16 = 37120;

/// TVOC baseline from a previous VOC sensor calibration run.
pub const VOC_TVOC_BASELINE: u16 = 39100;

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_display() {
        assert!(GRID_DX * 3 <= DISPLAY_WIDTH);
        assert!(GRID_DY * 3 <= DISPLAY_HEIGHT);
        assert_eq!(GRID_DX, 88);
        assert_eq!(GRID_DY, 58);
    }

    #[test]
    fn test_plot_area_is_positive() {
        assert_eq!(PLOT_WIDTH, 68);
        assert_eq!(PLOT_HEIGHT, 46);
    }

    #[test]
    fn test_plot_ranges_are_ordered() {
        assert!(CO2_PLOT_RANGE.0 < CO2_PLOT_RANGE.1);
        assert!(TEMPERATURE_PLOT_RANGE.0 < TEMPERATURE_PLOT_RANGE.1);
        assert!(HUMIDITY_PLOT_RANGE.0 < HUMIDITY_PLOT_RANGE.1);
    }

    #[test]
    fn test_history_capacity_matches_column() {
        assert_eq!(HISTORY_CAPACITY, 88);
        assert!(HISTORY_SENTINEL_MIN < HISTORY_SENTINEL_MAX);
    }
}
