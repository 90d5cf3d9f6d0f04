//! Dashboard renderer: latest readings, metric histories and the grid layout.
//!
//! ```text
//! +---------------------------+---------+
//! | CO2   value  [  plot  ]   | PM10    |
//! +---------------------------+---------+
//! | Temp  value  [  plot  ]   | TVOC    |
//! +---------------------------+---------+
//! | Humid value  [  plot  ]   | quality |
//! +---------------------------+---------+
//! ```
//!
//! Only valid readings reach the dashboard state. An invalid reading leaves
//! the previous value on screen and appends nothing to the histories.

use core::fmt::Write;

use heapless::String;

use crate::canvas::Canvas;
use crate::colors::PAPER;
use crate::config::{
    CO2_PLOT_RANGE,
    DISPLAY_HEIGHT,
    DISPLAY_WIDTH,
    GRID_DX,
    GRID_DY,
    HISTORY_CAPACITY,
    HUMIDITY_PLOT_RANGE,
    TEMPERATURE_PLOT_RANGE,
    Y_OFFSET,
};
use crate::history::{RollingHistory, Sample, to_sample};
use crate::quality::{QualityLevel, judge_quality};
use crate::readings::{Co2Reading, ParticulateReading, Reading, VocReading};
use crate::styles::Font;
use crate::widgets::{draw_data_cell, draw_plot_cell, draw_status_cell, print_at};

/// History buffer of one dashboard metric.
pub type MetricHistory = RollingHistory<HISTORY_CAPACITY>;

/// Formatted cell value ("1234", "21.30").
type ValueText = String<16>;

/// Text shown while the sensors warm up.
pub const HEAT_UP_MESSAGE: &str = "Preparing sensors...";

/// Anchor of the grid cell at `column`, `row`.
const fn cell_anchor(
    column: u32,
    row: u32,
) -> (i32, i32) {
    ((column * GRID_DX) as i32, (row * GRID_DY + Y_OFFSET) as i32)
}

/// Latest readings plus the CO2, temperature and humidity histories.
#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    co2: Co2Reading,
    particulate: ParticulateReading,
    voc: VocReading,
    co2_history: MetricHistory,
    temperature_history: MetricHistory,
    humidity_history: MetricHistory,
}

impl Dashboard {
    pub const fn new() -> Self {
        Self {
            co2: Co2Reading::new(0, 0.0, 0.0),
            particulate: ParticulateReading::new(0.0, 0.0, 0.0, 0.0),
            voc: VocReading::new(0, 0, 0, 0),
            co2_history: RollingHistory::new(),
            temperature_history: RollingHistory::new(),
            humidity_history: RollingHistory::new(),
        }
    }

    /// Store a CO2 reading and append it to the three histories.
    ///
    /// Returns `false` (and changes nothing) for an invalid reading.
    pub fn set_co2(
        &mut self,
        reading: Co2Reading,
    ) -> bool {
        if !reading.is_valid() {
            return false;
        }

        self.co2 = reading;
        self.co2_history.append(Sample::from(reading.co2_ppm));
        self.temperature_history.append(to_sample(reading.temperature_c));
        self.humidity_history.append(to_sample(reading.humidity_percent));
        true
    }

    /// Store a particulate reading. Returns `false` for an invalid reading.
    pub fn set_particulate(
        &mut self,
        reading: ParticulateReading,
    ) -> bool {
        if !reading.is_valid() {
            return false;
        }
        self.particulate = reading;
        true
    }

    /// Store a VOC reading. Returns `false` for an invalid reading.
    pub fn set_voc(
        &mut self,
        reading: VocReading,
    ) -> bool {
        if !reading.is_valid() {
            return false;
        }
        self.voc = reading;
        true
    }

    #[inline]
    pub const fn co2(&self) -> &Co2Reading { &self.co2 }

    #[inline]
    pub const fn particulate(&self) -> &ParticulateReading { &self.particulate }

    #[inline]
    pub const fn voc(&self) -> &VocReading { &self.voc }

    #[inline]
    pub const fn co2_history(&self) -> &MetricHistory { &self.co2_history }

    #[inline]
    pub const fn temperature_history(&self) -> &MetricHistory { &self.temperature_history }

    #[inline]
    pub const fn humidity_history(&self) -> &MetricHistory { &self.humidity_history }

    /// Verdict for the current readings, `None` before the first valid CO2 reading.
    pub fn quality(&self) -> Option<QualityLevel> {
        if !self.co2.is_valid() {
            return None;
        }
        Some(judge_quality(&self.voc, &self.co2, &self.particulate))
    }

    /// Draw the full grid and request a full panel refresh.
    ///
    /// Returns the verdict shown in the status cell.
    pub fn render<C>(
        &self,
        canvas: &mut C,
    ) -> Option<QualityLevel>
    where
        C: Canvas + ?Sized,
    {
        canvas.clear();
        canvas.fill_background(PAPER);

        let mut value: ValueText = String::new();

        let (x, y) = cell_anchor(0, 0);
        let _ = write!(value, "{}", self.co2.co2_ppm);
        draw_plot_cell(canvas, x, y, "CO2", "ppm", &value, self.co2_history.as_slice(), CO2_PLOT_RANGE);

        let (x, y) = cell_anchor(2, 0);
        value.clear();
        let _ = write!(value, "{:.2}", self.particulate.pm10);
        draw_data_cell(canvas, x, y, "PM10", "ug/m3", &value);

        let (x, y) = cell_anchor(0, 1);
        value.clear();
        let _ = write!(value, "{:.2}", self.co2.temperature_c);
        draw_plot_cell(
            canvas,
            x,
            y,
            "Temp",
            "C",
            &value,
            self.temperature_history.as_slice(),
            TEMPERATURE_PLOT_RANGE,
        );

        let (x, y) = cell_anchor(2, 1);
        value.clear();
        let _ = write!(value, "{}", self.voc.tvoc_ppb);
        draw_data_cell(canvas, x, y, "TVOC", "ppb", &value);

        let (x, y) = cell_anchor(0, 2);
        value.clear();
        let _ = write!(value, "{:.2}", self.co2.humidity_percent);
        draw_plot_cell(
            canvas,
            x,
            y,
            "Humid",
            "%",
            &value,
            self.humidity_history.as_slice(),
            HUMIDITY_PLOT_RANGE,
        );

        let level = self.quality();
        let (x, y) = cell_anchor(2, 2);
        draw_status_cell(canvas, x, y, level);

        canvas.present(true);
        level
    }
}

/// Wipe the panel and show the warm-up message.
pub fn draw_heat_up_screen<C>(canvas: &mut C)
where
    C: Canvas + ?Sized,
{
    canvas.clear();
    canvas.fill_background(PAPER);
    print_at(
        canvas,
        (DISPLAY_WIDTH / 5) as i32,
        (DISPLAY_HEIGHT / 2) as i32,
        Some(Font::Title),
        HEAT_UP_MESSAGE,
    );
    canvas.present(true);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::test_support::{DrawCall, RecordingCanvas};
    use crate::widgets::QUALITY_PLACEHOLDER;

    fn co2(
        co2_ppm: u16,
        temperature_c: f32,
        humidity_percent: f32,
    ) -> Co2Reading {
        Co2Reading::new(co2_ppm, temperature_c, humidity_percent).validated()
    }

    #[test]
    fn test_valid_co2_feeds_three_histories() {
        let mut dashboard = Dashboard::new();
        assert!(dashboard.set_co2(co2(612, 21.9, 45.6)));

        assert_eq!(dashboard.co2_history().as_slice(), &[612]);
        assert_eq!(dashboard.temperature_history().as_slice(), &[21]);
        assert_eq!(dashboard.humidity_history().as_slice(), &[45]);
        assert_eq!(dashboard.co2().co2_ppm, 612);
    }

    #[test]
    fn test_negative_temperature_truncates_toward_zero() {
        let mut dashboard = Dashboard::new();
        dashboard.set_co2(co2(612, -3.7, 45.0));
        assert_eq!(dashboard.temperature_history().latest(), Some(-3));
    }

    #[test]
    fn test_invalid_readings_are_ignored() {
        let mut dashboard = Dashboard::new();
        dashboard.set_co2(co2(700, 22.0, 40.0));
        dashboard.set_particulate(ParticulateReading::new(1.0, 2.0, 3.0, 4.0).validated());

        assert!(!dashboard.set_co2(Co2Reading::default()));
        assert!(!dashboard.set_particulate(ParticulateReading::default()));
        assert!(!dashboard.set_voc(VocReading::default()));

        // Stale values stay, nothing is appended
        assert_eq!(dashboard.co2().co2_ppm, 700);
        assert!((dashboard.particulate().pm10 - 4.0).abs() < f32::EPSILON);
        assert_eq!(dashboard.co2_history().len(), 1);
        assert_eq!(dashboard.temperature_history().len(), 1);
        assert_eq!(dashboard.humidity_history().len(), 1);
    }

    #[test]
    fn test_history_capacity_is_one_column() {
        let mut dashboard = Dashboard::new();
        for ppm in 0..100u16 {
            dashboard.set_co2(co2(500 + ppm, 20.0, 40.0));
        }
        let history = dashboard.co2_history();
        assert_eq!(history.len(), GRID_DX as usize);
        assert_eq!(history.as_slice().first(), Some(&512));
        assert_eq!(history.latest(), Some(599));
    }

    #[test]
    fn test_render_frame_order() {
        let dashboard = Dashboard::new();
        let mut canvas = RecordingCanvas::new();
        dashboard.render(&mut canvas);

        assert_eq!(canvas.calls.first(), Some(&DrawCall::Clear));
        assert_eq!(canvas.calls.get(1), Some(&DrawCall::Fill(PAPER)));
        assert_eq!(canvas.calls.last(), Some(&DrawCall::Present { full_refresh: true }));
        assert_eq!(canvas.rects().len(), 6);
    }

    #[test]
    fn test_render_values() {
        let mut dashboard = Dashboard::new();
        dashboard.set_co2(co2(1200, 22.5, 41.25));
        dashboard.set_particulate(ParticulateReading::new(1.0, 2.0, 3.0, 12.345).validated());
        dashboard.set_voc(VocReading::new(87, 400, 0, 0).validated());

        let mut canvas = RecordingCanvas::new();
        let level = dashboard.render(&mut canvas);

        assert_eq!(level, Some(QualityLevel::Bad));
        assert_eq!(
            canvas.texts(),
            vec![
                "CO2", "1200", "ppm", "PM10", "12.35", "ug/m3", "Temp", "22.50", "C", "TVOC", "87", "ppb", "Humid",
                "41.25", "%", "bad",
            ]
        );
        assert_eq!(canvas.text_at("TVOC").map(|(at, _)| at), Some(Point::new(180, 77)));
    }

    #[test]
    fn test_fresh_dashboard_shows_no_verdict() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.quality(), None);

        let mut canvas = RecordingCanvas::new();
        assert_eq!(dashboard.render(&mut canvas), None);

        let texts = canvas.texts();
        assert!(!texts.contains(&"good"));
        assert!(!texts.contains(&"bad"));
        assert_eq!(texts.last(), Some(&QUALITY_PLACEHOLDER));
    }

    #[test]
    fn test_verdict_ignores_particulate_and_voc_alone() {
        let mut dashboard = Dashboard::new();
        dashboard.set_particulate(ParticulateReading::new(1.0, 2.0, 3.0, 4.0).validated());
        dashboard.set_voc(VocReading::new(87, 400, 0, 0).validated());
        assert_eq!(dashboard.quality(), None);

        dashboard.set_co2(co2(600, 21.0, 40.0));
        assert_eq!(dashboard.quality(), Some(QualityLevel::Good));
    }

    #[test]
    fn test_render_plots_after_two_readings() {
        let mut dashboard = Dashboard::new();
        dashboard.set_co2(co2(500, 20.0, 40.0));
        dashboard.set_co2(co2(900, 25.0, 55.0));

        let mut canvas = RecordingCanvas::new();
        dashboard.render(&mut canvas);

        assert_eq!(canvas.lines().len(), 3);
        assert_eq!(canvas.hlines().len(), 6);
        assert!(canvas.texts().contains(&"1500"));
    }

    #[test]
    fn test_heat_up_screen() {
        let mut canvas = RecordingCanvas::new();
        draw_heat_up_screen(&mut canvas);

        assert_eq!(canvas.text_at(HEAT_UP_MESSAGE), Some((Point::new(52, 88), Some(Font::Title))));
        assert_eq!(canvas.calls.last(), Some(&DrawCall::Present { full_refresh: true }));
    }
}
