//! Low-level drawing primitives shared across cells.

use embedded_graphics::prelude::*;
use log::debug;

use crate::canvas::Canvas;
use crate::colors::INK;
use crate::config::{LEGEND_FONT_OFFSET, LEGEND_PADDING, PLOT_HEIGHT, PLOT_MARGIN_TOP, PLOT_WIDTH};
use crate::history::Sample;
use crate::plot::scale;
use crate::styles::Font;

/// Print `text` at an absolute position in the given face.
pub fn print_at<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    font: Option<Font>,
    text: &str,
) where
    C: Canvas + ?Sized,
{
    canvas.set_font(font);
    canvas.set_cursor(Point::new(x, y));
    canvas.print(text);
}

/// Draw a history plot with its top and bottom rules and three value labels.
///
/// `(x, y)` is the top-left corner of the plot block; the plot area starts
/// `PLOT_MARGIN_TOP` pixels lower. The expected range is widened to the
/// observed samples. Fewer than two samples or a collapsed range draw nothing.
pub fn draw_history_plot<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    samples: &[Sample],
    range: (Sample, Sample),
) where
    C: Canvas + ?Sized,
{
    let plot = match scale(samples, range.0, range.1, Size::new(PLOT_WIDTH, PLOT_HEIGHT)) {
        Ok(plot) => plot,
        Err(e) => {
            debug!("plot skipped: {}", e);
            return;
        }
    };
    let Some(labels) = plot.labels() else {
        return;
    };

    let area = Point::new(x, y + PLOT_MARGIN_TOP as i32);
    for segment in plot.segments() {
        canvas.draw_line(area + segment.start, area + segment.end, INK);
    }

    canvas.draw_hline(area, PLOT_WIDTH, INK);
    canvas.draw_hline(area + Point::new(0, PLOT_HEIGHT as i32), PLOT_WIDTH, INK);

    let legend_x = x + PLOT_WIDTH as i32 + LEGEND_PADDING;
    for label in labels.as_array() {
        print_at(canvas, legend_x, area.y + label.y + LEGEND_FONT_OFFSET, None, &label.text());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
