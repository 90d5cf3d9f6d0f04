//! Grid cells: value cells, history plot cells and the quality status cell.
//!
//! Every cell is anchored at `(x, y)` where `y` already includes
//! `Y_OFFSET`, the top of the cell frame sits `Y_OFFSET` pixels above it.

use embedded_graphics::prelude::*;

use crate::canvas::Canvas;
use crate::colors::INK;
use crate::config::{
    DATA_UNIT_INSET_X,
    GRID_DX,
    GRID_DY,
    LINE_HEIGHT,
    PLOT_ORIGIN_INSET,
    PLOT_UNIT_INSET_X,
    TITLE_INSET,
    UNIT_DROP,
    VALUE_INSET_X,
    Y_OFFSET,
};
use crate::history::Sample;
use crate::quality::QualityLevel;
use crate::styles::Font;

use super::primitives::{draw_history_plot, print_at};

fn draw_cell_frame<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    columns: u32,
) where
    C: Canvas + ?Sized,
{
    canvas.draw_rect(Point::new(x, y - Y_OFFSET as i32), Size::new(columns * GRID_DX, GRID_DY), INK);
}

fn draw_title_and_value<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    title: &str,
    value: &str,
) where
    C: Canvas + ?Sized,
{
    print_at(canvas, x + TITLE_INSET, y + TITLE_INSET, Some(Font::Title), title);
    print_at(canvas, x + VALUE_INSET_X, y + LINE_HEIGHT as i32, Some(Font::Value), value);
}

/// Single-column cell with title, current value and unit.
pub fn draw_data_cell<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    title: &str,
    unit: &str,
    value: &str,
) where
    C: Canvas + ?Sized,
{
    draw_title_and_value(canvas, x, y, title, value);
    print_at(canvas, x + DATA_UNIT_INSET_X, y + LINE_HEIGHT as i32 + UNIT_DROP, None, unit);
    draw_cell_frame(canvas, x, y, 1);
}

/// Two-column cell with title, current value, unit and a history plot.
#[allow(clippy::too_many_arguments)]
pub fn draw_plot_cell<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    title: &str,
    unit: &str,
    value: &str,
    history: &[Sample],
    range: (Sample, Sample),
) where
    C: Canvas + ?Sized,
{
    draw_title_and_value(canvas, x, y, title, value);
    print_at(canvas, x + PLOT_UNIT_INSET_X, y + LINE_HEIGHT as i32, None, unit);

    draw_history_plot(
        canvas,
        x + GRID_DX as i32 - PLOT_ORIGIN_INSET,
        y - PLOT_ORIGIN_INSET,
        history,
        range,
    );

    draw_cell_frame(canvas, x, y, 2);
}

/// Status text shown while there is no verdict.
pub const QUALITY_PLACEHOLDER: &str = "--";

/// Single-column cell showing the air-quality verdict, or a placeholder
/// when there is none yet.
pub fn draw_status_cell<C>(
    canvas: &mut C,
    x: i32,
    y: i32,
    level: Option<QualityLevel>,
) where
    C: Canvas + ?Sized,
{
    canvas.set_font(Some(Font::Value));
    draw_cell_frame(canvas, x, y, 1);
    canvas.set_cursor(Point::new(x + (GRID_DX / 4) as i32, y + (GRID_DY / 3) as i32));
    canvas.print(level.map_or(QUALITY_PLACEHOLDER, QualityLevel::label));
}

// =============================================================================
// Unit Tests
// =============================================================================
