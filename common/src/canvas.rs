//! Drawing capability used by the dashboard renderer.
//!
//! [`Canvas`] is the small cursor-based surface the renderer needs from a
//! panel: frame and line primitives, a text cursor with a selectable face and
//! a `present` call that pushes the frame to the glass.
//!
//! [`GraphicsCanvas`] implements it for any embedded-graphics
//! `DrawTarget<Color = BinaryColor>` (the e-paper framebuffer, the desktop
//! simulator window, `MockDisplay` in tests). E-paper refreshes are slow and
//! owned by the platform loop, so `present` only records the request; the
//! loop collects it with [`GraphicsCanvas::take_refresh`].
//!
//! # Text Placement
//!
//! With a face selected the cursor is the text baseline, with the default
//! face it is the top-left corner of the first glyph. Printing advances the
//! cursor past the printed text.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text, TextStyle, TextStyleBuilder};

use crate::colors::PAPER;
use crate::styles::{Font, style_for};

/// Baseline-anchored text for the selectable faces.
const FACE_TEXT: TextStyle = TextStyleBuilder::new().baseline(Baseline::Alphabetic).build();

/// Top-anchored text for the default face.
const DEFAULT_TEXT: TextStyle = TextStyleBuilder::new().baseline(Baseline::Top).build();

/// Drawing surface consumed by the renderer.
pub trait Canvas {
    /// Wipe the frame to paper and reset cursor and face.
    fn clear(&mut self);

    /// Fill the whole frame with `color`.
    fn fill_background(
        &mut self,
        color: BinaryColor,
    );

    /// Move the text cursor.
    fn set_cursor(
        &mut self,
        position: Point,
    );

    /// Current text cursor.
    fn cursor(&self) -> Point;

    /// Select a face, `None` for the default face.
    fn set_font(
        &mut self,
        font: Option<Font>,
    );

    /// Print `text` at the cursor and advance it.
    fn print(
        &mut self,
        text: &str,
    );

    /// Draw a one-pixel frame.
    fn draw_rect(
        &mut self,
        top_left: Point,
        size: Size,
        color: BinaryColor,
    );

    /// Draw a one-pixel line between two points (both inclusive).
    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: BinaryColor,
    );

    /// Draw a horizontal line `length` pixels long starting at `start`.
    fn draw_hline(
        &mut self,
        start: Point,
        length: u32,
        color: BinaryColor,
    );

    /// Push the frame to the panel.
    fn present(
        &mut self,
        full_refresh: bool,
    );
}

/// [`Canvas`] over an embedded-graphics draw target.
pub struct GraphicsCanvas<D> {
    target: D,
    cursor: Point,
    font: Option<Font>,
    pending_refresh: Option<bool>,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a draw target.
    pub const fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            font: None,
            pending_refresh: None,
        }
    }

    /// Borrow the draw target (e.g. to hand the framebuffer to a window).
    #[inline]
    pub const fn target(&self) -> &D { &self.target }

    /// Borrow the draw target mutably.
    #[inline]
    pub fn target_mut(&mut self) -> &mut D { &mut self.target }

    /// Take the pending refresh request, if the renderer presented a frame.
    ///
    /// Returns `Some(full_refresh)`; several presents since the last call
    /// collapse into one, full if any of them asked for a full refresh.
    pub fn take_refresh(&mut self) -> Option<bool> { self.pending_refresh.take() }

    /// Unwrap the draw target.
    pub fn into_inner(self) -> D { self.target }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) {
        self.target.clear(PAPER).ok();
        self.cursor = Point::zero();
        self.font = None;
    }

    fn fill_background(
        &mut self,
        color: BinaryColor,
    ) {
        self.target.clear(color).ok();
    }

    fn set_cursor(
        &mut self,
        position: Point,
    ) {
        self.cursor = position;
    }

    fn cursor(&self) -> Point { self.cursor }

    fn set_font(
        &mut self,
        font: Option<Font>,
    ) {
        self.font = font;
    }

    fn print(
        &mut self,
        text: &str,
    ) {
        let text_style = if self.font.is_some() { FACE_TEXT } else { DEFAULT_TEXT };
        let drawn = Text::with_text_style(text, self.cursor, style_for(self.font), text_style).draw(&mut self.target);
        if let Ok(next) = drawn {
            self.cursor = next;
        }
    }

    fn draw_rect(
        &mut self,
        top_left: Point,
        size: Size,
        color: BinaryColor,
    ) {
        Rectangle::new(top_left, size)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .ok();
    }

    fn draw_line(
        &mut self,
        start: Point,
        end: Point,
        color: BinaryColor,
    ) {
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .ok();
    }

    fn draw_hline(
        &mut self,
        start: Point,
        length: u32,
        color: BinaryColor,
    ) {
        if length == 0 {
            return;
        }
        let end = start + Point::new(length as i32 - 1, 0);
        self.draw_line(start, end, color);
    }

    fn present(
        &mut self,
        full_refresh: bool,
    ) {
        let full = full_refresh || self.pending_refresh.unwrap_or(false);
        self.pending_refresh = Some(full);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::INK;

    fn mock_canvas() -> GraphicsCanvas<MockDisplay<BinaryColor>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        GraphicsCanvas::new(display)
    }

    #[test]
    fn test_hline_covers_length() {
        let mut canvas = mock_canvas();
        canvas.draw_hline(Point::new(2, 5), 4, INK);

        let display = canvas.target();
        assert_eq!(display.get_pixel(Point::new(1, 5)), None);
        assert_eq!(display.get_pixel(Point::new(2, 5)), Some(INK));
        assert_eq!(display.get_pixel(Point::new(5, 5)), Some(INK));
        assert_eq!(display.get_pixel(Point::new(6, 5)), None);
    }

    #[test]
    fn test_zero_length_hline_draws_nothing() {
        let mut canvas = mock_canvas();
        canvas.draw_hline(Point::new(2, 5), 0, INK);
        assert_eq!(canvas.target().get_pixel(Point::new(2, 5)), None);
    }

    #[test]
    fn test_line_endpoints_are_drawn() {
        let mut canvas = mock_canvas();
        canvas.draw_line(Point::new(0, 10), Point::new(10, 0), INK);
        assert_eq!(canvas.target().get_pixel(Point::new(0, 10)), Some(INK));
        assert_eq!(canvas.target().get_pixel(Point::new(10, 0)), Some(INK));
    }

    #[test]
    fn test_rect_is_outline_only() {
        let mut canvas = mock_canvas();
        canvas.draw_rect(Point::new(0, 0), Size::new(5, 5), INK);
        assert_eq!(canvas.target().get_pixel(Point::new(0, 0)), Some(INK));
        assert_eq!(canvas.target().get_pixel(Point::new(4, 4)), Some(INK));
        assert_eq!(canvas.target().get_pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn test_print_advances_cursor() {
        let mut canvas = mock_canvas();
        canvas.set_cursor(Point::new(0, 0));
        canvas.print("ab");
        // Default face is 6 pixels wide per glyph
        assert_eq!(canvas.cursor().x, 12);
    }

    #[test]
    fn test_clear_resets_cursor_and_font() {
        let mut canvas = mock_canvas();
        canvas.set_cursor(Point::new(20, 20));
        canvas.set_font(Some(Font::Title));
        canvas.clear();
        assert_eq!(canvas.cursor(), Point::zero());
        assert_eq!(canvas.font, None);
    }

    #[test]
    fn test_present_is_collected_once() {
        let mut canvas = mock_canvas();
        assert_eq!(canvas.take_refresh(), None);

        canvas.present(true);
        canvas.present(false);
        assert_eq!(canvas.take_refresh(), Some(true));
        assert_eq!(canvas.take_refresh(), None);

        canvas.present(false);
        assert_eq!(canvas.take_refresh(), Some(false));
    }
}
