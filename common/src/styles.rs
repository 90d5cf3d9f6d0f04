//! Font selection and pre-computed text styles.
//!
//! The dashboard uses three faces: a bold title face, a larger face for the
//! current value and the panel's small default face for units and axis
//! labels. Styles are `const` so no style object is built per frame.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use profont::{PROFONT_12_POINT, PROFONT_14_POINT};

use crate::colors::INK;

/// Selectable text faces. `None` at the canvas level means the default face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Font {
    /// Cell titles ("CO2", "PM10", ...).
    Title,
    /// Current sensor values.
    Value,
}

/// Ink style for the default face.
pub const DEFAULT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, INK);

/// Ink style for cell titles.
pub const TITLE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_12_POINT, INK);

/// Ink style for current values.
pub const VALUE_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_14_POINT, INK);

/// Resolve the canvas font selection to a text style.
pub const fn style_for(font: Option<Font>) -> MonoTextStyle<'static, BinaryColor> {
    match font {
        Some(Font::Title) => TITLE_STYLE,
        Some(Font::Value) => VALUE_STYLE,
        None => DEFAULT_STYLE,
    }
}
