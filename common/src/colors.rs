//! Color constants for the e-paper panel.
//!
//! The panel is driven as a monochrome surface: `BinaryColor::On` is ink,
//! `BinaryColor::Off` is the bare paper. Widgets never name `BinaryColor`
//! variants directly so the mapping stays in one place.

use embedded_graphics::pixelcolor::BinaryColor;

/// Ink (black pixels). Used for text, frames, rules and plot lines.
pub const INK: BinaryColor = BinaryColor::On;

/// Paper (white pixels). Used to wipe the frame before each render.
pub const PAPER: BinaryColor = BinaryColor::Off;
