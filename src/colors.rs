//! Color constants for the round TFT.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue, which
//! is the native format of the GC9A01 panel and needs no conversion.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Background outside and inside the circle.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Default text color for every region.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure yellow (31, 63, 0). Used by the simulator for touch coordinates.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Dark gray for guides (circle outline, band edges).
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
