//! Text measurement capability.
//!
//! The layout engine never looks at glyphs itself: it asks a [`MetricsProvider`]
//! how large a string would be at a given integer scale. [`MonoMetrics`] answers
//! that for any embedded-graphics monospaced font.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Baseline;
use embedded_graphics::text::renderer::TextRenderer;

use crate::colors::WHITE;
use crate::config::{FALLBACK_LINE_HEIGHT, LINE_HEIGHT_REFERENCE};

/// Pixel size of text rendered with the currently selected font.
///
/// Implementations must be deterministic and side-effect free: the measure and
/// draw passes rely on getting the same answer for the same input.
pub trait MetricsProvider {
    /// Size of `text` at `scale` (1 = native font size).
    fn measure(
        &self,
        text: &str,
        scale: u8,
    ) -> Size;

    /// Advance of one text line at `scale`, excluding any line gap.
    fn line_height(
        &self,
        scale: u8,
    ) -> u32 {
        let h = self.measure(LINE_HEIGHT_REFERENCE, scale).height;
        if h > 0 { h } else { FALLBACK_LINE_HEIGHT }
    }
}

impl<M: MetricsProvider + ?Sized> MetricsProvider for &M {
    fn measure(
        &self,
        text: &str,
        scale: u8,
    ) -> Size {
        (**self).measure(text, scale)
    }

    fn line_height(
        &self,
        scale: u8,
    ) -> u32 {
        (**self).line_height(scale)
    }
}

/// Metrics of a monospaced embedded-graphics font, magnified by an integer scale.
#[derive(Clone, Copy)]
pub struct MonoMetrics {
    font: &'static MonoFont<'static>,
}

impl MonoMetrics {
    pub const fn new(font: &'static MonoFont<'static>) -> Self { Self { font } }

    /// The measured font.
    #[inline]
    pub const fn font(&self) -> &'static MonoFont<'static> { self.font }
}

impl MetricsProvider for MonoMetrics {
    fn measure(
        &self,
        text: &str,
        scale: u8,
    ) -> Size {
        // Color does not affect metrics.
        let style = MonoTextStyle::<Rgb565>::new(self.font, WHITE);
        let size = style
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box
            .size;
        size * u32::from(scale.max(1))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};

    use super::*;

    #[test]
    fn test_mono_width_scales_with_char_count() {
        let metrics = MonoMetrics::new(&FONT_6X10);
        assert_eq!(metrics.measure("A", 1).width, 6);
        assert_eq!(metrics.measure("EVT", 1).width, 18);
        assert_eq!(metrics.measure("EVT", 2).width, 36);
        assert_eq!(metrics.measure("EVT:BOOT", 2).width, 96);
    }

    #[test]
    fn test_mono_line_height() {
        assert_eq!(MonoMetrics::new(&FONT_6X10).line_height(1), 10);
        assert_eq!(MonoMetrics::new(&FONT_6X10).line_height(2), 20);
        assert_eq!(MonoMetrics::new(&FONT_10X20).line_height(3), 60);
    }

    #[test]
    fn test_zero_scale_measures_as_native() {
        let metrics = MonoMetrics::new(&FONT_6X10);
        assert_eq!(metrics.measure("AB", 0), metrics.measure("AB", 1));
    }

    struct Flat;

    impl MetricsProvider for Flat {
        fn measure(
            &self,
            text: &str,
            _scale: u8,
        ) -> Size {
            Size::new(text.len() as u32, 0)
        }
    }

    #[test]
    fn test_line_height_falls_back_on_zero_height() {
        assert_eq!(Flat.line_height(2), FALLBACK_LINE_HEIGHT);
    }
}
