//! Draw-sink capability and its embedded-graphics implementation.
//!
//! [`DrawSink`] mirrors the small cursor-based text API of classic display
//! drivers: position a cursor, pick color and scale, print a line. The engine
//! only ever prints left-anchored lines at an explicit cursor.
//!
//! [`TextCanvas`] implements it over any `DrawTarget<Color = Rgb565>`. Scale is
//! an integer magnification: each font pixel becomes a `scale x scale` block,
//! so a line measures exactly what [`MonoMetrics`] reports for the same font.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use crate::colors::WHITE;
use crate::metrics::MonoMetrics;

/// Left-anchored text output at a cursor.
pub trait DrawSink {
    /// Top-left corner of the next printed line.
    fn set_cursor(
        &mut self,
        position: Point,
    );

    fn set_color(
        &mut self,
        color: Rgb565,
    );

    /// Integer font magnification for subsequent lines.
    fn set_scale(
        &mut self,
        scale: u8,
    );

    /// Print `text` at the cursor with the current color and scale.
    fn print_line(
        &mut self,
        text: &str,
    );
}

/// [`DrawSink`] rendering a monospaced font into an embedded-graphics target.
pub struct TextCanvas<'d, D> {
    display: &'d mut D,
    font: &'static MonoFont<'static>,
    cursor: Point,
    color: Rgb565,
    scale: u8,
}

impl<'d, D> TextCanvas<'d, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Canvas with the cursor at the origin, white text, scale 1.
    pub fn new(
        display: &'d mut D,
        font: &'static MonoFont<'static>,
    ) -> Self {
        Self {
            display,
            font,
            cursor: Point::zero(),
            color: WHITE,
            scale: 1,
        }
    }

    /// Metrics that match what this canvas draws.
    #[inline]
    pub const fn metrics(&self) -> MonoMetrics { MonoMetrics::new(self.font) }

    /// The wrapped target, for drawing anything that is not text.
    pub fn display(&mut self) -> &mut D { &mut *self.display }
}

impl<D> DrawSink for TextCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn set_cursor(
        &mut self,
        position: Point,
    ) {
        self.cursor = position;
    }

    fn set_color(
        &mut self,
        color: Rgb565,
    ) {
        self.color = color;
    }

    fn set_scale(
        &mut self,
        scale: u8,
    ) {
        self.scale = scale.max(1);
    }

    fn print_line(
        &mut self,
        text: &str,
    ) {
        let style = MonoTextStyle::new(self.font, self.color);
        let line = Text::with_baseline(text, self.cursor, style, Baseline::Top);
        if self.scale == 1 {
            line.draw(&mut *self.display).ok();
        } else {
            let mut zoomed = Magnified {
                target: &mut *self.display,
                origin: self.cursor,
                factor: u32::from(self.scale),
            };
            line.draw(&mut zoomed).ok();
        }
    }
}

/// Draw target adapter that blows every pixel up into a `factor x factor` block
/// anchored at `origin`.
struct Magnified<'a, D> {
    target: &'a mut D,
    origin: Point,
    factor: u32,
}

impl<D: DrawTarget> Dimensions for Magnified<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let outer = self.target.bounding_box();
        let top_left = self.origin + (outer.top_left - self.origin) / self.factor as i32;
        Rectangle::new(top_left, outer.size / self.factor)
    }
}

impl<D: DrawTarget> DrawTarget for Magnified<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new_equal(self.factor);
        for Pixel(point, color) in pixels {
            let top_left = self.origin + (point - self.origin) * self.factor as i32;
            self.target.fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    use super::*;
    use crate::metrics::MetricsProvider;

    fn lit(display: &MockDisplay<Rgb565>) -> usize {
        display.bounding_box().points().filter(|&p| display.get_pixel(p).is_some()).count()
    }

    #[test]
    fn test_scale_one_matches_plain_text() {
        let mut expected: MockDisplay<Rgb565> = MockDisplay::new();
        Text::with_baseline("Hi", Point::new(3, 4), MonoTextStyle::new(&FONT_6X10, WHITE), Baseline::Top)
            .draw(&mut expected)
            .ok();

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let mut canvas = TextCanvas::new(&mut display, &FONT_6X10);
        canvas.set_cursor(Point::new(3, 4));
        canvas.print_line("Hi");

        display.assert_eq(&expected);
    }

    #[test]
    fn test_scale_two_magnifies_every_pixel() {
        let mut native: MockDisplay<Rgb565> = MockDisplay::new();
        {
            let mut canvas = TextCanvas::new(&mut native, &FONT_6X10);
            canvas.print_line("A:");
        }

        let mut zoomed: MockDisplay<Rgb565> = MockDisplay::new();
        {
            let mut canvas = TextCanvas::new(&mut zoomed, &FONT_6X10);
            canvas.set_scale(2);
            canvas.set_cursor(Point::new(1, 2));
            canvas.print_line("A:");
        }

        assert!(lit(&native) > 0);
        assert_eq!(lit(&zoomed), 4 * lit(&native));
        for p in native.bounding_box().points() {
            let Some(color) = native.get_pixel(p) else {
                continue;
            };
            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                let q = Point::new(1 + 2 * p.x + dx, 2 + 2 * p.y + dy);
                assert_eq!(zoomed.get_pixel(q), Some(color));
            }
        }
    }

    #[test]
    fn test_color_applies_to_printed_line() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let mut canvas = TextCanvas::new(&mut display, &FONT_6X10);
        canvas.set_color(Rgb565::RED);
        canvas.print_line("X");
        assert!(
            display
                .bounding_box()
                .points()
                .filter_map(|p| display.get_pixel(p))
                .all(|c| c == Rgb565::RED)
        );
    }

    #[test]
    fn test_zero_scale_renders_native() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let mut canvas = TextCanvas::new(&mut display, &FONT_6X10);
        canvas.set_scale(0);
        canvas.print_line("A");
        assert!(display.affected_area().size.width <= 6);
    }

    #[test]
    fn test_display_passthrough_is_unscaled() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let mut canvas = TextCanvas::new(&mut display, &FONT_6X10);
        canvas.set_scale(3);
        canvas.display().set_pixel(Point::new(5, 7), Some(Rgb565::GREEN));
        canvas.set_cursor(Point::new(20, 20));
        canvas.print_line("I");

        assert_eq!(display.get_pixel(Point::new(5, 7)), Some(Rgb565::GREEN));
        let area = display.affected_area();
        assert_eq!(area.top_left, Point::new(5, 7));
    }

    #[test]
    fn test_drawn_extent_within_metrics() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let mut canvas = TextCanvas::new(&mut display, &FONT_6X10);
        let expected = canvas.metrics().measure("MW", 2);
        canvas.set_scale(2);
        canvas.print_line("MW");
        let area = display.affected_area();
        assert!(area.top_left.x >= 0 && area.top_left.y >= 0);
        assert!(area.bottom_right().unwrap().x < expected.width as i32);
        assert!(area.bottom_right().unwrap().y < expected.height as i32);
    }
}
