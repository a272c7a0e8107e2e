//! Test doubles for the metrics and draw capabilities.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::canvas::DrawSink;
use crate::metrics::MetricsProvider;

/// Every glyph advances `advance * scale` pixels; lines are `height * scale` tall.
#[derive(Clone, Copy)]
pub struct FixedAdvance {
    pub advance: u32,
    pub height: u32,
}

impl FixedAdvance {
    /// Classic 6x8 GFX font: 12px glyphs and 16px lines at scale 2.
    pub const GFX: Self = Self { advance: 6, height: 8 };
}

impl MetricsProvider for FixedAdvance {
    fn measure(
        &self,
        text: &str,
        scale: u8,
    ) -> Size {
        let scale = u32::from(scale.max(1));
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return Size::zero();
        }
        Size::new(chars * self.advance * scale, self.height * scale)
    }
}

/// One call received by [`Recorder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Cursor(i32, i32),
    Color(Rgb565),
    Scale(u8),
    Print(String),
}

/// Draw sink that records every call in order.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Recorder {
    /// Printed lines paired with the cursor they were printed at.
    pub fn lines(&self) -> Vec<(String, i32, i32)> {
        let mut cursor = (0, 0);
        let mut out = Vec::new();
        for call in &self.calls {
            match call {
                Call::Cursor(x, y) => cursor = (*x, *y),
                Call::Print(text) => out.push((text.clone(), cursor.0, cursor.1)),
                Call::Color(_) | Call::Scale(_) => {}
            }
        }
        out
    }
}

impl DrawSink for Recorder {
    fn set_cursor(
        &mut self,
        position: Point,
    ) {
        self.calls.push(Call::Cursor(position.x, position.y));
    }

    fn set_color(
        &mut self,
        color: Rgb565,
    ) {
        self.calls.push(Call::Color(color));
    }

    fn set_scale(
        &mut self,
        scale: u8,
    ) {
        self.calls.push(Call::Scale(scale));
    }

    fn print_line(
        &mut self,
        text: &str,
    ) {
        self.calls.push(Call::Print(text.to_string()));
    }
}
