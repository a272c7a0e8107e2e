//! Two-pass layout: measure the wrapped block, align it, draw it.
//!
//! The measure pass wraps from the top of the band to learn the block height.
//! That height picks the start row for the requested [`VerticalAlign`], and
//! the draw pass wraps again from there, printing each line on the sink.
//!
//! # Configured engine
//!
//! [`CircleText`] holds a default [`RegionConfig`] for callers that always draw
//! into the same region. It is an ordinary value: construct it with
//! [`CircleText::new`], swap the region with [`CircleText::configure`]. Nothing
//! is shared between engines, and [`draw_with_config`] needs no engine at all.

use crate::canvas::DrawSink;
use crate::config::RegionConfig;
use crate::metrics::MetricsProvider;
pub use crate::wrap::LayoutResult;
use crate::wrap::{DrawLines, MeasureOnly, WrapContext, wrap_text};

/// Vertical placement of the wrapped block inside the band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// First row of a block `total_height` px tall, never above `region.top_y`.
pub fn start_row(
    region: &RegionConfig,
    total_height: u32,
    align: VerticalAlign,
) -> i32 {
    let total = total_height.min(i32::MAX as u32) as i32;
    let y = match align {
        VerticalAlign::Top => region.top_y,
        VerticalAlign::Center => region.top_y + ((region.band_height() - total) / 2).max(0),
        VerticalAlign::Bottom => region.bottom_y.saturating_sub(total),
    };
    y.max(region.top_y)
}

/// Measure pass only: wrap from `region.top_y` without drawing.
pub fn measure_with_config<M>(
    region: &RegionConfig,
    metrics: &M,
    text: &str,
) -> LayoutResult
where
    M: MetricsProvider + ?Sized,
{
    let cx = WrapContext::new(region, metrics);
    wrap_text(&cx, text, region.top_y, &mut MeasureOnly)
}

/// Lay out and draw `text` in an explicit region.
///
/// Returns the draw pass result: lines actually printed, their extent from the
/// aligned start row, and whether text was dropped. Text with no tokens makes
/// no calls on `sink` at all.
pub fn draw_with_config<M, S>(
    region: &RegionConfig,
    metrics: &M,
    sink: &mut S,
    text: &str,
    align: VerticalAlign,
) -> LayoutResult
where
    M: MetricsProvider + ?Sized,
    S: DrawSink + ?Sized,
{
    if text.trim_start_matches([' ', '\n']).is_empty() {
        return LayoutResult::default();
    }

    let cx = WrapContext::new(region, metrics);
    let measured = wrap_text(&cx, text, region.top_y, &mut MeasureOnly);
    let start_y = start_row(region, measured.height, align);
    trace!("circle text: {} lines, {}px tall, start row {}", measured.lines, measured.height, start_y);

    sink.set_color(region.color);
    sink.set_scale(region.effective_scale());
    let drawn = wrap_text(&cx, text, start_y, &mut DrawLines::new(sink));
    if drawn.truncated {
        debug!("circle text: drew {} of the lines, rest truncated", drawn.lines);
    }
    drawn
}

/// Layout engine bound to a default region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CircleText {
    region: RegionConfig,
}

impl CircleText {
    pub const fn new(region: RegionConfig) -> Self { Self { region } }

    /// Replace the default region used by [`draw`](Self::draw) and [`measure`](Self::measure).
    pub fn configure(
        &mut self,
        region: RegionConfig,
    ) {
        info!("circle text: band {}..{}, scale {}", region.top_y, region.bottom_y, region.scale);
        self.region = region;
    }

    #[inline]
    pub const fn region(&self) -> &RegionConfig { &self.region }

    /// Measure pass in the default region.
    pub fn measure<M>(
        &self,
        metrics: &M,
        text: &str,
    ) -> LayoutResult
    where
        M: MetricsProvider + ?Sized,
    {
        measure_with_config(&self.region, metrics, text)
    }

    /// Draw in the default region. See [`draw_with_config`].
    pub fn draw<M, S>(
        &self,
        metrics: &M,
        sink: &mut S,
        text: &str,
        align: VerticalAlign,
    ) -> LayoutResult
    where
        M: MetricsProvider + ?Sized,
        S: DrawSink + ?Sized,
    {
        draw_with_config(&self.region, metrics, sink, text, align)
    }
}

// =============================================================================
// Tests
// =============================================================================
