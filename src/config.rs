//! Display geometry and text-region configuration.
//!
//! # Regions
//!
//! A [`RegionConfig`] describes where a block of text may live: the circle that
//! bounds every line horizontally, and the vertical band `[top_y, bottom_y]`
//! the block is placed in. Regions are plain `Copy` values built with `const`
//! methods, so presets like [`STATUS_REGION`] cost nothing at runtime.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;

use crate::colors::WHITE;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (GC9A01 round TFT: 240x240).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Radius of the visible circle. Two pixels short of half the panel so the
/// outermost ring, which is partially masked by the bezel, is never used.
pub const DISPLAY_RADIUS: i32 = 118;

const _: () = assert!(DISPLAY_RADIUS > 0);
const _: () = assert!(DISPLAY_RADIUS <= CENTER_X && DISPLAY_RADIUS <= CENTER_Y);

// =============================================================================
// Layout Limits
// =============================================================================

/// Capacity of the line being assembled, in bytes.
///
/// Sized for the longest status message plus slack. A candidate line that
/// would not fit is treated like a line that is too wide.
pub const LINE_BUFFER_LEN: usize = 64;

/// Line height used when the font reports a zero-height reference string.
pub const FALLBACK_LINE_HEIGHT: u32 = 8;

/// Reference string measured to size line advances before any text is known.
pub const LINE_HEIGHT_REFERENCE: &str = "Ay";

const _: () = assert!(LINE_BUFFER_LEN >= 4);

// =============================================================================
// Region Configuration
// =============================================================================

/// Circle and band a block of text is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionConfig {
    /// Circle center X, pixels.
    pub cx: i32,
    /// Circle center Y, pixels.
    pub cy: i32,
    /// Circle radius, pixels.
    pub r: i32,
    /// First row of the reserved band.
    pub top_y: i32,
    /// Last row of the reserved band; no line extends below it.
    pub bottom_y: i32,
    /// Inward horizontal inset applied on both ends of every row.
    pub margin: i32,
    /// Extra vertical space between lines (and added once per explicit break).
    pub line_gap: i32,
    /// Integer font magnification, 1 = native font size.
    pub scale: u8,
    /// Text color.
    pub color: Rgb565,
}

impl RegionConfig {
    /// Full-screen region on the default round panel.
    pub const fn new() -> Self {
        Self {
            cx: CENTER_X,
            cy: CENTER_Y,
            r: DISPLAY_RADIUS,
            top_y: 20,
            bottom_y: 220,
            margin: 6,
            line_gap: 4,
            scale: 2,
            color: WHITE,
        }
    }

    /// Replace the bounding circle.
    #[must_use]
    pub const fn with_circle(
        mut self,
        center: Point,
        r: i32,
    ) -> Self {
        self.cx = center.x;
        self.cy = center.y;
        self.r = r;
        self
    }

    /// Replace the reserved band.
    #[must_use]
    pub const fn with_band(
        mut self,
        top_y: i32,
        bottom_y: i32,
    ) -> Self {
        self.top_y = top_y;
        self.bottom_y = bottom_y;
        self
    }

    #[must_use]
    pub const fn with_margin(
        mut self,
        margin: i32,
    ) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub const fn with_line_gap(
        mut self,
        line_gap: i32,
    ) -> Self {
        self.line_gap = line_gap;
        self
    }

    #[must_use]
    pub const fn with_scale(
        mut self,
        scale: u8,
    ) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_color(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.color = color;
        self
    }

    /// Circle center as a point.
    #[inline]
    pub const fn center(&self) -> Point { Point::new(self.cx, self.cy) }

    /// Height of the reserved band, never negative.
    #[inline]
    pub const fn band_height(&self) -> i32 {
        let h = self.bottom_y - self.top_y;
        if h > 0 { h } else { 0 }
    }

    /// Font scale with a floor of 1, so a zeroed config still renders.
    #[inline]
    pub const fn effective_scale(&self) -> u8 { if self.scale == 0 { 1 } else { self.scale } }

    /// Whether the config satisfies the documented ranges
    /// (`r > 0`, `bottom_y > top_y`, `margin >= 0`, `line_gap >= 0`, `scale >= 1`).
    ///
    /// Layout never requires this; an invalid region just places no text.
    pub const fn is_valid(&self) -> bool {
        self.r > 0 && self.bottom_y > self.top_y && self.margin >= 0 && self.line_gap >= 0 && self.scale >= 1
    }
}

impl Default for RegionConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Presets
// =============================================================================

/// Status line band near the top of the round panel.
pub const STATUS_REGION: RegionConfig = RegionConfig::new()
    .with_band(6, 52)
    .with_margin(8)
    .with_line_gap(2);

/// Coordinates / hint band near the bottom of the round panel.
pub const COORDS_REGION: RegionConfig = RegionConfig::new()
    .with_band(188, 236)
    .with_margin(8)
    .with_line_gap(2);

const _: () = assert!(STATUS_REGION.is_valid());
const _: () = assert!(COORDS_REGION.is_valid());
const _: () = assert!(STATUS_REGION.bottom_y < COORDS_REGION.top_y);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(CENTER_X, 120);
        assert_eq!(CENTER_Y, 120);
        assert_eq!(DISPLAY_RADIUS, 118);
    }

    #[test]
    fn test_presets_share_circle() {
        assert_eq!(STATUS_REGION.center(), COORDS_REGION.center());
        assert_eq!(STATUS_REGION.r, COORDS_REGION.r);
        assert_eq!((STATUS_REGION.top_y, STATUS_REGION.bottom_y), (6, 52));
        assert_eq!((COORDS_REGION.top_y, COORDS_REGION.bottom_y), (188, 236));
        assert_eq!(STATUS_REGION.scale, 2);
        assert_eq!(STATUS_REGION.color, WHITE);
    }

    #[test]
    fn test_band_height_never_negative() {
        assert_eq!(STATUS_REGION.band_height(), 46);
        let inverted = RegionConfig::new().with_band(100, 40);
        assert_eq!(inverted.band_height(), 0);
        assert!(!inverted.is_valid());
    }

    #[test]
    fn test_effective_scale() {
        assert_eq!(RegionConfig::new().with_scale(0).effective_scale(), 1);
        assert_eq!(RegionConfig::new().with_scale(3).effective_scale(), 3);
    }

    #[test]
    fn test_builder_circle() {
        let cfg = RegionConfig::new().with_circle(Point::new(50, 60), 40);
        assert_eq!((cfg.cx, cfg.cy, cfg.r), (50, 60, 40));
        assert!(cfg.is_valid());
    }
}
