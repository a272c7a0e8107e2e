//! Chord geometry: the horizontal span a text row may use inside a circle.
//!
//! The span shrinks as a row approaches the top or bottom of the circle, so it
//! is recomputed for every row the wrapper visits and never cached.
//!
//! # Integer Chord
//!
//! `dx = sqrt(r² - dy²)` is computed with `u64::isqrt`, i.e. rounded toward the
//! circle center. Both end points therefore sit inside the true chord and
//! within 1px of it, so the width may fall up to 2px short of the exact chord.
//! The whole computation stays exact and float-free.

/// Horizontal span `[x_left, x_right)` available on one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RowSpan {
    pub x_left: i32,
    pub x_right: i32,
}

impl RowSpan {
    /// Usable width in pixels. Always positive for a span returned by [`row_bounds`].
    #[inline]
    pub const fn width(&self) -> i32 { self.x_right - self.x_left }
}

/// Span of row `y` inside the circle `(cx, cy, r)`, inset by `margin` on both ends.
///
/// Returns `None` when the row lies on or outside the circle, or when the
/// margin consumes the whole chord.
pub fn row_bounds(
    cx: i32,
    cy: i32,
    r: i32,
    y: i32,
    margin: i32,
) -> Option<RowSpan> {
    let dy = i64::from(y) - i64::from(cy);
    let rr = i64::from(r) * i64::from(r);
    let ddy = dy * dy;
    if r <= 0 || ddy >= rr {
        return None;
    }

    let dx = ((rr - ddy) as u64).isqrt() as i64;
    let x_left = i64::from(cx) - dx + i64::from(margin);
    let x_right = i64::from(cx) + dx - i64::from(margin);
    if x_right <= x_left {
        return None;
    }

    Some(RowSpan {
        x_left: x_left as i32,
        x_right: x_right as i32,
    })
}

// =============================================================================
// Tests
// =============================================================================
