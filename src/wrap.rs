//! Greedy word wrap against a row-varying width.
//!
//! One routine serves both layout passes. It is generic over a [`LineSink`]:
//! the measure pass hands lines to [`MeasureOnly`], which drops them, and the
//! draw pass hands them to [`DrawLines`], which forwards them to a
//! [`DrawSink`]. Both passes therefore break lines with identical control flow.
//!
//! # State
//!
//! All iteration state lives in a [`WrapState`] value. [`WrapState::step`]
//! consumes one token (a word, or an explicit `'\n'` break) and can be called
//! repeatedly to observe intermediate wrap states; [`WrapState::run`] steps to
//! completion.
//!
//! # Per-step rules
//!
//! - Spaces between tokens are skipped; `'\n'` flushes the current line and
//!   adds one extra line gap.
//! - A word joins the current line if the joined line fits the row (and the
//!   line buffer). Otherwise the line is flushed and the word retried on the
//!   next row.
//! - A word wider than its row is split with [`fit_within_width`]. Each chunk
//!   is flushed on a row of its own, so nothing joins the last chunk.
//! - A row outside the circle, or a line that would cross `bottom_y`, ends the
//!   pass. Nothing after that point is placed.

use embedded_graphics::prelude::Point;
use heapless::String;

use crate::canvas::DrawSink;
use crate::chunk::{clip_to_capacity, fit_within_width};
use crate::config::{LINE_BUFFER_LEN, RegionConfig};
use crate::geometry::{RowSpan, row_bounds};
use crate::metrics::MetricsProvider;

/// Receives each finished line with its top-left corner.
pub trait LineSink {
    fn place_line(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
    );
}

/// Measure mode: lines are counted by [`WrapState`] and otherwise discarded.
pub struct MeasureOnly;

impl LineSink for MeasureOnly {
    #[inline]
    fn place_line(
        &mut self,
        _text: &str,
        _x: i32,
        _y: i32,
    ) {
    }
}

/// Draw mode: every line is printed on the wrapped [`DrawSink`].
pub struct DrawLines<'s, S: ?Sized> {
    sink: &'s mut S,
}

impl<'s, S: DrawSink + ?Sized> DrawLines<'s, S> {
    pub fn new(sink: &'s mut S) -> Self { Self { sink } }
}

impl<S: DrawSink + ?Sized> LineSink for DrawLines<'_, S> {
    fn place_line(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
    ) {
        self.sink.set_cursor(Point::new(x, y));
        self.sink.print_line(text);
    }
}

/// Outcome of a layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayoutResult {
    /// Pixels from the start row to the bottom of the last placed line.
    pub height: u32,
    /// Number of lines placed.
    pub lines: usize,
    /// True when input was left over (band full or row outside the circle).
    pub truncated: bool,
}

/// Why a pass stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stop {
    /// All input was placed.
    Exhausted,
    /// The next row has no usable span (outside the circle or eaten by the margin).
    NoRow,
    /// The next line would extend past `bottom_y`.
    BandFull,
}

/// Inputs that stay fixed for a whole pass.
pub struct WrapContext<'a, M: ?Sized> {
    region: &'a RegionConfig,
    metrics: &'a M,
    scale: u8,
    line_height: i32,
    line_gap: i32,
}

impl<'a, M: MetricsProvider + ?Sized> WrapContext<'a, M> {
    pub fn new(
        region: &'a RegionConfig,
        metrics: &'a M,
    ) -> Self {
        let scale = region.effective_scale();
        let line_height = metrics.line_height(scale).min(i32::MAX as u32) as i32;
        Self {
            region,
            metrics,
            scale,
            line_height,
            line_gap: region.line_gap.max(0),
        }
    }

    #[inline]
    pub const fn region(&self) -> &RegionConfig { self.region }

    #[inline]
    pub const fn line_height(&self) -> i32 { self.line_height }

    #[inline]
    pub const fn line_gap(&self) -> i32 { self.line_gap }

    fn span_at(
        &self,
        y: i32,
    ) -> Option<RowSpan> {
        let r = self.region;
        row_bounds(r.cx, r.cy, r.r, y, r.margin)
    }

    fn width_of(
        &self,
        text: &str,
    ) -> i64 {
        i64::from(self.metrics.measure(text, self.scale).width)
    }
}

/// Wrap state threaded through one pass.
pub struct WrapState<'t> {
    rest: &'t str,
    start_y: i32,
    cursor_y: i32,
    line: String<LINE_BUFFER_LEN>,
    lines: usize,
    last_bottom: Option<i32>,
    stop: Option<Stop>,
}

impl<'t> WrapState<'t> {
    /// Fresh state for `text`, with the first line at row `start_y`.
    pub const fn new(
        text: &'t str,
        start_y: i32,
    ) -> Self {
        Self {
            rest: text,
            start_y,
            cursor_y: start_y,
            line: String::new(),
            lines: 0,
            last_bottom: None,
            stop: None,
        }
    }

    /// Row the next line will be placed on.
    #[inline]
    pub const fn cursor_y(&self) -> i32 { self.cursor_y }

    /// Line assembled so far on the current row.
    #[inline]
    pub fn line(&self) -> &str { self.line.as_str() }

    /// Input not yet consumed.
    #[inline]
    pub const fn remaining(&self) -> &'t str { self.rest }

    #[inline]
    pub const fn lines_placed(&self) -> usize { self.lines }

    /// `None` while the pass is still running.
    #[inline]
    pub const fn stop_reason(&self) -> Option<Stop> { self.stop }

    /// Extent from the start row to the bottom of the last placed line.
    pub fn height(&self) -> u32 {
        self.last_bottom
            .map_or(0, |bottom| bottom.saturating_sub(self.start_y).max(0) as u32)
    }

    pub fn result(&self) -> LayoutResult {
        LayoutResult {
            height: self.height(),
            lines: self.lines,
            truncated: matches!(self.stop, Some(Stop::NoRow | Stop::BandFull)),
        }
    }

    /// Step until the pass stops.
    pub fn run<M, L>(
        mut self,
        cx: &WrapContext<'_, M>,
        out: &mut L,
    ) -> LayoutResult
    where
        M: MetricsProvider + ?Sized,
        L: LineSink + ?Sized,
    {
        while self.step(cx, out) {}
        self.result()
    }

    /// Consume one token. Returns `false` once the pass has stopped.
    pub fn step<M, L>(
        &mut self,
        cx: &WrapContext<'_, M>,
        out: &mut L,
    ) -> bool
    where
        M: MetricsProvider + ?Sized,
        L: LineSink + ?Sized,
    {
        if self.stop.is_some() {
            return false;
        }

        self.rest = self.rest.trim_start_matches(' ');
        if self.rest.is_empty() {
            self.finish(cx, out);
            return false;
        }

        let Some(span) = self.span_or_stop(cx) else {
            return false;
        };

        if let Some(after) = self.rest.strip_prefix('\n') {
            self.rest = after;
            if !self.flush(cx, span, out) {
                return false;
            }
            self.cursor_y = self.cursor_y.saturating_add(cx.line_gap);
            return true;
        }

        let end = self.rest.find([' ', '\n']).unwrap_or(self.rest.len());
        let (word, after) = self.rest.split_at(end);
        self.rest = after;
        self.place_word(cx, span, word, out)
    }

    fn place_word<M, L>(
        &mut self,
        cx: &WrapContext<'_, M>,
        mut span: RowSpan,
        word: &str,
        out: &mut L,
    ) -> bool
    where
        M: MetricsProvider + ?Sized,
        L: LineSink + ?Sized,
    {
        if self.try_extend(cx, span, word) {
            return true;
        }

        if !self.line.is_empty() {
            if !self.flush(cx, span, out) {
                return false;
            }
            let Some(next) = self.span_or_stop(cx) else {
                return false;
            };
            span = next;
            if self.try_extend(cx, span, word) {
                return true;
            }
        }

        // Wider than the row: every chunk, the last one included, gets a row of its own.
        let mut rest = word;
        loop {
            let clipped = clip_to_capacity(rest, LINE_BUFFER_LEN);
            let take = fit_within_width(cx.metrics, clipped, span.width(), cx.scale);
            let (chunk, tail) = rest.split_at(take);
            trace!("circle text: split {} at row {}", chunk, self.cursor_y);

            self.line.clear();
            self.line.push_str(chunk).ok();
            if !self.flush(cx, span, out) {
                return false;
            }

            rest = tail;
            if rest.is_empty() {
                return true;
            }
            let Some(next) = self.span_or_stop(cx) else {
                return false;
            };
            span = next;
        }
    }

    /// Adopt `line + " " + word` if it fits both the row and the buffer.
    fn try_extend<M: MetricsProvider + ?Sized>(
        &mut self,
        cx: &WrapContext<'_, M>,
        span: RowSpan,
        word: &str,
    ) -> bool {
        let mut candidate = self.line.clone();
        if !candidate.is_empty() && candidate.push(' ').is_err() {
            return false;
        }
        if candidate.push_str(word).is_err() {
            return false;
        }
        if cx.width_of(&candidate) > i64::from(span.width()) {
            return false;
        }
        self.line = candidate;
        true
    }

    /// Emit the current line at the cursor row and advance. No-op for an empty line.
    fn flush<L: LineSink + ?Sized, M: MetricsProvider + ?Sized>(
        &mut self,
        cx: &WrapContext<'_, M>,
        span: RowSpan,
        out: &mut L,
    ) -> bool {
        if self.line.is_empty() {
            return true;
        }

        let bottom = self.cursor_y.saturating_add(cx.line_height);
        if bottom > cx.region.bottom_y {
            debug!("circle text: band full at row {}, truncating", self.cursor_y);
            self.stop = Some(Stop::BandFull);
            return false;
        }

        out.place_line(&self.line, span.x_left, self.cursor_y);
        self.lines += 1;
        self.last_bottom = Some(bottom);
        self.cursor_y = bottom.saturating_add(cx.line_gap);
        self.line.clear();
        true
    }

    fn finish<L: LineSink + ?Sized, M: MetricsProvider + ?Sized>(
        &mut self,
        cx: &WrapContext<'_, M>,
        out: &mut L,
    ) {
        if !self.line.is_empty() {
            let Some(span) = self.span_or_stop(cx) else {
                return;
            };
            if !self.flush(cx, span, out) {
                return;
            }
        }
        self.stop = Some(Stop::Exhausted);
    }

    fn span_or_stop<M: MetricsProvider + ?Sized>(
        &mut self,
        cx: &WrapContext<'_, M>,
    ) -> Option<RowSpan> {
        let span = cx.span_at(self.cursor_y);
        if span.is_none() {
            debug!("circle text: no usable span at row {}, truncating", self.cursor_y);
            self.stop = Some(Stop::NoRow);
        }
        span
    }
}

/// Run a whole pass over `text` starting at row `start_y`.
pub fn wrap_text<M, L>(
    cx: &WrapContext<'_, M>,
    text: &str,
    start_y: i32,
    out: &mut L,
) -> LayoutResult
where
    M: MetricsProvider + ?Sized,
    L: LineSink + ?Sized,
{
    WrapState::new(text, start_y).run(cx, out)
}

// =============================================================================
// Tests
// =============================================================================
