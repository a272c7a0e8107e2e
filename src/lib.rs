//! Circle-constrained text layout for round displays.
//!
//! Word-wraps a block of text inside a circular viewport: every line is bounded
//! by the chord of the circle at the line's row, so lines near the top and
//! bottom of the circle are narrower than lines through the middle. The wrapped
//! block is then placed in a reserved vertical band (top, centered or bottom).
//!
//! - [`geometry`]: chord span available at a row
//! - [`chunk`]: character-level split of tokens wider than any row
//! - [`wrap`]: the greedy line breaker shared by the measure and draw passes
//! - [`engine`]: two-pass layout, vertical alignment, the configured engine
//! - [`config`]: region configuration and display presets
//! - [`metrics`] / [`canvas`]: the text-measurement and draw-sink capabilities,
//!   plus their embedded-graphics implementations
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p circle-text --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while device builds are `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

#[macro_use]
mod fmt;

pub mod canvas;
pub mod chunk;
pub mod colors;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod metrics;
pub mod wrap;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use canvas::{DrawSink, TextCanvas};
pub use config::{COORDS_REGION, RegionConfig, STATUS_REGION};
pub use engine::{CircleText, LayoutResult, VerticalAlign, draw_with_config};
pub use geometry::{RowSpan, row_bounds};
pub use metrics::{MetricsProvider, MonoMetrics};
