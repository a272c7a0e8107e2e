//! Round-display simulator for circle text.
//!
//! Renders the status band and the coordinates band of a 240x240 round panel
//! using the embedded-graphics-simulator crate.
//!
//! # Controls
//!
//! - `W`/`S`, `E`/`D`, `C`, `R`, `H`, `B`: emit controller events into the status band
//! - `L`: emit a long message (wraps, then truncates at the band bottom)
//! - Mouse click: print the touch coordinates into the coordinates band
//! - `A`: cycle vertical alignment (top, center, bottom)
//! - `F`: toggle font (6x10 / ProFont 9pt)

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod events;
mod timing;

use std::thread;
use std::time::Instant;

use circle_text::colors::{BLACK, GRAY, YELLOW};
use circle_text::config::{CENTER_X, CENTER_Y, DISPLAY_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use circle_text::{CircleText, COORDS_REGION, RegionConfig, STATUS_REGION, TextCanvas, VerticalAlign, row_bounds};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use profont::PROFONT_9_POINT;

use crate::events::{BOOT, EVENT_LEN, StatusEvent};
use crate::timing::FRAME_TIME;

const GUIDE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

const FONTS: [&MonoFont<'static>; 2] = [&FONT_6X10, &PROFONT_9_POINT];

const fn next_align(align: VerticalAlign) -> VerticalAlign {
    match align {
        VerticalAlign::Top => VerticalAlign::Center,
        VerticalAlign::Center => VerticalAlign::Bottom,
        VerticalAlign::Bottom => VerticalAlign::Top,
    }
}

/// Circle outline plus the top and bottom edge of each text band.
fn draw_guides<D>(
    display: &mut D,
    regions: &[RegionConfig],
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(Point::new(CENTER_X, CENTER_Y), (DISPLAY_RADIUS * 2 + 1) as u32)
        .into_styled(GUIDE_STYLE)
        .draw(display)
        .ok();

    for region in regions {
        for y in [region.top_y, region.bottom_y] {
            if let Some(span) = row_bounds(region.cx, region.cy, region.r, y, region.margin) {
                Line::new(Point::new(span.x_left, y), Point::new(span.x_right, y))
                    .into_styled(GUIDE_STYLE)
                    .draw(display)
                    .ok();
            }
        }
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Circle Text Sim", &output_settings);

    let status = CircleText::new(STATUS_REGION);
    let coords = CircleText::new(COORDS_REGION.with_color(YELLOW));

    let mut event = StatusEvent::new(BOOT);
    let mut touch: String<EVENT_LEN> = String::new();
    let mut align = VerticalAlign::Top;
    let mut font_idx = 0usize;
    let mut dirty = true;
    let mut last_status = "";

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::A => align = next_align(align),
                        Keycode::F => font_idx = (font_idx + 1) % FONTS.len(),
                        other => {
                            if let Some(evt) = events::for_key(other) {
                                event = StatusEvent::new(evt);
                            }
                        }
                    }
                    dirty = true;
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    touch = events::touch(point.x, point.y);
                    dirty = true;
                }
                _ => {}
            }
        }

        // Expired events fall back to READY without any input.
        let status_text = event.current();
        if status_text != last_status {
            last_status = status_text;
            dirty = true;
        }

        if dirty {
            let mut canvas = TextCanvas::new(&mut display, FONTS[font_idx]);
            canvas.display().clear(BLACK).ok();
            draw_guides(canvas.display(), &[*status.region(), *coords.region()]);

            let metrics = canvas.metrics();
            let drawn = status.draw(&metrics, &mut canvas, status_text, align);
            if drawn.truncated {
                println!("status truncated after {} lines: {status_text:?}", drawn.lines);
            }
            coords.draw(&metrics, &mut canvas, &touch, align);
            dirty = false;
        }

        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
