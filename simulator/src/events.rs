//! Event strings shown in the status band, and their expiry.
//!
//! The strings follow the controller's `EVT:<SOURCE>:<ACTION>` format so the
//! simulator exercises the same widths the device sees.

use core::fmt::Write;
use std::time::Instant;

use embedded_graphics_simulator::sdl2::Keycode;
use heapless::String;

use crate::timing::EVENT_DURATION;

/// Maximum length of a formatted event string.
pub const EVENT_LEN: usize = 48;

pub const BOOT: &str = "EVT:BOOT";
pub const READY: &str = "EVT:READY";

/// Long multi-line message used to show wrapping and truncation.
pub const STRESS: &str = "EVT:CLIMATE_SW EVT:DUAL_SW\nEVT:ELECTRIC_DEFROST EVT:REAR_DEFROST EVT:WHEEL_HEAT";

/// Event emitted for a key, if the key is bound.
pub fn for_key(keycode: Keycode) -> Option<&'static str> {
    let evt = match keycode {
        Keycode::W => "EVT:TEMP_MAIN:+1",
        Keycode::S => "EVT:TEMP_MAIN:-1",
        Keycode::E => "EVT:TEMP_PASS:+1",
        Keycode::D => "EVT:TEMP_PASS:-1",
        Keycode::C => "EVT:CLIMATE_SW",
        Keycode::R => "EVT:REAR_DEFROST",
        Keycode::H => "EVT:WHEEL_HEAT",
        Keycode::B => BOOT,
        Keycode::L => STRESS,
        _ => return None,
    };
    Some(evt)
}

/// `EVT:TOUCH:X=<x>,Y=<y>` for a touch at `(x, y)`.
pub fn touch(
    x: i32,
    y: i32,
) -> String<EVENT_LEN> {
    let mut s = String::new();
    let _ = write!(s, "EVT:TOUCH:X={x},Y={y}");
    s
}

/// Most recent event with the time it arrived.
pub struct StatusEvent {
    text: &'static str,
    since: Instant,
}

impl StatusEvent {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            since: Instant::now(),
        }
    }

    /// The event text, or `READY` once the event has been shown long enough.
    pub fn current(&self) -> &'static str {
        if self.since.elapsed() >= EVENT_DURATION { READY } else { self.text }
    }
}
