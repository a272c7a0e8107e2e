//! Frame pacing and status-event expiry for the round-display window.

use std::time::Duration;

/// The window redraws at most every 20 ms; the loop sleeps off the rest.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// A key event stays in the status band this long, then `EVT:READY` returns.
pub const EVENT_DURATION: Duration = Duration::from_secs(3);
