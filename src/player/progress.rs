//! Seek-bar synchronization with the media clock.

use crate::audio::{MediaClock, MediaCmd};
use crate::timefmt::format_time;

use super::types::{Render, SeekBar};

/// Remembers the most recent clock so seek requests can be mapped to a time.
#[derive(Debug, Default)]
pub struct ProgressSync {
    clock: MediaClock,
}

impl ProgressSync {
    /// Fill percentage and time labels for `clock`.
    ///
    /// Returns `None` while the duration is unknown (or zero), leaving the
    /// bar as it was.
    pub fn on_clock_tick(&mut self, clock: MediaClock) -> Option<Render> {
        self.clock = clock;
        let total = known_duration(clock)?;
        let percent = clock.position_secs / total * 100.0;
        Some(Render::Progress {
            percent,
            elapsed: format_time(clock.position_secs),
            total: format_time(total),
        })
    }

    /// Map a pointer position on `bar` to a seek target.
    ///
    /// The ratio is not clamped: a pointer left of the bar yields a negative
    /// target, one right of it a target past the end. The audio thread clamps.
    pub fn on_seek_request(&self, pointer_x: f64, bar: SeekBar) -> Option<MediaCmd> {
        let total = known_duration(self.clock)?;
        if bar.width.is_nan() || bar.width <= 0.0 {
            return None;
        }
        let ratio = (pointer_x - bar.left) / bar.width;
        Some(MediaCmd::Seek(ratio * total))
    }
}

fn known_duration(clock: MediaClock) -> Option<f64> {
    clock.duration_secs.filter(|d| d.is_finite() && *d > 0.0)
}
