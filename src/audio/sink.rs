//! Opening tracks into `rodio` sinks.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::MediaError;

/// A decoded source attached to a paused sink.
pub(super) struct OpenedTrack {
    pub sink: Sink,
    pub duration: Option<Duration>,
}

/// Create a paused `Sink` for the file at `path` that starts at `start_at`.
pub(super) fn open_track_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
) -> Result<OpenedTrack, MediaError> {
    let file = File::open(path).map_err(|source| MediaError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| MediaError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    // Many compressed formats do not report a length; fall back to the tags.
    let duration = decoder.total_duration().or_else(|| probe_duration(path));

    let sink = Sink::connect_new(stream.mixer());
    // `skip_duration` is our fallback seeking primitive; even Duration::ZERO is fine.
    sink.append(decoder.skip_duration(start_at));
    sink.pause();
    Ok(OpenedTrack { sink, duration })
}

fn probe_duration(path: &Path) -> Option<Duration> {
    let tagged = lofty::read_from_path(path).ok()?;
    let d = tagged.properties().duration();
    (!d.is_zero()).then_some(d)
}

/// Clamp a requested seek target to `[0, duration]`.
///
/// NaN and negative targets map to the start. Without a known duration only
/// the lower bound applies.
pub(crate) fn clamp_seek(target_secs: f64, duration: Option<Duration>) -> Duration {
    if target_secs.is_nan() || target_secs <= 0.0 {
        return Duration::ZERO;
    }
    match duration {
        Some(d) if target_secs >= d.as_secs_f64() => d,
        Some(_) => Duration::from_secs_f64(target_secs),
        None => Duration::try_from_secs_f64(target_secs).unwrap_or(Duration::ZERO),
    }
}
