//! Media primitive vocabulary.
//!
//! Commands flow into the audio thread, notifications flow back out. Neither
//! side waits for the other.

use std::path::PathBuf;

use thiserror::Error;

/// Requests accepted by the audio thread. All are fire-and-forget.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCmd {
    /// Replace the current source. The new track starts paused at 0.
    /// Notifications about it carry `load`.
    Load { source: PathBuf, load: LoadId },
    /// Start or resume playback of the loaded source.
    Play,
    /// Pause playback, keeping the position.
    Pause,
    /// Move to `seconds`. The thread clamps the target to the track length.
    Seek(f64),
    /// Output volume, `0.0..=1.0`.
    SetVolume(f32),
    /// Stop output and exit the audio thread.
    Quit,
}

/// Tags one `Load` request. Notifications carry the tag of the load they
/// describe, so a receiver can drop the ones that arrive after a newer load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadId(pub u64);

impl LoadId {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Playback clock as reported by the audio thread.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MediaClock {
    pub position_secs: f64,
    /// `None` until the track length is known.
    pub duration_secs: Option<f64>,
}

/// Notifications emitted by the audio thread.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// A source finished loading; the clock carries its length if known.
    MetadataReady(MediaClock),
    /// Periodic position report while a track is loaded.
    PositionChanged(MediaClock),
    /// The loaded track played to its end.
    Ended,
    /// The source could not be opened or decoded, or no output is available.
    Failed(String),
}

/// A [`MediaEvent`] together with the load it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaNotice {
    pub load: LoadId,
    pub event: MediaEvent,
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("no audio output device: {0}")]
    Output(String),
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
