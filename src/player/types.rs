use crate::audio::{MediaCmd, MediaNotice};

use super::playlist::PlaylistEntry;

/// Mutable playback state, owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Index into the catalog of the loaded track.
    pub current_index: usize,
    pub is_playing: bool,
    /// Whether the end of a track advances to the next one.
    pub autoplay_enabled: bool,
    /// `0.0..=1.0`
    pub volume: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            autoplay_enabled: true,
            volume: 1.0,
        }
    }
}

/// Horizontal extent of the seek bar, in the same units as pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekBar {
    pub left: f64,
    pub width: f64,
}

/// Inputs to the controller, handled one at a time in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Toggle,
    Next,
    Previous,
    /// A playlist entry was picked.
    Select(usize),
    SeekRequest { pointer_x: f64, bar: SeekBar },
    VolumeChanged(f32),
    AutoplayChanged(bool),
    Media(MediaNotice),
}

impl From<MediaNotice> for Event {
    fn from(notice: MediaNotice) -> Self {
        Event::Media(notice)
    }
}

/// Transport button face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    /// Shown while paused: pressing it plays.
    #[default]
    Play,
    /// Shown while playing: pressing it pauses.
    Pause,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Play => "▶",
            Glyph::Pause => "⏸",
        }
    }
}

/// One-way instructions for the display surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Render {
    /// Replace the playlist listing.
    Playlist(Vec<PlaylistEntry>),
    NowPlaying {
        title: String,
        artist: String,
        cover: String,
    },
    /// Mark entry `i` active and every other entry inactive.
    HighlightActive(usize),
    Glyph(Glyph),
    Progress {
        percent: f64,
        elapsed: String,
        total: String,
    },
    Volume(f32),
    Autoplay(bool),
    /// Status line message, e.g. a playback failure.
    Status(String),
}

/// Output of a controller transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Media(MediaCmd),
    Render(Render),
}
