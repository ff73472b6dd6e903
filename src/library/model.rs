use std::path::PathBuf;

use thiserror::Error;

use crate::config::TrackEntry;

/// Display metadata and locators for one playable track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub title: String,
    /// Empty when the track has no artist.
    pub artist: String,
    pub source: PathBuf,
    pub cover: String,
}

impl TrackDescriptor {
    /// Build a descriptor, defaulting a missing artist to `""` and a missing
    /// cover to `cover_placeholder`.
    pub fn new(
        title: impl Into<String>,
        artist: Option<String>,
        source: impl Into<PathBuf>,
        cover: Option<String>,
        cover_placeholder: &str,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.unwrap_or_default(),
            source: source.into(),
            cover: cover
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| cover_placeholder.to_string()),
        }
    }

    pub fn from_entry(entry: &TrackEntry, cover_placeholder: &str) -> Self {
        Self::new(
            entry.title.clone(),
            entry.artist.clone(),
            entry.src.clone(),
            entry.cover.clone(),
            cover_placeholder,
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("the catalog needs at least one track")]
    Empty,
}

/// Ordered, non-empty, immutable list of tracks. Insertion order is playback order.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<TrackDescriptor>,
}

impl Catalog {
    pub fn new(tracks: Vec<TrackDescriptor>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { tracks })
    }

    /// The three-track demo list used when nothing else is configured.
    pub fn builtin(cover_placeholder: &str) -> Self {
        let track = |title: &str, artist: &str, src: &str, cover: &str| {
            TrackDescriptor::new(
                title,
                Some(artist.to_string()),
                src,
                Some(cover.to_string()),
                cover_placeholder,
            )
        };
        Self {
            tracks: vec![
                track("Song One", "Artist A", "songs/song1.mp3", "cover1.jpg"),
                track("Song Two", "Artist B", "songs/song2.mp3", "cover2.jpg"),
                track("Song Three", "Artist C", "songs/song3.mp3", "cover3.jpg"),
            ],
        }
    }

    /// Number of tracks; always at least 1.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }
}
