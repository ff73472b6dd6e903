//! The display surface: everything the terminal shows, written only through
//! [`Render`] instructions.

use crate::player::{Glyph, PlaylistEntry, Render, highlight};

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub glyph: Glyph,
    /// Seek-bar fill, `0.0..=100.0` in normal operation.
    pub fill_percent: f64,
    pub elapsed: String,
    pub total: String,
    pub volume: f32,
    pub autoplay: bool,
    pub playlist: Vec<PlaylistEntry>,
    pub status: Option<String>,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            cover: String::new(),
            glyph: Glyph::Play,
            fill_percent: 0.0,
            elapsed: "0:00".to_string(),
            total: "0:00".to_string(),
            volume: 1.0,
            autoplay: true,
            playlist: Vec::new(),
            status: None,
        }
    }
}

impl Screen {
    pub fn apply(&mut self, render: Render) {
        match render {
            Render::Playlist(entries) => self.playlist = entries,
            Render::NowPlaying {
                title,
                artist,
                cover,
            } => {
                self.title = title;
                self.artist = artist;
                self.cover = cover;
                // A fresh track clears any failure from the previous one.
                self.status = None;
            }
            Render::HighlightActive(index) => highlight(&mut self.playlist, index),
            Render::Glyph(glyph) => self.glyph = glyph,
            Render::Progress {
                percent,
                elapsed,
                total,
            } => {
                self.fill_percent = percent;
                self.elapsed = elapsed;
                self.total = total;
            }
            Render::Volume(v) => self.volume = v,
            Render::Autoplay(enabled) => self.autoplay = enabled,
            Render::Status(msg) => self.status = Some(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::active_index;

    fn entry(title: &str) -> PlaylistEntry {
        PlaylistEntry {
            title: title.into(),
            artist: String::new(),
            duration: String::new(),
            active: false,
        }
    }

    #[test]
    fn highlight_rescans_all_entries() {
        let mut screen = Screen::default();
        screen.apply(Render::Playlist(vec![entry("a"), entry("b"), entry("c")]));
        screen.apply(Render::HighlightActive(2));
        screen.apply(Render::HighlightActive(0));

        assert_eq!(active_index(&screen.playlist), Some(0));
        assert_eq!(screen.playlist.iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn now_playing_clears_status() {
        let mut screen = Screen::default();
        screen.apply(Render::Status("failed to open x".into()));
        assert!(screen.status.is_some());

        screen.apply(Render::NowPlaying {
            title: "t".into(),
            artist: "a".into(),
            cover: "c".into(),
        });
        assert_eq!(screen.status, None);
        assert_eq!(screen.title, "t");
    }
}
