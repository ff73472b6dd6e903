//! The playback controller: current track, play/pause, and every transition
//! between them.

use tracing::{debug, info, warn};

use crate::audio::{LoadId, MediaCmd, MediaEvent, MediaNotice};
use crate::library::{Catalog, TrackDescriptor};

use super::playlist::build_entries;
use super::progress::ProgressSync;
use super::types::{Command, Event, Glyph, PlaybackState, Render};

/// Owns the catalog and the playback state. All mutation goes through here.
pub struct Controller {
    catalog: Catalog,
    state: PlaybackState,
    progress: ProgressSync,
    /// Tag of the last `Load` sent; notices about older loads are dropped.
    load: LoadId,
}

impl Controller {
    /// Create a controller. `initial.current_index` must be a valid catalog
    /// index; anything else falls back to 0.
    pub fn new(catalog: Catalog, mut initial: PlaybackState) -> Self {
        if initial.current_index >= catalog.len() {
            warn!(
                index = initial.current_index,
                len = catalog.len(),
                "start index out of range, using 0"
            );
            initial.current_index = 0;
        }
        Self {
            catalog,
            state: initial,
            progress: ProgressSync::default(),
            load: LoadId::default(),
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn current_track(&self) -> &TrackDescriptor {
        &self.catalog.tracks()[self.state.current_index]
    }

    pub fn current_load(&self) -> LoadId {
        self.load
    }

    /// Startup commands: playlist, volume, autoplay flag, and the initial
    /// track loaded but not playing.
    pub fn start(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        out.push(Command::Render(Render::Playlist(build_entries(&self.catalog))));
        self.set_volume_into(self.state.volume, &mut out);
        out.push(Command::Render(Render::Autoplay(self.state.autoplay_enabled)));
        let glyph = if self.state.is_playing {
            Glyph::Pause
        } else {
            Glyph::Play
        };
        out.push(Command::Render(Render::Glyph(glyph)));
        self.load_track_into(self.state.current_index, &mut out);
        out
    }

    /// Handle one event to completion.
    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        debug!(?event, "dispatch");
        match event {
            Event::Toggle => self.toggle(),
            Event::Next => self.next(),
            Event::Previous => self.previous(),
            Event::Select(i) => self.select(i),
            Event::SeekRequest { pointer_x, bar } => self
                .progress
                .on_seek_request(pointer_x, bar)
                .map(|cmd| vec![Command::Media(cmd)])
                .unwrap_or_default(),
            Event::VolumeChanged(v) => self.set_volume(v),
            Event::AutoplayChanged(enabled) => self.set_autoplay(enabled),
            Event::Media(notice) => self.on_media_notice(notice),
        }
    }

    fn on_media_notice(&mut self, notice: MediaNotice) -> Vec<Command> {
        if notice.load != self.load {
            debug!(?notice, current = ?self.load, "dropping notice for an older load");
            return Vec::new();
        }
        match notice.event {
            MediaEvent::MetadataReady(clock) | MediaEvent::PositionChanged(clock) => self
                .progress
                .on_clock_tick(clock)
                .map(|r| vec![Command::Render(r)])
                .unwrap_or_default(),
            MediaEvent::Ended => self.on_track_ended(),
            MediaEvent::Failed(reason) => self.on_media_failed(reason),
        }
    }

    /// Make `index` the current track without changing `is_playing`.
    pub fn load_track(&mut self, index: usize) -> Vec<Command> {
        let mut out = Vec::new();
        self.load_track_into(index, &mut out);
        out
    }

    pub fn play(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        self.play_into(&mut out);
        out
    }

    pub fn pause(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        self.pause_into(&mut out);
        out
    }

    pub fn toggle(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        if self.state.is_playing {
            self.pause_into(&mut out);
        } else {
            self.play_into(&mut out);
        }
        out
    }

    /// Advance with wrap-around and always start playing.
    pub fn next(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        self.next_into(&mut out);
        out
    }

    /// Step back with wrap-around and always start playing.
    pub fn previous(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        let n = self.catalog.len();
        let index = (self.state.current_index + n - 1) % n;
        self.load_track_into(index, &mut out);
        self.play_into(&mut out);
        out
    }

    /// Play the picked playlist entry. Unknown indices are ignored.
    pub fn select(&mut self, index: usize) -> Vec<Command> {
        let mut out = Vec::new();
        if index >= self.catalog.len() {
            debug!(index, "ignoring selection outside the catalog");
            return out;
        }
        self.load_track_into(index, &mut out);
        self.play_into(&mut out);
        out
    }

    /// With autoplay this is `next()`; without it playback stops and rewinds.
    pub fn on_track_ended(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        if self.state.autoplay_enabled {
            self.next_into(&mut out);
        } else {
            self.pause_into(&mut out);
            out.push(Command::Media(MediaCmd::Seek(0.0)));
        }
        out
    }

    /// The audio thread could not play the current source.
    pub fn on_media_failed(&mut self, reason: String) -> Vec<Command> {
        warn!(track = %self.current_track().title, %reason, "playback failed");
        self.state.is_playing = false;
        vec![
            Command::Render(Render::Glyph(Glyph::Play)),
            Command::Render(Render::Status(reason)),
        ]
    }

    pub fn set_volume(&mut self, volume: f32) -> Vec<Command> {
        let mut out = Vec::new();
        self.set_volume_into(volume, &mut out);
        out
    }

    pub fn set_autoplay(&mut self, enabled: bool) -> Vec<Command> {
        self.state.autoplay_enabled = enabled;
        vec![Command::Render(Render::Autoplay(enabled))]
    }

    fn load_track_into(&mut self, index: usize, out: &mut Vec<Command>) {
        self.state.current_index = index;
        self.load = self.load.next();
        // The old track's clock must not drive seeks on the new one.
        self.progress = ProgressSync::default();
        let track = &self.catalog.tracks()[index];
        info!(index, title = %track.title, "loading track");
        out.push(Command::Media(MediaCmd::Load {
            source: track.source.clone(),
            load: self.load,
        }));
        out.push(Command::Render(Render::NowPlaying {
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover: track.cover.clone(),
        }));
        out.push(Command::Render(Render::HighlightActive(index)));
    }

    fn play_into(&mut self, out: &mut Vec<Command>) {
        out.push(Command::Media(MediaCmd::Play));
        self.state.is_playing = true;
        out.push(Command::Render(Render::Glyph(Glyph::Pause)));
    }

    fn pause_into(&mut self, out: &mut Vec<Command>) {
        out.push(Command::Media(MediaCmd::Pause));
        self.state.is_playing = false;
        out.push(Command::Render(Render::Glyph(Glyph::Play)));
    }

    fn next_into(&mut self, out: &mut Vec<Command>) {
        let index = (self.state.current_index + 1) % self.catalog.len();
        self.load_track_into(index, out);
        self.play_into(out);
    }

    fn set_volume_into(&mut self, volume: f32, out: &mut Vec<Command>) {
        self.state.volume = volume;
        out.push(Command::Media(MediaCmd::SetVolume(volume)));
        out.push(Command::Render(Render::Volume(volume)));
    }
}
