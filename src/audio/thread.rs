use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info, warn};

use super::sink::{OpenedTrack, clamp_seek, open_track_at};
use super::types::{LoadId, MediaClock, MediaCmd, MediaError, MediaEvent, MediaNotice};

/// The track currently attached to the output.
struct Loaded {
    source: PathBuf,
    sink: Sink,
    duration: Option<Duration>,
    /// Position of the sink's first sample within the track; non-zero after a
    /// rebuild-based seek.
    offset: Duration,
    /// Set once `Ended` was reported, so it fires a single time.
    ended: bool,
}

impl Loaded {
    fn position(&self) -> Duration {
        self.offset + self.sink.get_pos()
    }

    fn clock(&self) -> MediaClock {
        MediaClock {
            position_secs: self.position().as_secs_f64(),
            duration_secs: self.duration.map(|d| d.as_secs_f64()),
        }
    }
}

/// Mutable state of the audio thread.
pub(super) struct Engine<E> {
    /// The output stream, or why it could not be opened.
    output: Result<OutputStream, String>,
    events: Sender<E>,
    current: Option<Loaded>,
    /// Tag of the most recent `Load`, whether or not it succeeded.
    load: LoadId,
    /// Why the current source is missing, repeated on every `Play`.
    failure: Option<String>,
    playing: bool,
    volume: f32,
}

impl<E: From<MediaNotice>> Engine<E> {
    pub(super) fn new(output: Result<OutputStream, String>, events: Sender<E>) -> Self {
        Self {
            output,
            events,
            current: None,
            load: LoadId::default(),
            failure: None,
            playing: false,
            volume: 1.0,
        }
    }

    fn open(&self, source: &Path, start_at: Duration) -> Result<OpenedTrack, MediaError> {
        match &self.output {
            Ok(stream) => open_track_at(stream, source, start_at),
            Err(reason) => Err(MediaError::Output(reason.clone())),
        }
    }

    fn emit(&self, event: MediaEvent) {
        let notice = MediaNotice {
            load: self.load,
            event,
        };
        // The receiver only goes away during shutdown.
        let _ = self.events.send(notice.into());
    }

    fn fail(&mut self, reason: String) {
        self.playing = false;
        self.failure = Some(reason.clone());
        self.emit(MediaEvent::Failed(reason));
    }

    pub(super) fn load(&mut self, source: PathBuf, load: LoadId) {
        if let Some(old) = self.current.take() {
            old.sink.stop();
        }
        self.playing = false;
        self.load = load;
        self.failure = None;

        match self.open(&source, Duration::ZERO) {
            Ok(opened) => {
                opened.sink.set_volume(self.volume);
                info!(source = %source.display(), duration = ?opened.duration, "loaded");
                let loaded = Loaded {
                    source,
                    sink: opened.sink,
                    duration: opened.duration,
                    offset: Duration::ZERO,
                    ended: false,
                };
                self.emit(MediaEvent::MetadataReady(loaded.clock()));
                self.current = Some(loaded);
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                self.fail(e.to_string());
            }
        }
    }

    pub(super) fn play(&mut self) {
        let Some(cur) = self.current.as_ref() else {
            let reason = self
                .failure
                .clone()
                .unwrap_or_else(|| "no track loaded".to_string());
            debug!(%reason, "play requested with nothing loaded");
            self.fail(reason);
            return;
        };
        // A drained sink restarts from the top, like a finished track does.
        if cur.sink.empty() {
            self.rebuild_at(Duration::ZERO);
        }
        if let Some(cur) = self.current.as_mut() {
            cur.sink.play();
            cur.ended = false;
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        if let Some(cur) = self.current.as_ref() {
            cur.sink.pause();
        }
        self.playing = false;
    }

    fn seek(&mut self, target_secs: f64) {
        let Some(cur) = self.current.as_mut() else {
            return;
        };
        let target = clamp_seek(target_secs, cur.duration);
        debug!(requested = target_secs, clamped = ?target, "seek");

        let seeked = !cur.sink.empty() && cur.sink.try_seek(target).is_ok();
        if seeked {
            cur.offset = Duration::ZERO;
            cur.ended = false;
        } else {
            // Rebuild the sink and skip into the file.
            self.rebuild_at(target);
        }
        if let Some(cur) = self.current.as_ref() {
            self.emit(MediaEvent::PositionChanged(cur.clock()));
        }
    }

    /// Replace the current sink with a fresh one starting at `start_at`,
    /// keeping the play/pause state.
    fn rebuild_at(&mut self, start_at: Duration) {
        let Some(cur) = self.current.take() else {
            return;
        };
        cur.sink.stop();

        match self.open(&cur.source, start_at) {
            Ok(opened) => {
                opened.sink.set_volume(self.volume);
                if self.playing {
                    opened.sink.play();
                }
                self.current = Some(Loaded {
                    source: cur.source,
                    sink: opened.sink,
                    duration: cur.duration.or(opened.duration),
                    offset: start_at,
                    ended: false,
                });
            }
            Err(e) => {
                warn!(error = %e, "reopen failed");
                self.fail(e.to_string());
            }
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(cur) = self.current.as_ref() {
            cur.sink.set_volume(volume);
        }
    }

    /// Report the position while playing and detect the end of the track.
    fn tick(&mut self) {
        let Some(cur) = self.current.as_mut() else {
            return;
        };
        if !self.playing {
            return;
        }
        if cur.sink.empty() {
            if !cur.ended {
                cur.ended = true;
                self.playing = false;
                let clock = MediaClock {
                    position_secs: cur.duration.unwrap_or_else(|| cur.position()).as_secs_f64(),
                    duration_secs: cur.duration.map(|d| d.as_secs_f64()),
                };
                debug!(source = %cur.source.display(), "track ended");
                self.emit(MediaEvent::PositionChanged(clock));
                self.emit(MediaEvent::Ended);
            }
            return;
        }
        let clock = cur.clock();
        self.emit(MediaEvent::PositionChanged(clock));
    }
}

pub(super) fn spawn_media_thread<E>(
    rx: Receiver<MediaCmd>,
    events: Sender<E>,
    tick: Duration,
) -> JoinHandle<()>
where
    E: From<MediaNotice> + Send + 'static,
{
    thread::spawn(move || {
        // Without an output device every load and play request is answered
        // with `Failed`, so the controller never shows a stale "playing" state.
        let output = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Ok(stream)
            }
            Err(e) => {
                error!(error = %e, "audio output unavailable");
                Err(e.to_string())
            }
        };
        let mut engine = Engine::new(output, events);

        let mut last_tick = Instant::now();
        loop {
            match rx.recv_timeout(tick) {
                Ok(cmd) => match cmd {
                    MediaCmd::Load { source, load } => engine.load(source, load),
                    MediaCmd::Play => engine.play(),
                    MediaCmd::Pause => engine.pause(),
                    MediaCmd::Seek(secs) => engine.seek(secs),
                    MediaCmd::SetVolume(v) => engine.set_volume(v),
                    MediaCmd::Quit => {
                        if let Some(cur) = engine.current.take() {
                            cur.sink.stop();
                        }
                        debug!("audio thread exiting");
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            // A steady command stream must not starve position reports.
            if last_tick.elapsed() >= tick {
                engine.tick();
                last_tick = Instant::now();
            }
        }
    })
}
