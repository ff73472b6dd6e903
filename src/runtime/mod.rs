use std::env;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::audio::MediaPlayer;
use crate::player::{Controller, Event};
use crate::screen::Screen;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    if let Some(path) = logging::init(&settings.logging) {
        info!(path = %path.display(), "logging to file");
    }
    if let Some(msg) = settings_warning {
        warn!("{msg}");
    }

    let dir = env::args().nth(1).map(PathBuf::from);
    let catalog = startup::build_catalog(dir.as_deref(), &settings)?;
    info!(tracks = catalog.len(), "starting");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Dropping `media` stops the audio thread on every exit path below.
    let (queue_tx, queue_rx) = mpsc::channel::<Event>();
    let media = MediaPlayer::spawn(
        queue_tx.clone(),
        Duration::from_millis(settings.player.tick_ms),
    );

    let mut controller = Controller::new(catalog, startup::initial_state(&settings.player));
    let mut screen = Screen::default();
    event_loop::route(controller.start(), &media, &mut screen);

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut controller,
        &media,
        &queue_tx,
        &queue_rx,
        &mut screen,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        warn!(error = %e, "event loop failed");
    }
    run_result
}
