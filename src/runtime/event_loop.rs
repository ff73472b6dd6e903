use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, info};

use crate::audio::MediaPlayer;
use crate::config;
use crate::input::{self, Action};
use crate::player::{Command, Controller, Event};
use crate::screen::Screen;
use crate::ui;

/// Carry out a controller transition's commands, in order.
pub fn route(commands: Vec<Command>, media: &MediaPlayer, screen: &mut Screen) {
    for cmd in commands {
        match cmd {
            Command::Media(m) => {
                // The audio thread only stops on Quit; a closed channel means
                // we are already shutting down.
                if media.send(m).is_err() {
                    debug!("audio thread gone, dropping command");
                }
            }
            Command::Render(r) => screen.apply(r),
        }
    }
}

/// Main terminal event loop. Every input, whether a key, a click or an audio
/// notification, goes through `queue` and reaches the controller in arrival
/// order. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut Controller,
    media: &MediaPlayer,
    queue_tx: &Sender<Event>,
    queue_rx: &Receiver<Event>,
    screen: &mut Screen,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut area = Rect::default();

    loop {
        while let Ok(ev) = queue_rx.try_recv() {
            let commands = controller.dispatch(ev);
            route(commands, media, screen);
        }

        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, screen, &settings.ui);
        })?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        let action = match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                input::map_key(key, screen, settings.controls.volume_step)
            }
            TermEvent::Mouse(mouse) => input::map_mouse(mouse, &ui::regions(area), screen),
            _ => None,
        };

        match action {
            Some(Action::Quit) => {
                info!("quit requested");
                media.quit();
                return Ok(());
            }
            Some(Action::Dispatch(ev)) => {
                // Same queue as audio notifications, so ordering is preserved.
                let _ = queue_tx.send(ev);
            }
            None => {}
        }
    }
}
