use std::path::Path;

use tracing::info;

use crate::config;
use crate::library::{Catalog, CatalogError, TrackDescriptor, scan};
use crate::player::PlaybackState;

/// Pick the catalog source: a directory given on the command line, then
/// `[[tracks]]` from the config, then the built-in list.
pub fn build_catalog(
    dir: Option<&Path>,
    settings: &config::Settings,
) -> Result<Catalog, CatalogError> {
    let placeholder = settings.ui.cover_placeholder.as_str();

    if let Some(dir) = dir {
        let tracks = scan(dir, &settings.library, placeholder);
        info!(dir = %dir.display(), count = tracks.len(), "catalog from directory");
        return Catalog::new(tracks);
    }

    if !settings.tracks.is_empty() {
        info!(count = settings.tracks.len(), "catalog from config");
        let tracks = settings
            .tracks
            .iter()
            .map(|entry| TrackDescriptor::from_entry(entry, placeholder))
            .collect();
        return Catalog::new(tracks);
    }

    info!("catalog from built-in list");
    Ok(Catalog::builtin(placeholder))
}

/// Initial playback state from `[player]` settings. Playback starts paused.
pub fn initial_state(settings: &config::PlayerSettings) -> PlaybackState {
    PlaybackState {
        current_index: settings.start_index,
        is_playing: false,
        autoplay_enabled: settings.autoplay,
        volume: settings.volume,
    }
}
