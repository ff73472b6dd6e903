//! Playlist listing: a projection of the catalog plus the current index.

use crate::library::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub title: String,
    pub artist: String,
    /// Per-track length. Never filled in; tracks are not probed up front.
    pub duration: String,
    pub active: bool,
}

/// One inactive entry per catalog track, in catalog order.
pub fn build_entries(catalog: &Catalog) -> Vec<PlaylistEntry> {
    catalog
        .tracks()
        .iter()
        .map(|t| PlaylistEntry {
            title: t.title.clone(),
            artist: t.artist.clone(),
            duration: String::new(),
            active: false,
        })
        .collect()
}

/// Clear every marker, then set the one at `index` (if it exists).
pub fn highlight(entries: &mut [PlaylistEntry], index: usize) {
    for entry in entries.iter_mut() {
        entry.active = false;
    }
    if let Some(entry) = entries.get_mut(index) {
        entry.active = true;
    }
}

pub fn active_index(entries: &[PlaylistEntry]) -> Option<usize> {
    entries.iter().position(|e| e.active)
}
