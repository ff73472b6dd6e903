//! Audio playback backed by `rodio`.
//!
//! A dedicated thread owns the output stream and the current sink. It accepts
//! [`MediaCmd`]s and reports back with [`MediaNotice`]s on the caller's queue.

mod player;
mod sink;
mod thread;
mod types;

pub use player::MediaPlayer;
pub use types::*;

#[cfg(test)]
mod tests;
