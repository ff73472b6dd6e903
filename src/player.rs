//! Playback core: the controller state machine and the views it feeds.
//!
//! Every input (key press, click, audio notification) arrives as an [`Event`]
//! and is handled to completion by [`Controller::dispatch`], which returns the
//! [`Command`]s the runtime must carry out: requests for the audio thread and
//! render instructions for the screen. Nothing in here touches the terminal
//! or the audio device.

mod controller;
mod playlist;
mod progress;
mod types;

pub use controller::Controller;
pub use playlist::{PlaylistEntry, active_index, build_entries, highlight};
pub use progress::ProgressSync;
pub use types::*;
