//! Track catalog: the fixed, ordered list of tracks available for playback.
//!
//! A catalog is built once at startup, from `[[tracks]]` config entries, a
//! scanned directory, or the built-in demo list, and never changes afterwards.

mod model;
mod scan;

pub use model::*;
pub use scan::scan;
