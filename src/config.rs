//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive the player (initial volume,
//! autoplay, catalog entries, logging) and helpers to load them from disk.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

#[cfg(test)]
mod tests;
