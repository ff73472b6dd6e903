use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{LoggingSettings, default_log_path};

/// Install a file-backed subscriber. The terminal belongs to the UI, so
/// nothing is written to stdout/stderr. `RUST_LOG` overrides the configured
/// level. Returns the log file, or `None` when logging stays off.
pub fn init(settings: &LoggingSettings) -> Option<PathBuf> {
    if !settings.enabled {
        return None;
    }

    let path = settings.file.clone().unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .ok()?;
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        let settings = LoggingSettings {
            enabled: false,
            ..LoggingSettings::default()
        };
        assert_eq!(init(&settings), None);
    }

    #[test]
    fn unopenable_log_file_leaves_logging_off() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LoggingSettings {
            file: Some(dir.path().to_path_buf()),
            ..LoggingSettings::default()
        };
        assert_eq!(init(&settings), None);
    }
}
