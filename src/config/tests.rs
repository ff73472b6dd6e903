use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_encore_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", "/tmp/encore-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/encore-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");

    assert_eq!(
        default_log_path(),
        std::path::PathBuf::from("/tmp/xdg-state")
            .join("encore")
            .join("encore.log")
    );
}

#[test]
fn defaults_match_a_fresh_player() {
    let s = Settings::default();
    assert_eq!(s.player.volume, 1.0);
    assert!(s.player.autoplay);
    assert_eq!(s.player.start_index, 0);
    assert!(s.tracks.is_empty());
    assert_eq!(s.ui.cover_placeholder, "cover-placeholder.png");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_with_tracks() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
volume = 0.4
autoplay = false
start_index = 1
tick_ms = 100

[controls]
volume_step = 0.1

[ui]
header_text = "hello"

[library]
extensions = ["mp3"]
recursive = false

[logging]
enabled = false
level = "encore=debug"

[[tracks]]
title = "Song One"
artist = "Artist A"
src = "songs/song1.mp3"
cover = "cover1.jpg"

[[tracks]]
title = "Song Two"
src = "songs/song2.mp3"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ENCORE__PLAYER__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.player.volume, 0.4);
    assert!(!s.player.autoplay);
    assert_eq!(s.player.start_index, 1);
    assert_eq!(s.player.tick_ms, 100);
    assert_eq!(s.controls.volume_step, 0.1);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.cover_placeholder, "cover-placeholder.png");
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.logging.enabled);
    assert_eq!(s.logging.level, "encore=debug");

    assert_eq!(s.tracks.len(), 2);
    assert_eq!(s.tracks[0].title, "Song One");
    assert_eq!(s.tracks[0].artist.as_deref(), Some("Artist A"));
    assert_eq!(s.tracks[0].cover.as_deref(), Some("cover1.jpg"));
    assert_eq!(s.tracks[1].artist, None);
    assert_eq!(s.tracks[1].cover, None);
    assert_eq!(
        s.tracks[1].src,
        std::path::PathBuf::from("songs/song2.mp3")
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[player]
autoplay = true
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ENCORE__PLAYER__AUTOPLAY", "false");

    let s = Settings::load().unwrap();
    assert!(!s.player.autoplay);
}

#[test]
fn validate_rejects_out_of_range_volume_and_zero_tick() {
    let mut s = Settings::default();
    s.player.volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.player.tick_ms = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.controls.volume_step = 0.0;
    assert!(s.validate().is_err());
}
