use super::sink::clamp_seek;
use super::MediaPlayer;
use super::thread::Engine;
use super::types::{LoadId, MediaEvent, MediaNotice};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

#[test]
fn clamp_seek_keeps_targets_inside_the_track() {
    let len = Some(Duration::from_secs(200));
    assert_eq!(clamp_seek(50.0, len), Duration::from_secs(50));
    assert_eq!(clamp_seek(-12.5, len), Duration::ZERO);
    assert_eq!(clamp_seek(250.0, len), Duration::from_secs(200));
    assert_eq!(clamp_seek(f64::NAN, len), Duration::ZERO);
    assert_eq!(clamp_seek(f64::INFINITY, len), Duration::from_secs(200));
}

#[test]
fn clamp_seek_without_duration_only_bounds_below() {
    assert_eq!(clamp_seek(30.0, None), Duration::from_secs(30));
    assert_eq!(clamp_seek(-1.0, None), Duration::ZERO);
    assert_eq!(clamp_seek(f64::INFINITY, None), Duration::ZERO);
}

#[test]
fn load_without_output_fails_with_its_load_id() {
    let (tx, rx) = mpsc::channel::<MediaNotice>();
    let mut engine = Engine::new(Err("no device".to_string()), tx);

    engine.load(PathBuf::from("songs/song1.mp3"), LoadId(1));

    let notices: Vec<_> = rx.try_iter().collect();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].load, LoadId(1));
    match &notices[0].event {
        MediaEvent::Failed(reason) => assert!(reason.contains("no device"), "{reason}"),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn play_after_failed_load_reports_failure_again() {
    let (tx, rx) = mpsc::channel::<MediaNotice>();
    let mut engine = Engine::new(Err("no device".to_string()), tx);

    engine.load(PathBuf::from("songs/song1.mp3"), LoadId(4));
    engine.play();
    engine.play();

    let notices: Vec<_> = rx.try_iter().collect();
    assert_eq!(notices.len(), 3);
    for notice in &notices {
        assert_eq!(notice.load, LoadId(4));
        assert!(matches!(notice.event, MediaEvent::Failed(_)));
    }
}

#[test]
fn play_before_any_load_fails() {
    let (tx, rx) = mpsc::channel::<MediaNotice>();
    let mut engine = Engine::new(Err("no device".to_string()), tx);

    engine.play();

    let notices: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        notices,
        vec![MediaNotice {
            load: LoadId::default(),
            event: MediaEvent::Failed("no track loaded".to_string()),
        }]
    );
}

#[test]
fn dropping_the_player_stops_the_audio_thread() {
    let (tx, rx) = mpsc::channel::<MediaNotice>();
    let player = MediaPlayer::spawn(tx, Duration::from_millis(10));
    drop(player);

    // The thread owned the only sender; once it has exited the queue closes.
    loop {
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(_) => continue,
            Err(e) => {
                assert_eq!(e, RecvTimeoutError::Disconnected);
                break;
            }
        }
    }
}
