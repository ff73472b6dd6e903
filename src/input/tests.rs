use super::*;
use crate::player::{PlaylistEntry, Render};
use crate::ui::regions;
use crossterm::event::{KeyEventKind, KeyEventState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen_with(n: usize) -> Screen {
    let mut screen = Screen::default();
    let entries = (0..n)
        .map(|i| PlaylistEntry {
            title: format!("Song {i}"),
            artist: String::new(),
            duration: String::new(),
            active: false,
        })
        .collect();
    screen.apply(Render::Playlist(entries));
    screen.apply(Render::HighlightActive(0));
    screen
}

#[test]
fn keyboard_shortcuts_map_to_transport() {
    let screen = Screen::default();
    assert_eq!(
        map_key(key(KeyCode::Char(' ')), &screen, 0.05),
        Some(Action::Dispatch(Event::Toggle))
    );
    assert_eq!(
        map_key(key(KeyCode::Right), &screen, 0.05),
        Some(Action::Dispatch(Event::Next))
    );
    assert_eq!(
        map_key(key(KeyCode::Left), &screen, 0.05),
        Some(Action::Dispatch(Event::Previous))
    );
    assert_eq!(map_key(key(KeyCode::Char('q')), &screen, 0.05), Some(Action::Quit));
    assert_eq!(map_key(key(KeyCode::Char('x')), &screen, 0.05), None);
}

#[test]
fn ctrl_c_quits() {
    let mut k = key(KeyCode::Char('c'));
    k.modifiers = KeyModifiers::CONTROL;
    assert_eq!(map_key(k, &Screen::default(), 0.05), Some(Action::Quit));
}

#[test]
fn volume_keys_step_within_range() {
    let mut screen = Screen::default();
    screen.volume = 1.0;
    assert_eq!(
        map_key(key(KeyCode::Char('+')), &screen, 0.05),
        Some(Action::Dispatch(Event::VolumeChanged(1.0)))
    );
    assert_eq!(
        map_key(key(KeyCode::Char('-')), &screen, 0.05),
        Some(Action::Dispatch(Event::VolumeChanged(0.95)))
    );

    screen.volume = 0.02;
    assert_eq!(
        map_key(key(KeyCode::Char('-')), &screen, 0.05),
        Some(Action::Dispatch(Event::VolumeChanged(0.0)))
    );
}

#[test]
fn step_volume_rounds_to_hundredths() {
    assert_eq!(step_volume(0.1, 0.2), 0.3);
    assert_eq!(step_volume(0.5, 0.0), 0.5);
    assert_eq!(step_volume(-3.0, 0.0), 0.0);
}

#[test]
fn autoplay_key_flips_the_checkbox() {
    let mut screen = Screen::default();
    screen.autoplay = true;
    assert_eq!(
        map_key(key(KeyCode::Char('a')), &screen, 0.05),
        Some(Action::Dispatch(Event::AutoplayChanged(false)))
    );
}

#[test]
fn clicks_hit_transport_buttons() {
    let r = regions(Rect::new(0, 0, 80, 30));
    let screen = Screen::default();
    let center = |rect: Rect| click(rect.x + rect.width / 2, rect.y + rect.height / 2);

    assert_eq!(
        map_mouse(center(r.toggle), &r, &screen),
        Some(Action::Dispatch(Event::Toggle))
    );
    assert_eq!(
        map_mouse(center(r.next), &r, &screen),
        Some(Action::Dispatch(Event::Next))
    );
    assert_eq!(
        map_mouse(center(r.prev), &r, &screen),
        Some(Action::Dispatch(Event::Previous))
    );
    assert_eq!(
        map_mouse(center(r.autoplay), &r, &screen),
        Some(Action::Dispatch(Event::AutoplayChanged(false)))
    );
    assert_eq!(map_mouse(center(r.header), &r, &screen), None);
}

#[test]
fn click_on_seek_bar_reports_pointer_and_bar() {
    let r = regions(Rect::new(0, 0, 80, 30));
    let x = r.seek_bar.x + 10;
    let action = map_mouse(click(x, r.seek_bar.y), &r, &Screen::default());
    assert_eq!(
        action,
        Some(Action::Dispatch(Event::SeekRequest {
            pointer_x: f64::from(x),
            bar: SeekBar {
                left: f64::from(r.seek_bar.x),
                width: f64::from(r.seek_bar.width),
            },
        }))
    );
}

#[test]
fn click_on_volume_bar_sets_level_from_position() {
    let r = regions(Rect::new(0, 0, 80, 30));
    let bar = r.volume_bar;
    let screen = Screen::default();
    assert_eq!(
        map_mouse(click(bar.x, bar.y), &r, &screen),
        Some(Action::Dispatch(Event::VolumeChanged(0.0)))
    );
    assert_eq!(
        map_mouse(click(bar.x + bar.width - 1, bar.y), &r, &screen),
        Some(Action::Dispatch(Event::VolumeChanged(1.0)))
    );
}

#[test]
fn click_on_playlist_row_selects_that_track() {
    let r = regions(Rect::new(0, 0, 80, 30));
    let screen = screen_with(3);
    let rows = r.playlist_rows;

    assert_eq!(
        map_mouse(click(rows.x + 2, rows.y + 2), &r, &screen),
        Some(Action::Dispatch(Event::Select(2)))
    );
    // Below the last entry.
    assert_eq!(map_mouse(click(rows.x + 2, rows.y + 3), &r, &screen), None);
}

#[test]
fn non_left_clicks_are_ignored() {
    let r = regions(Rect::new(0, 0, 80, 30));
    let mut m = click(r.toggle.x + 1, r.toggle.y + 1);
    m.kind = MouseEventKind::Moved;
    assert_eq!(map_mouse(m, &r, &Screen::default()), None);
}
