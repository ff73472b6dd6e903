//! Input bindings: terminal key and mouse events to controller events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::player::{Event, SeekBar, active_index};
use crate::screen::Screen;
use crate::ui::{Regions, visible_window};

/// What the runtime should do with an input.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Dispatch(Event),
    Quit,
}

/// Volume control behavior: steps are rounded to hundredths and the control
/// never leaves `0.0..=1.0`.
pub fn step_volume(current: f32, delta: f32) -> f32 {
    (((current + delta) * 100.0).round() / 100.0).clamp(0.0, 1.0)
}

pub fn map_key(key: KeyEvent, screen: &Screen, volume_step: f32) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') => Action::Dispatch(Event::Toggle),
        KeyCode::Right => Action::Dispatch(Event::Next),
        KeyCode::Left => Action::Dispatch(Event::Previous),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            Action::Dispatch(Event::VolumeChanged(step_volume(screen.volume, volume_step)))
        }
        KeyCode::Char('-') => {
            Action::Dispatch(Event::VolumeChanged(step_volume(screen.volume, -volume_step)))
        }
        KeyCode::Char('a') => Action::Dispatch(Event::AutoplayChanged(!screen.autoplay)),
        _ => return None,
    };
    Some(action)
}

/// Map a left click to the control under the pointer. Other mouse activity
/// is ignored.
pub fn map_mouse(mouse: MouseEvent, regions: &Regions, screen: &Screen) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let pos = Position {
        x: mouse.column,
        y: mouse.row,
    };

    let event = if regions.seek_bar.contains(pos) {
        Event::SeekRequest {
            pointer_x: f64::from(pos.x),
            bar: seek_bar(regions.seek_bar),
        }
    } else if regions.toggle.contains(pos) {
        Event::Toggle
    } else if regions.next.contains(pos) {
        Event::Next
    } else if regions.prev.contains(pos) {
        Event::Previous
    } else if regions.volume_bar.contains(pos) {
        let bar = regions.volume_bar;
        let ratio = f32::from(pos.x - bar.x) / f32::from(bar.width.saturating_sub(1).max(1));
        Event::VolumeChanged(step_volume(ratio, 0.0))
    } else if regions.autoplay.contains(pos) {
        Event::AutoplayChanged(!screen.autoplay)
    } else if regions.playlist_rows.contains(pos) {
        let rows = regions.playlist_rows;
        let total = screen.playlist.len();
        let focus = active_index(&screen.playlist).unwrap_or(0);
        let (start, end) = visible_window(total, rows.height as usize, focus);
        let index = start + (pos.y - rows.y) as usize;
        if index >= end {
            return None;
        }
        Event::Select(index)
    } else {
        return None;
    };
    Some(Action::Dispatch(event))
}

fn seek_bar(rect: Rect) -> SeekBar {
    SeekBar {
        left: f64::from(rect.x),
        width: f64::from(rect.width),
    }
}

#[cfg(test)]
mod tests;
