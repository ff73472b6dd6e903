//! UI rendering helpers for the terminal user interface.
//!
//! [`regions`] computes where every control sits for a given terminal size;
//! [`draw`] paints the [`Screen`] into those regions, and the input layer
//! hit-tests mouse clicks against the same regions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::config::UiSettings;
use crate::player::active_index;
use crate::screen::Screen;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("space", "play/pause");
    map.insert("←/→", "prev/next song");
    map.insert("+/-", "volume");
    map.insert("a", "autoplay");
    map.insert("click", "seek / pick a song");
    map.insert("q", "quit");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["space", "←/→", "click", "+/-", "a", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Screen areas for one frame. Inner rects are the clickable parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub header: Rect,
    pub now_playing: Rect,
    pub seek: Rect,
    /// Inside the seek block's borders; this is the bar itself.
    pub seek_bar: Rect,
    pub prev: Rect,
    pub toggle: Rect,
    pub next: Rect,
    pub volume: Rect,
    /// Inside the volume block's borders.
    pub volume_bar: Rect,
    pub autoplay: Rect,
    pub playlist: Rect,
    /// Inside the playlist block's borders; one row per visible entry.
    pub playlist_rows: Rect,
    pub footer: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Min(12),
            Constraint::Length(16),
        ])
        .split(chunks[3]);

    let bordered = Block::default().borders(Borders::ALL);
    Regions {
        header: chunks[0],
        now_playing: chunks[1],
        seek: chunks[2],
        seek_bar: bordered.inner(chunks[2]),
        prev: controls[0],
        toggle: controls[1],
        next: controls[2],
        volume: controls[3],
        volume_bar: bordered.inner(controls[3]),
        autoplay: controls[4],
        playlist: chunks[4],
        playlist_rows: bordered.inner(chunks[4]),
        footer: chunks[5],
    }
}

/// Visible slice `start..end` of a list of `total` rows in `height` lines,
/// centered on `focus` when the list does not fit.
pub fn visible_window(total: usize, height: usize, focus: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = focus.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

fn button(label: &str) -> Paragraph<'_> {
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Render the entire UI into `frame` from `screen`.
pub fn draw(frame: &mut Frame, screen: &Screen, ui_settings: &UiSettings) {
    let r = regions(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" encore ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, r.header);

    // Now playing
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Title:  "),
            Span::raw(screen.title.as_str()).bold(),
        ]),
        Line::from(format!("Artist: {}", screen.artist)),
        Line::from(format!("Cover:  {}", screen.cover)),
    ];
    if let Some(status) = &screen.status {
        lines.push(Line::from(status.as_str()).red());
    }
    let now_playing = Paragraph::new(lines)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" now playing "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, r.now_playing);

    // Seek bar. The fill may run outside 0..=100 in odd cases; the gauge cannot.
    let ratio = (screen.fill_percent / 100.0).clamp(0.0, 1.0);
    let seek = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .ratio(if ratio.is_nan() { 0.0 } else { ratio })
        .label(format!("{} / {}", screen.elapsed, screen.total));
    frame.render_widget(seek, r.seek);

    // Transport
    frame.render_widget(button("⏮"), r.prev);
    frame.render_widget(button(screen.glyph.symbol()), r.toggle);
    frame.render_widget(button("⏭"), r.next);

    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" volume "))
        .ratio(f64::from(screen.volume).clamp(0.0, 1.0))
        .label(format!("{:.0}%", screen.volume * 100.0));
    frame.render_widget(volume, r.volume);

    let checkbox = if screen.autoplay { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(format!("{} autoplay", checkbox))
            .block(Block::default().borders(Borders::ALL)),
        r.autoplay,
    );

    // Playlist. Only build ListItems for the visible window.
    {
        let total = screen.playlist.len();
        let height = r.playlist_rows.height as usize;
        let active = active_index(&screen.playlist);
        let (start, end) = visible_window(total, height, active.unwrap_or(0));

        let items: Vec<ListItem> = screen.playlist[start..end]
            .iter()
            .map(|e| {
                let mut spans = vec![Span::raw(e.title.as_str())];
                if !e.artist.is_empty() {
                    spans.push(Span::raw(" - ").dim());
                    spans.push(Span::raw(e.artist.as_str()).italic());
                }
                if !e.duration.is_empty() {
                    spans.push(Span::raw(format!("  {}", e.duration)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" playlist "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if let Some(a) = active.filter(|a| (start..end).contains(a)) {
            state.select(Some(a - start));
        }
        frame.render_stateful_widget(list, r.playlist, &mut state);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, r.footer);
}
