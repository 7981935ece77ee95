//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::{PlaybackState, QueueInfo};
use crate::browse::{CascadeState, PaneView, escape_label};
use crate::config::UiSettings;
use crate::library::{format_duration, format_mmss};

const CONTROLS: [(&str, &str); 11] = [
    ("j/k", "up/down"),
    ("l/enter", "select / queue"),
    ("h", "back"),
    ("gg/G", "top/bottom"),
    ("space", "play/pause"),
    ("n/N", "next/prev"),
    ("x", "stop"),
    ("c", "clear queue"),
    ("r", "loop mode"),
    ("R", "rescan"),
    ("q", "quit"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn left_padded() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Build the list items for a pane. The active row is bold and marked.
fn pane_items<'a>(pane: &'a PaneView, ui: &UiSettings) -> Vec<ListItem<'a>> {
    pane.items
        .iter()
        .enumerate()
        .map(|(row, item)| {
            let is_active = pane.active == Some(row);
            let marker = if is_active { "* " } else { "  " };
            let mut spans = vec![Span::raw(marker), Span::raw(item.label.as_str())];
            if ui.show_durations {
                if let Some(secondary) = item.secondary.as_deref() {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        secondary,
                        Style::default().add_modifier(Modifier::DIM),
                    ));
                }
            }
            let line = Line::from(spans);
            if is_active {
                ListItem::new(line).style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                ListItem::new(line)
            }
        })
        .collect()
}

fn draw_pane(frame: &mut Frame, area: Rect, app: &App, pane: &PaneView, ui: &UiSettings) {
    let focused = app.focus == pane.kind;
    let title = format!(" {} ({}) ", pane.kind.title(), pane.items.len());
    let mut block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block = block.border_style(Style::default().add_modifier(Modifier::BOLD));
    }

    let list = List::new(pane_items(pane, ui))
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused && !pane.items.is_empty() {
        state.select(Some(app.cursor(pane.kind).min(pane.items.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_queue(frame: &mut Frame, area: Rect, info: &QueueInfo) {
    let items: Vec<ListItem> = info
        .tracks
        .iter()
        .enumerate()
        .map(|(pos, track)| {
            let marker = if info.position == Some(pos) { "▶ " } else { "  " };
            let artist = if track.artist.is_empty() {
                String::new()
            } else {
                format!("{} - ", escape_label(&track.artist))
            };
            ListItem::new(format!(
                "{}{}{}  [{}]",
                marker,
                artist,
                escape_label(&track.title),
                format_duration(track.duration)
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" queue "));
    let mut state = ListState::default();
    state.select(info.position);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Where the user is in the genre > artist > track drill-down.
fn breadcrumb(app: &App) -> String {
    let selector = app.browser.selector();
    if selector.index().is_empty() {
        return "No tracks found".to_string();
    }
    match (
        selector.state(),
        selector.active_genre(),
        selector.active_artist(),
    ) {
        (CascadeState::TrackReady, Some(genre), Some(artist)) => format!(
            "{} > {}",
            escape_label(genre),
            escape_label(artist)
        ),
        (CascadeState::Artist, Some(genre), _) => escape_label(genre),
        _ => "Pick a genre".to_string(),
    }
}

fn status_text(app: &App, info: Option<&QueueInfo>) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(" {}", breadcrumb(app)));
    parts.push(format!("PLAYBACK: {}", app.loop_mode.label()));

    if let Some(info) = info {
        match (info.state, info.current()) {
            (PlaybackState::Stopped, _) | (_, None) => parts.push("Stopped".to_string()),
            (state, Some(track)) => {
                let state = if state == PlaybackState::Playing {
                    "Playing"
                } else {
                    "Paused"
                };
                parts.push(format!(
                    "{}: {} [{} / {}]",
                    state,
                    escape_label(&track.title),
                    format_mmss(info.elapsed),
                    format_duration(track.duration)
                ));
            }
        }
        parts.push(format!("Queue: {}", info.tracks.len()));
    }

    parts.push(format!("Tracks: {}", app.browser.selector().index().len()));

    if let Some(dir) = &app.library_dir {
        parts.push(format!("Dir: {}", dir));
    }
    if let Some(msg) = &app.status {
        parts.push(msg.clone());
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let queue_snapshot: Option<QueueInfo> = app
        .queue_handle
        .as_ref()
        .and_then(|h| h.lock().ok().map(|info| info.clone()));

    let queue_height = if ui_settings.show_queue { 8 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(queue_height),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" cascade ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(chunks[1]);
    for (pane, area) in app.browser.panes().iter().zip(columns.iter()) {
        draw_pane(frame, *area, app, pane, ui_settings);
    }

    if ui_settings.show_queue {
        match queue_snapshot.as_ref() {
            Some(info) => draw_queue(frame, chunks[2], info),
            None => draw_queue(frame, chunks[2], &QueueInfo::default()),
        }
    }

    let status = Paragraph::new(status_text(app, queue_snapshot.as_ref()))
        .block(Block::bordered().padding(left_padded()).title(" status "))
        .wrap(Wrap { trim: true })
        .italic();
    frame.render_widget(status, chunks[3]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_padded()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
