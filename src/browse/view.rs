//! Display-ready projection of the three panes.
//!
//! Everything here is a pure function of the selector state; the terminal
//! renderer only lays these out.

use std::fmt;

use crate::library::format_duration;

use super::cascade::CascadeSelector;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaneKind {
    Genre,
    Artist,
    Track,
}

impl PaneKind {
    pub fn title(self) -> &'static str {
        match self {
            PaneKind::Genre => "Genres",
            PaneKind::Artist => "Artists",
            PaneKind::Track => "Tracks",
        }
    }
}

impl fmt::Display for PaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaneKind::Genre => "genre",
            PaneKind::Artist => "artist",
            PaneKind::Track => "track",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneItem {
    pub label: String,
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    pub kind: PaneKind,
    pub items: Vec<PaneItem>,
    /// Highlighted row. Always `None` for the track pane.
    pub active: Option<usize>,
}

/// Make a raw tag value safe to print in the terminal.
///
/// Control characters (newlines, escape sequences, ...) are shown in their
/// escaped form; everything else, including surrounding whitespace, is kept.
pub fn escape_label(raw: &str) -> String {
    if !raw.chars().any(char::is_control) {
        return raw.to_string();
    }
    raw.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn label_pane(kind: PaneKind, labels: &[String], active: Option<usize>) -> PaneView {
    PaneView {
        kind,
        items: labels
            .iter()
            .map(|l| PaneItem {
                label: escape_label(l),
                secondary: None,
            })
            .collect(),
        active,
    }
}

/// Project the selector into genre, artist and track panes, left to right.
pub fn panes(selector: &CascadeSelector) -> [PaneView; 3] {
    let tracks = PaneView {
        kind: PaneKind::Track,
        items: selector
            .tracks()
            .iter()
            .map(|t| PaneItem {
                label: escape_label(&t.title),
                secondary: Some(format_duration(t.duration)),
            })
            .collect(),
        active: None,
    };

    [
        label_pane(PaneKind::Genre, selector.genres(), selector.active_genre_row()),
        label_pane(
            PaneKind::Artist,
            selector.artists(),
            selector.active_artist_row(),
        ),
        tracks,
    ]
}
