use super::*;
use crate::audio::{LoopMode, PlayQueue};
use crate::browse::{Browser, CascadeState, PaneKind};
use crate::library::{Track, TrackCollection};
use std::path::PathBuf;

fn t(title: &str, artist: &str, genre: &str) -> Track {
    Track {
        path: PathBuf::from(format!("/music/{title}.mp3")),
        title: title.into(),
        artist: artist.into(),
        genre: Some(genre.into()),
        album: None,
        duration: None,
    }
}

fn library() -> TrackCollection {
    TrackCollection::new(vec![
        t("Nardis", "Bill Evans", "Jazz"),
        t("Blue in Green", "Bill Evans", "Jazz"),
        t("So What", "Miles Davis", "Jazz"),
        t("Paranoid", "Black Sabbath", "Metal"),
    ])
}

#[test]
fn cursor_wraps_within_focused_pane() {
    let mut collection = library();
    let mut app = App::new(Browser::new(&mut collection));

    assert_eq!(app.focus, PaneKind::Genre);
    assert_eq!(app.pane_len(PaneKind::Genre), 2);
    app.prev();
    assert_eq!(app.cursor(PaneKind::Genre), 1);
    app.next();
    assert_eq!(app.cursor(PaneKind::Genre), 0);
    app.bottom();
    assert_eq!(app.cursor(PaneKind::Genre), 1);
    app.top();
    assert_eq!(app.cursor(PaneKind::Genre), 0);
}

#[test]
fn activation_drills_down_and_queues_the_row_under_the_cursor() {
    let mut collection = library();
    let mut app = App::new(Browser::new(&mut collection));
    let mut queue = PlayQueue::default();

    app.activate(&mut queue).unwrap();
    assert_eq!(app.focus, PaneKind::Artist);
    assert_eq!(app.browser.selector().active_genre(), Some("Jazz"));

    app.activate(&mut queue).unwrap();
    assert_eq!(app.focus, PaneKind::Track);
    assert_eq!(app.browser.selector().active_artist(), Some("Bill Evans"));

    // Tracks are shown by title: "Blue in Green", "Nardis".
    app.next();
    app.activate(&mut queue).unwrap();
    assert_eq!(queue.tracks()[0].title, "Nardis");
    assert_eq!(app.status.as_deref(), Some("Queued: Nardis"));
    assert_eq!(app.focus, PaneKind::Track);
}

#[test]
fn activating_another_genre_resets_downstream_cursors() {
    let mut collection = library();
    let mut app = App::new(Browser::new(&mut collection));
    let mut queue = PlayQueue::default();

    app.activate(&mut queue).unwrap();
    app.next();
    app.activate(&mut queue).unwrap();
    assert_eq!(app.browser.selector().active_artist(), Some("Miles Davis"));

    app.focus_left();
    app.focus_left();
    assert_eq!(app.focus, PaneKind::Genre);
    app.next();
    app.activate(&mut queue).unwrap();

    assert_eq!(app.cursor(PaneKind::Artist), 0);
    assert_eq!(app.cursor(PaneKind::Track), 0);
    assert_eq!(app.browser.selector().state(), CascadeState::Artist);
    assert!(app.browser.selector().tracks().is_empty());
}

#[test]
fn activating_an_empty_pane_is_a_no_op() {
    let mut collection = TrackCollection::default();
    let mut app = App::new(Browser::new(&mut collection));
    let mut queue = PlayQueue::default();

    assert!(app.activate(&mut queue).is_ok());
    app.next();
    assert_eq!(app.cursor(PaneKind::Genre), 0);
    assert!(queue.is_empty());
}

#[test]
fn library_change_returns_focus_to_genres() {
    let mut collection = library();
    let mut app = App::new(Browser::new(&mut collection));
    let mut queue = PlayQueue::default();
    app.activate(&mut queue).unwrap();
    app.activate(&mut queue).unwrap();

    collection.extend(vec![t("Kashmir", "Led Zeppelin", "Rock")]);
    assert!(app.sync());
    assert_eq!(app.focus, PaneKind::Genre);
    for kind in [PaneKind::Genre, PaneKind::Artist, PaneKind::Track] {
        assert_eq!(app.cursor(kind), 0);
    }
    assert_eq!(app.pane_len(PaneKind::Genre), 3);
    assert!(!app.sync());
}

#[test]
fn cycle_loop_mode_cycles_three_states() {
    let mut collection = library();
    let mut app = App::new(Browser::new(&mut collection));
    assert_eq!(app.loop_mode, LoopMode::NoLoop);
    app.cycle_loop_mode();
    assert_eq!(app.loop_mode, LoopMode::LoopAll);
    app.cycle_loop_mode();
    assert_eq!(app.loop_mode, LoopMode::LoopOne);
    app.cycle_loop_mode();
    assert_eq!(app.loop_mode, LoopMode::NoLoop);
}
