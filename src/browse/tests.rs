use super::cascade::CascadeSelector;
use super::index::GenreIndex;
use super::*;
use crate::audio::PlayQueue;
use crate::library::{Track, TrackCollection};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn t(title: &str, artist: &str, genre: Option<&str>) -> Track {
    Track {
        path: PathBuf::from(format!("/music/{artist}/{title}.flac")),
        title: title.into(),
        artist: artist.into(),
        genre: genre.map(str::to_string),
        album: None,
        duration: Some(Duration::from_secs(200)),
    }
}

fn arcs(tracks: Vec<Track>) -> Vec<Arc<Track>> {
    tracks.into_iter().map(Arc::new).collect()
}

fn scenario() -> Vec<Track> {
    vec![
        t("B", "X", Some("Rock")),
        t("A", "X", Some("Rock")),
        t("C", "Y", Some("")),
    ]
}

fn titles(tracks: &[Arc<Track>]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

fn labels(pane: &PaneView) -> Vec<&str> {
    pane.items.iter().map(|i| i.label.as_str()).collect()
}

fn selector_for(tracks: &[Arc<Track>]) -> CascadeSelector {
    let mut selector = CascadeSelector::default();
    selector.reset(GenreIndex::build(tracks));
    selector
}

/// Every `(genre, artist, bucket)` triple, in pane order.
fn buckets(index: &GenreIndex) -> Vec<(String, String, Vec<Arc<Track>>)> {
    let mut out = Vec::new();
    for genre in index.genres() {
        for artist in index.artists(genre).unwrap_or_default() {
            let bucket = index.tracks(genre, artist).unwrap_or_default();
            out.push((genre.to_string(), artist.to_string(), bucket.to_vec()));
        }
    }
    out
}

/// Drive a browser to `genre` and optionally `artist` by label.
fn open(browser: &mut Browser, genre: &str, artist: Option<&str>) {
    let row = browser
        .selector()
        .genres()
        .iter()
        .position(|g| g == genre)
        .unwrap();
    browser.select_genre_at(row).unwrap();
    if let Some(artist) = artist {
        let row = browser
            .selector()
            .artists()
            .iter()
            .position(|a| a == artist)
            .unwrap();
        browser.select_artist_at(row).unwrap();
    }
}

#[test]
fn index_groups_scenario_and_keeps_bucket_insertion_order() {
    let index = GenreIndex::build(&arcs(scenario()));

    assert_eq!(index.genres(), vec!["Rock", "Unknown"]);
    assert_eq!(index.artists("Rock").unwrap(), vec!["X"]);
    assert_eq!(index.artists("Unknown").unwrap(), vec!["Y"]);
    assert_eq!(titles(index.tracks("Rock", "X").unwrap()), vec!["B", "A"]);
    assert_eq!(titles(index.tracks("Unknown", "Y").unwrap()), vec!["C"]);
    assert_eq!(index.len(), 3);
}

#[test]
fn every_track_lands_in_exactly_one_bucket() {
    let tracks = arcs(vec![
        t("One", "Ann", Some("Jazz")),
        t("Two", "Bob", None),
        t("Three", "", Some("Jazz")),
        t("Four", "Ann", Some("Blues")),
        t("Five", "Ann", Some("Jazz")),
        t("Six", "bob", None),
    ]);
    let index = GenreIndex::build(&tracks);

    let all = buckets(&index);
    let total: usize = all.iter().map(|(_, _, b)| b.len()).sum();
    assert_eq!(total, tracks.len());

    for track in &tracks {
        let hits = all
            .iter()
            .filter(|(_, _, b)| b.iter().any(|x| Arc::ptr_eq(x, track)))
            .count();
        assert_eq!(hits, 1, "{} should be in exactly one bucket", track.title);
    }
}

#[test]
fn empty_artist_is_a_literal_key() {
    let index = GenreIndex::build(&arcs(vec![t("Intro", "", Some("Ambient"))]));
    assert_eq!(index.artists("Ambient").unwrap(), vec![""]);
    assert_eq!(titles(index.tracks("Ambient", "").unwrap()), vec!["Intro"]);
}

#[test]
fn grouping_is_case_and_whitespace_sensitive() {
    let index = GenreIndex::build(&arcs(vec![
        t("a", "X", Some("rock")),
        t("b", "X", Some("Rock")),
        t("c", "X", Some("Rock ")),
    ]));
    assert_eq!(index.genres(), vec!["Rock", "Rock ", "rock"]);
}

#[test]
fn rebuilding_from_the_same_input_is_deterministic() {
    let tracks = arcs(scenario());
    let a = GenreIndex::build(&tracks);
    let b = GenreIndex::build(&tracks);

    let shape = |i: &GenreIndex| -> Vec<(String, String, Vec<String>)> {
        buckets(i)
            .into_iter()
            .map(|(g, a, b)| (g, a, b.iter().map(|t| t.title.clone()).collect()))
            .collect()
    };
    assert_eq!(shape(&a), shape(&b));
}

#[test]
fn genre_and_artist_panes_are_sorted_regardless_of_input_order() {
    let tracks = arcs(vec![
        t("1", "Zed", Some("Pop")),
        t("2", "Amy", Some("Pop")),
        t("3", "Mo", Some("Folk")),
        t("4", "Kai", Some("Pop")),
        t("5", "Lu", Some("Acid")),
    ]);
    let mut selector = selector_for(&tracks);
    assert_eq!(selector.genres(), ["Acid", "Folk", "Pop"]);

    selector.select_genre("Pop").unwrap();
    assert_eq!(selector.artists(), ["Amy", "Kai", "Zed"]);
}

#[test]
fn track_pane_sort_is_stable_on_equal_titles() {
    let mut first = t("Same", "X", Some("Rock"));
    first.path = PathBuf::from("/first.flac");
    let mut second = t("Same", "X", Some("Rock"));
    second.path = PathBuf::from("/second.flac");
    let tracks = arcs(vec![t("Zulu", "X", Some("Rock")), first, t("Alpha", "X", Some("Rock")), second]);

    let mut selector = selector_for(&tracks);
    selector.select_genre("Rock").unwrap();
    selector.select_artist("X").unwrap();

    assert_eq!(titles(selector.tracks()), vec!["Alpha", "Same", "Same", "Zulu"]);
    assert_eq!(selector.tracks()[1].path, PathBuf::from("/first.flac"));
    assert_eq!(selector.tracks()[2].path, PathBuf::from("/second.flac"));
}

#[test]
fn scenario_walkthrough_appends_the_displayed_track() {
    let mut collection = TrackCollection::new(scenario());
    let mut browser = Browser::new(&mut collection);
    let mut queue = PlayQueue::default();

    let [genres, artists, tracks] = browser.panes();
    assert_eq!(labels(&genres), vec!["Rock", "Unknown"]);
    assert!(artists.items.is_empty());
    assert!(tracks.items.is_empty());
    assert_eq!(genres.active, None);

    open(&mut browser, "Rock", None);
    let [genres, artists, _] = browser.panes();
    assert_eq!(genres.active, Some(0));
    assert_eq!(labels(&artists), vec!["X"]);
    assert_eq!(artists.active, None);

    open(&mut browser, "Rock", Some("X"));
    let [_, artists, tracks] = browser.panes();
    assert_eq!(artists.active, Some(0));
    assert_eq!(labels(&tracks), vec!["A", "B"]);
    assert_eq!(tracks.active, None);

    let chosen = browser.choose_track(0, &mut queue).unwrap();
    assert_eq!(chosen.title, "A");
    assert_eq!(queue.len(), 1);
    assert!(Arc::ptr_eq(&queue.tracks()[0], &browser.selector().tracks()[0]));
}

#[test]
fn chosen_track_is_the_same_object_as_the_displayed_row() {
    let mut collection = TrackCollection::new(vec![
        t("m", "X", Some("Rock")),
        t("c", "X", Some("Rock")),
        t("x", "X", Some("Rock")),
    ]);
    let originals = collection.tracks();
    let mut browser = Browser::new(&mut collection);
    open(&mut browser, "Rock", Some("X"));

    let mut queue = PlayQueue::default();
    for row in 0..3 {
        let shown = Arc::clone(&browser.selector().tracks()[row]);
        let chosen = browser.choose_track(row, &mut queue).unwrap();
        assert!(Arc::ptr_eq(&shown, &chosen));
        assert!(originals.iter().any(|o| Arc::ptr_eq(o, &chosen)));
    }
    assert_eq!(
        queue.tracks().iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
        vec!["c", "m", "x"]
    );
}

#[test]
fn choosing_a_track_leaves_panes_untouched() {
    let mut collection = TrackCollection::new(scenario());
    let mut browser = Browser::new(&mut collection);
    open(&mut browser, "Rock", Some("X"));
    let before = browser.panes();

    let mut queue = PlayQueue::default();
    browser.choose_track(1, &mut queue).unwrap();
    assert_eq!(browser.panes(), before);
    assert_eq!(browser.selector().state(), CascadeState::TrackReady);
}

#[test]
fn switching_genre_clears_artist_and_tracks_even_with_shared_artist_names() {
    let tracks = arcs(vec![
        t("Song", "Shared", Some("Jazz")),
        t("Other", "Shared", Some("Rock")),
    ]);
    let mut selector = selector_for(&tracks);
    selector.select_genre("Jazz").unwrap();
    selector.select_artist("Shared").unwrap();
    assert_eq!(selector.tracks().len(), 1);

    selector.select_genre("Rock").unwrap();
    assert_eq!(selector.active_genre(), Some("Rock"));
    assert_eq!(selector.active_artist(), None);
    assert_eq!(selector.artists(), ["Shared"]);
    assert!(selector.tracks().is_empty());
    assert_eq!(selector.state(), CascadeState::Artist);
}

#[test]
fn reselecting_active_labels_is_idempotent() {
    let tracks = arcs(scenario());
    let mut selector = selector_for(&tracks);
    selector.select_genre("Rock").unwrap();
    selector.select_artist("X").unwrap();
    let artists = selector.artists().to_vec();
    let shown: Vec<String> = selector.tracks().iter().map(|t| t.title.clone()).collect();

    selector.select_artist("X").unwrap();
    assert_eq!(selector.artists(), artists.as_slice());
    assert_eq!(titles(selector.tracks()), shown);

    selector.select_genre("Rock").unwrap();
    assert_eq!(selector.artists(), artists.as_slice());
    assert!(selector.tracks().is_empty());
}

#[test]
fn empty_collection_renders_empty_panes_without_error() {
    let mut collection = TrackCollection::default();
    let browser = Browser::new(&mut collection);

    assert!(browser.selector().index().is_empty());
    for pane in browser.panes() {
        assert!(pane.items.is_empty());
        assert_eq!(pane.active, None);
    }
    assert_eq!(browser.selector().state(), CascadeState::Genre);
}

#[test]
fn out_of_order_transitions_are_reported() {
    let tracks = arcs(scenario());
    let mut selector = selector_for(&tracks);

    assert_eq!(selector.select_artist("X"), Err(BrowseError::NoActiveGenre));
    assert_eq!(selector.select_artist_at(0), Err(BrowseError::NoActiveGenre));
    assert_eq!(selector.choose_track(0).unwrap_err(), BrowseError::NoActiveArtist);
    assert_eq!(
        selector.select_genre("Jazz"),
        Err(BrowseError::UnknownGenre("Jazz".into()))
    );
    assert_eq!(
        selector.select_genre_at(5),
        Err(BrowseError::RowOutOfRange {
            pane: PaneKind::Genre,
            index: 5,
            len: 2
        })
    );

    selector.select_genre("Unknown").unwrap();
    assert_eq!(
        selector.select_artist("X"),
        Err(BrowseError::UnknownArtist {
            genre: "Unknown".into(),
            artist: "X".into()
        })
    );
    selector.select_artist_at(0).unwrap();
    assert_eq!(
        selector.choose_track(1).unwrap_err(),
        BrowseError::TrackOutOfRange { index: 1, len: 1 }
    );
}

#[test]
fn failed_choose_does_not_touch_the_queue() {
    let mut collection = TrackCollection::new(scenario());
    let browser = Browser::new(&mut collection);
    let mut queue = PlayQueue::default();
    assert!(browser.choose_track(0, &mut queue).is_err());
    assert!(queue.is_empty());
}

#[test]
fn collection_changes_rebuild_and_reset_selection() {
    let mut collection = TrackCollection::new(scenario());
    let mut browser = Browser::new(&mut collection);
    assert_eq!(browser.sync(), 0);

    open(&mut browser, "Rock", Some("X"));

    collection.extend(vec![t("D", "Z", Some("Jazz"))]);
    collection.extend(vec![t("E", "Z", Some("Jazz"))]);
    assert_eq!(browser.sync(), 2);

    let selector = browser.selector();
    assert_eq!(selector.state(), CascadeState::Genre);
    assert_eq!(selector.genres(), ["Jazz", "Rock", "Unknown"]);
    assert!(selector.artists().is_empty());
    assert!(selector.tracks().is_empty());
    assert_eq!(selector.index().len(), 5);
}

#[test]
fn clearing_the_collection_empties_every_pane() {
    let mut collection = TrackCollection::new(scenario());
    let mut browser = Browser::new(&mut collection);
    open(&mut browser, "Rock", None);

    collection.clear();
    assert_eq!(browser.sync(), 1);
    assert!(browser.panes().iter().all(|p| p.items.is_empty()));
}

#[test]
fn labels_escape_control_characters_only() {
    assert_eq!(escape_label("  Drum & Bass "), "  Drum & Bass ");
    assert_eq!(escape_label("Two\nLines"), "Two\\nLines");
    assert_eq!(escape_label("\u{1b}[31mRed"), "\\u{1b}[31mRed");
}

#[test]
fn track_pane_shows_duration_as_secondary_label() {
    let mut collection = TrackCollection::new(scenario());
    let mut browser = Browser::new(&mut collection);
    open(&mut browser, "Unknown", Some("Y"));

    let [_, _, tracks] = browser.panes();
    assert_eq!(tracks.items[0].secondary.as_deref(), Some("3:20"));
}
