//! Library browser: groups the track collection by genre and artist and
//! drives the three-pane drill-down used to pick tracks for the queue.
//!
//! [`GenreIndex`] is the grouping, [`CascadeSelector`] the pane state
//! machine, and [`Browser`] ties both to a [`TrackCollection`] so the index
//! follows collection changes.
//!
//! [`TrackCollection`]: crate::library::TrackCollection

mod browser;
mod cascade;
mod error;
mod index;
mod view;

pub use browser::Browser;
pub use cascade::CascadeState;
pub use error::BrowseError;
pub use view::{PaneKind, PaneView, escape_label};

#[cfg(test)]
mod tests;
