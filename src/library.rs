//! Music library: track records, directory scanning and the observable
//! track collection the browser is built from.

mod collection;
mod display;
mod model;
mod scan;

pub use collection::{CollectionEvent, CollectionSubscription, TrackCollection};
pub use display::{format_duration, format_mmss};
pub use model::Track;
pub use scan::scan;
