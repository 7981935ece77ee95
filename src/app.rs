//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the browser, keyboard
//! focus and status state.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
