use std::path::Path;

use crate::config::{self, SettingsError};

/// Load and validate settings. Config is optional: any failure yields the
/// defaults plus the error, to be logged once logging is up.
pub fn load_settings(path: Option<&Path>) -> (config::Settings, Option<SettingsError>) {
    match config::Settings::load(path) {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (config::Settings::default(), Some(e)),
        },
        Err(e) => (config::Settings::default(), Some(e)),
    }
}
