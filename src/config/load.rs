use std::{
    env,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::schema::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ::config::ConfigError),

    #[error("invalid setting: {0}")]
    Invalid(String),

    #[error("failed to render settings: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `CASCADE__`) over
/// an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from `explicit_path` (or the resolved default path) and
    /// the environment.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, SettingsError> {
        let config_path = explicit_path
            .map(Path::to_path_buf)
            .or_else(resolve_config_path);

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            // An explicitly requested file must exist.
            builder = builder.add_source(
                ::config::File::from(path.as_path()).required(explicit_path.is_some()),
            );
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CASCADE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("library.extensions"),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.audio.crossfade_steps == 0 {
            return Err(SettingsError::Invalid(
                "audio.crossfade_steps must be >= 1".to_string(),
            ));
        }
        if self
            .library
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err(SettingsError::Invalid(
                "library.extensions must name at least one extension".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Resolve the config path from `CASCADE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("CASCADE_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

fn xdg_home(var: &str, fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        Some(PathBuf::from(dir))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(fallback))
    }
}

/// Compute the default config path under `$XDG_CONFIG_HOME/cascade/config.toml`
/// or `~/.config/cascade/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_home("XDG_CONFIG_HOME", ".config").map(|d| d.join("cascade").join("config.toml"))
}

/// Default log directory: `$XDG_CACHE_HOME/cascade` or `~/.cache/cascade`.
pub fn default_log_dir() -> Option<PathBuf> {
    xdg_home("XDG_CACHE_HOME", ".cache").map(|d| d.join("cascade"))
}
