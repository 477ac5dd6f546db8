use std::path::PathBuf;

use serde::Deserialize;

use crate::theme::AUTOGENERATED_META;

// ---------------------------------------------------------------------------
// Top-level settings
// ---------------------------------------------------------------------------

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory searched by `list` and by `apply --theme NAME`.
    pub themes_dir: Option<PathBuf>,
    pub defaults: Defaults,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// i3 config used when `--config` is not given.
    pub i3_config: Option<PathBuf>,
    /// `meta` text written by `extract`.
    pub meta: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            i3_config: None,
            meta: AUTOGENERATED_META.to_owned(),
        }
    }
}
