use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::color::Palette;
use crate::extract::{ColorExtractor, RegexExtractor};

/// Meta text written into themes produced by `extract`.
pub const AUTOGENERATED_META: &str = "Autogenerated theme";

/// Window colors keyed by state, in source order.
pub type WindowColors = IndexMap<WindowState, ColorSet>;

/// Bar colors keyed by role (`background`, `statusline`, `focused_workspace`...).
pub type BarColors = IndexMap<String, BarColor>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme document: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("failed to serialize theme: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

#[derive(Debug, Error)]
#[error("unknown window state {0:?}")]
pub struct UnknownWindowState(pub String);

/// The window states i3 accepts in `client.<state>` directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WindowState {
    Focused,
    FocusedInactive,
    Unfocused,
    Urgent,
}

impl WindowState {
    pub const ALL: [WindowState; 4] = [
        WindowState::Focused,
        WindowState::FocusedInactive,
        WindowState::Unfocused,
        WindowState::Urgent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WindowState::Focused => "focused",
            WindowState::FocusedInactive => "focused_inactive",
            WindowState::Unfocused => "unfocused",
            WindowState::Urgent => "urgent",
        }
    }
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowState {
    type Err = UnknownWindowState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownWindowState(s.to_owned()))
    }
}

impl Serialize for WindowState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WindowState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Border, background and text colors, plus the split indicator for windows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSet {
    pub border: String,
    pub background: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub indicator: String,
}

impl ColorSet {
    pub fn new(
        border: impl Into<String>,
        background: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            border: border.into(),
            background: background.into(),
            text: text.into(),
            indicator: String::new(),
        }
    }

    #[must_use]
    pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = indicator.into();
        self
    }
}

/// A bar role holds either a full color set or a single color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarColor {
    Set(ColorSet),
    Raw(String),
}

impl From<ColorSet> for BarColor {
    fn from(set: ColorSet) -> Self {
        BarColor::Set(set)
    }
}

impl From<&str> for BarColor {
    fn from(value: &str) -> Self {
        BarColor::Raw(value.to_owned())
    }
}

/// A theme document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, deserialize_with = "meta_de::deserialize")]
    pub meta: String,
    #[serde(default, skip_serializing_if = "Palette::is_empty")]
    pub colors: Palette,
    #[serde(default, deserialize_with = "window_colors_de::deserialize")]
    pub window_colors: WindowColors,
    #[serde(default)]
    pub bar_colors: BarColors,
}

impl Theme {
    /// Parse a YAML theme document.
    pub fn from_yaml(src: &str) -> Result<Self, ThemeError> {
        serde_yaml::from_str(src).map_err(ThemeError::Parse)
    }

    pub fn to_yaml(&self) -> Result<String, ThemeError> {
        serde_yaml::to_string(self).map_err(ThemeError::Serialize)
    }

    /// Capture the colors currently set in an i3 config.
    pub fn from_config(config: &str) -> Self {
        Self::from_config_with(&RegexExtractor, config, AUTOGENERATED_META)
    }

    pub fn from_config_with(
        extractor: &impl ColorExtractor,
        config: &str,
        meta: impl Into<String>,
    ) -> Self {
        Self {
            meta: meta.into(),
            colors: Palette::new(),
            window_colors: extractor.window_colors(config).logged("window"),
            bar_colors: extractor.bar_colors(config).logged("bar"),
        }
    }
}

/// Accept `meta` as plain text or as a `{ description: ... }` mapping.
mod meta_de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Meta {
        Text(String),
        Described { description: String },
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Meta>::deserialize(deserializer)? {
            None => String::new(),
            Some(Meta::Text(text)) => text,
            Some(Meta::Described { description }) => description,
        })
    }
}

/// Drop window-state keys outside the closed set instead of failing.
mod window_colors_de {
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer};

    use super::{ColorSet, WindowColors, WindowState};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<WindowColors, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<IndexMap<String, ColorSet>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, set)| match key.parse::<WindowState>() {
                Ok(state) => Some((state, set)),
                Err(e) => {
                    tracing::debug!("theme: ignoring window_colors entry: {e}");
                    None
                }
            })
            .collect())
    }
}
