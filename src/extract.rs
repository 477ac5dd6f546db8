use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;

use crate::theme::{BarColor, BarColors, ColorSet, WindowColors, WindowState};

/// `client.<name> <colors...>` up to the end of the line.
static CLIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"client\.(?P<state>\w+)[ \t]+(?P<colors>.+)").expect("valid client regex")
});

/// The first `bar { ... colors { ... } }` block; captures the colors body.
static BAR_COLORS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)bar\s+\{\s*(?:.*?\s)?colors\s+\{\s+(?P<body>.+?)\s+\}")
        .expect("valid bar regex")
});

/// One `<role> <colors...>` line inside a bar colors body.
static BAR_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?P<role>\w+)[ \t]+(?P<colors>.+)$").expect("valid bar entry regex")
});

/// An entry the extractor saw but could not use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractIssue {
    #[error("client.{state}: expected 3 or 4 colors, found {count}")]
    WindowTokenCount { state: WindowState, count: usize },
    #[error("client.{name}: not a window state")]
    UnsupportedState { name: String },
    #[error("bar color {role}: expected 1 or 3 colors, found {count}; keeping the first")]
    BarTokenCount { role: String, count: usize },
}

impl ExtractIssue {
    /// `true` for entries that look like a typo rather than an unrelated directive.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ExtractIssue::UnsupportedState { .. })
    }
}

/// Result of one extraction pass.
///
/// Extraction never fails: an empty mapping with no issues means nothing was
/// found, while `issues` lists entries that were skipped or truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction<T> {
    pub colors: T,
    pub issues: Vec<ExtractIssue>,
}

impl<T> Extraction<T> {
    /// Log any issues and return the colors.
    pub fn logged(self, pass: &str) -> T {
        for issue in &self.issues {
            if issue.is_malformed() {
                tracing::warn!("extract[{pass}]: {issue}");
            } else {
                tracing::debug!("extract[{pass}]: {issue}");
            }
        }
        self.colors
    }
}

impl<K, V> Extraction<IndexMap<K, V>> {
    pub fn is_no_match(&self) -> bool {
        self.colors.is_empty() && self.issues.is_empty()
    }
}

/// Source of the colors currently defined in an i3 config.
pub trait ColorExtractor {
    fn window_colors(&self, config: &str) -> Extraction<WindowColors>;
    fn bar_colors(&self, config: &str) -> Extraction<BarColors>;
}

/// Pattern-based extractor for the two shapes i3 configs use for colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexExtractor;

impl ColorExtractor for RegexExtractor {
    fn window_colors(&self, config: &str) -> Extraction<WindowColors> {
        let mut out = Extraction::<WindowColors>::default();

        for caps in CLIENT_RE.captures_iter(config) {
            let name = &caps["state"];
            let Ok(state) = name.parse::<WindowState>() else {
                out.issues.push(ExtractIssue::UnsupportedState {
                    name: name.to_owned(),
                });
                continue;
            };

            let tokens: Vec<&str> = caps["colors"].split_whitespace().collect();
            let set = match tokens.as_slice() {
                [border, background, text] => ColorSet::new(*border, *background, *text),
                [border, background, text, indicator] => {
                    ColorSet::new(*border, *background, *text).with_indicator(*indicator)
                }
                _ => {
                    out.issues.push(ExtractIssue::WindowTokenCount {
                        state,
                        count: tokens.len(),
                    });
                    continue;
                }
            };
            // Later directives override earlier ones, as in i3 itself.
            out.colors.insert(state, set);
        }

        out
    }

    fn bar_colors(&self, config: &str) -> Extraction<BarColors> {
        let mut out = Extraction::<BarColors>::default();

        let Some(block) = BAR_COLORS_RE.captures(config) else {
            return out;
        };

        for caps in BAR_ENTRY_RE.captures_iter(&block["body"]) {
            let role = &caps["role"];
            let tokens: Vec<&str> = caps["colors"].split_whitespace().collect();
            let color = match tokens.as_slice() {
                [border, background, text] => {
                    BarColor::Set(ColorSet::new(*border, *background, *text))
                }
                [single] => BarColor::Raw((*single).to_owned()),
                [first, ..] => {
                    out.issues.push(ExtractIssue::BarTokenCount {
                        role: role.to_owned(),
                        count: tokens.len(),
                    });
                    BarColor::Raw((*first).to_owned())
                }
                [] => continue,
            };
            out.colors.insert(role.to_owned(), color);
        }

        out
    }
}

/// Window colors of `config`, with issues logged.
pub fn window_colors(config: &str) -> WindowColors {
    RegexExtractor.window_colors(config).logged("window")
}

/// Bar colors of `config`, with issues logged.
pub fn bar_colors(config: &str) -> BarColors {
    RegexExtractor.bar_colors(config).logged("bar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_inactive_is_not_read_as_focused() {
        let colors = window_colors("client.focused_inactive #1 #2 #3\n");
        assert_eq!(colors.len(), 1);
        assert!(colors.contains_key(&WindowState::FocusedInactive));
    }

    #[test]
    fn unsupported_state_is_reported_not_malformed() {
        let extraction = RegexExtractor.window_colors("client.background #ffffff\n");
        assert!(extraction.colors.is_empty());
        assert_eq!(
            extraction.issues,
            vec![ExtractIssue::UnsupportedState {
                name: "background".to_owned()
            }]
        );
        assert!(!extraction.issues[0].is_malformed());
        assert!(!extraction.is_no_match());
    }

    #[test]
    fn wrong_token_count_is_discarded() {
        let extraction = RegexExtractor.window_colors("client.urgent #1 #2\n");
        assert!(extraction.colors.is_empty());
        assert_eq!(
            extraction.issues,
            vec![ExtractIssue::WindowTokenCount {
                state: WindowState::Urgent,
                count: 2
            }]
        );
    }

    #[test]
    fn two_token_bar_entry_keeps_first() {
        let config = "bar {\n    position top\n    colors {\n        separator #666 #777\n    }\n}\n";
        let extraction = RegexExtractor.bar_colors(config);
        assert_eq!(
            extraction.colors.get("separator"),
            Some(&BarColor::Raw("#666".to_owned()))
        );
        assert_eq!(extraction.issues.len(), 1);
    }
}
