//! File-level wrappers around the pure theme functions.
//!
//! Inputs are read fully and results computed in memory before anything is
//! written, so a failed run never leaves a partial output file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::apply::apply_theme;
use crate::extract::RegexExtractor;
use crate::theme::Theme;

/// Apply the theme file at `theme_path` to the i3 config at `config_path`.
pub fn apply(theme_path: &Path, config_path: &Path) -> Result<String> {
    let theme_src = std::fs::read_to_string(theme_path)
        .with_context(|| format!("reading theme file {}", theme_path.display()))?;
    let config = std::fs::read_to_string(config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;

    let theme = Theme::from_yaml(&theme_src)
        .with_context(|| format!("parsing theme file {}", theme_path.display()))?;
    tracing::debug!(
        "apply: {} window colors, {} bar colors, palette [{}]",
        theme.window_colors.len(),
        theme.bar_colors.len(),
        theme.colors
    );
    Ok(apply_theme(&theme, &config))
}

/// Extract the theme of the i3 config at `config_path` as a YAML document.
pub fn extract(config_path: &Path, meta: &str) -> Result<String> {
    let config = std::fs::read_to_string(config_path)
        .with_context(|| format!("reading {}", config_path.display()))?;
    let theme = Theme::from_config_with(&RegexExtractor, &config, meta);
    if theme.window_colors.is_empty() && theme.bar_colors.is_empty() {
        tracing::warn!("extract: no colors found in {}", config_path.display());
    }
    Ok(theme.to_yaml()?)
}

/// Write `contents` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            print!("{contents}");
            Ok(())
        }
    }
}
