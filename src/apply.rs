use std::hash::Hash;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::color::Palette;
use crate::extract::{ColorExtractor, RegexExtractor};
use crate::theme::{BarColor, BarColors, ColorSet, Theme, ThemeError, WindowState};

/// An existing `colors { ... }` block, including its indentation and newline.
static COLORS_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)[ \t]*colors\s+\{\s+.+?\s+\}[ \t]*\n?").expect("valid colors block regex")
});

const BLOCK_INDENT: &str = "    ";

/// Parse a YAML theme document and apply it to `config`.
pub fn apply_theme_document(theme_yaml: &str, config: &str) -> Result<String, ThemeError> {
    let theme = Theme::from_yaml(theme_yaml)?;
    Ok(apply_theme(&theme, config))
}

/// Rewrite the color directives of `config` with those of `theme`.
///
/// Colors already present in `config` are kept unless the theme sets the same
/// key. `client.*` lines are dropped and regenerated at the end of the output,
/// and the bar colors block is re-inserted before the closing brace of the
/// first `bar {}` block. Every other line is copied as-is.
pub fn apply_theme(theme: &Theme, config: &str) -> String {
    apply_theme_with(&RegexExtractor, theme, config)
}

pub fn apply_theme_with(extractor: &impl ColorExtractor, theme: &Theme, config: &str) -> String {
    let palette = &theme.colors;
    let bar = overlay(extractor.bar_colors(config).logged("bar"), &theme.bar_colors);
    let windows = overlay(
        extractor.window_colors(config).logged("window"),
        &theme.window_colors,
    );

    let block = colors_block(&bar, palette);
    let stripped = COLORS_BLOCK_RE.replace_all(config, "");

    let mut merged = String::with_capacity(config.len() + block.len());
    let mut in_bar = false;
    let mut injected = false;
    for line in stripped.lines() {
        if line.contains("client.") {
            continue;
        }
        if line.trim_start().starts_with('#') {
            merged.push_str(line);
            merged.push('\n');
            continue;
        }
        if line.contains("bar {") {
            in_bar = true;
        }
        if in_bar && line.contains('}') {
            merged.push_str(&block);
            in_bar = false;
            injected = true;
        }
        merged.push_str(line);
        merged.push('\n');
    }

    if !injected && !block.is_empty() {
        tracing::debug!("apply: no bar block in config, bar colors not written");
    }

    for (state, set) in &windows {
        merged.push_str(&window_directive(*state, set, palette));
        merged.push('\n');
    }
    merged
}

/// Overlay `theme` on top of `base`. Keys keep their first position.
pub fn overlay<K, V>(base: IndexMap<K, V>, theme: &IndexMap<K, V>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = base;
    for (key, value) in theme {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Format `client.<state> border background text indicator`.
pub fn window_directive(state: WindowState, set: &ColorSet, palette: &Palette) -> String {
    let line = format!(
        "client.{state} {} {} {} {}",
        palette.resolve(&set.border),
        palette.resolve(&set.background),
        palette.resolve(&set.text),
        palette.resolve(&set.indicator),
    );
    line.trim_end().to_owned()
}

/// Build the bar `colors { ... }` block, or an empty string when there is
/// nothing to write.
pub fn colors_block(bar: &BarColors, palette: &Palette) -> String {
    if bar.is_empty() {
        return String::new();
    }

    let mut block = format!("{BLOCK_INDENT}colors {{\n");
    for (role, color) in bar {
        block.push_str(BLOCK_INDENT);
        block.push_str(BLOCK_INDENT);
        match color {
            BarColor::Set(set) => {
                block.push_str(&format!(
                    "{role} {} {} {}",
                    palette.resolve(&set.border),
                    palette.resolve(&set.background),
                    palette.resolve(&set.text),
                ));
            }
            BarColor::Raw(value) => {
                block.push_str(&format!("{role} {}", palette.resolve(value)));
            }
        }
        block.push('\n');
    }
    block.push_str(BLOCK_INDENT);
    block.push_str("}\n");
    block
}
