use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::types::Settings;

/// Discover and load the settings file.
///
/// Priority:
/// 1. `--settings` flag (explicit path, must exist)
/// 2. `$I3STYLE_CONFIG` environment variable
/// 3. `$XDG_CONFIG_HOME/i3style/config.toml`
/// 4. `~/.config/i3style/config.toml`
///
/// When nothing is found the defaults are used.
pub fn load_settings(explicit_path: Option<&Path>) -> Result<Settings> {
    let path = match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_settings(),
    };

    let Some(path) = path else {
        tracing::debug!("settings: no config file found, using defaults");
        return Ok(Settings::default());
    };

    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let mut settings = parse_settings(&contents)
        .with_context(|| format!("parsing TOML from {}", path.display()))?;
    tracing::debug!("settings: loaded {}", path.display());

    settings.themes_dir = settings.themes_dir.as_deref().map(expand_tilde);
    settings.defaults.i3_config = settings.defaults.i3_config.as_deref().map(expand_tilde);
    Ok(settings)
}

pub fn parse_settings(contents: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

fn find_settings() -> Option<PathBuf> {
    settings_candidates(|key| std::env::var(key).ok())
        .into_iter()
        .find(|p| p.is_file())
}

/// Candidate settings paths in priority order, given an environment lookup.
fn settings_candidates(var: impl Fn(&str) -> Option<String>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = var("I3STYLE_CONFIG") {
        candidates.push(PathBuf::from(path));
    }
    if let Some(xdg) = var("XDG_CONFIG_HOME") {
        candidates.push(PathBuf::from(xdg).join("i3style/config.toml"));
    }
    if let Some(home) = var("HOME") {
        candidates.push(PathBuf::from(home).join(".config/i3style/config.toml"));
    }
    candidates
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Expand a leading `~` to `$HOME`.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_priority() {
        let env = |key: &str| match key {
            "I3STYLE_CONFIG" => Some("/etc/i3style.toml".to_owned()),
            "XDG_CONFIG_HOME" => Some("/xdg".to_owned()),
            "HOME" => Some("/home/me".to_owned()),
            _ => None,
        };
        assert_eq!(
            settings_candidates(env),
            vec![
                PathBuf::from("/etc/i3style.toml"),
                PathBuf::from("/xdg/i3style/config.toml"),
                PathBuf::from("/home/me/.config/i3style/config.toml"),
            ]
        );
    }

    #[test]
    fn candidates_skip_unset_vars() {
        let env = |key: &str| (key == "HOME").then(|| "/home/me".to_owned());
        assert_eq!(
            settings_candidates(env),
            vec![PathBuf::from("/home/me/.config/i3style/config.toml")]
        );
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde(Path::new("/abs/themes")), PathBuf::from("/abs/themes"));
        assert_eq!(expand_tilde(Path::new("rel/themes")), PathBuf::from("rel/themes"));
    }
}
