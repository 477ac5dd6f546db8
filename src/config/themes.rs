use std::io;
use std::path::{Path, PathBuf};

use crate::config::types::Settings;

const THEME_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// `themes/` next to the running executable.
pub fn default_themes_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join("themes"))
}

/// Pick the themes directory: explicit flag, then settings, then the default.
pub fn themes_dir(explicit: Option<&Path>, settings: &Settings) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| settings.themes_dir.clone())
        .or_else(default_themes_dir)
}

/// List theme file names in `dir`, sorted.
///
/// Returns `Ok(None)` if the directory does not exist. Subdirectories are
/// skipped.
pub fn list_themes(dir: &Path) -> io::Result<Option<Vec<String>>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(Some(names))
}

/// Find the theme file for `name`.
///
/// An existing file path is returned as-is. Otherwise `name` is looked up in
/// `dir`, bare and then with each known extension.
pub fn resolve_theme_path(name: &Path, dir: Option<&Path>) -> Option<PathBuf> {
    if name.is_file() {
        return Some(name.to_path_buf());
    }
    let dir = dir?;

    let bare = dir.join(name);
    if bare.is_file() {
        return Some(bare);
    }
    THEME_EXTENSIONS
        .iter()
        .map(|ext| dir.join(name).with_extension(ext))
        .find(|p| p.is_file())
}
