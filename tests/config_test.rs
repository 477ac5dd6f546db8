use std::path::{Path, PathBuf};

use i3style::config::loader::{load_settings, parse_settings};
use i3style::config::themes::{list_themes, resolve_theme_path, themes_dir};
use i3style::config::types::Settings;
use i3style::theme::AUTOGENERATED_META;

#[test]
fn load_settings_from_explicit_path() {
    let settings = load_settings(Some(Path::new("tests/fixtures/settings.toml"))).unwrap();
    assert_eq!(
        settings.themes_dir,
        Some(PathBuf::from("/usr/share/i3style/themes"))
    );
    assert_eq!(settings.defaults.meta, "Captured from my desktop");
    let i3_config = settings.defaults.i3_config.unwrap();
    assert!(i3_config.ends_with(".config/i3/config"));
}

#[test]
fn missing_settings_file_produces_error() {
    let result = load_settings(Some(Path::new("tests/fixtures/nonexistent.toml")));
    assert!(result.is_err());
}

#[test]
fn default_settings() {
    let settings = Settings::default();
    assert!(settings.themes_dir.is_none());
    assert!(settings.defaults.i3_config.is_none());
    assert_eq!(settings.defaults.meta, AUTOGENERATED_META);
}

#[test]
fn partial_defaults_keep_meta() {
    let settings = parse_settings("[defaults]\ni3_config = \"/etc/i3/config\"\n").unwrap();
    assert_eq!(settings.defaults.meta, AUTOGENERATED_META);
    assert_eq!(
        settings.defaults.i3_config,
        Some(PathBuf::from("/etc/i3/config"))
    );
}

#[test]
fn unknown_keys_ignored() {
    let settings = parse_settings("unknown = 1\nthemes_dir = \"/t\"\n").unwrap();
    assert_eq!(settings.themes_dir, Some(PathBuf::from("/t")));
}

#[test]
fn invalid_settings_fail() {
    assert!(parse_settings("themes_dir = 3\n").is_err());
}

#[test]
fn explicit_themes_dir_wins() {
    let settings = parse_settings("themes_dir = \"/from/settings\"\n").unwrap();
    assert_eq!(
        themes_dir(Some(Path::new("/from/flag")), &settings),
        Some(PathBuf::from("/from/flag"))
    );
    assert_eq!(
        themes_dir(None, &settings),
        Some(PathBuf::from("/from/settings"))
    );
}

#[test]
fn default_themes_dir_is_next_to_exe() {
    let dir = themes_dir(None, &Settings::default()).unwrap();
    assert!(dir.ends_with("themes"));
}

#[test]
fn list_bundled_themes() {
    let names = list_themes(Path::new("themes")).unwrap().unwrap();
    assert!(names.contains(&"default.yaml".to_owned()));
    assert!(names.contains(&"solarized.yaml".to_owned()));
}

#[test]
fn list_skips_directories_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("zenburn.yaml"), "meta: z\n").unwrap();
    std::fs::write(dir.path().join("archlinux.yaml"), "meta: a\n").unwrap();
    std::fs::create_dir(dir.path().join("drafts")).unwrap();

    let names = list_themes(dir.path()).unwrap().unwrap();
    assert_eq!(names, vec!["archlinux.yaml", "zenburn.yaml"]);
}

#[test]
fn list_missing_dir_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("themes");
    assert_eq!(list_themes(&missing).unwrap(), None);
}

#[test]
fn resolve_theme_by_name() {
    let themes = Path::new("themes");
    assert_eq!(
        resolve_theme_path(Path::new("solarized"), Some(themes)),
        Some(themes.join("solarized.yaml"))
    );
    assert_eq!(
        resolve_theme_path(Path::new("default.yaml"), Some(themes)),
        Some(themes.join("default.yaml"))
    );
}

#[test]
fn resolve_existing_path_as_is() {
    let path = Path::new("tests/fixtures/solarized.yaml");
    assert_eq!(resolve_theme_path(path, None), Some(path.to_path_buf()));
}

#[test]
fn resolve_unknown_theme() {
    assert_eq!(
        resolve_theme_path(Path::new("no-such-theme"), Some(Path::new("themes"))),
        None
    );
    assert_eq!(resolve_theme_path(Path::new("no-such-theme"), None), None);
}
