// Pedantic: suppress noise for internal crate code.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod apply;
pub mod color;
pub mod commands;
pub mod config;
pub mod extract;
pub mod theme;

pub use apply::{apply_theme, apply_theme_document};
pub use extract::{ColorExtractor, Extraction, RegexExtractor};
pub use theme::{BarColor, ColorSet, Theme, ThemeError, WindowState};
