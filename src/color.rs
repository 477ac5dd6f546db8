use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Return `true` if `value` is a literal color rather than a palette name.
///
/// i3 accepts `#RRGGBB` and `#RRGGBBAA`; anything carrying a `#` is treated as
/// literal and never looked up.
pub fn is_literal(value: &str) -> bool {
    value.contains('#')
}

/// Symbolic color names declared in a theme's `colors` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(IndexMap<String, String>);

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Resolve a color reference against the palette.
    ///
    /// Literals pass through untouched. Names are looked up exactly once, so a
    /// palette entry pointing at another name is emitted as that name. Unknown
    /// names are returned unchanged.
    pub fn resolve<'a>(&'a self, value: &'a str) -> &'a str {
        if value.is_empty() || is_literal(value) {
            return value;
        }
        match self.get(value) {
            Some(resolved) => resolved,
            None => {
                tracing::debug!("palette: no entry for {value:?}, keeping as-is");
                value
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        [("base", "#002b36"), ("fg", "#839496"), ("alias", "base")]
            .into_iter()
            .collect()
    }

    #[test]
    fn literal_detection() {
        assert!(is_literal("#ffffff"));
        assert!(is_literal("#ff00ff80"));
        assert!(!is_literal("base"));
        assert!(!is_literal(""));
    }

    #[test]
    fn resolves_known_name() {
        assert_eq!(palette().resolve("base"), "#002b36");
    }

    #[test]
    fn unknown_name_passes_through() {
        assert_eq!(palette().resolve("missing"), "missing");
    }

    #[test]
    fn literal_is_never_looked_up() {
        let mut p = palette();
        p.insert("#fff", "#000");
        assert_eq!(p.resolve("#fff"), "#fff");
    }

    #[test]
    fn resolution_is_single_level() {
        // "alias" points at "base", which is itself a palette name.
        assert_eq!(palette().resolve("alias"), "base");
    }

    #[test]
    fn display_lists_entries_in_order() {
        let p: Palette = [("a", "#111"), ("b", "#222")].into_iter().collect();
        assert_eq!(p.to_string(), "a=#111, b=#222");
    }
}
