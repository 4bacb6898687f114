//! Theme preference persisted alongside the sprint data

use serde::{Deserialize, Serialize};

use crate::storage::{KvStore, Result};

/// Persisted key for the theme preference
pub const THEME_KEY: &str = "sprint_rhythm_theme";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load the saved theme; absent or unrecognized values fall back to dark
pub fn load_theme<K: KvStore>(kv: &K) -> Result<Theme> {
    Ok(kv
        .get(THEME_KEY)?
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default())
}

/// Persist the theme as its raw string form
pub fn save_theme<K: KvStore>(kv: &mut K, theme: Theme) -> Result<()> {
    kv.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    #[test]
    fn test_theme_defaults_to_dark() {
        let kv = MemoryKvStore::new();
        assert_eq!(load_theme(&kv).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_theme_roundtrip() {
        let mut kv = MemoryKvStore::new();
        save_theme(&mut kv, Theme::Light).unwrap();

        assert_eq!(kv.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(load_theme(&kv).unwrap(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_theme_falls_back() {
        let mut kv = MemoryKvStore::new();
        kv.set(THEME_KEY, "solarized").unwrap();

        assert_eq!(load_theme(&kv).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
