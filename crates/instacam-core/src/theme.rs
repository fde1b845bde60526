#![forbid(unsafe_code)]

//! Light/dark theme preference, persisted under its own key.

use crate::storage::{KEY_THEME, KeyValueStore, StorageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Load the persisted preference once at startup. An absent or
    /// unrecognized value falls back to light.
    pub fn load(store: &dyn KeyValueStore) -> Theme {
        store
            .get(KEY_THEME)
            .and_then(Theme::from_str)
            .unwrap_or_default()
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self, store: &mut dyn KeyValueStore) -> StorageResult<()> {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        store.set(KEY_THEME, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let mut store = MemoryStore::new();
        let mut theme = Theme::load(&store);
        theme.toggle(&mut store).unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get(KEY_THEME), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    #[test]
    fn double_toggle_restores_theme_and_persisted_value() {
        for start in [Theme::Light, Theme::Dark] {
            let mut store = MemoryStore::new();
            store.set(KEY_THEME, start.as_str()).unwrap();
            let mut theme = Theme::load(&store);
            theme.toggle(&mut store).unwrap();
            theme.toggle(&mut store).unwrap();
            assert_eq!(theme, start);
            assert_eq!(store.get(KEY_THEME), Some(start.as_str()));
        }
    }

    #[test]
    fn unrecognized_value_falls_back_to_light() {
        let mut store = MemoryStore::new();
        store.set(KEY_THEME, "solarized").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }
}
