use serde::{Deserialize, Serialize};

use crate::{CLASS_THEME_DARK, CLASS_THEME_LIGHT};

pub const DEFAULT_THEME_KEY: &str = "three-degree-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Only the two stored spellings are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => CLASS_THEME_LIGHT,
            Self::Dark => CLASS_THEME_DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Where an explicit theme choice is kept between visits.
pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// Tracks the applied theme against an optional persisted preference.
///
/// No stored preference means the system color scheme is followed live; once
/// the user toggles, the choice is stored and system changes are ignored.
pub struct ThemeController<S> {
    store: S,
    applied: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Seed from the store, falling back to the system preference without
    /// persisting it.
    pub fn new(store: S, system_dark: bool) -> Self {
        let applied = store.load().unwrap_or(Theme::from_dark(system_dark));
        Self { store, applied }
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    pub fn is_pinned(&self) -> bool {
        self.store.load().is_some()
    }

    pub fn toggle(&mut self) -> Theme {
        self.applied = self.applied.toggled();
        self.store.save(self.applied);
        self.applied
    }

    /// Returns the theme to apply, or `None` when a stored choice wins.
    pub fn system_changed(&mut self, dark: bool) -> Option<Theme> {
        if self.is_pinned() {
            return None;
        }
        self.applied = Theme::from_dark(dark);
        Some(self.applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct MemoryStore(Cell<Option<Theme>>);

    impl PreferenceStore for &MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.0.get()
        }

        fn save(&self, theme: Theme) {
            self.0.set(Some(theme));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn test_system_seed_is_not_persisted() {
        let store = MemoryStore::default();
        let controller = ThemeController::new(&store, true);
        assert_eq!(controller.applied(), Theme::Dark);
        assert_eq!(store.0.get(), None);
    }

    #[test]
    fn test_stored_choice_beats_system() {
        let store = MemoryStore(Cell::new(Some(Theme::Light)));
        let controller = ThemeController::new(&store, true);
        assert_eq!(controller.applied(), Theme::Light);
    }

    #[test]
    fn test_system_changes_tracked_until_toggle() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::new(&store, false);

        assert_eq!(controller.system_changed(true), Some(Theme::Dark));
        assert_eq!(controller.applied(), Theme::Dark);

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(store.0.get(), Some(Theme::Light));

        assert_eq!(controller.system_changed(true), None);
        assert_eq!(controller.applied(), Theme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
    }
}
