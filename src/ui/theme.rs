//! Dark/light theme toggle
//!
//! Persisted under a single key; anything other than a stored `"light"` means
//! dark.

use crate::persistence::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// What the page shows for this theme
    pub fn view(&self) -> ThemeView {
        match self {
            Theme::Dark => ThemeView {
                attribute: "dark",
                icon: "☀",
                title: "Switch to light mode",
            },
            Theme::Light => ThemeView {
                attribute: "light",
                icon: "🌙",
                title: "Switch to dark mode",
            },
        }
    }
}

/// DOM-facing values for a theme: root `data-theme` attribute, toggle icon and
/// tooltip (which names the theme a click switches to)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeView {
    pub attribute: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
}

/// Theme state backed by a preference store
#[derive(Debug)]
pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    pub const STORAGE_KEY: &'static str = "ph-theme";

    /// Restore the saved theme, falling back to dark
    pub fn load(store: S) -> Self {
        let theme = match store.get(Self::STORAGE_KEY) {
            Some(saved) => Theme::from_str(&saved).unwrap_or_else(|| {
                log::debug!("Ignoring unknown saved theme {:?}", saved);
                Theme::default()
            }),
            None => Theme::default(),
        };
        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist the new value
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(Self::STORAGE_KEY, self.theme.as_str());
        log::info!("Theme switched to {}", self.theme.as_str());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
