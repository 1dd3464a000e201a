use std::{cell::RefCell, collections::HashMap};

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    /// Value for `<meta name="theme-color">`.
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#0f172a",
        }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.write(key, value);
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Persisted choice first, then the system color scheme, then dark.
/// `system_prefers_dark` is `None` when the media query is unavailable.
pub fn resolve_theme(
    storage: &impl PreferenceStorage,
    system_prefers_dark: Option<bool>,
) -> ThemePreference {
    if let Some(stored) = storage
        .read(THEME_STORAGE_KEY)
        .as_deref()
        .and_then(ThemePreference::from_str)
    {
        return stored;
    }

    match system_prefers_dark {
        Some(true) | None => ThemePreference::Dark,
        Some(false) => ThemePreference::Light,
    }
}

pub struct ThemeStore<S> {
    storage: S,
    theme: ThemePreference,
}

impl<S: PreferenceStorage> ThemeStore<S> {
    pub fn load(storage: S, system_prefers_dark: Option<bool>) -> Self {
        let theme = resolve_theme(&storage, system_prefers_dark);
        Self { storage, theme }
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn toggle(&mut self) -> ThemePreference {
        self.theme = self.theme.toggled();
        self.storage.write(THEME_STORAGE_KEY, self.theme.as_str());
        self.theme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
