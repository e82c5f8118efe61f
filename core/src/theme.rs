use std::cell::RefCell;
use std::collections::HashMap;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Storage key holding the selected theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document attribute the stylesheet keys its palettes on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Cupcake,
    Cyberpunk,
    Fantasy,
}

impl Theme {
    /// Every selectable theme, in menu order.
    pub const ALL: [Theme; 5] = [
        Theme::Light,
        Theme::Dark,
        Theme::Cupcake,
        Theme::Cyberpunk,
        Theme::Fantasy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Cupcake => "cupcake",
            Theme::Cyberpunk => "cyberpunk",
            Theme::Fantasy => "fantasy",
        }
    }

    /// Menu label: the name with its first letter capitalized.
    pub fn label(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown theme: {s}"))
    }
}

/// Narrow durable key-value capability: one string per key.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChatError>;

    fn set(&self, key: &str, value: &str) -> Result<(), ChatError>;
}

/// In-memory store, used where no durable storage exists.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ChatError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ChatError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, ChatError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ChatError> {
        (**self).set(key, value)
    }
}

/// Reads and writes the persisted theme choice.
pub struct ThemePreference<S> {
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted theme, or [`Theme::Dark`] when nothing usable is stored.
    pub fn load(&self) -> Theme {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|e| {
                warn!("{e}; falling back to {}", Theme::default());
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Could not read theme preference: {e}");
                Theme::default()
            }
        }
    }

    pub fn select(&self, theme: Theme) -> Result<(), ChatError> {
        debug!("Persisting theme {theme}");
        self.store.set(THEME_STORAGE_KEY, theme.as_str())
    }
}
