//! Process-wide UI settings.
//!
//! Theme and language are provided once at the composition root and read
//! through Leptos context; nothing below the root reaches for ambient
//! globals. On the client, changes persist to `localStorage` and are
//! restored on the next visit.

use crate::i18n::Language;
use leptos::prelude::*;

const LANGUAGE_STORAGE_KEY: &str = "amber-relay.language";
const THEME_STORAGE_KEY: &str = "amber-relay.theme";

/// Color theme for the site shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The persisted name of the theme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses a persisted theme name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Reactive handles to the site-wide settings.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub language: RwSignal<Language>,
    pub theme: RwSignal<Theme>,
}

impl Settings {
    fn new(language: Language, theme: Theme) -> Self {
        Self {
            language: RwSignal::new(language),
            theme: RwSignal::new(theme),
        }
    }
}

/// Creates the settings store, registers persistence, and provides it as
/// context. Call exactly once, from the application root.
pub fn provide_settings() -> Settings {
    let language = read_stored(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default();
    let theme = read_stored(THEME_STORAGE_KEY)
        .and_then(|name| Theme::from_name(&name))
        .unwrap_or_default();

    let settings = Settings::new(language, theme);

    // Effects only run on the client, so persistence never happens
    // during server rendering.
    Effect::new(move |_| {
        write_stored(LANGUAGE_STORAGE_KEY, settings.language.get().code());
    });
    Effect::new(move |_| {
        write_stored(THEME_STORAGE_KEY, settings.theme.get().name());
    });

    provide_context(settings);
    settings
}

/// Returns the settings provided by the application root.
///
/// # Panics
///
/// Panics when called outside a tree rooted in [`provide_settings`].
#[must_use]
pub fn use_settings() -> Settings {
    expect_context::<Settings>()
}

#[cfg(feature = "hydrate")]
fn read_stored(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(not(feature = "hydrate"))]
fn read_stored(_key: &str) -> Option<String> {
    None
}

#[cfg(feature = "hydrate")]
fn write_stored(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(feature = "hydrate"))]
fn write_stored(_key: &str, _value: &str) {}
