//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en")]
    EnUS,
    /// German
    #[serde(rename = "de")]
    DeDE,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::DeDE => "Deutsch",
        }
    }

    /// Pick a locale from a language tag such as `de-CH`
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("de") {
            Locale::DeDE
        } else {
            Locale::EnUS
        }
    }

    /// Locale derived from the user's system settings
    pub fn system_default() -> Self {
        let system = locale_config::Locale::user_default();
        system
            .tags_for("messages")
            .next()
            .map(|tag| Self::from_tag(&tag.to_string()))
            .unwrap_or_default()
    }

    /// The other supported locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::DeDE,
            Locale::DeDE => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, de))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Console", "Konsole"));

    // Navigation
    map.insert("nav-back", ("Back", "Zurück"));
    map.insert("nav-home", ("Home", "Startseite"));
    map.insert("nav-loading", ("Loading page...", "Seite wird geladen..."));
    map.insert("nav-not-found", ("Page not found", "Seite nicht gefunden"));

    // Sections
    map.insert("cards-empty", ("No entries", "Keine Einträge"));
    map.insert("select-placeholder", ("Select...", "Auswählen..."));
    map.insert("select-empty", ("No options", "Keine Optionen"));

    // Log panel
    map.insert("log-title", ("Logs", "Protokoll"));
    map.insert("log-clear", ("Clear", "Leeren"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, de)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::DeDE => SharedString::from(de),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
