//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Toggle between English and German
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }
}
