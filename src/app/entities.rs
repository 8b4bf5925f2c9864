//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency so views only re-render on what they
//! observe.

use std::path::PathBuf;

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::state::{
    config_state::ConfigState, i18n_state::I18nState, log_state::LogState,
    navigation_state::NavigationState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Current page and back stack
    pub navigation: Entity<NavigationState>,
    /// Activity log (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, config_dir: Option<PathBuf>, cx: &mut App) -> Self {
        let locale = config.locale;
        let start_page = config.start_page.clone();

        Self {
            config: cx.new(|_| ConfigState::new(config, config_dir)),
            navigation: cx.new(|_| NavigationState::new(start_page)),
            logs: cx.new(|_| LogState::new(500)),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }

    /// Switch the UI language and remember the choice in the config file
    pub fn toggle_locale(&self, cx: &mut App) {
        let locale = self.i18n.update(cx, |i18n, cx| {
            i18n.toggle_locale();
            cx.notify();
            i18n.locale
        });

        self.config.update(cx, |state, _cx| {
            state.config.locale = locale;
            state.save();
        });
    }
}
