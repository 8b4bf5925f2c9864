//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::path::PathBuf;

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};

use crate::app::entities::AppEntities;
use crate::app::handlers::HandlerRegistry;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::domain::config::AppConfig;
use crate::helpers::{MenuAction, NavAction, default_pages_dir, new_key_bindings};
use crate::i18n::t;
use crate::services::{Navigator, PageStore};

/// Run the application with a loaded configuration
pub fn run_app(config: AppConfig, config_dir: Option<PathBuf>) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let pages_dir = config
            .pages_dir
            .clone()
            .or_else(|| default_pages_dir().ok());
        let store = PageStore::new(pages_dir);
        let title = t(config.locale, "app-title");

        // Initialize global entities
        let entities = AppEntities::init(config, config_dir, cx);
        cx.set_global(entities.clone());
        cx.set_global(HandlerRegistry::with_defaults(&entities));

        register_actions(&entities, cx);

        let bounds = Bounds::centered(None, gpui::size(px(1200.0), px(800.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(title)),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), store, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open main window: {e}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn register_actions(entities: &AppEntities, cx: &mut App) {
    let menu_entities = entities.clone();
    cx.on_action(move |action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
        MenuAction::ToggleLocale => menu_entities.toggle_locale(cx),
    });

    let navigator = Navigator::new(entities.clone());
    cx.on_action(move |action: &NavAction, cx: &mut App| match action {
        NavAction::Back => navigator.back(cx),
        NavAction::Home => navigator.home(cx),
        NavAction::Reload => navigator.reload(cx),
    });
}
