//! Workspace - Main Shell with Layout and Page Loader
//!
//! The workspace holds the header, the page area and the log panel. It
//! watches the navigation state and loads each requested page definition in
//! the background.

use std::sync::Arc;

use gpui::{
    App, Context, Entity, FocusHandle, InteractiveElement, IntoElement, ParentElement, Render,
    Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::domain::page::PageRef;
use crate::features::page::page::PageView;
use crate::i18n::t;
use crate::services::PageStore;
use crate::state::navigation_state::PageStatus;
use crate::theme::colors::ConsoleColors;
use crate::theme::typography::Typography;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    store: PageStore,
    focus_handle: FocusHandle,
    header: Entity<Header>,
    log_panel: Entity<LogPanel>,
    page: Option<Entity<PageView>>,
    /// Generation a load was started for
    requested: Option<u64>,
    /// Generation the current page view was built for
    shown: Option<u64>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        store: PageStore,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        cx.observe_in(&entities.navigation, window, |this, _, window, cx| {
            this.sync_page(window, cx);
            cx.notify();
        })
        .detach();

        // Load the start page once the workspace is in the window
        cx.defer_in(window, |this, window, cx| this.sync_page(window, cx));

        let focus_handle = cx.focus_handle();
        focus_handle.focus(window);

        Self {
            entities,
            store,
            focus_handle,
            header,
            log_panel,
            page: None,
            requested: None,
            shown: None,
        }
    }

    /// Bring the page area in line with the navigation state
    fn sync_page(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let nav = self.entities.navigation.read(cx);
        let generation = nav.generation();
        let current = nav.current().clone();
        let status = nav.status().clone();

        match status {
            PageStatus::Loading => {
                if self.requested != Some(generation) {
                    self.requested = Some(generation);
                    // Dropping the old view releases its select controls
                    self.page = None;
                    self.load_page(current, generation, cx);
                }
            }
            PageStatus::Loaded(def) => {
                if self.shown != Some(generation) {
                    self.shown = Some(generation);
                    let entities = self.entities.clone();
                    self.page = Some(cx.new(|cx| PageView::new(def, entities, window, cx)));
                }
            }
            PageStatus::Failed(_) => {
                self.shown = Some(generation);
                self.page = None;
            }
        }
    }

    fn load_page(&self, page: PageRef, generation: u64, cx: &mut Context<Self>) {
        let store = self.store.clone();
        let entities = self.entities.clone();

        cx.spawn(async move |_this, cx| {
            let status = match store.load(&page).await {
                Ok(def) => PageStatus::Loaded(Arc::new(def)),
                Err(e) => {
                    tracing::error!("Failed to load page {page}: {e}");
                    PageStatus::Failed(e.to_string().into())
                }
            };

            let _ = cx.update(|cx: &mut App| {
                if let PageStatus::Failed(message) = &status {
                    entities.logs.update(cx, |logs, cx| {
                        logs.error(format!("Cannot open {page}: {message}"));
                        cx.notify();
                    });
                }
                entities.navigation.update(cx, |nav, cx| {
                    if nav.finish_load(generation, status) {
                        cx.notify();
                    }
                });
            });
        })
        .detach();
    }

    fn render_placeholder(
        &self,
        text: impl IntoElement,
        detail: Option<Arc<str>>,
    ) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .text_color(ConsoleColors::text_secondary())
                    .child(text),
            )
            .children(detail.map(|detail| {
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(ConsoleColors::danger())
                    .child(detail.to_string())
            }))
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let status = self.entities.navigation.read(cx).status().clone();

        let content = match (&self.page, status) {
            (Some(page), PageStatus::Loaded(_)) => page.clone().into_any_element(),
            (_, PageStatus::Failed(message)) => self
                .render_placeholder(t(locale, "nav-not-found"), Some(message))
                .into_any_element(),
            _ => self
                .render_placeholder(t(locale, "nav-loading"), None)
                .into_any_element(),
        };

        div()
            .id("workspace")
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .bg(ConsoleColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .bg(ConsoleColors::content_bg())
                    .child(content),
            )
            .child(self.log_panel.clone())
    }
}
