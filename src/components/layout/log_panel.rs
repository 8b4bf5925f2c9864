//! Log Panel Component
//!
//! Displays the activity log at the bottom of the screen.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::state::log_state::LogEntry;
use crate::theme::colors::ConsoleColors;

/// Entries shown at most, newest first
const VISIBLE_ENTRIES: usize = 50;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(ConsoleColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(entry.timestamp.format("%H:%M:%S%.3f").to_string()),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(ConsoleColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let logs = self.entities.logs.read(cx);
        let expanded = logs.expanded;

        let height = if expanded { px(150.0) } else { px(32.0) };

        let clear_entities = self.entities.clone();
        let toggle_entities = self.entities.clone();

        let header = div()
            .h(px(32.0))
            .w_full()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(gpui::rgba(0xffffff22))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_color(ConsoleColors::text_light())
                            .text_size(px(13.0))
                            .font_weight(gpui::FontWeight::MEDIUM)
                            .child(t(locale, "log-title")),
                    )
                    .child(
                        div()
                            .text_color(ConsoleColors::text_muted())
                            .text_size(px(11.0))
                            .child(format!("({})", logs.len())),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .id("clear-logs")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .text_color(ConsoleColors::text_muted())
                            .text_size(px(11.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                clear_entities.logs.update(cx, |logs, cx| {
                                    logs.clear();
                                    cx.notify();
                                });
                            })
                            .child(t(locale, "log-clear")),
                    )
                    .child(
                        div()
                            .id("toggle-logs")
                            .px_2()
                            .py_1()
                            .rounded_sm()
                            .text_color(ConsoleColors::text_muted())
                            .text_size(px(11.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                toggle_entities.logs.update(cx, |logs, cx| {
                                    logs.toggle_expanded();
                                    cx.notify();
                                });
                            })
                            .child(if expanded { "▼" } else { "▲" }),
                    ),
            );

        let entries = expanded.then(|| {
            div()
                .id("log-entries")
                .flex_1()
                .overflow_y_scroll()
                .px_4()
                .py_1()
                .children(
                    logs.entries()
                        .rev()
                        .take(VISIBLE_ENTRIES)
                        .map(|entry| self.render_log_entry(entry))
                        .collect::<Vec<_>>(),
                )
        });

        div()
            .h(height)
            .w_full()
            .bg(ConsoleColors::log_panel_bg())
            .flex()
            .flex_col()
            .child(header)
            .children(entries)
    }
}
