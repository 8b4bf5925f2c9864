//! Select Section
//!
//! A drop-down control. The control owns the selected index the way a native
//! `<select>` does; the [`SelectWidget`] reads it on every event and reports
//! the chosen option to the handler named in the page definition.

use gpui::{
    App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName};
use serde_json::Value;

use crate::app::entities::AppEntities;
use crate::app::handlers::HandlerRegistry;
use crate::domain::page::SelectSectionDefinition;
use crate::features::select::controller::{ChangeOutcome, SelectWidget};
use crate::i18n::t;
use crate::theme::colors::ConsoleColors;
use crate::theme::typography::Typography;

/// Index the control starts with: the preset one if it exists, otherwise the
/// first option, otherwise nothing
pub fn initial_index(preset: Option<usize>, len: usize) -> Option<usize> {
    match preset {
        Some(index) if index < len => Some(index),
        Some(index) => {
            tracing::warn!("<Select>: preset index {index} ignored, only {len} options");
            (len > 0).then_some(0)
        }
        None => (len > 0).then_some(0),
    }
}

/// Drop-down control for a select section
pub struct SelectControl {
    id: SharedString,
    label: SharedString,
    entities: AppEntities,
    widget: SelectWidget<Value, App>,
    /// Live selection of the control
    selected: Option<usize>,
    open: bool,
}

impl SelectControl {
    pub fn new(
        id: impl Into<SharedString>,
        def: &SelectSectionDefinition,
        entities: AppEntities,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let handler = def.handler.as_deref().and_then(|name| {
            let found = cx
                .try_global::<HandlerRegistry>()
                .and_then(|registry| registry.get(name));
            if found.is_none() {
                tracing::debug!("<Select>: no handler registered as {name:?}");
            }
            found
        });
        let widget = SelectWidget::from_dynamic(def.options.clone(), handler.as_deref());

        // Startup notification once the control is attached to the window
        cx.defer_in(window, |this, _window, cx| this.mount(cx));
        cx.on_release(|this, _cx| this.widget.unmount()).detach();

        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            id: id.into(),
            label: def.label.clone().into(),
            entities,
            selected: initial_index(def.selected, def.options.len()),
            widget,
            open: false,
        }
    }

    fn mount(&mut self, cx: &mut Context<Self>) {
        let outcome = self.widget.mount(&self.selected, cx);
        self.report(outcome, cx);
    }

    /// The user picked `index` from the open list
    fn pick(&mut self, index: usize, cx: &mut Context<Self>) {
        self.open = false;
        let outcome = self.widget.pick(&mut self.selected, index, cx);
        self.report(outcome, cx);
        cx.notify();
    }

    fn toggle_open(&mut self, cx: &mut Context<Self>) {
        self.open = !self.open;
        cx.notify();
    }

    fn report(&self, outcome: ChangeOutcome, cx: &mut Context<Self>) {
        let message = match outcome {
            ChangeOutcome::Notified { .. }
            | ChangeOutcome::Unchanged
            | ChangeOutcome::Ignored => return,
            ChangeOutcome::InvalidHandler { given } => {
                format!("{}: handler is not a change handler (given: {given})", self.label)
            }
            ChangeOutcome::NoSelection => format!("{}: nothing selected", self.label),
            ChangeOutcome::OutOfRange { index, len } => {
                format!("{}: selection {index} outside of {len} options", self.label)
            }
        };

        self.entities.logs.update(cx, |logs, cx| {
            logs.warn(message);
            cx.notify();
        });
    }

    fn render_option(
        &self,
        index: usize,
        label: &str,
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let is_selected = self.selected == Some(index);

        div()
            .id(SharedString::from(format!("{}-option-{index}", self.id)))
            .px_3()
            .py_1()
            .text_size(px(Typography::TEXT_SM))
            .text_color(ConsoleColors::text_primary())
            .cursor_pointer()
            .when(is_selected, |this| this.bg(ConsoleColors::option_selected()))
            .hover(|s| s.bg(ConsoleColors::option_hover()))
            .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                this.pick(index, cx);
            }))
            .child(label.to_string())
    }
}

impl Render for SelectControl {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let list = self.widget.shared_list();

        let (display_text, text_color) = match self.selected.and_then(|ix| list.get(ix)) {
            Some(item) => (SharedString::from(item.label.clone()), ConsoleColors::text_primary()),
            None if list.is_empty() => (t(locale, "select-empty"), ConsoleColors::input_placeholder()),
            None => (t(locale, "select-placeholder"), ConsoleColors::input_placeholder()),
        };

        let trigger = div()
            .id(SharedString::from(format!("{}-trigger", self.id)))
            .px_3()
            .py_2()
            .min_w(px(200.0))
            .flex()
            .items_center()
            .justify_between()
            .bg(ConsoleColors::input_bg())
            .border_1()
            .border_color(if self.open {
                ConsoleColors::border_focus()
            } else {
                ConsoleColors::input_border()
            })
            .rounded_md()
            .text_size(px(Typography::TEXT_SM))
            .text_color(text_color)
            .cursor_pointer()
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.toggle_open(cx);
            }))
            .child(display_text)
            .child(Icon::new(IconName::ChevronDown).text_color(ConsoleColors::text_muted()));

        let options = self.open.then(|| {
            div()
                .flex()
                .flex_col()
                .py_1()
                .min_w(px(200.0))
                .bg(ConsoleColors::input_bg())
                .border_1()
                .border_color(ConsoleColors::input_border())
                .rounded_md()
                .shadow_md()
                .children(
                    list.iter()
                        .enumerate()
                        .map(|(index, item)| self.render_option(index, &item.label, cx))
                        .collect::<Vec<_>>(),
                )
        });

        div()
            .flex()
            .flex_col()
            .gap_1()
            .when(!self.label.is_empty(), |this| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ConsoleColors::text_secondary())
                        .child(self.label.clone()),
                )
            })
            .child(trigger)
            .children(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_index_prefers_valid_preset() {
        assert_eq!(initial_index(Some(1), 2), Some(1));
    }

    #[test]
    fn initial_index_defaults_to_first_option() {
        assert_eq!(initial_index(None, 2), Some(0));
        assert_eq!(initial_index(Some(5), 2), Some(0));
    }

    #[test]
    fn initial_index_of_empty_list_is_none() {
        assert_eq!(initial_index(None, 0), None);
        assert_eq!(initial_index(Some(0), 0), None);
    }
}
