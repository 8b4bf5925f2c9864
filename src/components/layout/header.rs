//! Header Component
//!
//! The application header with title, navigation buttons and language switcher.

use gpui::{
    ClickEvent, Context, Div, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::helpers::{BACK_KEYSTROKE, humanize_keystroke};
use crate::i18n::t;
use crate::services::Navigator;
use crate::theme::colors::ConsoleColors;
use crate::theme::typography::Typography;

/// Header component
pub struct Header {
    entities: AppEntities,
    navigator: Navigator,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self {
            navigator: Navigator::new(entities.clone()),
            entities,
        }
    }

    fn header_button(
        id: &'static str,
        label: impl Into<SharedString>,
        enabled: bool,
    ) -> Stateful<Div> {
        div()
            .id(id)
            .px_3()
            .py_1()
            .rounded_md()
            .text_size(px(Typography::TEXT_SM))
            .text_color(ConsoleColors::text_light())
            .bg(gpui::rgba(0xffffff22))
            .when(enabled, |this| {
                this.cursor_pointer().hover(|s| s.bg(gpui::rgba(0xffffff44)))
            })
            .when(!enabled, |this| this.opacity(0.4))
            .child(label.into())
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let nav = self.entities.navigation.read(cx);
        let can_go_back = nav.can_go_back();
        let current = nav.current().to_string();

        let back_label = format!(
            "← {} ({})",
            t(locale, "nav-back"),
            humanize_keystroke(BACK_KEYSTROKE)
        );

        let back_navigator = self.navigator.clone();
        let home_navigator = self.navigator.clone();
        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(ConsoleColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_color(ConsoleColors::text_light())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(t(locale, "app-title")),
                    )
                    .child(
                        div()
                            .text_color(ConsoleColors::text_muted())
                            .text_size(px(Typography::TEXT_SM))
                            .child(current),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Self::header_button("nav-back", back_label, can_go_back).when(
                            can_go_back,
                            |this| {
                                this.on_click(move |_event: &ClickEvent, _window, cx| {
                                    back_navigator.back(cx);
                                })
                            },
                        ),
                    )
                    .child(
                        Self::header_button("nav-home", t(locale, "nav-home"), true).on_click(
                            move |_event: &ClickEvent, _window, cx| {
                                home_navigator.home(cx);
                            },
                        ),
                    )
                    .child(
                        Self::header_button("lang-switcher", locale.display_name(), true)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.toggle_locale(cx);
                            }),
                    ),
            )
    }
}
