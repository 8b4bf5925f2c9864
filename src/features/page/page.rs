//! Page View
//!
//! Shows one loaded page definition. Select controls are entities created
//! once per page so their startup notification fires exactly once. Card
//! images are decoded when the page is built; card and text sections are
//! plain elements rebuilt on every render.

use std::sync::Arc;

use gpui::{
    AnyElement, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::domain::card::CardSectionDefinition;
use crate::domain::page::{PageDefinition, Section, TextSectionDefinition};
use crate::features::cards::page::{CardImages, CardSection};
use crate::features::select::page::SelectControl;
use crate::i18n::t;
use crate::services::Navigator;
use crate::theme::colors::ConsoleColors;
use crate::theme::typography::Typography;

enum SectionView {
    Cards(Arc<CardSectionDefinition>, Arc<CardImages>),
    Select(Entity<SelectControl>),
    Text(TextSectionDefinition),
}

/// A rendered page
pub struct PageView {
    entities: AppEntities,
    navigator: Navigator,
    label: SharedString,
    description: Option<SharedString>,
    sections: Vec<SectionView>,
}

impl PageView {
    pub fn new(
        page: Arc<PageDefinition>,
        entities: AppEntities,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let sections = page
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| match section {
                Section::Cards(def) => {
                    SectionView::Cards(Arc::new(def.clone()), Arc::new(CardImages::decode(def)))
                }
                Section::Select(def) => {
                    let id = format!("section-{index}-select");
                    let entities = entities.clone();
                    SectionView::Select(
                        cx.new(|cx| SelectControl::new(id, def, entities, window, cx)),
                    )
                }
                Section::Text(def) => SectionView::Text(def.clone()),
            })
            .collect();

        Self {
            navigator: Navigator::new(entities.clone()),
            entities,
            label: page.label.clone().into(),
            description: page.description.clone().map(Into::into),
            sections,
        }
    }

    fn render_section(
        &self,
        index: usize,
        section: &SectionView,
        cx: &Context<Self>,
    ) -> AnyElement {
        match section {
            SectionView::Cards(def, images) => {
                let locale = self.entities.i18n.read(cx).locale;
                CardSection::new(
                    format!("section-{index}"),
                    def.clone(),
                    images.clone(),
                    self.navigator.clone(),
                )
                .empty_text(t(locale, "cards-empty"))
                .into_any_element()
            }
            SectionView::Select(control) => control.clone().into_any_element(),
            SectionView::Text(def) => div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(Typography::TEXT_LG))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(ConsoleColors::text_primary())
                        .child(def.label.clone()),
                )
                .child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ConsoleColors::text_secondary())
                        .child(def.description.clone()),
                )
                .into_any_element(),
        }
    }
}

impl Render for PageView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("page")
            .size_full()
            .overflow_y_scroll()
            .p_6()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(ConsoleColors::text_primary())
                    .child(self.label.clone()),
            )
            .children(self.description.clone().map(|description| {
                div()
                    .text_size(px(Typography::TEXT_BASE))
                    .text_color(ConsoleColors::text_secondary())
                    .child(description)
            }))
            .children(
                self.sections
                    .iter()
                    .enumerate()
                    .map(|(index, section)| self.render_section(index, section, cx))
                    .collect::<Vec<_>>(),
            )
    }
}
