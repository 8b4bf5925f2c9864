//! Card Section
//!
//! Paints a card section: heading, description and a grid (or column) of
//! cards. Clickable cards hand their action to the [`Navigator`]. Card
//! images are decoded once per section into [`CardImages`].

use std::sync::Arc;

use gpui::{
    AnyElement, App, ClickEvent, Image, IntoElement, ObjectFit, ParentElement, RenderOnce,
    SharedString, Styled, StyledImage, Window, div, img, prelude::*, px,
};
use gpui_component::tooltip::Tooltip;

use crate::domain::action::ActionKind;
use crate::domain::card::CardSectionDefinition;
use crate::domain::image::ImageRef;
use crate::features::cards::controller::{CardGrid, CardLayout, CardView};
use crate::services::Navigator;
use crate::theme::colors::ConsoleColors;
use crate::theme::typography::Typography;

/// A decoded card picture
#[derive(Clone)]
pub enum CardPicture {
    Url(SharedString),
    Inline(Arc<Image>),
}

/// Pictures of a card section, by card position
#[derive(Clone, Default)]
pub struct CardImages {
    pictures: Vec<Option<CardPicture>>,
}

impl CardImages {
    /// Decode every card image of `def`; unusable images become `None`
    pub fn decode(def: &CardSectionDefinition) -> Self {
        let pictures = def
            .cards()
            .iter()
            .map(|card| match ImageRef::parse(&card.image) {
                Ok(Some(ImageRef::Url(url))) => Some(CardPicture::Url(url.into())),
                Ok(Some(ImageRef::Inline { format, bytes })) => Some(CardPicture::Inline(
                    Arc::new(Image::from_bytes(format.to_gpui(), bytes)),
                )),
                Ok(None) => None,
                Err(e) => {
                    tracing::debug!("Card {:?} image not shown: {e}", card.label);
                    None
                }
            })
            .collect();

        Self { pictures }
    }

    pub fn get(&self, index: usize) -> Option<&CardPicture> {
        self.pictures.get(index).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }
}

/// A card section element
#[derive(IntoElement)]
pub struct CardSection {
    id: SharedString,
    def: Arc<CardSectionDefinition>,
    images: Arc<CardImages>,
    navigator: Navigator,
    empty_text: SharedString,
}

impl CardSection {
    pub fn new(
        id: impl Into<SharedString>,
        def: Arc<CardSectionDefinition>,
        images: Arc<CardImages>,
        navigator: Navigator,
    ) -> Self {
        Self {
            id: id.into(),
            def,
            images,
            navigator,
            empty_text: SharedString::default(),
        }
    }

    /// Text shown when the section has no cards
    pub fn empty_text(mut self, text: impl Into<SharedString>) -> Self {
        self.empty_text = text.into();
        self
    }

    fn render_card(&self, index: usize, view: CardView<'_>) -> impl IntoElement {
        let card = view.card;
        let marker = match view.action.as_ref().map(|a| &a.kind) {
            Some(ActionKind::Link { .. }) => "↗",
            Some(ActionKind::Navigate { .. }) => "→",
            None => "",
        };

        let mut tile = div()
            .id(SharedString::from(format!("{}-card-{index}", self.id)))
            .w(px(Typography::CARD_WIDTH))
            .flex()
            .flex_col()
            .bg(ConsoleColors::card_bg())
            .border_1()
            .border_color(ConsoleColors::border())
            .rounded_lg()
            .overflow_hidden()
            .child(render_image(self.images.get(index)))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .p_3()
                    .flex_1()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(ConsoleColors::text_primary())
                            .child(card.label.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(ConsoleColors::text_secondary())
                            .child(card.description.clone()),
                    ),
            )
            .child(
                div()
                    .px_3()
                    .py_2()
                    .flex()
                    .justify_between()
                    .bg(ConsoleColors::card_footer_bg())
                    .border_t_1()
                    .border_color(ConsoleColors::border())
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(ConsoleColors::text_muted())
                    .child(card.footer.clone())
                    .child(marker),
            );

        if let Some(tooltip) = view.tooltip().map(|s| SharedString::from(s.to_owned())) {
            tile = tile.tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx));
        }

        if let Some(action) = view.action {
            let navigator = self.navigator.clone();
            tile = tile
                .cursor_pointer()
                .hover(|s| s.border_color(ConsoleColors::border_focus()))
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    navigator.dispatch(&action, cx);
                });
        }

        tile
    }
}

fn render_image(picture: Option<&CardPicture>) -> AnyElement {
    let frame = div()
        .w_full()
        .h(px(Typography::CARD_IMAGE_HEIGHT))
        .bg(ConsoleColors::card_image_bg());

    let picture = match picture {
        Some(CardPicture::Url(url)) => img(url.clone()),
        Some(CardPicture::Inline(image)) => img(image.clone()),
        None => return frame.into_any_element(),
    };

    frame
        .child(picture.size_full().object_fit(ObjectFit::Cover))
        .into_any_element()
}

impl RenderOnce for CardSection {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let def = self.def.clone();
        let view = CardGrid::new().render(&def);

        let mut cards = div().flex().gap_4();
        cards = match view.layout {
            CardLayout::Grid => cards.flex_row().flex_wrap(),
            CardLayout::Vertical => cards.flex_col(),
        };

        let heading = view.label.to_string();
        let description = view.description.to_string();
        let is_empty = view.is_empty();

        cards = cards.children(
            view.cards
                .into_iter()
                .enumerate()
                .map(|(index, card)| self.render_card(index, card)),
        );

        div()
            .flex()
            .flex_col()
            .gap_3()
            .when(!heading.is_empty(), |this| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_LG))
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(ConsoleColors::text_primary())
                        .child(heading),
                )
            })
            .when(!description.is_empty(), |this| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ConsoleColors::text_secondary())
                        .child(description),
                )
            })
            .when(is_empty, |this| {
                this.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(ConsoleColors::text_muted())
                        .child(self.empty_text.clone()),
                )
            })
            .child(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardDescriptor;

    fn card_with_image(image: &str) -> CardDescriptor {
        CardDescriptor {
            label: "Demo-CA".to_string(),
            image: image.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn images_are_decoded_by_card_position() {
        let def = CardSectionDefinition {
            cards: Some(vec![
                card_with_image("https://example.org/logo.png"),
                card_with_image("data:image/png;base64,aGVsbG8="),
                card_with_image(""),
                card_with_image("data:text/plain;base64,aGVsbG8="),
            ]),
            ..Default::default()
        };

        let images = CardImages::decode(&def);

        assert_eq!(images.len(), 4);
        match images.get(0) {
            Some(CardPicture::Url(url)) => assert_eq!(url.as_ref(), "https://example.org/logo.png"),
            _ => panic!("expected a url picture"),
        }
        assert!(matches!(images.get(1), Some(CardPicture::Inline(_))));
        assert!(images.get(2).is_none());
        assert!(images.get(3).is_none());
        assert!(images.get(4).is_none());
    }

    #[test]
    fn decoded_image_is_shared_between_renders() {
        let def = CardSectionDefinition {
            cards: Some(vec![card_with_image("data:image/png;base64,aGVsbG8=")]),
            ..Default::default()
        };
        let images = CardImages::decode(&def);

        let (Some(CardPicture::Inline(first)), Some(CardPicture::Inline(second))) =
            (images.get(0).cloned(), images.get(0).cloned())
        else {
            panic!("expected an inline picture");
        };
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn section_without_cards_has_no_images() {
        let images = CardImages::decode(&CardSectionDefinition::default());
        assert!(images.is_empty());
    }
}
