//! Cards Controller
//!
//! Turns a [`CardSectionDefinition`] into a render-ready view list. The
//! definition is only borrowed: derived actions live next to the cards in
//! [`CardView`], the caller's cards are never touched.

use crate::domain::action::{ActionClassifier, ActionDescriptor, ButtonClassifier};
use crate::domain::card::{CardDescriptor, CardSectionDefinition};

/// How cards are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// Cards wrap into rows
    Grid,
    /// One card per row
    Vertical,
}

/// A card paired with its derived action
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub card: &'a CardDescriptor,
    /// `None` if the card has no usable navigation target
    pub action: Option<ActionDescriptor>,
}

impl CardView<'_> {
    pub fn is_clickable(&self) -> bool {
        self.action.is_some()
    }

    /// Hover text of a clickable card
    pub fn tooltip(&self) -> Option<&str> {
        self.action.as_ref().and_then(|a| a.tooltip.as_deref())
    }
}

/// A card section ready to paint
#[derive(Debug, Clone, PartialEq)]
pub struct CardGridView<'a> {
    pub label: &'a str,
    pub description: &'a str,
    pub layout: CardLayout,
    pub cards: Vec<CardView<'a>>,
}

impl CardGridView<'_> {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Card grid renderer with an injected action classifier
#[derive(Debug, Clone, Default)]
pub struct CardGrid<C = ButtonClassifier> {
    classifier: C,
}

impl CardGrid {
    /// Card grid using the default [`ButtonClassifier`]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ActionClassifier> CardGrid<C> {
    /// Card grid using a custom classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// Derive the view for a card section, preserving card order
    pub fn render<'a>(&self, def: &'a CardSectionDefinition) -> CardGridView<'a> {
        let cards = def
            .cards()
            .iter()
            .map(|card| CardView {
                card,
                action: self.classifier.classify(&card.action_source()),
            })
            .collect();

        CardGridView {
            label: &def.label,
            description: &def.description,
            layout: if def.vertical {
                CardLayout::Vertical
            } else {
                CardLayout::Grid
            },
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::domain::action::{ActionKind, ActionSource, Target};
    use crate::domain::page::PageRef;

    fn card(label: &str, href: Option<&str>, page: Option<&str>) -> CardDescriptor {
        CardDescriptor {
            label: label.to_string(),
            description: format!("{label} description"),
            footer: format!("{label} footer"),
            image: format!("https://example.org/{label}.png"),
            href: href.map(str::to_string),
            page: page.map(str::to_string),
            ..Default::default()
        }
    }

    fn section(cards: Option<Vec<CardDescriptor>>) -> CardSectionDefinition {
        CardSectionDefinition {
            label: "Realms".to_string(),
            description: "Please choose a realm".to_string(),
            vertical: false,
            cards,
        }
    }

    #[test]
    fn absent_or_empty_cards_render_nothing() {
        let grid = CardGrid::new();

        let absent = section(None);
        let view = grid.render(&absent);
        assert!(view.is_empty());
        assert_eq!(view.label, "Realms");
        assert_eq!(view.description, "Please choose a realm");

        let empty = section(Some(Vec::new()));
        assert!(grid.render(&empty).is_empty());
    }

    #[test]
    fn order_and_display_fields_are_preserved() {
        let def = section(Some(vec![
            card("c", Some("/c/"), None),
            card("a", None, Some("workflow!one")),
            card("b", None, None),
        ]));

        let view = CardGrid::new().render(&def);

        let labels: Vec<_> = view.cards.iter().map(|v| v.card.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
        for (view, original) in view.cards.iter().zip(def.cards()) {
            assert_eq!(view.card.label, original.label);
            assert_eq!(view.card.description, original.description);
            assert_eq!(view.card.footer, original.footer);
            assert_eq!(view.card.image, original.image);
        }
    }

    #[test]
    fn href_card_links_externally() {
        let def = section(Some(vec![card("Demo-CA", Some("/demo-ca/"), None)]));
        let view = CardGrid::new().render(&def);

        let action = view.cards[0].action.as_ref().expect("action");
        assert_eq!(
            action.kind,
            ActionKind::Link {
                href: "/demo-ca/".to_string()
            }
        );
    }

    #[test]
    fn page_card_navigates_internally() {
        let def = section(Some(vec![card("Workflow", None, Some("workflow!one"))]));
        let view = CardGrid::new().render(&def);

        let action = view.cards[0].action.as_ref().expect("action");
        assert_eq!(
            action.kind,
            ActionKind::Navigate {
                page: PageRef::parse("workflow!one").expect("page ref")
            }
        );
    }

    #[test]
    fn card_without_target_still_renders() {
        let def = section(Some(vec![card("Orphan", None, None)]));
        let view = CardGrid::new().render(&def);

        assert_eq!(view.cards.len(), 1);
        assert!(!view.cards[0].is_clickable());
        assert_eq!(view.cards[0].card.footer, "Orphan footer");
    }

    #[test]
    fn tooltip_reaches_the_view() {
        let mut with_tip = card("Workflow", None, Some("workflow!one"));
        with_tip.tooltip = Some(" Open workflow one ".to_string());
        let mut inert = card("Orphan", None, None);
        inert.tooltip = Some("never shown".to_string());
        let def = section(Some(vec![with_tip, inert]));

        let view = CardGrid::new().render(&def);

        assert_eq!(view.cards[0].tooltip(), Some("Open workflow one"));
        assert_eq!(view.cards[1].tooltip(), None);
    }

    #[test]
    fn input_is_left_untouched() {
        let def = section(Some(vec![card("Demo-CA", Some("/demo-ca/"), None)]));
        let before = def.clone();

        let _ = CardGrid::new().render(&def);
        assert_eq!(def, before);
    }

    #[test]
    fn vertical_flag_selects_layout() {
        let mut def = section(None);
        assert_eq!(CardGrid::new().render(&def).layout, CardLayout::Grid);
        def.vertical = true;
        assert_eq!(CardGrid::new().render(&def).layout, CardLayout::Vertical);
    }

    #[test]
    fn custom_classifier_is_consulted_once_per_card() {
        let calls = Cell::new(0);
        let classifier = |source: &ActionSource<'_>| {
            calls.set(calls.get() + 1);
            source.label.map(|label| ActionDescriptor {
                kind: ActionKind::Navigate {
                    page: PageRef::named(label.to_lowercase()),
                },
                label: None,
                target: Target::Tab,
                tooltip: None,
            })
        };

        let def = section(Some(vec![card("One", None, None), card("Two", None, None)]));
        let view = CardGrid::with_classifier(classifier).render(&def);

        assert_eq!(calls.get(), 2);
        assert_eq!(
            view.cards[1].action.as_ref().map(|a| &a.kind),
            Some(&ActionKind::Navigate {
                page: PageRef::named("two")
            })
        );
    }
}
