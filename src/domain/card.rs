//! Card - Card Section Definitions
//!
//! A card section is a labelled grid of tiles. Each tile shows an image and
//! some text and carries a single navigation target, either an external
//! `href` or an internal `page`.

use serde::Deserialize;

use crate::domain::action::{ActionSource, Target};

/// A card section as it appears in a page definition
///
/// ```json
/// {
///     "label": "Realms",
///     "description": "Please choose a realm",
///     "vertical": true,
///     "cards": [
///         { "label": "Demo-CA", "description": "The demo CA", "footer": "Auto-Login",
///           "image": "data:image/webp;base64,UklGRsIdAAB...", "href": "/demo-ca/" },
///         { "label": "Workflow", "page": "workflow!one" }
///     ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardSectionDefinition {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Stack cards in a single column instead of a grid
    #[serde(default)]
    pub vertical: bool,
    /// Cards in display order; absent means no cards
    #[serde(default)]
    pub cards: Option<Vec<CardDescriptor>>,
}

impl CardSectionDefinition {
    /// The effective card list (empty when `cards` is absent)
    pub fn cards(&self) -> &[CardDescriptor] {
        self.cards.as_deref().unwrap_or_default()
    }
}

/// A single card
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CardDescriptor {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub footer: String,
    /// Image URL or `data:` URI
    #[serde(default)]
    pub image: String,
    /// External link
    #[serde(default)]
    pub href: Option<String>,
    /// Internal destination, e.g. `workflow!one`
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub target: Option<Target>,
    #[serde(default)]
    pub tooltip: Option<String>,
}

impl CardDescriptor {
    /// Borrow the fields an action classifier looks at
    pub fn action_source(&self) -> ActionSource<'_> {
        ActionSource {
            label: non_empty(&self.label),
            href: self.href.as_deref().and_then(non_empty),
            page: self.page.as_deref().and_then(non_empty),
            target: self.target,
            tooltip: self.tooltip.as_deref().and_then(non_empty),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cards_are_empty() {
        let def: CardSectionDefinition =
            serde_json::from_str(r#"{ "label": "Realms" }"#).expect("definition parses");
        assert!(def.cards.is_none());
        assert!(def.cards().is_empty());
        assert!(!def.vertical);
    }

    #[test]
    fn action_source_ignores_blank_navigation_fields() {
        let card = CardDescriptor {
            label: "Demo-CA".to_string(),
            href: Some("  ".to_string()),
            page: Some("workflow!one".to_string()),
            ..Default::default()
        };

        let source = card.action_source();
        assert_eq!(source.href, None);
        assert_eq!(source.page, Some("workflow!one"));
        assert_eq!(source.label, Some("Demo-CA"));
    }
}
