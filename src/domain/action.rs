//! Action - Navigation Actions Derived from Declarative Hashes
//!
//! An [`ActionClassifier`] looks at the navigation fields of a card (or any
//! other clickable item) and decides whether clicking it opens an external
//! link, navigates to an internal page, or does nothing.

use serde::Deserialize;

use crate::domain::page::PageRef;

/// Where an action should be opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Replace the current content
    #[default]
    #[serde(rename = "self")]
    Current,
    /// Open in a new tab
    Tab,
    /// Open in a popup
    Popup,
    /// Replace the whole window
    Top,
}

/// Borrowed view of the fields a classifier inspects
///
/// Blank strings have already been filtered out to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSource<'a> {
    pub label: Option<&'a str>,
    pub href: Option<&'a str>,
    pub page: Option<&'a str>,
    pub target: Option<Target>,
    pub tooltip: Option<&'a str>,
}

/// What happens on click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Outbound link
    Link { href: String },
    /// In-app navigation to a named page
    Navigate { page: PageRef },
}

/// A derived, render-only action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub kind: ActionKind,
    /// Display label of the action, if it has one of its own
    pub label: Option<String>,
    pub target: Target,
    pub tooltip: Option<String>,
}

impl ActionDescriptor {
    pub fn is_link(&self) -> bool {
        matches!(self.kind, ActionKind::Link { .. })
    }

    pub fn is_navigation(&self) -> bool {
        matches!(self.kind, ActionKind::Navigate { .. })
    }
}

/// Derives an action from navigation fields
pub trait ActionClassifier {
    fn classify(&self, source: &ActionSource<'_>) -> Option<ActionDescriptor>;
}

impl<F> ActionClassifier for F
where
    F: Fn(&ActionSource<'_>) -> Option<ActionDescriptor>,
{
    fn classify(&self, source: &ActionSource<'_>) -> Option<ActionDescriptor> {
        self(source)
    }
}

/// Default classifier
///
/// `href` wins over `page` when both are present. A `page` that is not a
/// valid page reference yields no action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonClassifier;

impl ActionClassifier for ButtonClassifier {
    fn classify(&self, source: &ActionSource<'_>) -> Option<ActionDescriptor> {
        let kind = if let Some(href) = source.href {
            ActionKind::Link {
                href: href.to_string(),
            }
        } else if let Some(page) = source.page {
            match PageRef::parse(page) {
                Ok(page) => ActionKind::Navigate { page },
                Err(e) => {
                    tracing::debug!("Ignoring card action: {e}");
                    return None;
                }
            }
        } else {
            return None;
        };

        Some(ActionDescriptor {
            kind,
            label: source.label.map(str::to_string),
            target: source.target.unwrap_or_default(),
            tooltip: source.tooltip.map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_becomes_link() {
        let source = ActionSource {
            label: Some("Demo-CA"),
            href: Some("/demo-ca/"),
            ..Default::default()
        };

        let action = ButtonClassifier.classify(&source).expect("action");
        assert_eq!(
            action.kind,
            ActionKind::Link {
                href: "/demo-ca/".to_string()
            }
        );
        assert_eq!(action.label.as_deref(), Some("Demo-CA"));
        assert_eq!(action.target, Target::Current);
    }

    #[test]
    fn page_becomes_navigation() {
        let source = ActionSource {
            page: Some("workflow!one"),
            target: Some(Target::Popup),
            ..Default::default()
        };

        let action = ButtonClassifier.classify(&source).expect("action");
        assert!(action.is_navigation());
        assert_eq!(
            action.kind,
            ActionKind::Navigate {
                page: PageRef::parse("workflow!one").expect("page ref")
            }
        );
        assert_eq!(action.target, Target::Popup);
        assert_eq!(action.label, None);
    }

    #[test]
    fn href_wins_over_page() {
        let source = ActionSource {
            href: Some("https://example.org/"),
            page: Some("home"),
            ..Default::default()
        };

        let action = ButtonClassifier.classify(&source).expect("action");
        assert!(action.is_link());
    }

    #[test]
    fn no_navigation_field_means_no_action() {
        let source = ActionSource {
            label: Some("Orphan"),
            ..Default::default()
        };
        assert_eq!(ButtonClassifier.classify(&source), None);
    }

    #[test]
    fn invalid_page_means_no_action() {
        let source = ActionSource {
            page: Some("!broken"),
            ..Default::default()
        };
        assert_eq!(ButtonClassifier.classify(&source), None);
    }

    #[test]
    fn target_deserializes_from_lowercase() {
        let target: Target = serde_json::from_str(r#""self""#).expect("target");
        assert_eq!(target, Target::Current);
        let target: Target = serde_json::from_str(r#""tab""#).expect("target");
        assert_eq!(target, Target::Tab);
    }
}
