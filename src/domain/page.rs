//! Page - Declarative Page Definitions
//!
//! A page is a titled list of sections loaded from JSON. Internal navigation
//! targets pages by a [`PageRef`] such as `workflow!one`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::card::CardSectionDefinition;
use crate::domain::option::OptionItem;
use crate::error::{Error, Result};

/// Separator between a page name and its arguments
const PAGE_SEPARATOR: char = '!';

/// Reference to an internal, named destination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRef {
    name: String,
    args: Vec<String>,
}

impl PageRef {
    /// Parse `name!arg!arg` into a page reference
    pub fn parse(reference: &str) -> Result<Self> {
        let mut parts = reference.trim().split(PAGE_SEPARATOR);
        let name = parts.next().unwrap_or_default().trim();

        let args: Vec<String> = parts
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .map(str::to_string)
            .collect();

        // Parts end up in file names under the pages directory
        if name.is_empty() || !is_plain_part(name) || !args.iter().all(|a| is_plain_part(a)) {
            return Err(Error::InvalidPageRef {
                reference: reference.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            args,
        })
    }

    /// Create a reference without arguments
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// File stem used to look the page up on disk or in embedded assets
    pub fn file_stem(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("_")
    }
}

fn is_plain_part(part: &str) -> bool {
    !part.contains(['/', '\\']) && !part.contains("..")
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, "{PAGE_SEPARATOR}{arg}")?;
        }
        Ok(())
    }
}

impl Serialize for PageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PageRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PageRef::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A complete page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageDefinition {
    /// Page title
    #[serde(default)]
    pub label: String,
    /// Optional subtitle
    #[serde(default)]
    pub description: Option<String>,
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PageDefinition {
    /// Parse a page from its JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One section of a page
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Section {
    /// Grid of clickable cards
    Cards(CardSectionDefinition),
    /// Drop-down choice bound to a named change handler
    Select(SelectSectionDefinition),
    /// Plain heading and paragraph
    Text(TextSectionDefinition),
}

/// Select section content
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectSectionDefinition {
    #[serde(default)]
    pub label: String,
    /// Name of the change handler in the handler registry
    #[serde(default)]
    pub handler: Option<String>,
    /// Index pre-selected in the control
    #[serde(default)]
    pub selected: Option<usize>,
    #[serde(default)]
    pub options: Vec<OptionItem<Value>>,
}

/// Text section content
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextSectionDefinition {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_ref_with_args() {
        let page = PageRef::parse("workflow!one").expect("valid page ref");
        assert_eq!(page.name(), "workflow");
        assert_eq!(page.args(), ["one".to_string()]);
        assert_eq!(page.to_string(), "workflow!one");
        assert_eq!(page.file_stem(), "workflow_one");
    }

    #[test]
    fn parse_page_ref_rejects_empty_name() {
        assert!(PageRef::parse("").is_err());
        assert!(PageRef::parse("!one").is_err());
        assert!(PageRef::parse("   ").is_err());
    }

    #[test]
    fn parse_page_ref_rejects_path_segments() {
        let references = [
            "../../x",
            "pages/home",
            "..\\secret",
            "workflow!../x",
            "report!a/b",
            "a..b",
        ];
        for reference in references {
            assert!(
                matches!(PageRef::parse(reference), Err(Error::InvalidPageRef { .. })),
                "{reference:?} should be rejected"
            );
        }
        assert!(PageRef::parse("report!2024.1").is_ok());
    }

    #[test]
    fn deserialize_rejects_path_segments() {
        let result: serde_json::Result<PageRef> = serde_json::from_str(r#""../config""#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_page_ref_drops_empty_args() {
        let page = PageRef::parse("home!!").expect("valid page ref");
        assert_eq!(page, PageRef::named("home"));
    }

    #[test]
    fn page_definition_from_json() {
        let page = PageDefinition::from_json(
            r#"{
                "label": "Welcome",
                "sections": [
                    { "type": "text", "content": { "label": "Hi", "description": "there" } },
                    { "type": "select", "content": {
                        "label": "Realm",
                        "handler": "log",
                        "options": [ { "value": 1, "label": "Major" }, { "value": 2, "label": "Tom" } ]
                    } },
                    { "type": "cards", "content": { "label": "Realms", "description": "Pick one" } }
                ]
            }"#,
        )
        .expect("page parses");

        assert_eq!(page.label, "Welcome");
        assert_eq!(page.sections.len(), 3);
        match &page.sections[1] {
            Section::Select(select) => {
                assert_eq!(select.handler.as_deref(), Some("log"));
                assert_eq!(select.options.len(), 2);
                assert_eq!(select.options[1].label, "Tom");
            }
            other => panic!("expected select section, got {other:?}"),
        }
        match &page.sections[2] {
            Section::Cards(cards) => assert!(cards.cards.is_none()),
            other => panic!("expected cards section, got {other:?}"),
        }
    }

    #[test]
    fn page_definition_rejects_unknown_section() {
        let result = PageDefinition::from_json(r#"{ "sections": [ { "type": "chart", "content": {} } ] }"#);
        assert!(matches!(result, Err(Error::Json { .. })));
    }
}
