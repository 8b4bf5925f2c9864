//! Option - Selectable Choices

use serde::{Deserialize, Serialize};

/// One selectable choice in a drop-down
///
/// Values need not be unique; duplicates are told apart by list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionItem<V> {
    pub value: V,
    #[serde(default)]
    pub label: String,
}

impl<V> OptionItem<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}
