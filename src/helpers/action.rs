//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
    /// Switch the UI language
    ToggleLocale,
}

/// Navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Go back to the previous page
    Back,
    /// Go to the start page
    Home,
    /// Reload the current page definition
    Reload,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    keystroke
        .split('-')
        .map(|part| match part {
            "secondary" | "cmd" => modifier_symbol("⌘", "Ctrl").to_string(),
            "ctrl" => modifier_symbol("⌃", "Ctrl").to_string(),
            "alt" => modifier_symbol("⌥", "Alt").to_string(),
            "shift" => modifier_symbol("⇧", "Shift").to_string(),
            "enter" => "Enter".to_string(),
            "escape" => "Esc".to_string(),
            other => other.to_uppercase(),
        })
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(target_os = "macos")]
fn modifier_symbol(mac: &'static str, _other: &'static str) -> &'static str {
    mac
}

#[cfg(not(target_os = "macos"))]
fn modifier_symbol(_mac: &'static str, other: &'static str) -> &'static str {
    other
}

/// Keystroke for going back
pub const BACK_KEYSTROKE: &str = "secondary-[";

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new("secondary-l", MenuAction::ToggleLocale, None),
        // Navigation
        KeyBinding::new(BACK_KEYSTROKE, NavAction::Back, None),
        KeyBinding::new("secondary-h", NavAction::Home, None),
        KeyBinding::new("secondary-r", NavAction::Reload, None),
    ]
}
