//! Colors - Console Theme Colors

use gpui::{rgb, Rgba};

/// Console color palette - All colors are accessed via associated functions
pub struct ConsoleColors;

impl ConsoleColors {
    // Primary colors
    /// Header background - Slate blue
    pub fn header_bg() -> Rgba { rgb(0x1e3a5f) }
    /// Primary accent - Blue
    pub fn accent() -> Rgba { rgb(0x2563eb) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf3f4f6) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x111827) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xf9fafb) }

    // Status colors
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Focused or hovered border
    pub fn border_focus() -> Rgba { rgb(0x2563eb) }

    // Card colors
    /// Card background
    pub fn card_bg() -> Rgba { rgb(0xffffff) }
    /// Card footer background
    pub fn card_footer_bg() -> Rgba { rgb(0xf9fafb) }
    /// Image placeholder background
    pub fn card_image_bg() -> Rgba { rgb(0xe5e7eb) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
    /// Hovered option in an open drop-down
    pub fn option_hover() -> Rgba { rgb(0xeff6ff) }
    /// Selected option in an open drop-down
    pub fn option_selected() -> Rgba { rgb(0xdbeafe) }
}
