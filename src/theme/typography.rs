//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 11.0;
    pub const TEXT_SM: f32 = 13.0;
    pub const TEXT_BASE: f32 = 14.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 22.0;

    /// Width of a card tile in grid layout
    pub const CARD_WIDTH: f32 = 240.0;
    /// Height of the image area of a card
    pub const CARD_IMAGE_HEIGHT: f32 = 120.0;
}
