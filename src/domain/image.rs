//! Image - Card Image Sources
//!
//! Card images are either URLs or inline `data:` URIs
//! (`data:image/webp;base64,UklGR...`).

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::{Error, Result};

/// Image encodings a card may carry inline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
    Svg,
    Bmp,
}

impl InlineFormat {
    /// Map a MIME type to a format
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/webp" => Some(Self::Webp),
            "image/gif" => Some(Self::Gif),
            "image/svg+xml" => Some(Self::Svg),
            "image/bmp" => Some(Self::Bmp),
            _ => None,
        }
    }

    pub fn to_gpui(self) -> gpui::ImageFormat {
        match self {
            Self::Png => gpui::ImageFormat::Png,
            Self::Jpeg => gpui::ImageFormat::Jpeg,
            Self::Webp => gpui::ImageFormat::Webp,
            Self::Gif => gpui::ImageFormat::Gif,
            Self::Svg => gpui::ImageFormat::Svg,
            Self::Bmp => gpui::ImageFormat::Bmp,
        }
    }
}

/// A parsed card image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Remote or local URL, loaded by the UI framework
    Url(String),
    /// Decoded inline image data
    Inline { format: InlineFormat, bytes: Vec<u8> },
}

impl ImageRef {
    /// Parse a card `image` field; blank means "no image"
    pub fn parse(image: &str) -> Result<Option<Self>> {
        let image = image.trim();
        if image.is_empty() {
            return Ok(None);
        }

        let Some(rest) = image.strip_prefix("data:") else {
            return Ok(Some(Self::Url(image.to_string())));
        };

        let Some((header, payload)) = rest.split_once(',') else {
            return Err(Error::InvalidImage {
                message: "data URI without payload".to_string(),
            });
        };

        let mut params = header.split(';');
        let mime = params.next().unwrap_or_default();
        if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
            return Err(Error::InvalidImage {
                message: format!("only base64 data URIs are supported, got {header:?}"),
            });
        }

        let format = InlineFormat::from_mime(mime).ok_or_else(|| Error::InvalidImage {
            message: format!("unsupported image type {mime:?}"),
        })?;

        // Inline data often arrives wrapped; strip whitespace before decoding.
        let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64.decode(payload).map_err(|e| Error::InvalidImage {
            message: format!("Base64 decode failed: {e}"),
        })?;

        Ok(Some(Self::Inline { format, bytes }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_image_is_none() {
        assert_eq!(ImageRef::parse("  ").expect("parse"), None);
    }

    #[test]
    fn url_image_passes_through() {
        let image = ImageRef::parse("https://example.org/logo.png").expect("parse");
        assert_eq!(
            image,
            Some(ImageRef::Url("https://example.org/logo.png".to_string()))
        );
    }

    #[test]
    fn base64_data_uri_is_decoded() {
        // "hello" in base64
        let image = ImageRef::parse("data:image/png;base64,aGVs\nbG8=").expect("parse");
        assert_eq!(
            image,
            Some(ImageRef::Inline {
                format: InlineFormat::Png,
                bytes: b"hello".to_vec(),
            })
        );
    }

    #[test]
    fn unsupported_mime_is_rejected() {
        let result = ImageRef::parse("data:text/plain;base64,aGVsbG8=");
        assert!(matches!(result, Err(Error::InvalidImage { .. })));
    }

    #[test]
    fn non_base64_data_uri_is_rejected() {
        let result = ImageRef::parse("data:image/svg+xml,<svg/>");
        assert!(matches!(result, Err(Error::InvalidImage { .. })));
    }

    #[test]
    fn broken_payload_is_rejected() {
        let result = ImageRef::parse("data:image/webp;base64,@@@");
        assert!(matches!(result, Err(Error::InvalidImage { .. })));
    }
}
