//! Embedded assets
//!
//! Uses rust-embed to bundle the built-in page definitions at compile time.
//! Icons come from gpui-component's own asset bundle.

use gpui::{AssetSource, Result, SharedString};
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl Assets {
    /// Raw bytes of a built-in page definition (`pages/<file_name>`)
    pub fn page(file_name: &str) -> Option<Cow<'static, [u8]>> {
        Self::get(&format!("pages/{file_name}")).map(|f| f.data)
    }
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_pages_are_embedded() {
        assert!(Assets::page("home.json").is_some());
        assert!(Assets::page("workflow.json").is_some());
        assert!(Assets::page("missing.json").is_none());
    }
}
