//! Navigator
//!
//! Carries out card actions: outbound links go to the system browser,
//! internal destinations go through [`NavigationState`].
//!
//! [`NavigationState`]: crate::state::navigation_state::NavigationState

use gpui::App;
use url::Url;

use crate::app::entities::AppEntities;
use crate::domain::action::{ActionDescriptor, ActionKind, Target};
use crate::domain::page::PageRef;
use crate::error::{Error, Result};

/// Resolve an `href` into an absolute URL
///
/// Absolute hrefs are used as they are. Relative ones (`/demo-ca/`) need a
/// base URL.
pub fn resolve_link(href: &str, base_url: Option<&str>) -> Result<Url> {
    match Url::parse(href) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let Some(base) = base_url else {
                return Err(Error::InvalidUrl {
                    href: href.to_string(),
                    message: "relative link and no base_url configured".to_string(),
                });
            };
            let base = Url::parse(base).map_err(|e| Error::InvalidUrl {
                href: base.to_string(),
                message: e.to_string(),
            })?;
            base.join(href).map_err(|e| Error::InvalidUrl {
                href: href.to_string(),
                message: e.to_string(),
            })
        }
        Err(e) => Err(Error::InvalidUrl {
            href: href.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Executes actions against the running application
#[derive(Clone)]
pub struct Navigator {
    entities: AppEntities,
}

impl Navigator {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Run the action a card was clicked for
    pub fn dispatch(&self, action: &ActionDescriptor, cx: &mut App) {
        match &action.kind {
            ActionKind::Link { href } => self.open_link(href, action.target, cx),
            ActionKind::Navigate { page } => self.open_page(page.clone(), cx),
        }
    }

    /// Open an outbound link in the system browser
    pub fn open_link(&self, href: &str, target: Target, cx: &mut App) {
        let base_url = self.entities.config.read(cx).config.base_url.clone();

        match resolve_link(href, base_url.as_deref()) {
            Ok(url) => {
                tracing::debug!("Opening {url} (target {target:?})");
                cx.open_url(url.as_str());
                self.entities.logs.update(cx, |logs, cx| {
                    logs.info(format!("Opened {url}"));
                    cx.notify();
                });
            }
            Err(e) => {
                self.entities.logs.update(cx, |logs, cx| {
                    logs.warn(format!("Cannot open link: {e}"));
                    cx.notify();
                });
            }
        }
    }

    /// Navigate to an internal page
    pub fn open_page(&self, page: PageRef, cx: &mut App) {
        let label = page.to_string();
        let changed = self.entities.navigation.update(cx, |nav, cx| {
            let changed = nav.navigate(page);
            if changed {
                cx.notify();
            }
            changed
        });

        if changed {
            self.entities.logs.update(cx, |logs, cx| {
                logs.info(format!("Navigated to {label}"));
                cx.notify();
            });
        }
    }

    /// Return to the previous page
    pub fn back(&self, cx: &mut App) {
        self.entities.navigation.update(cx, |nav, cx| {
            if nav.back() {
                cx.notify();
            }
        });
    }

    /// Go to the configured start page
    pub fn home(&self, cx: &mut App) {
        let start = self.entities.config.read(cx).config.start_page.clone();
        self.open_page(start, cx);
    }

    /// Reload the current page definition
    pub fn reload(&self, cx: &mut App) {
        self.entities.navigation.update(cx, |nav, cx| {
            nav.reload();
            cx.notify();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_link_is_kept() {
        let url = resolve_link("https://example.org/ca/", None).expect("url");
        assert_eq!(url.as_str(), "https://example.org/ca/");
    }

    #[test]
    fn relative_link_joins_base() {
        let url = resolve_link("/demo-ca/", Some("https://pki.example.org/webui/")).expect("url");
        assert_eq!(url.as_str(), "https://pki.example.org/demo-ca/");
    }

    #[test]
    fn relative_link_without_base_fails() {
        let result = resolve_link("/demo-ca/", None);
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn broken_base_fails() {
        let result = resolve_link("/demo-ca/", Some("not a url"));
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }
}
