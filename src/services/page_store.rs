//! Page Store
//!
//! Resolves a [`PageRef`] to its definition. User pages on disk shadow the
//! pages embedded into the binary. For each source the full stem
//! (`workflow_one.json`) is tried before the bare name (`workflow.json`).

use std::path::PathBuf;

use smol::fs;

use crate::assets::Assets;
use crate::domain::page::{PageDefinition, PageRef};
use crate::error::{Error, Result};

/// Loads page definitions
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages_dir: Option<PathBuf>,
}

impl PageStore {
    pub fn new(pages_dir: Option<PathBuf>) -> Self {
        Self { pages_dir }
    }

    /// Load a page, user directory first, embedded pages second
    pub async fn load(&self, page: &PageRef) -> Result<PageDefinition> {
        if let Some(dir) = &self.pages_dir {
            for file_name in candidate_files(page) {
                let path = dir.join(&file_name);
                if fs::metadata(&path).await.is_ok() {
                    tracing::debug!("Loading page {page} from {}", path.display());
                    let text = fs::read_to_string(&path).await?;
                    return PageDefinition::from_json(&text);
                }
            }
        }

        Self::load_embedded(page)
    }

    /// Load a page bundled with the application
    pub fn load_embedded(page: &PageRef) -> Result<PageDefinition> {
        for file_name in candidate_files(page) {
            if let Some(file) = Assets::page(&file_name) {
                let text = std::str::from_utf8(&file).map_err(|e| Error::Invalid {
                    message: format!("Embedded page {file_name} is not UTF-8: {e}"),
                })?;
                return PageDefinition::from_json(text);
            }
        }

        Err(Error::PageNotFound {
            page: page.to_string(),
        })
    }
}

fn candidate_files(page: &PageRef) -> Vec<String> {
    let mut files = vec![format!("{}.json", page.file_stem())];
    if !page.args().is_empty() {
        files.push(format!("{}.json", page.name()));
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str) -> PageRef {
        PageRef::parse(name).expect("page ref")
    }

    #[test]
    fn candidates_prefer_full_stem() {
        assert_eq!(
            candidate_files(&page("workflow!one")),
            vec!["workflow_one.json".to_string(), "workflow.json".to_string()]
        );
        assert_eq!(candidate_files(&page("home")), vec!["home.json".to_string()]);
    }

    #[test]
    fn embedded_home_page_exists() {
        let home = PageStore::load_embedded(&page("home")).expect("home page");
        assert!(!home.sections.is_empty());
    }

    #[test]
    fn unknown_page_is_not_found() {
        let store = PageStore::default();
        let result = smol::block_on(store.load(&page("does-not-exist")));
        assert!(matches!(result, Err(Error::PageNotFound { .. })));
    }

    #[test]
    fn user_page_shadows_embedded_page() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("home.json"),
            r#"{ "label": "My Home", "sections": [] }"#,
        )
        .expect("write page");

        let store = PageStore::new(Some(dir.path().to_path_buf()));
        let home = smol::block_on(store.load(&page("home"))).expect("home page");
        assert_eq!(home.label, "My Home");
    }

    #[test]
    fn page_with_args_falls_back_to_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("report.json"),
            r#"{ "label": "Report", "sections": [] }"#,
        )
        .expect("write page");

        let store = PageStore::new(Some(dir.path().to_path_buf()));
        let report = smol::block_on(store.load(&page("report!2024"))).expect("report page");
        assert_eq!(report.label, "Report");
    }

    #[test]
    fn broken_user_page_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("home.json"), "{ not json").expect("write page");

        let store = PageStore::new(Some(dir.path().to_path_buf()));
        let result = smol::block_on(store.load(&page("home")));
        assert!(matches!(result, Err(Error::Json { .. })));
    }
}
