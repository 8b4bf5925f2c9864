//! NavigationState - Current Page and Back Stack

use std::sync::Arc;

use crate::domain::page::{PageDefinition, PageRef};

/// Loading status of the current page
#[derive(Debug, Clone)]
pub enum PageStatus {
    /// Definition is being loaded
    Loading,
    /// Definition is available
    Loaded(Arc<PageDefinition>),
    /// Loading failed with a message
    Failed(Arc<str>),
}

impl PageStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageStatus::Loading)
    }
}

/// State for in-app navigation
#[derive(Debug)]
pub struct NavigationState {
    /// Page currently shown
    current: PageRef,
    /// Previously visited pages, most recent last
    history: Vec<PageRef>,
    /// Loading status of `current`
    status: PageStatus,
    /// Bumped on every page change so stale loads can be discarded
    generation: u64,
}

impl NavigationState {
    /// Start at `page`
    pub fn new(page: PageRef) -> Self {
        Self {
            current: page,
            history: Vec::new(),
            status: PageStatus::Loading,
            generation: 0,
        }
    }

    pub fn current(&self) -> &PageRef {
        &self.current
    }

    pub fn status(&self) -> &PageStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Navigate to `page`; returns `false` if it is already shown
    pub fn navigate(&mut self, page: PageRef) -> bool {
        if page == self.current {
            return false;
        }

        let previous = std::mem::replace(&mut self.current, page);
        self.history.push(previous);
        self.begin_load();
        true
    }

    /// Return to the previous page; returns `false` if there is none
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };

        self.current = previous;
        self.begin_load();
        true
    }

    /// Reload the current page
    pub fn reload(&mut self) {
        self.begin_load();
    }

    /// Store a load result if it belongs to the current generation
    pub fn finish_load(&mut self, generation: u64, status: PageStatus) -> bool {
        if generation != self.generation {
            return false;
        }
        self.status = status;
        true
    }

    fn begin_load(&mut self) {
        self.generation += 1;
        self.status = PageStatus::Loading;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(PageRef::named("home"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str) -> PageRef {
        PageRef::parse(name).expect("page ref")
    }

    #[test]
    fn navigate_and_back() {
        let mut nav = NavigationState::new(page("home"));
        assert!(!nav.can_go_back());

        assert!(nav.navigate(page("workflow!one")));
        assert_eq!(nav.current(), &page("workflow!one"));
        assert!(nav.can_go_back());

        assert!(nav.back());
        assert_eq!(nav.current(), &page("home"));
        assert!(!nav.back());
    }

    #[test]
    fn navigate_to_current_page_is_noop() {
        let mut nav = NavigationState::new(page("home"));
        let generation = nav.generation();

        assert!(!nav.navigate(page("home")));
        assert_eq!(nav.generation(), generation);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut nav = NavigationState::new(page("home"));
        let stale = nav.generation();
        nav.navigate(page("other"));

        let loaded = PageStatus::Loaded(Arc::new(PageDefinition::default()));
        assert!(!nav.finish_load(stale, loaded.clone()));
        assert!(nav.status().is_loading());

        assert!(nav.finish_load(nav.generation(), loaded));
        assert!(matches!(nav.status(), PageStatus::Loaded(_)));
    }
}
