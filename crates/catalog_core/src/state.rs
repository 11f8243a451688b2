use std::fmt;

use crate::catalog::{Catalog, Category};
use crate::query::{derive_view, QueryState, SortKey, View};
use crate::view_model::{AppViewModel, LoadPhase};

/// Why a catalog load ended without data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: LoadFailureKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailureKind {
    /// The configured source URL did not parse.
    InvalidUrl,
    /// Transport or HTTP failure while retrieving the document.
    Fetch,
    /// The response body could not be decoded as text.
    Decode,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LoadFailureKind::InvalidUrl => write!(f, "invalid source URL: {}", self.message),
            LoadFailureKind::Fetch => write!(f, "fetch failed: {}", self.message),
            LoadFailureKind::Decode => write!(f, "decode failed: {}", self.message),
        }
    }
}

/// Load lifecycle of the catalog. One tagged state instead of parallel
/// booleans, so "loading with data" cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Ready(Catalog),
    Failed(LoadFailure),
}

/// Whole-application state: the catalog lifecycle plus the current query.
/// Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: CatalogState,
    query: QueryState,
    excluded_titles: Vec<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State configured from settings: starting page size and the list of
    /// item titles dropped from the catalog at load time.
    pub fn with_options(page_size: usize, excluded_titles: Vec<String>) -> Self {
        Self {
            catalog: CatalogState::default(),
            query: QueryState::new(page_size),
            excluded_titles,
            dirty: false,
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Derives the presentation view model for the current state. While not
    /// `Ready` the view is empty; the phase tells the caller whether that
    /// means "still loading" or "failed".
    pub fn view(&self) -> AppViewModel {
        match &self.catalog {
            CatalogState::Loading => AppViewModel {
                phase: LoadPhase::Loading,
                category_options: Vec::new(),
                view: View::empty(self.query.page_size),
                query: self.query.clone(),
            },
            CatalogState::Ready(catalog) => AppViewModel {
                phase: LoadPhase::Ready,
                category_options: catalog.category_titles(),
                view: derive_view(catalog.items(), &self.query),
                query: self.query.clone(),
            },
            CatalogState::Failed(failure) => AppViewModel {
                phase: LoadPhase::Failed(failure.clone()),
                category_options: Vec::new(),
                view: View::empty(self.query.page_size),
                query: self.query.clone(),
            },
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_load(&mut self) {
        self.catalog = CatalogState::Loading;
        self.mark_dirty();
    }

    /// Installs a freshly parsed catalog, applying the title exclusion list
    /// and resetting pagination. Replaces any prior catalog wholesale.
    pub(crate) fn apply_catalog(&mut self, categories: Vec<Category>) {
        let catalog = Catalog::excluding_titles(categories, &self.excluded_titles);
        self.catalog = CatalogState::Ready(catalog);
        self.query.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn fail_load(&mut self, failure: LoadFailure) {
        self.catalog = CatalogState::Failed(failure);
        self.mark_dirty();
    }

    pub(crate) fn commit_search(&mut self, text: String) {
        if self.query.search_text == text {
            return;
        }
        self.query.search_text = text;
        self.query.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn select_categories(&mut self, titles: Vec<String>) {
        if self.query.selected_categories == titles {
            return;
        }
        self.query.selected_categories = titles;
        self.query.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn select_sort_key(&mut self, key: SortKey) {
        if self.query.sort_key == key {
            return;
        }
        self.query.sort_key = key;
        self.query.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn select_page_size(&mut self, size: usize) {
        // Zero is a contract violation upstream; never let it reach the
        // query engine.
        if size == 0 || self.query.page_size == size {
            return;
        }
        self.query.page_size = size;
        self.query.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn select_page(&mut self, page: usize) {
        let page = page.max(1);
        if self.query.page == page {
            return;
        }
        self.query.page = page;
        self.mark_dirty();
    }
}
