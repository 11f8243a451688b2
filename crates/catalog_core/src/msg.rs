use crate::{Category, LoadFailure, SortKey};

/// Messages driving the pure state machine. Everything the presentation
/// layer or the engine can tell the core arrives as one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Kick off the one-time fetch of the source document.
    FetchRequested { url: String },
    /// Engine delivered a parsed document.
    CatalogLoaded(Vec<Category>),
    /// Engine failed to fetch or decode the document.
    CatalogFailed(LoadFailure),
    /// User edited the search box (raw text, per keystroke).
    SearchInputChanged(String),
    /// Debounced search text, ready to apply.
    SearchCommitted(String),
    /// User changed the category multi-select.
    CategoriesSelected(Vec<String>),
    /// User picked a sort order.
    SortKeySelected(SortKey),
    /// User picked a page size.
    PageSizeSelected(usize),
    /// User navigated to a page (1-based).
    PageSelected(usize),
}
