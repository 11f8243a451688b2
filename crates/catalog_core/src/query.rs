use crate::Item;

/// Default number of items per page, matching the first entry of
/// [`PAGE_SIZE_OPTIONS`].
pub const DEFAULT_PAGE_SIZE: usize = 18;

/// Page sizes offered by the presentation layer.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [18, 27, 36, 45];

/// Sort order for the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive lexicographic order on item title.
    #[default]
    Name,
    /// Case-insensitive lexicographic order on owning category title.
    Category,
}

/// The complete query input. Supplied in full on every recomputation; the
/// query engine keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    /// Empty means "all categories".
    pub selected_categories: Vec<String>,
    pub sort_key: SortKey,
    /// Must be positive; enforced by [`derive_view`].
    pub page_size: usize,
    /// 1-based; out-of-range values are clamped at derivation time.
    pub page: usize,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            selected_categories: Vec::new(),
            sort_key: SortKey::default(),
            page_size,
            page: 1,
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One derived page of the catalog plus pagination metadata. Ephemeral:
/// always rebuilt from the full catalog and query state, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub items: Vec<Item>,
    pub current_page: usize,
    /// 0 when no items match.
    pub total_pages: usize,
    pub page_size: usize,
    pub total_count: usize,
    /// 1-based position of the first item of the slice within the sorted
    /// result, 0 when the slice is empty. Drives the "Showing X-Y of Z" line.
    pub first_index: usize,
    /// 1-based position of the last item of the slice, 0 when empty.
    pub last_index: usize,
}

impl View {
    pub fn empty(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 0,
            page_size,
            total_count: 0,
            first_index: 0,
            last_index: 0,
        }
    }
}

/// Pure view derivation: text filter, category filter, stable sort,
/// paginate, in that order. Identical inputs always yield structurally
/// identical output.
///
/// # Panics
///
/// Panics when `state.page_size` is zero; a non-positive page size is a
/// caller contract violation, not a recoverable input.
pub fn derive_view(items: &[Item], state: &QueryState) -> View {
    assert!(state.page_size > 0, "page_size must be positive");

    let needle = state.search_text.to_lowercase();
    let mut retained: Vec<&Item> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .filter(|item| {
            state.selected_categories.is_empty()
                || state
                    .selected_categories
                    .iter()
                    .any(|title| title == &item.category)
        })
        .collect();

    // sort_by_cached_key is stable, so ties keep their pre-sort order.
    match state.sort_key {
        SortKey::Name => retained.sort_by_cached_key(|item| item.title.to_lowercase()),
        SortKey::Category => retained.sort_by_cached_key(|item| item.category.to_lowercase()),
    }

    let total_count = retained.len();
    let total_pages = total_count.div_ceil(state.page_size);
    let current_page = state.page.clamp(1, total_pages.max(1));
    let start = (current_page - 1) * state.page_size;
    let end = (start + state.page_size).min(total_count);

    let page_items: Vec<Item> = if start < total_count {
        retained[start..end].iter().map(|item| (*item).clone()).collect()
    } else {
        Vec::new()
    };
    let (first_index, last_index) = if page_items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    View {
        items: page_items,
        current_page,
        total_pages,
        page_size: state.page_size,
        total_count,
        first_index,
        last_index,
    }
}
