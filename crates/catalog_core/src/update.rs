use url::Url;

use crate::{AppState, Effect, LoadFailure, LoadFailureKind, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FetchRequested { url } => {
            if let Err(err) = Url::parse(&url) {
                state.fail_load(LoadFailure {
                    kind: LoadFailureKind::InvalidUrl,
                    message: format!("{url}: {err}"),
                });
                Vec::new()
            } else {
                state.begin_load();
                vec![Effect::FetchCatalog { url }]
            }
        }
        Msg::CatalogLoaded(categories) => {
            state.apply_catalog(categories);
            Vec::new()
        }
        Msg::CatalogFailed(failure) => {
            state.fail_load(failure);
            Vec::new()
        }
        // Raw keystrokes never touch the query directly; they settle in the
        // debounce scheduler and return as SearchCommitted.
        Msg::SearchInputChanged(text) => vec![Effect::DebounceSearch { text }],
        Msg::SearchCommitted(text) => {
            state.commit_search(text);
            Vec::new()
        }
        Msg::CategoriesSelected(titles) => {
            state.select_categories(titles);
            Vec::new()
        }
        Msg::SortKeySelected(key) => {
            state.select_sort_key(key);
            Vec::new()
        }
        Msg::PageSizeSelected(size) => {
            state.select_page_size(size);
            Vec::new()
        }
        Msg::PageSelected(page) => {
            state.select_page(page);
            Vec::new()
        }
    };

    (state, effects)
}
