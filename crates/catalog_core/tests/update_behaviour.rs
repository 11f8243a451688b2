use std::sync::Once;

use catalog_core::{
    update, AppState, Category, Effect, Item, LoadFailure, LoadFailureKind, LoadPhase, Msg,
    SortKey,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn category(title: &str, item_titles: &[&str]) -> Category {
    Category {
        title: title.to_string(),
        items: item_titles
            .iter()
            .map(|t| Item {
                title: t.to_string(),
                description: String::new(),
                url: format!("https://example.com/{t}"),
                category: title.to_string(),
            })
            .collect(),
    }
}

fn loaded_state() -> AppState {
    let state = AppState::new();
    let (state, _) = update(
        state,
        Msg::CatalogLoaded(vec![
            category("Components", &["Button", "Card"]),
            category("Tools", &["Theme Studio"]),
        ]),
    );
    state
}

#[test]
fn fetch_requested_moves_to_loading_and_emits_fetch() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::FetchRequested {
            url: "https://example.com/README.md".to_string(),
        },
    );

    assert_eq!(state.view().phase, LoadPhase::Loading);
    assert_eq!(
        effects,
        vec![Effect::FetchCatalog {
            url: "https://example.com/README.md".to_string(),
        }]
    );
}

#[test]
fn fetch_requested_with_invalid_url_fails_immediately() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::FetchRequested {
            url: "not a url".to_string(),
        },
    );

    assert!(effects.is_empty());
    match state.view().phase {
        LoadPhase::Failed(failure) => assert_eq!(failure.kind, LoadFailureKind::InvalidUrl),
        other => panic!("expected failed phase, got {other:?}"),
    }
}

#[test]
fn catalog_loaded_moves_to_ready_with_options_in_document_order() {
    init_logging();
    let mut state = loaded_state();
    assert!(state.consume_dirty());

    let view_model = state.view();
    assert_eq!(view_model.phase, LoadPhase::Ready);
    assert_eq!(
        view_model.category_options,
        vec!["Components".to_string(), "Tools".to_string()]
    );
    assert_eq!(view_model.view.total_count, 3);
}

#[test]
fn excluded_titles_are_dropped_at_load_time() {
    init_logging();
    let state = AppState::with_options(18, vec!["Star History".to_string()]);
    let (state, _) = update(
        state,
        Msg::CatalogLoaded(vec![category("Misc", &["Button", "Star History"])]),
    );

    let view = state.view().view;
    assert_eq!(view.total_count, 1);
    assert_eq!(view.items[0].title, "Button");
}

#[test]
fn catalog_failed_moves_to_failed() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(
        state,
        Msg::CatalogFailed(LoadFailure {
            kind: LoadFailureKind::Fetch,
            message: "http status 404".to_string(),
        }),
    );

    assert!(effects.is_empty());
    match state.view().phase {
        LoadPhase::Failed(failure) => {
            assert_eq!(failure.kind, LoadFailureKind::Fetch);
            assert!(failure.to_string().contains("404"));
        }
        other => panic!("expected failed phase, got {other:?}"),
    }
}

#[test]
fn search_input_is_routed_through_debounce() {
    init_logging();
    let state = loaded_state();
    let before = state.view();

    let (state, effects) = update(state, Msg::SearchInputChanged("but".to_string()));

    assert_eq!(
        effects,
        vec![Effect::DebounceSearch {
            text: "but".to_string(),
        }]
    );
    // Raw input alone must not change the derived view.
    assert_eq!(state.view(), before);
}

#[test]
fn search_committed_applies_filter_and_resets_page() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(state, Msg::PageSelected(2));
    let (mut state, effects) = update(state, Msg::SearchCommitted("button".to_string()));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view().view;
    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_count, 1);
    assert_eq!(view.items[0].title, "Button");
}

#[test]
fn recommitting_identical_search_is_a_noop() {
    init_logging();
    let state = loaded_state();
    let (mut state, _) = update(state, Msg::SearchCommitted("card".to_string()));
    state.consume_dirty();

    let (state, _) = update(state, Msg::PageSelected(1));
    let (mut state, _) = update(state, Msg::SearchCommitted("card".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn filter_sort_and_page_size_changes_reset_page() {
    init_logging();
    let cases: Vec<Msg> = vec![
        Msg::CategoriesSelected(vec!["Components".to_string()]),
        Msg::SortKeySelected(SortKey::Category),
        Msg::PageSizeSelected(27),
    ];

    for msg in cases {
        let state = loaded_state();
        let (state, _) = update(state, Msg::PageSelected(2));
        let (state, _) = update(state, msg.clone());
        assert_eq!(state.query().page, 1, "page not reset after {msg:?}");
    }
}

#[test]
fn page_selected_changes_only_the_page() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(state, Msg::CategoriesSelected(vec!["Tools".to_string()]));
    let (state, effects) = update(state, Msg::PageSelected(2));

    assert!(effects.is_empty());
    assert_eq!(state.query().page, 2);
    assert_eq!(state.query().selected_categories, vec!["Tools".to_string()]);
}

#[test]
fn zero_page_size_is_ignored() {
    init_logging();
    let mut state = loaded_state();
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::PageSizeSelected(0));

    assert!(!state.consume_dirty());
    assert_eq!(state.query().page_size, catalog_core::DEFAULT_PAGE_SIZE);
}

#[test]
fn query_mutations_while_loading_keep_empty_view() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::SearchCommitted("anything".to_string()));

    let view_model = state.view();
    assert_eq!(view_model.phase, LoadPhase::Loading);
    assert!(view_model.view.items.is_empty());
    assert_eq!(view_model.query.search_text, "anything");
}
