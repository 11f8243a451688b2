use catalog_core::{derive_view, Item, QueryState, SortKey};

fn item(title: &str, description: &str, category: &str) -> Item {
    Item {
        title: title.to_string(),
        description: description.to_string(),
        url: format!("https://example.com/{}", title.to_lowercase()),
        category: category.to_string(),
    }
}

fn sample_items() -> Vec<Item> {
    vec![
        item("Button", "clickable button widget", "Components"),
        item("Card", "content card", "Components"),
        item("Alert", "alert banner", "Components"),
        item("Zod Helper", "schema validation helper", "Libraries"),
        item("axios wrapper", "HTTP client wrapper", "Libraries"),
        item("Theme Studio", "theme editor", "Tools"),
    ]
}

#[test]
fn derive_view_is_deterministic() {
    let items = sample_items();
    let state = QueryState {
        search_text: "a".to_string(),
        selected_categories: vec!["Components".to_string(), "Tools".to_string()],
        sort_key: SortKey::Category,
        page_size: 2,
        page: 2,
    };

    let first = derive_view(&items, &state);
    let second = derive_view(&items, &state);
    assert_eq!(first, second);
}

#[test]
fn text_filter_matches_title_or_description_case_insensitively() {
    let items = sample_items();
    let state = QueryState {
        search_text: "WRAPPER".to_string(),
        ..QueryState::default()
    };

    let view = derive_view(&items, &state);
    assert_eq!(view.total_count, 1);
    assert_eq!(view.items[0].title, "axios wrapper");

    let state = QueryState {
        search_text: "card".to_string(),
        ..QueryState::default()
    };
    let view = derive_view(&items, &state);
    for found in &view.items {
        assert!(
            found.title.to_lowercase().contains("card")
                || found.description.to_lowercase().contains("card")
        );
    }
    assert_eq!(view.total_count, 1);
}

#[test]
fn empty_search_retains_all_items() {
    let items = sample_items();
    let view = derive_view(&items, &QueryState::default());
    assert_eq!(view.total_count, items.len());
}

#[test]
fn category_filter_retains_only_members() {
    let items = sample_items();
    let state = QueryState {
        selected_categories: vec!["Libraries".to_string()],
        ..QueryState::default()
    };

    let view = derive_view(&items, &state);
    assert_eq!(view.total_count, 2);
    for found in &view.items {
        assert_eq!(found.category, "Libraries");
    }
}

#[test]
fn empty_category_selection_means_all_categories() {
    let items = sample_items();
    let state = QueryState {
        selected_categories: Vec::new(),
        ..QueryState::default()
    };
    assert_eq!(derive_view(&items, &state).total_count, items.len());
}

#[test]
fn sort_by_name_is_case_insensitive_and_non_decreasing() {
    let items = sample_items();
    let view = derive_view(&items, &QueryState::default());

    let titles: Vec<String> = view.items.iter().map(|i| i.title.to_lowercase()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
    // "axios wrapper" must sort between "Alert" and "Button" despite its case.
    assert_eq!(view.items[1].title, "axios wrapper");
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let items = vec![
        item("Table", "first occurrence", "Components"),
        item("Table", "second occurrence", "Widgets"),
        item("Table", "third occurrence", "Components"),
    ];
    let view = derive_view(&items, &QueryState::default());

    let descriptions: Vec<&str> = view.items.iter().map(|i| i.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec!["first occurrence", "second occurrence", "third occurrence"]
    );
}

#[test]
fn sort_by_category_groups_items() {
    let items = sample_items();
    let state = QueryState {
        sort_key: SortKey::Category,
        ..QueryState::default()
    };
    let view = derive_view(&items, &state);

    let categories: Vec<String> = view.items.iter().map(|i| i.category.clone()).collect();
    let mut sorted = categories.clone();
    sorted.sort_by_key(|c| c.to_lowercase());
    assert_eq!(categories, sorted);
    // Within Components the pre-sort order survives.
    let components: Vec<&str> = view
        .items
        .iter()
        .filter(|i| i.category == "Components")
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(components, vec!["Button", "Card", "Alert"]);
}

#[test]
fn pagination_of_ten_items_by_four() {
    let items: Vec<Item> = (0..10)
        .map(|n| item(&format!("Item {n:02}"), "", "Only"))
        .collect();

    let state = QueryState {
        page_size: 4,
        page: 3,
        ..QueryState::default()
    };
    let view = derive_view(&items, &state);

    assert_eq!(view.total_pages, 3);
    assert_eq!(view.total_count, 10);
    assert_eq!(view.current_page, 3);
    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[0].title, "Item 08");
    assert_eq!(view.items[1].title, "Item 09");
    assert_eq!(view.first_index, 9);
    assert_eq!(view.last_index, 10);
}

#[test]
fn out_of_range_page_is_clamped() {
    let items = sample_items();
    let state = QueryState {
        page_size: 4,
        page: 99,
        ..QueryState::default()
    };
    let view = derive_view(&items, &state);
    assert_eq!(view.current_page, 2);
    assert!(!view.items.is_empty());
}

#[test]
fn zero_matches_yield_empty_view_without_pages() {
    let items = sample_items();
    let state = QueryState {
        search_text: "no such thing anywhere".to_string(),
        ..QueryState::default()
    };
    let view = derive_view(&items, &state);

    assert_eq!(view.total_count, 0);
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.current_page, 1);
    assert!(view.items.is_empty());
    assert_eq!(view.first_index, 0);
    assert_eq!(view.last_index, 0);
}

#[test]
#[should_panic(expected = "page_size must be positive")]
fn zero_page_size_is_rejected() {
    let items = sample_items();
    let state = QueryState {
        page_size: 0,
        ..QueryState::default()
    };
    let _ = derive_view(&items, &state);
}
