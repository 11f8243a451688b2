/// One catalog entry: a titled link, an optional description and the title
/// of the category that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Always equals the title of the owning [`Category`].
    pub category: String,
}

/// A named group of items, one per level-2 section of the source document.
/// Item order is source-document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub items: Vec<Item>,
}

/// The full parsed set of categories from one document fetch.
///
/// Immutable after construction; a new fetch replaces the catalog wholesale
/// rather than patching it. The flattened item sequence is materialized once
/// here so view derivation never re-walks the category tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let items = categories
            .iter()
            .flat_map(|category| category.items.iter().cloned())
            .collect();
        Self { categories, items }
    }

    /// Builds a catalog dropping items whose title appears in `excluded`.
    /// Categories are kept even when the exclusion leaves them empty.
    pub fn excluding_titles(mut categories: Vec<Category>, excluded: &[String]) -> Self {
        if !excluded.is_empty() {
            for category in &mut categories {
                category
                    .items
                    .retain(|item| !excluded.iter().any(|title| title == &item.title));
            }
        }
        Self::new(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All items flattened in document order: category order preserved,
    /// items within a category in source order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Distinct category titles in first-seen order. This is what populates
    /// the category filter options.
    pub fn category_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            if !titles.contains(&category.title) {
                titles.push(category.title.clone());
            }
        }
        titles
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
