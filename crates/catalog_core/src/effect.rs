/// Side effects requested by `update` and executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch, decode and parse the source document.
    FetchCatalog { url: String },
    /// Route search text through the debounce scheduler. The settled value
    /// comes back as `Msg::SearchCommitted`.
    DebounceSearch { text: String },
}
