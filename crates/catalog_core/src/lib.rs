//! Catalog core: pure state machine, query engine and view-model helpers.
mod catalog;
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use catalog::{Catalog, Category, Item};
pub use effect::Effect;
pub use msg::Msg;
pub use query::{derive_view, QueryState, SortKey, View, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use state::{AppState, CatalogState, LoadFailure, LoadFailureKind};
pub use update::update;
pub use view_model::{AppViewModel, LoadPhase};
