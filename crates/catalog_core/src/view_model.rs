use crate::query::{QueryState, View};
use crate::state::LoadFailure;

/// Load lifecycle as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(LoadFailure),
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub phase: LoadPhase,
    /// Distinct category titles in first-seen document order.
    pub category_options: Vec<String>,
    pub view: View,
    /// Echo of the query the view was derived from.
    pub query: QueryState,
}
