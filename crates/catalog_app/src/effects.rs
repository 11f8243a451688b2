use std::sync::mpsc;
use std::time::Duration;

use catalog_core::{Effect, LoadFailure, LoadFailureKind, Msg};
use catalog_engine::{
    DebounceScheduler, EngineEvent, EngineHandle, FailureKind, FetchSettings, LoadError,
};
use catalog_logging::catalog_info;

use crate::settings::Settings;

/// Executes core effects against the engine and the debounce scheduler,
/// and polls both for results to feed back into the state machine.
pub struct EffectRunner {
    engine: EngineHandle,
    debouncer: DebounceScheduler<String>,
    debounce_rx: mpsc::Receiver<String>,
    debounce_delay: Duration,
}

impl EffectRunner {
    pub fn new(settings: &Settings) -> Self {
        let (debounce_tx, debounce_rx) = mpsc::channel();
        Self {
            engine: EngineHandle::new(FetchSettings::default()),
            debouncer: DebounceScheduler::new(debounce_tx),
            debounce_rx,
            debounce_delay: Duration::from_millis(settings.debounce_ms),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog { url } => {
                    catalog_info!("FetchCatalog url={url}");
                    self.engine.request(url);
                }
                Effect::DebounceSearch { text } => {
                    self.debouncer.schedule(text, self.debounce_delay);
                }
            }
        }
    }

    /// Drains finished loads and settled search text into messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(match event {
                EngineEvent::CatalogLoaded { categories } => Msg::CatalogLoaded(categories),
                EngineEvent::LoadFailed { error } => Msg::CatalogFailed(map_load_error(&error)),
            });
        }
        while let Ok(text) = self.debounce_rx.try_recv() {
            msgs.push(Msg::SearchCommitted(text));
        }
        msgs
    }
}

fn map_load_error(error: &LoadError) -> LoadFailure {
    let kind = match error {
        LoadError::Fetch(fetch) if fetch.kind == FailureKind::InvalidUrl => {
            LoadFailureKind::InvalidUrl
        }
        LoadError::Fetch(_) => LoadFailureKind::Fetch,
        LoadError::Decode(_) => LoadFailureKind::Decode,
    };
    LoadFailure {
        kind,
        message: error.to_string(),
    }
}
