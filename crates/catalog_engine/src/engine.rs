use std::sync::mpsc;
use std::thread;

use catalog_core::Category;
use catalog_logging::{catalog_info, catalog_warn};

use crate::decode::decode_text;
use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::parse::parse_catalog;
use crate::types::{EngineEvent, LoadError};

enum EngineCommand {
    Load { url: String },
}

/// Handle to the background load pipeline. Load requests go in over a
/// channel; a dedicated thread drives a tokio runtime through
/// fetch -> decode -> parse and emits one [`EngineEvent`] per request,
/// polled by the UI thread with [`try_recv`](Self::try_recv).
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let fetcher = ReqwestFetcher::new(settings);
            while let Ok(EngineCommand::Load { url }) = cmd_rx.recv() {
                let event = runtime.block_on(load(&fetcher, &url));
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Requests one fetch+decode+parse of `url`.
    pub fn request(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Load { url: url.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn load(fetcher: &dyn Fetcher, url: &str) -> EngineEvent {
    match load_inner(fetcher, url).await {
        Ok(categories) => {
            catalog_info!(
                "loaded catalog from {url}: {} categories",
                categories.len()
            );
            EngineEvent::CatalogLoaded { categories }
        }
        Err(error) => {
            catalog_warn!("catalog load failed for {url}: {error}");
            EngineEvent::LoadFailed { error }
        }
    }
}

async fn load_inner(fetcher: &dyn Fetcher, url: &str) -> Result<Vec<Category>, LoadError> {
    let output = fetcher.fetch(url).await?;
    let decoded = decode_text(&output.bytes, output.metadata.content_type.as_deref())?;
    Ok(parse_catalog(&decoded.text))
}
