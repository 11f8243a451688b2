use std::fs;
use std::path::Path;

use catalog_logging::{catalog_info, catalog_warn};
use serde::{Deserialize, Serialize};

const SETTINGS_FILENAME: &str = "catalog.ron";

const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/birobirobiro/awesome-shadcn-ui/main/README.md";

/// App settings, read from `./catalog.ron` when present. Any missing field
/// falls back to its default, and an unreadable or unparsable file falls
/// back wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_url: String,
    pub page_size: usize,
    pub debounce_ms: u64,
    /// Item titles dropped from the catalog at load time (housekeeping
    /// sections of the source document, not real entries).
    pub excluded_titles: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            page_size: catalog_core::DEFAULT_PAGE_SIZE,
            debounce_ms: 300,
            excluded_titles: vec!["Star History".to_string(), "Contributors".to_string()],
        }
    }
}

impl Settings {
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(SETTINGS_FILENAME))
    }

    fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                catalog_warn!("Failed to read settings from {:?}: {}", path, err);
                return Self::default();
            }
        };

        match ron::from_str::<Settings>(&content) {
            Ok(settings) => {
                catalog_info!("Loaded settings from {:?}", path);
                sanitize(settings)
            }
            Err(err) => {
                catalog_warn!("Failed to parse settings from {:?}: {}", path, err);
                Self::default()
            }
        }
    }
}

fn sanitize(mut settings: Settings) -> Settings {
    if settings.page_size == 0 {
        catalog_warn!(
            "page_size must be positive; falling back to {}",
            catalog_core::DEFAULT_PAGE_SIZE
        );
        settings.page_size = catalog_core::DEFAULT_PAGE_SIZE;
    }
    settings
}
