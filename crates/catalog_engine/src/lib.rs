//! Catalog engine: IO pipeline (fetch, decode, parse) and the debounce
//! scheduler for search input.
mod debounce;
mod decode;
mod engine;
mod fetch;
mod parse;
mod types;

pub use debounce::DebounceScheduler;
pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use parse::parse_catalog;
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, LoadError};
