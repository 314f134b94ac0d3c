//! Artifact engine: read-by-path transports and the background fetch loop.
mod decode;
mod dir;
mod engine;
mod fetch;
mod types;

pub use decode::decode_text;
pub use dir::DirFetcher;
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchResponse, Generation};
