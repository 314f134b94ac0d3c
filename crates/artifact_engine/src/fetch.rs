use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use url::Url;
use viewer_logging::{viewer_debug, viewer_warn};

use crate::{decode_text, FailureKind, FetchError, FetchResponse};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Idempotent read of one artifact by its logical path.
///
/// Implementations must always return fresh content. A status code of any
/// kind is a successful read; only failures to obtain a response are errors.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn read(&self, path: &str) -> Result<FetchResponse, FetchError>;
}

/// Reads artifacts over HTTP relative to a base URL, bypassing caches.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    base_url: Url,
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(base_url: &str, settings: FetchSettings) -> Result<Self, FetchError> {
        let mut base = Url::parse(base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidPath, err.to_string()))?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .default_headers(no_cache_headers())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base_url: base,
            settings,
        })
    }

    fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| FetchError::new(FailureKind::InvalidPath, err.to_string()))
    }
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, max-age=0"),
    );
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn read(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let url = self.resolve(path)?;
        viewer_debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|err| {
            let err = map_reqwest_error(err);
            viewer_warn!("Fetch of {} failed: {} ({})", path, err.message, err.kind);
            err
        })?;

        let status = response.status().as_u16();
        // Only 2xx bodies are ever shown; error pages are not read or size-checked.
        if !response.status().is_success() {
            viewer_debug!("GET {} -> {}", path, status);
            return Ok(FetchResponse {
                status,
                body: String::new(),
            });
        }
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        viewer_debug!("GET {} -> {} ({} bytes)", path, status, bytes.len());
        Ok(FetchResponse {
            status,
            body: decode_text(&bytes, content_type.as_deref()),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
