use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use viewer_logging::viewer_debug;

use crate::{decode_text, FailureKind, FetchError, FetchResponse, Fetcher};

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;

/// Reads artifacts from a static directory, the way a file server would.
///
/// A missing file is reported as a 404 response, not as an error.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
    max_bytes: u64,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                _ => {
                    return Err(FetchError::new(
                        FailureKind::InvalidPath,
                        format!("path escapes artifact root: {path}"),
                    ))
                }
            }
        }
        Ok(resolved)
    }
}

#[async_trait::async_trait]
impl Fetcher for DirFetcher {
    async fn read(&self, path: &str) -> Result<FetchResponse, FetchError> {
        let file = self.resolve(path)?;
        viewer_debug!("Reading {:?}", file);

        let metadata = match tokio::fs::metadata(&file).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(FetchResponse {
                    status: STATUS_NOT_FOUND,
                    body: String::new(),
                });
            }
            Err(err) => return Err(FetchError::new(FailureKind::Io, err.to_string())),
        };
        if !metadata.is_file() {
            return Ok(FetchResponse {
                status: STATUS_NOT_FOUND,
                body: String::new(),
            });
        }
        if metadata.len() > self.max_bytes {
            return Err(FetchError::new(
                FailureKind::TooLarge {
                    max_bytes: self.max_bytes,
                    actual: Some(metadata.len()),
                },
                "file too large",
            ));
        }

        let bytes = tokio::fs::read(&file)
            .await
            .map_err(|err| FetchError::new(FailureKind::Io, err.to_string()))?;
        Ok(FetchResponse {
            status: STATUS_OK,
            body: decode_text(&bytes, None),
        })
    }
}
