use crate::format::format_structured;
use crate::{ArtifactDescriptor, ArtifactKind, LoadState};

const STATUS_NOT_FOUND: u16 = 404;

/// What the transport reported for one read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server answered; any status code, including errors.
    Response { status: u16, body: String },
    /// The read never produced a response (network, DNS, IO, ...).
    TransportFailed { message: String },
}

/// Map a fetch outcome for `artifact` to the terminal load state.
///
/// Never returns `Idle` or `Loading`.
pub fn classify(artifact: &ArtifactDescriptor, outcome: FetchOutcome) -> LoadState {
    let (status, body) = match outcome {
        FetchOutcome::TransportFailed { message } => return LoadState::Error { message },
        FetchOutcome::Response { status, body } => (status, body),
    };

    if status == STATUS_NOT_FOUND {
        return LoadState::Missing {
            message: format!("Missing (404). File not found at {}", artifact.path),
        };
    }
    if !(200..300).contains(&status) {
        return LoadState::Error {
            message: format!("Failed to fetch {}: {}", artifact.path, status),
        };
    }

    match artifact.kind {
        ArtifactKind::Structured => match format_structured(&body) {
            Ok(pretty) => LoadState::Loaded {
                raw_text: body,
                formatted_text: Some(pretty),
            },
            Err(err) => LoadState::Error {
                message: format!(
                    "{} parse error in {}: {}",
                    artifact.kind.format_label(),
                    artifact.title,
                    err
                ),
            },
        },
        ArtifactKind::Plain => LoadState::Loaded {
            raw_text: body,
            formatted_text: None,
        },
    }
}
