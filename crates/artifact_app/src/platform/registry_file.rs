use std::fs;
use std::path::{Path, PathBuf};

use artifact_core::{ArtifactDescriptor, ArtifactKind, Registry, RegistryError};
use serde::Deserialize;
use thiserror::Error;
use viewer_logging::viewer_info;

#[derive(Debug, Error)]
pub enum RegistryFileError {
    #[error("failed to read registry file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse registry file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error(transparent)]
    Invalid(#[from] RegistryError),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PersistedKind {
    #[serde(alias = "json")]
    Structured,
    #[serde(alias = "text")]
    Plain,
}

#[derive(Debug, Clone, Deserialize)]
struct PersistedArtifact {
    id: String,
    title: String,
    path: String,
    kind: PersistedKind,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    artifacts: Vec<PersistedArtifact>,
}

/// Load the registry from `path`, or the built-in one when no file is given.
pub(crate) fn load_registry(path: Option<&Path>) -> Result<Registry, RegistryFileError> {
    let Some(path) = path else {
        return Ok(default_registry());
    };

    let content = fs::read_to_string(path).map_err(|source| RegistryFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = parse_registry(&content).map_err(|err| match err {
        ParseFailure::Syntax(source) => RegistryFileError::Parse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Invalid(err) => RegistryFileError::Invalid(err),
    })?;

    viewer_info!("Loaded {} artifacts from {:?}", registry.len(), path);
    Ok(registry)
}

enum ParseFailure {
    Syntax(ron::error::SpannedError),
    Invalid(RegistryError),
}

fn parse_registry(content: &str) -> Result<Registry, ParseFailure> {
    let file: RegistryFile = ron::from_str(content).map_err(ParseFailure::Syntax)?;
    let artifacts = file
        .artifacts
        .into_iter()
        .map(|artifact| ArtifactDescriptor {
            id: artifact.id,
            title: artifact.title,
            path: artifact.path,
            kind: match artifact.kind {
                PersistedKind::Structured => ArtifactKind::Structured,
                PersistedKind::Plain => ArtifactKind::Plain,
            },
            description: artifact.description,
        })
        .collect();
    Registry::new(artifacts).map_err(ParseFailure::Invalid)
}

/// The runtime artifacts written by the orchestrator, consumer and evaluator.
pub(crate) fn default_registry() -> Registry {
    let artifacts = vec![
        ArtifactDescriptor::new(
            "last_execution_request",
            "last_execution_request.json",
            "/last_execution_request.json",
            ArtifactKind::Structured,
            "Most recent request emitted by the orchestrator (runtime artifact).",
        ),
        ArtifactDescriptor::new(
            "last_execution_result",
            "last_execution_result.json",
            "/last_execution_result.json",
            ArtifactKind::Structured,
            "Most recent execution result produced by the consumer (runtime artifact).",
        ),
        ArtifactDescriptor::new(
            "last_evaluation_result",
            "last_evaluation_result.json",
            "/last_evaluation_result.json",
            ArtifactKind::Structured,
            "Most recent evaluation result produced by the evaluator (runtime artifact).",
        ),
    ];
    Registry::new(artifacts).unwrap_or_default()
}
