use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Parsed and pretty-printed before display.
    Structured,
    /// Displayed verbatim.
    Plain,
}

impl ArtifactKind {
    /// Name of the structured format, used in parse error messages.
    pub fn format_label(self) -> &'static str {
        match self {
            ArtifactKind::Structured => "JSON",
            ArtifactKind::Plain => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub id: String,
    pub title: String,
    pub path: String,
    pub kind: ArtifactKind,
    pub description: String,
}

impl ArtifactDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
        kind: ArtifactKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
            kind,
            description: description.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate artifact id: {0}")]
    DuplicateId(String),
}

/// Ordered, immutable list of artifacts the panel can show.
///
/// Cloning is cheap; every clone shares the same descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registry {
    artifacts: Arc<[ArtifactDescriptor]>,
}

impl Registry {
    pub fn new(artifacts: Vec<ArtifactDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(artifacts.len());
        for artifact in &artifacts {
            if !seen.insert(artifact.id.as_str()) {
                return Err(RegistryError::DuplicateId(artifact.id.clone()));
            }
        }
        Ok(Self {
            artifacts: artifacts.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtifactDescriptor> {
        self.artifacts.iter()
    }

    pub fn first(&self) -> Option<&ArtifactDescriptor> {
        self.artifacts.first()
    }

    pub fn get(&self, id: &str) -> Option<&ArtifactDescriptor> {
        self.artifacts.iter().find(|artifact| artifact.id == id)
    }

    /// Looks up `id`, falling back to the first descriptor when it is unknown.
    pub fn resolve(&self, id: &str) -> Option<&ArtifactDescriptor> {
        self.get(id).or_else(|| self.first())
    }
}
