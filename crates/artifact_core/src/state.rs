use viewer_logging::{viewer_debug, viewer_info, viewer_warn};

use crate::view_model::PanelViewModel;
use crate::{classify, ArtifactDescriptor, Effect, FetchOutcome, Registry};

/// Monotonic token identifying the most recent load request.
///
/// Must match `artifact_engine::Generation`; the shell passes it through unchanged.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Missing {
        message: String,
    },
    Error {
        message: String,
    },
    Loaded {
        raw_text: String,
        formatted_text: Option<String>,
    },
}

impl LoadState {
    pub fn status(&self) -> LoadStatus {
        match self {
            LoadState::Idle => LoadStatus::Idle,
            LoadState::Loading => LoadStatus::Loading,
            LoadState::Missing { .. } => LoadStatus::Missing,
            LoadState::Error { .. } => LoadStatus::Error,
            LoadState::Loaded { .. } => LoadStatus::Loaded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Missing,
    Error,
    Loaded,
}

impl LoadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Missing => "missing",
            LoadStatus::Error => "error",
            LoadStatus::Loaded => "loaded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    registry: Registry,
    selected: Option<String>,
    generation: Generation,
    load: LoadState,
    dirty: bool,
}

impl PanelState {
    pub fn new(registry: Registry) -> Self {
        let selected = registry.first().map(|artifact| artifact.id.clone());
        Self {
            registry,
            selected,
            ..Self::default()
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_artifact(&self) -> Option<&ArtifactDescriptor> {
        self.selected
            .as_deref()
            .and_then(|id| self.registry.get(id))
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel::build(self, self.dirty)
    }

    /// Returns whether a visible transition happened since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Select `id` (or the first artifact) and start a fresh load for it.
    ///
    /// Returns `None` only when the registry is empty.
    pub(crate) fn begin_load(&mut self, id: &str) -> Option<Effect> {
        let artifact = self.registry.resolve(id)?;
        let path = artifact.path.clone();
        let resolved_id = artifact.id.clone();
        if resolved_id != id {
            viewer_warn!("Unknown artifact id {:?}; falling back to {:?}", id, resolved_id);
        }

        self.generation += 1;
        viewer_info!(
            "Loading artifact id={} path={} generation={}",
            resolved_id,
            path,
            self.generation
        );
        self.selected = Some(resolved_id);
        self.load = LoadState::Loading;
        self.dirty = true;

        Some(Effect::FetchArtifact {
            generation: self.generation,
            path,
        })
    }

    /// Apply a completed read if it belongs to the current generation.
    ///
    /// Each generation resolves at most once; repeats are dropped like stale ones.
    pub(crate) fn complete_load(&mut self, generation: Generation, outcome: FetchOutcome) {
        if generation != self.generation || self.load != LoadState::Loading {
            viewer_debug!(
                "Discarding stale result generation={} current={}",
                generation,
                self.generation
            );
            return;
        }
        let Some(artifact) = self.selected_artifact() else {
            return;
        };

        let next = classify(artifact, outcome);
        match &next {
            LoadState::Missing { message } | LoadState::Error { message } => {
                viewer_warn!("Artifact {} failed to load: {}", artifact.id, message);
            }
            _ => viewer_debug!("Artifact {} loaded", artifact.id),
        }
        self.load = next;
        self.dirty = true;
    }
}
