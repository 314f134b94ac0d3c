use crate::{LoadState, LoadStatus, PanelState};

pub const IDLE_PLACEHOLDER: &str = "Select an artifact.";
pub const LOADING_NOTICE: &str = "Loading...";
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub entries: Vec<ArtifactEntryView>,
    pub selected_path: Option<String>,
    pub status: LoadStatus,
    pub body: PanelBody,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactEntryView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub selected: bool,
}

/// What the viewer area shows below the status tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// Nothing loaded yet.
    Placeholder(&'static str),
    /// Muted status line: loading, missing or error messages.
    Notice(String),
    /// Artifact text, formatted when available.
    Content(String),
}

impl Default for PanelBody {
    fn default() -> Self {
        PanelBody::Placeholder(IDLE_PLACEHOLDER)
    }
}

impl PanelBody {
    pub fn text(&self) -> &str {
        match self {
            PanelBody::Placeholder(text) => *text,
            PanelBody::Notice(text) | PanelBody::Content(text) => text.as_str(),
        }
    }
}

impl PanelViewModel {
    pub(crate) fn build(state: &PanelState, dirty: bool) -> Self {
        let selected_id = state.selected_id();
        let entries = state
            .registry()
            .iter()
            .map(|artifact| ArtifactEntryView {
                id: artifact.id.clone(),
                title: artifact.title.clone(),
                description: artifact.description.clone(),
                selected: Some(artifact.id.as_str()) == selected_id,
            })
            .collect();

        let load = state.load_state();
        let body = match load {
            LoadState::Idle => PanelBody::Placeholder(IDLE_PLACEHOLDER),
            LoadState::Loading => PanelBody::Notice(LOADING_NOTICE.to_string()),
            LoadState::Missing { message } | LoadState::Error { message } => {
                PanelBody::Notice(message.clone())
            }
            LoadState::Loaded {
                raw_text,
                formatted_text,
            } => {
                let text = formatted_text.as_deref().unwrap_or(raw_text);
                if text.is_empty() {
                    PanelBody::Content(EMPTY_PLACEHOLDER.to_string())
                } else {
                    PanelBody::Content(text.to_string())
                }
            }
        };

        Self {
            entries,
            selected_path: state.selected_artifact().map(|artifact| artifact.path.clone()),
            status: load.status(),
            body,
            dirty,
        }
    }
}
