//! Artifact viewer core: pure load/render state machine and view-model helpers.
mod artifact;
mod effect;
mod format;
mod load;
mod msg;
mod state;
mod update;
mod view_model;

pub use artifact::{ArtifactDescriptor, ArtifactKind, Registry, RegistryError};
pub use effect::Effect;
pub use format::{format_structured, FormatError};
pub use load::{classify, FetchOutcome};
pub use msg::Msg;
pub use state::{Generation, LoadState, LoadStatus, PanelState};
pub use update::update;
pub use view_model::{
    ArtifactEntryView, PanelBody, PanelViewModel, EMPTY_PLACEHOLDER, IDLE_PLACEHOLDER,
    LOADING_NOTICE,
};
