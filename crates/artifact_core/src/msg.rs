#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The panel was mounted; load the current (default) selection.
    PanelOpened,
    /// User picked an artifact. Unknown ids fall back to the first entry.
    ArtifactSelected(String),
    /// User asked to load the current artifact again.
    ReloadRequested,
    /// Transport finished a read started for `generation`.
    FetchCompleted {
        generation: crate::Generation,
        outcome: crate::FetchOutcome,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
