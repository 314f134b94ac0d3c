#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read `path` fresh from the transport and report back with `generation`.
    FetchArtifact {
        generation: crate::Generation,
        path: String,
    },
}
