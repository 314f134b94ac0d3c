use crate::{Effect, Msg, PanelState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::PanelOpened | Msg::ReloadRequested => {
            let current = state.selected_id().unwrap_or_default().to_owned();
            state.begin_load(&current).into_iter().collect()
        }
        Msg::ArtifactSelected(id) => state.begin_load(&id).into_iter().collect(),
        Msg::FetchCompleted {
            generation,
            outcome,
        } => {
            state.complete_load(generation, outcome);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
