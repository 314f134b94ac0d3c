use std::sync::Once;

use artifact_core::{
    update, ArtifactDescriptor, ArtifactKind, Effect, LoadState, Msg, PanelState, Registry,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

fn registry() -> Registry {
    Registry::new(vec![
        ArtifactDescriptor::new(
            "request",
            "last_execution_request.json",
            "/last_execution_request.json",
            ArtifactKind::Structured,
            "Most recent request.",
        ),
        ArtifactDescriptor::new(
            "notes",
            "notes.txt",
            "/notes.txt",
            ArtifactKind::Plain,
            "Operator notes.",
        ),
    ])
    .unwrap()
}

#[test]
fn new_state_is_idle_with_first_artifact_selected() {
    init_logging();
    let state = PanelState::new(registry());

    assert_eq!(state.load_state(), &LoadState::Idle);
    assert_eq!(state.selected_id(), Some("request"));
    assert_eq!(state.generation(), 0);
}

#[test]
fn panel_opened_loads_default_selection() {
    init_logging();
    let (mut state, effects) = update(PanelState::new(registry()), Msg::PanelOpened);

    assert_eq!(state.load_state(), &LoadState::Loading);
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::FetchArtifact {
            generation: 1,
            path: "/last_execution_request.json".to_string(),
        }]
    );
}

#[test]
fn selecting_issues_exactly_one_fetch_with_new_generation() {
    init_logging();
    let (state, _) = update(PanelState::new(registry()), Msg::PanelOpened);
    let (state, effects) = update(state, Msg::ArtifactSelected("notes".to_string()));

    assert_eq!(state.selected_id(), Some("notes"));
    assert_eq!(state.generation(), 2);
    assert_eq!(state.load_state(), &LoadState::Loading);
    assert_eq!(
        effects,
        vec![Effect::FetchArtifact {
            generation: 2,
            path: "/notes.txt".to_string(),
        }]
    );
}

#[test]
fn unknown_id_falls_back_to_first_artifact() {
    init_logging();
    let (state, _) = update(
        PanelState::new(registry()),
        Msg::ArtifactSelected("notes".to_string()),
    );
    let (state, effects) = update(state, Msg::ArtifactSelected("does-not-exist".to_string()));

    assert_eq!(state.selected_id(), Some("request"));
    assert_eq!(
        effects,
        vec![Effect::FetchArtifact {
            generation: 2,
            path: "/last_execution_request.json".to_string(),
        }]
    );
}

#[test]
fn empty_registry_makes_selection_a_noop() {
    init_logging();
    let state = PanelState::new(Registry::new(Vec::new()).unwrap());

    let (mut state, effects) = update(state, Msg::ArtifactSelected("anything".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.load_state(), &LoadState::Idle);
    assert_eq!(state.selected_id(), None);
    assert!(!state.consume_dirty());

    let (state, effects) = update(state, Msg::PanelOpened);
    assert!(effects.is_empty());
    assert_eq!(state.generation(), 0);
}

#[test]
fn reselecting_same_artifact_restarts_the_load() {
    init_logging();
    let (state, _) = update(
        PanelState::new(registry()),
        Msg::ArtifactSelected("notes".to_string()),
    );
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            outcome: artifact_core::FetchOutcome::TransportFailed {
                message: "connection refused".to_string(),
            },
        },
    );
    assert!(matches!(state.load_state(), LoadState::Error { .. }));

    let (state, effects) = update(state, Msg::ArtifactSelected("notes".to_string()));
    assert_eq!(state.load_state(), &LoadState::Loading);
    assert_eq!(
        effects,
        vec![Effect::FetchArtifact {
            generation: 2,
            path: "/notes.txt".to_string(),
        }]
    );

    let (state, effects) = update(state, Msg::ReloadRequested);
    assert_eq!(state.generation(), 3);
    assert_eq!(effects.len(), 1);
}
