use std::fmt::Write;

use artifact_core::PanelViewModel;

const HELP_LINE: &str = "Commands: <number> or <id> to select, r to reload, q to quit";

/// Render the panel as plain terminal text.
pub fn render(view: &PanelViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Artifacts ==");
    if view.entries.is_empty() {
        let _ = writeln!(out, "  (no artifacts configured)");
    }
    for (index, entry) in view.entries.iter().enumerate() {
        let marker = if entry.selected { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} [{}] {}", index + 1, entry.title);
        if !entry.description.is_empty() {
            let _ = writeln!(out, "      {}", entry.description);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Selected: {}  [{}]",
        view.selected_path.as_deref().unwrap_or("-"),
        view.status.as_str()
    );
    let _ = writeln!(out, "{}", view.body.text());
    let _ = writeln!(out);
    out.push_str(HELP_LINE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifact_core::{
        update, ArtifactDescriptor, ArtifactKind, FetchOutcome, Msg, PanelState, Registry,
    };
    use pretty_assertions::assert_eq;

    fn state() -> PanelState {
        PanelState::new(
            Registry::new(vec![
                ArtifactDescriptor::new("a", "a.json", "/a.json", ArtifactKind::Structured, "First."),
                ArtifactDescriptor::new("b", "b.txt", "/b.txt", ArtifactKind::Plain, ""),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn renders_loaded_structured_artifact() {
        let (state, _) = update(state(), Msg::PanelOpened);
        let generation = state.generation();
        let (state, _) = update(
            state,
            Msg::FetchCompleted {
                generation,
                outcome: FetchOutcome::Response {
                    status: 200,
                    body: r#"{"b":1,"a":2}"#.to_string(),
                },
            },
        );

        let expected = [
            "== Artifacts ==",
            "> [1] a.json",
            "      First.",
            "  [2] b.txt",
            "",
            "Selected: /a.json  [loaded]",
            "{",
            "  \"b\": 1,",
            "  \"a\": 2",
            "}",
            "",
            HELP_LINE,
        ]
        .join("\n");
        assert_eq!(render(&state.view()), expected);
    }

    #[test]
    fn renders_idle_placeholder() {
        let text = render(&state().view());
        assert!(text.contains("Selected: /a.json  [idle]\nSelect an artifact.\n"));
    }

    #[test]
    fn renders_empty_registry() {
        let text = render(&PanelState::default().view());
        assert!(text.contains("(no artifacts configured)"));
        assert!(text.contains("Selected: -  [idle]"));
    }
}
