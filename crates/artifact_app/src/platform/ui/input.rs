use artifact_core::Registry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(String),
    Reload,
    Quit,
}

/// Parse one line typed by the operator.
///
/// Numbers are 1-based positions in the registry; anything else is taken as
/// an artifact id and left to the core to resolve.
pub fn parse_command(line: &str, registry: &Registry) -> Option<Command> {
    let line = line.trim();
    match line {
        "" => None,
        "q" | "quit" => Some(Command::Quit),
        "r" | "reload" => Some(Command::Reload),
        _ => {
            let id = line
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| registry.iter().nth(index))
                .map(|artifact| artifact.id.clone())
                .unwrap_or_else(|| line.to_string());
            Some(Command::Select(id))
        }
    }
}
