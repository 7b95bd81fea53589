//! Line-based presentation layer: parses commands and renders output.

use nature_core::{NatureViewEffect, NatureViewEvent, NatureViewState};

pub const HELP: &str = "commands: search <name> | fav | show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Event(NatureViewEvent),
    Show,
    Help,
    Quit,
}

/// Parses one input line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" if !rest.is_empty() => {
            ConsoleCommand::Event(NatureViewEvent::SearchPlant(rest.to_string()))
        }
        "fav" | "f" => ConsoleCommand::Event(NatureViewEvent::AddPlantToFavorites),
        "show" => ConsoleCommand::Show,
        "quit" | "q" | "exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Help,
    };
    Some(command)
}

pub fn render_state(state: &NatureViewState) -> String {
    let searched = match &state.searched_plant_reference {
        Some(_) => format!(
            "{} (max height {}, image {})",
            state.searched_plant_name, state.searched_plant_max_height, state.searched_image
        ),
        None => "-".to_string(),
    };
    let favorites = if state.favorites.is_empty() {
        "-".to_string()
    } else {
        state
            .favorites
            .iter()
            .map(|plant| plant.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("searched: {searched}\nfavorites: {favorites}")
}

pub fn render_effect(effect: &NatureViewEffect) -> String {
    match effect {
        NatureViewEffect::AddedToFavorites => "* added to favorites".to_string(),
        NatureViewEffect::ShowToast(message) => format!("* {message}"),
    }
}
