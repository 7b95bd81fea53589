mod config;
mod console;
mod logging;

use std::path::PathBuf;
use std::sync::Arc;

use nature_core::NatureViewState;
use nature_engine::NatureCoordinator;
use nature_logging::{nature_info, nature_warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::console::ConsoleCommand;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    let loaded = config::load_config(&config_path)?;
    let from_file = loaded.is_some();
    let config = loaded.unwrap_or_default();

    logging::initialize(
        config.log_destination,
        nature_logging::parse_level(&config.log_level),
    );
    if from_file {
        nature_info!("loaded config from {:?}", config_path);
    } else {
        nature_info!("no config at {:?}, using defaults", config_path);
    }

    let coordinator = NatureCoordinator::new(Arc::new(config.catalog()), config.coordinator.clone());
    let renderers = spawn_renderers(&coordinator);

    println!("{}", console::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match console::parse_command(&line) {
            None => {}
            Some(ConsoleCommand::Event(event)) => coordinator.handle(event),
            Some(ConsoleCommand::Show) => {
                if let Some(state) = coordinator.snapshot().await {
                    println!("{}", console::render_state(&state));
                }
            }
            Some(ConsoleCommand::Help) => println!("{}", console::HELP),
            Some(ConsoleCommand::Quit) => break,
        }
    }

    coordinator.teardown();
    for renderer in renderers {
        let _ = renderer.await;
    }
    Ok(())
}

/// Subscribes to both output channels; the tasks end once the coordinator is torn down.
fn spawn_renderers(coordinator: &NatureCoordinator) -> Vec<JoinHandle<()>> {
    let mut states = coordinator.view_state();
    let state_renderer = tokio::spawn(async move {
        let mut last_rendered: Option<NatureViewState> = None;
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            if last_rendered.as_ref() == Some(&state) {
                continue;
            }
            println!("{}", console::render_state(&state));
            last_rendered = Some(state);
        }
    });

    let mut effects = coordinator.view_effects();
    let effect_renderer = tokio::spawn(async move {
        loop {
            match effects.recv().await {
                Ok(effect) => println!("{}", console::render_effect(&effect)),
                Err(RecvError::Lagged(skipped)) => {
                    nature_warn!("effect renderer fell behind, {} effects lost", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    vec![state_renderer, effect_renderer]
}
