//! Logging initialization for nature_app.
//!
//! File output goes to `./nature.log` so it does not interleave with the
//! console rendering on stdout.

use std::fs::File;

use log::LevelFilter;
use serde::Deserialize;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

const LOG_FILE: &str = "./nature.log";

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    #[default]
    File,
    Terminal,
    Both,
}

impl LogDestination {
    fn to_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }

    fn to_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }
}

/// Installs the global logger; a second call keeps the first logger.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let loggers = build_loggers(destination, level);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(destination: LogDestination, level: LevelFilter) -> Vec<Box<dyn SharedLogger>> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::with_capacity(2);
    if destination.to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.to_file() {
        match File::create(LOG_FILE) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            // Logging is not up yet, so stderr is the only channel left.
            Err(err) => eprintln!("nature_app: cannot create {LOG_FILE}: {err}"),
        }
    }
    loggers
}

#[cfg(test)]
mod tests {
    use super::LogDestination;

    #[test]
    fn destinations_select_their_sinks() {
        assert!(LogDestination::File.to_file());
        assert!(!LogDestination::File.to_terminal());
        assert!(LogDestination::Terminal.to_terminal());
        assert!(!LogDestination::Terminal.to_file());
        assert!(LogDestination::Both.to_file() && LogDestination::Both.to_terminal());
    }
}
