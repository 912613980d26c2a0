use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a level name, falling back to INFO for anything unrecognised.
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

/// Install the global subscriber. Logs go to stderr; stdout carries probe output.
pub fn init_tracing_subscriber(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            parse_level(level),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
