use std::io;

use tracing::Level;

use super::env::get_env_variable;

fn parse_verbosity(verbosity: &str) -> Option<Level> {
    match verbosity.trim().to_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" => Some(Level::WARN),
        "ERROR" => Some(Level::ERROR),
        _ => None,
    }
}

/// Logs go to stderr so they never interleave with the prompts on stdout.
pub fn init_logger() {
    let verbosity = get_env_variable("VERBOSITY").unwrap_or_else(|| "WARN".to_string());
    let level = parse_verbosity(&verbosity).unwrap_or_else(|| {
        eprintln!(
            "Invalid verbosity level '{}', defaulting to WARN",
            verbosity
        );
        Level::WARN
    });

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
