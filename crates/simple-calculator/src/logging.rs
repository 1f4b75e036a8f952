//! Tracing setup for the terminal binary

use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file
pub const LOG_ENV: &str = "SIMPLE_CALCULATOR_LOG";

/// Installs a file-backed subscriber when [`LOG_ENV`] is set.
///
/// Without it nothing is installed: the terminal UI owns stdout and
/// stderr, and log lines there would corrupt the screen. The filter
/// comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() -> std::io::Result<()> {
    let Ok(path) = std::env::var(LOG_ENV) else {
        return Ok(());
    };

    let file = std::fs::File::create(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}
