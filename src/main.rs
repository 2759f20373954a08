//! Cart GUI Client - Main Entry Point

use cart_gui::app::application::run_app;
use cart_gui::constants::LOG_FILE_PREFIX;
use cart_gui::utils::config_store::app_data_dir;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Log to stderr, plus a daily file when a data directory is available
    let file_layer = match app_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            Some((fmt::layer().with_ansi(false).with_writer(writer), guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            None
        }
    };
    let (file_layer, _guard) = file_layer.unzip();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(fmt::layer())
        .with(file_layer)
        .init();

    tracing::info!("Starting Cart GUI Client...");

    run_app();
}
