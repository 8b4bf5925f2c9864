//! Console UI - Main Entry Point

use console_ui::app::application::run_app;
use console_ui::domain::config::AppConfig;
use console_ui::helpers::{get_or_create_config_dir, get_or_create_data_dir};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "console-ui.log";

/// Set up stdout logging plus a daily log file in the data directory.
/// `RUST_LOG` overrides the configured level.
fn init_tracing(config: &AppConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    let (file_layer, guard) = if config.log.file {
        match get_or_create_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                (
                    Some(fmt::layer().with_ansi(false).with_writer(writer)),
                    Some(guard),
                )
            }
            Err(e) => {
                eprintln!("Log file disabled: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn main() {
    let config_dir = match get_or_create_config_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("Using default configuration: {e}");
            None
        }
    };
    let config = config_dir
        .as_deref()
        .map(AppConfig::load_or_default)
        .unwrap_or_default();

    let _guard = init_tracing(&config);

    tracing::info!(
        "Starting Console UI (locale {}, start page {})",
        config.locale.display_name(),
        config.start_page
    );

    run_app(config, config_dir);
}
