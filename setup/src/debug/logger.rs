//! Logging initialization

use lib_core::config::DEFAULT_LOG_LEVEL;
use lib_core::{AppError, Config, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up a `tracing` subscriber writing to stderr, so stdout stays free for
/// the CLI's own output:
/// - Filter from `RUST_LOG`, then `config.log_level`, then the default
/// - Human-readable lines, or JSON lines when `config.log_json` is set
/// - Panic hook that logs panics with location and trace ID
///
/// # Errors
///
/// Returns [`AppError::Config`] if a global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let (json_layer, text_layer) = if config.log_json {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_writer(std::io::stderr);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Logger already initialized: {}", e)))?;

    tracing::info!(
        log_level = %config.log_level,
        json = config.log_json,
        router_base = %config.router_base,
        "Logging initialized"
    );

    setup_panic_hook();
    Ok(())
}

/// Set up panic hook to log panics with full context
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        match super::trace_context::get_trace_id() {
            Some(trace_id) => tracing::error!(
                trace_id = %trace_id,
                location = %location,
                message = %message,
                "Application panic"
            ),
            None => tracing::error!(location = %location, message = %message, "Application panic"),
        }

        default_panic(panic_info);
    }));
}
