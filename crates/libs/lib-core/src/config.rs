//! # Application Configuration
//!
//! Configuration loaded from environment variables (and a `.env` file when
//! present). Values are validated on startup to fail fast if misconfigured.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `SETUP_ROUTER_BASE` | `/` | location the in-memory router starts at |
//! | `RUST_LOG` | `setup=info,lib_router=info,warn` | log filter |
//! | `SETUP_LOG_JSON` | `0` | `1` switches log output to JSON lines |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().unwrap();
//! let base = &core_config().router_base;
//! ```

use std::sync::OnceLock;

use lib_utils::envs::{get_env_flag, get_env_or};

use crate::error::{AppError, Result};

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "setup=info,lib_router=info,warn";

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Initial location of the in-memory router. Must be an absolute path.
    pub router_base: String,

    /// Log level filter (e.g., "setup=debug,info")
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable output
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            router_base: "/".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            router_base: get_env_or("SETUP_ROUTER_BASE", "/"),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            log_json: get_env_flag("SETUP_LOG_JSON", false),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let base = self.router_base.as_str();
        if !base.starts_with('/') {
            return Err(AppError::Config(format!(
                "SETUP_ROUTER_BASE must start with '/', got '{}'",
                base
            )));
        }
        if base.len() > 1 && (base.ends_with('/') || base.contains("//")) {
            return Err(AppError::Config(format!(
                "SETUP_ROUTER_BASE must not contain empty segments, got '{}'",
                base
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(AppError::Config("RUST_LOG cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Defaults handed out before `init_config()` runs. Kept apart from `CONFIG`
/// so a read never blocks a later init.
static DEFAULT: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// Loads `.env` if present, reads the environment and validates it.
///
/// # Errors
///
/// Returns an error if validation fails or the config has already been
/// initialized.
pub fn init_config() -> Result<&'static Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;

    tracing::debug!("Configuration initialized");
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// Falls back to [`Config::default`] when [`init_config()`] has not run, so
/// library code and tests never need the environment. The fallback does not
/// count as initialization.
pub fn core_config() -> &'static Config {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(Config::default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.router_base, "/");
        assert!(!config.log_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_base() {
        let config = Config {
            router_base: "setup".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_segments_in_base() {
        for base in ["/setup/", "/setup//start"] {
            let config = Config {
                router_base: base.to_string(),
                ..Config::default()
            };
            assert!(config.validate().is_err(), "{} should be rejected", base);
        }

        let nested = Config {
            router_base: "/setup/start".to_string(),
            ..Config::default()
        };
        assert!(nested.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_log_level() {
        let config = Config {
            log_level: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    // Only test in this crate that touches the global.
    #[test]
    fn test_init_after_fallback_read() {
        std::env::remove_var("SETUP_ROUTER_BASE");
        std::env::remove_var("RUST_LOG");

        let fallback = core_config();
        assert_eq!(fallback, &Config::default());

        let initialized = init_config().expect("init after a fallback read");
        assert!(std::ptr::eq(core_config(), initialized));
        assert!(!std::ptr::eq(core_config(), fallback));

        assert!(matches!(init_config(), Err(AppError::Config(_))));
    }
}
