//! # Environment Variables
//!
//! Utilities for reading environment variables.
//!
//! Flags follow the `1` = on convention: any other value is off, and an unset
//! variable falls back to the caller's default.

use std::env;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get an environment variable, or `default` when it is unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Read an on/off flag.
pub fn get_env_flag(name: &'static str, default: bool) -> bool {
    match get_env(name) {
        Ok(val) => val.trim() == "1",
        Err(_) => default,
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "{name} must be set in environment"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns its variable names; the process environment is shared
    // between test threads.

    #[test]
    fn test_get_env_missing() {
        assert_eq!(
            get_env("LIB_UTILS_TEST_MISSING_VAR"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_MISSING_VAR"))
        );
        assert_eq!(get_env_or("LIB_UTILS_TEST_MISSING_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_flag() {
        env::set_var("LIB_UTILS_TEST_FLAG_ON", "1");
        env::set_var("LIB_UTILS_TEST_FLAG_OFF", "yes");

        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_ON", false));
        assert!(!get_env_flag("LIB_UTILS_TEST_FLAG_OFF", true));
        assert!(get_env_flag("LIB_UTILS_TEST_FLAG_UNSET", true));
    }

    #[test]
    fn test_error_display_names_variable() {
        assert_eq!(
            Error::MissingEnv("SETUP_ROUTER_BASE").to_string(),
            "SETUP_ROUTER_BASE must be set in environment"
        );
    }
}
