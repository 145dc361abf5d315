//! # Core Library
//!
//! Error type and configuration shared by the router library and the setup
//! screen.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{core_config, init_config, Config};
pub use error::{AppError, NavigationFailure, Result};
