//! # Logging and Tracing
//!
//! - **Structured logs**: `tracing` events to stderr, text or JSON
//! - **Trace IDs**: one per button press, recorded on an `activation` span
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `setup=debug,lib_router=debug`)
//! - `SETUP_LOG_JSON`: JSON log lines (1=on, 0=off)

pub mod logger;
pub mod trace_context;

pub use logger::init as init_logger;
pub use trace_context::with_trace_id;
