//! # Wallet Setup - Library Root
//!
//! Start screen of the wallet's account-setup flow, modelled headlessly.
//! This library crate contains all modules used by the binary crate
//! (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              setup (this crate)                        │
//! │  page   - StartPage, SetupAction, host messages        │
//! │  debug  - logging init, trace IDs                      │
//! └────────────────────────────────────────────────────────┘
//!          │ SetupAction                 │ AppError, Config
//!          ▼                             ▼
//! ┌─────────────────────────┐   ┌─────────────────────────┐
//! │  lib-router             │──▶│  lib-core               │
//! │  routes, paths, trigger │   │  errors, configuration  │
//! └─────────────────────────┘   └─────────────────────────┘
//! ```
//!
//! A button press flows as a message: `SetupAction` → bound `NavTarget` →
//! composed path → one call to the injected `Navigator`.

pub mod debug;
pub mod page;

pub use page::{Button, SetupAction, SetupMessage, StartPage};
