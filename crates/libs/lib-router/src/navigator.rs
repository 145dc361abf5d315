//! # Navigation Capability
//!
//! [`Navigator`] is the seam between the setup flow and whatever performs the
//! view transition. [`MemoryRouter`] is an in-memory implementation that
//! keeps a history stack; it backs the CLI and the tests.

use std::sync::Arc;

use lib_core::{Config, NavigationFailure, Result};
use parking_lot::RwLock;

use crate::path::{format_router_path, split_router_path, SEPARATOR};

/// Performs a client-side view transition to `to`.
///
/// `to` is either an absolute composed path (`/accountCreation/seedPhrase`)
/// or a relative identifier (`ledger`).
pub trait Navigator {
    fn navigate(&self, to: &str) -> std::result::Result<(), NavigationFailure>;
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, to: &str) -> std::result::Result<(), NavigationFailure> {
        (**self).navigate(to)
    }
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, to: &str) -> std::result::Result<(), NavigationFailure> {
        (**self).navigate(to)
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn navigate(&self, to: &str) -> std::result::Result<(), NavigationFailure> {
        (**self).navigate(to)
    }
}

/// Navigator backed by a closure. Build with [`navigator_fn`].
#[derive(Clone)]
pub struct FnNavigator<F> {
    f: F,
}

/// Wrap a closure as a [`Navigator`].
pub fn navigator_fn<F>(f: F) -> FnNavigator<F>
where
    F: Fn(&str) -> std::result::Result<(), NavigationFailure>,
{
    FnNavigator { f }
}

impl<F> Navigator for FnNavigator<F>
where
    F: Fn(&str) -> std::result::Result<(), NavigationFailure>,
{
    fn navigate(&self, to: &str) -> std::result::Result<(), NavigationFailure> {
        (self.f)(to)
    }
}

#[derive(Debug)]
struct History {
    entries: Vec<String>,
}

impl History {
    fn current(&self) -> &str {
        // entries always holds the base location
        self.entries.last().map(String::as_str).unwrap_or("/")
    }
}

/// In-memory router with a history stack.
///
/// Clones share the same history, so one clone can be handed to a trigger
/// while another observes the location.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: Arc<RwLock<History>>,
}

impl MemoryRouter {
    /// Create a router positioned at `base`, which must be `/` or a
    /// well-formed absolute path.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if base != "/" {
            split_router_path(&base)?;
        }
        Ok(Self {
            history: Arc::new(RwLock::new(History { entries: vec![base] })),
        })
    }

    /// Create a router positioned at the configured base.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.router_base.clone())
    }

    /// Current location.
    pub fn location(&self) -> String {
        self.history.read().current().to_string()
    }

    /// All visited locations, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.read().entries.clone()
    }

    /// Number of entries in the history, including the base.
    pub fn depth(&self) -> usize {
        self.history.read().entries.len()
    }

    /// Go back one entry. Returns the new location, or `None` at the base.
    pub fn back(&self) -> Option<String> {
        let mut history = self.history.write();
        if history.entries.len() <= 1 {
            return None;
        }
        history.entries.pop();
        Some(history.current().to_string())
    }

    /// Resolve `to` against `current`: absolute targets replace it, relative
    /// identifiers become children of it.
    fn resolve(current: &str, to: &str) -> std::result::Result<String, NavigationFailure> {
        if to.is_empty() {
            return Err(NavigationFailure::new(to, "navigation target is empty"));
        }

        let resolved = if to == "/" {
            Ok(to.to_string())
        } else if to.starts_with(SEPARATOR) {
            split_router_path(to).map(|_| to.to_string())
        } else {
            let parent: Vec<&str> = if current == "/" {
                Vec::new()
            } else {
                current.split(SEPARATOR).skip(1).collect()
            };
            format_router_path(parent.into_iter().chain(to.split(SEPARATOR)))
        };

        resolved.map_err(|err| NavigationFailure::new(to, err.to_string()))
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&self, to: &str) -> std::result::Result<(), NavigationFailure> {
        let mut history = self.history.write();
        let next = Self::resolve(history.current(), to)?;

        tracing::debug!(from = %history.current(), to = %next, "Memory router transition");
        history.entries.push(next);
        Ok(())
    }
}
