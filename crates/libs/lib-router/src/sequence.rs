//! Ordered route sequences and the navigation targets built from them.

use lib_core::{AppError, Result};

use crate::path::format_router_path;
use crate::route::{Route, TopLevelRoute};

/// A path from the navigation root to one screen, outermost level first.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteSequence {
    routes: Vec<Route>,
}

impl RouteSequence {
    /// Start a sequence at its outermost level.
    pub fn new(first: impl Into<Route>) -> Self {
        Self {
            routes: vec![first.into()],
        }
    }

    /// Append the next, more specific level.
    pub fn then(mut self, next: impl Into<Route>) -> Self {
        self.routes.push(next.into());
        self
    }

    /// Build a sequence from an arbitrary list of routes.
    pub fn from_routes<I>(routes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Route>,
    {
        let routes: Vec<Route> = routes.into_iter().collect();
        if routes.is_empty() {
            return Err(AppError::InvalidArgument(
                "route sequence must contain at least one segment".to_string(),
            ));
        }
        Ok(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Compose the router path for this sequence.
    pub fn compose(&self) -> Result<String> {
        format_router_path(&self.routes)
    }
}

/// Where an action leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// A typed sequence, composed into a path on activation.
    Path(RouteSequence),
    /// Raw segments from an untyped source, validated on activation.
    Segments(Vec<String>),
    /// A single top-level identifier handed to the navigator as is.
    Terminal(TopLevelRoute),
}

impl NavTarget {
    /// The string to hand to the navigator.
    pub fn resolve(&self) -> Result<String> {
        match self {
            NavTarget::Path(sequence) => sequence.compose(),
            NavTarget::Segments(segments) => format_router_path(segments),
            NavTarget::Terminal(route) => Ok(route.as_str().to_string()),
        }
    }
}

impl From<RouteSequence> for NavTarget {
    fn from(sequence: RouteSequence) -> Self {
        NavTarget::Path(sequence)
    }
}

impl From<TopLevelRoute> for NavTarget {
    fn from(route: TopLevelRoute) -> Self {
        NavTarget::Terminal(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{AccountCreationRoute, AccountImportRoute, LedgerConnectRoute, Segment};

    #[test]
    fn test_compose_typed_sequences() {
        let create = RouteSequence::new(TopLevelRoute::AccountCreation)
            .then(AccountCreationRoute::SeedPhrase);
        let import = RouteSequence::new(TopLevelRoute::ImportAccount)
            .then(AccountImportRoute::SeedPhrase);

        assert_eq!(create.len(), 2);
        assert_eq!(create.compose().unwrap(), "/accountCreation/seedPhrase");
        assert_eq!(import.compose().unwrap(), "/importAccount/seedPhrase");
    }

    #[test]
    fn test_compose_with_runtime_segment() {
        let sequence = RouteSequence::new(TopLevelRoute::Ledger)
            .then(LedgerConnectRoute::Import)
            .then(Segment::new("acct-7").unwrap());

        assert_eq!(sequence.compose().unwrap(), "/ledger/import/acct-7");
    }

    #[test]
    fn test_from_routes_rejects_empty() {
        assert!(matches!(
            RouteSequence::from_routes(Vec::new()),
            Err(AppError::InvalidArgument(_))
        ));

        let sequence =
            RouteSequence::from_routes([Route::from(TopLevelRoute::Setup)]).unwrap();
        assert_eq!(sequence.compose().unwrap(), "/setup");
    }

    #[test]
    fn test_terminal_target_is_literal() {
        let target = NavTarget::from(TopLevelRoute::Ledger);
        assert_eq!(target.resolve().unwrap(), "ledger");
    }

    #[test]
    fn test_raw_segments_validated_on_resolve() {
        let ok = NavTarget::Segments(vec!["importAccount".into(), "password".into()]);
        assert_eq!(ok.resolve().unwrap(), "/importAccount/password");

        let bad = NavTarget::Segments(vec!["a".into(), "".into(), "b".into()]);
        assert!(matches!(bad.resolve(), Err(AppError::InvalidArgument(_))));

        let empty = NavTarget::Segments(Vec::new());
        assert!(matches!(empty.resolve(), Err(AppError::InvalidArgument(_))));
    }
}
