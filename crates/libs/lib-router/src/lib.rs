//! # Router Library
//!
//! Typed route vocabulary for the wallet setup flow, path composition, and
//! the trigger that turns UI actions into navigation requests.
//!
//! ```rust
//! use lib_router::{
//!     AccountCreationRoute, MemoryRouter, NavigationTrigger, RouteSequence, TopLevelRoute,
//! };
//!
//! let router = MemoryRouter::new("/").unwrap();
//! let trigger = NavigationTrigger::new(router.clone())
//!     .bind(
//!         "create",
//!         RouteSequence::new(TopLevelRoute::AccountCreation)
//!             .then(AccountCreationRoute::SeedPhrase),
//!     )
//!     .bind("ledger", TopLevelRoute::Ledger);
//!
//! trigger.activate(&"create").unwrap();
//! assert_eq!(router.location(), "/accountCreation/seedPhrase");
//! ```

pub mod navigator;
pub mod path;
pub mod route;
pub mod sequence;
pub mod trigger;

// Re-export commonly used types
pub use navigator::{navigator_fn, FnNavigator, MemoryRouter, Navigator};
pub use path::{format_router_path, split_router_path, SEPARATOR};
pub use route::{
    AccountCreationRoute, AccountImportRoute, LedgerConnectRoute, Route, Segment, TopLevelRoute,
};
pub use sequence::{NavTarget, RouteSequence};
pub use trigger::NavigationTrigger;
