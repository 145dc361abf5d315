//! # Route Vocabulary
//!
//! The closed set of route identifiers used by the setup flow, one enum per
//! level of the hierarchy, plus [`Segment`] for identifiers that are only
//! known at runtime.
//!
//! Every variant maps to its canonical string only when a path is composed
//! (see [`crate::path::format_router_path`]). The canonical string is also
//! the serde representation, so routes can travel in host messages.

use std::fmt;

use lib_core::{AppError, Result};
use serde::{Deserialize, Serialize};

use crate::path::validate_segment;

/// Implements `as_str`, `all`, `AsRef<str>` and `Display` for a vocabulary
/// enum from a single variant-to-string table.
macro_rules! route_vocabulary {
    ($name:ident { $($variant:ident => $segment:literal),+ $(,)? }) => {
        impl $name {
            /// Canonical path segment for this route.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $segment,)+
                }
            }

            /// All routes at this level, in flow order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant,)+]
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Outermost sections of the setup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopLevelRoute {
    /// Start screen
    Setup,
    /// New account wizard
    AccountCreation,
    /// Import from an existing seed phrase
    ImportAccount,
    /// Hardware wallet connection
    Ledger,
}

route_vocabulary!(TopLevelRoute {
    Setup => "setup",
    AccountCreation => "accountCreation",
    ImportAccount => "importAccount",
    Ledger => "ledger",
});

/// Steps of the account creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountCreationRoute {
    SeedPhrase,
    SeedPhraseConfirmation,
    Password,
    Completion,
}

route_vocabulary!(AccountCreationRoute {
    SeedPhrase => "seedPhrase",
    SeedPhraseConfirmation => "seedPhraseConfirmation",
    Password => "password",
    Completion => "completion",
});

/// Steps of the account import wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountImportRoute {
    SeedPhrase,
    Password,
    Completion,
}

route_vocabulary!(AccountImportRoute {
    SeedPhrase => "seedPhrase",
    Password => "password",
    Completion => "completion",
});

/// Steps of the hardware wallet flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LedgerConnectRoute {
    Connect,
    Import,
    Completion,
}

route_vocabulary!(LedgerConnectRoute {
    Connect => "connect",
    Import => "import",
    Completion => "completion",
});

/// A validated runtime segment, such as a generated account id.
///
/// Never empty and never contains the path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Segment(String);

impl Segment {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_segment(&value)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Segment {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        Segment::new(value)
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        segment.0
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Any single level of a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    TopLevel(TopLevelRoute),
    AccountCreation(AccountCreationRoute),
    ImportAccount(AccountImportRoute),
    Ledger(LedgerConnectRoute),
    Param(Segment),
}

impl Route {
    pub fn as_str(&self) -> &str {
        match self {
            Route::TopLevel(route) => route.as_str(),
            Route::AccountCreation(route) => route.as_str(),
            Route::ImportAccount(route) => route.as_str(),
            Route::Ledger(route) => route.as_str(),
            Route::Param(segment) => segment.as_str(),
        }
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TopLevelRoute> for Route {
    fn from(route: TopLevelRoute) -> Self {
        Route::TopLevel(route)
    }
}

impl From<AccountCreationRoute> for Route {
    fn from(route: AccountCreationRoute) -> Self {
        Route::AccountCreation(route)
    }
}

impl From<AccountImportRoute> for Route {
    fn from(route: AccountImportRoute) -> Self {
        Route::ImportAccount(route)
    }
}

impl From<LedgerConnectRoute> for Route {
    fn from(route: LedgerConnectRoute) -> Self {
        Route::Ledger(route)
    }
}

impl From<Segment> for Route {
    fn from(segment: Segment) -> Self {
        Route::Param(segment)
    }
}
