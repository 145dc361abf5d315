//! # Start Page
//!
//! Headless view-model of the setup start screen: a heading, one line of body
//! text and three buttons. Each button carries a [`SetupAction`]; pressing it
//! dispatches the action to a single [`NavigationTrigger`].
//!
//! | Button | Action | Navigates to |
//! |---|---|---|
//! | Create an account | `createAccount` | `/accountCreation/seedPhrase` |
//! | Import an account | `importAccount` | `/importAccount/seedPhrase` |
//! | Connect to Ledger | `connectLedger` | `ledger` |

use std::fmt;
use std::str::FromStr;

use lib_core::{AppError, Result};
use lib_router::{
    AccountCreationRoute, AccountImportRoute, NavTarget, NavigationTrigger, Navigator,
    RouteSequence, TopLevelRoute,
};
use serde::{Deserialize, Serialize};

use crate::debug::with_trace_id;


/// Intent carried by a start screen button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetupAction {
    CreateAccount,
    ImportAccount,
    ConnectLedger,
}

impl SetupAction {
    /// All actions in display order
    pub fn all() -> &'static [SetupAction] {
        &[
            SetupAction::CreateAccount,
            SetupAction::ImportAccount,
            SetupAction::ConnectLedger,
        ]
    }

    /// Wire name, as used in host messages and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupAction::CreateAccount => "createAccount",
            SetupAction::ImportAccount => "importAccount",
            SetupAction::ConnectLedger => "connectLedger",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            SetupAction::CreateAccount => "Create an account",
            SetupAction::ImportAccount => "Import an account",
            SetupAction::ConnectLedger => "Connect to Ledger",
        }
    }

    /// Where the action leads
    pub fn target(&self) -> NavTarget {
        match self {
            SetupAction::CreateAccount => RouteSequence::new(TopLevelRoute::AccountCreation)
                .then(AccountCreationRoute::SeedPhrase)
                .into(),
            SetupAction::ImportAccount => RouteSequence::new(TopLevelRoute::ImportAccount)
                .then(AccountImportRoute::SeedPhrase)
                .into(),
            SetupAction::ConnectLedger => NavTarget::Terminal(TopLevelRoute::Ledger),
        }
    }
}

impl fmt::Display for SetupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SetupAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        SetupAction::all()
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AppError::UnknownAction(s.to_string()))
    }
}

/// Message posted by the host when a button is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupMessage {
    pub action: SetupAction,
}

/// A rendered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: SetupAction,
}

/// The setup start screen.
pub struct StartPage<N> {
    trigger: NavigationTrigger<SetupAction, N>,
}

impl<N: Navigator> StartPage<N> {
    pub const TITLE: &'static str = "Create Your Account";
    pub const BODY: &'static str = "Create an account for your wallet, or connect to Ledger.";

    pub fn new(navigator: N) -> Self {
        let trigger = SetupAction::all()
            .iter()
            .fold(NavigationTrigger::new(navigator), |trigger, action| {
                trigger.bind(*action, action.target())
            });
        Self { trigger }
    }

    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    pub fn body(&self) -> &'static str {
        Self::BODY
    }

    /// Buttons in display order.
    pub fn buttons(&self) -> Vec<Button> {
        self.trigger
            .actions()
            .map(|action| Button {
                label: action.label(),
                action: *action,
            })
            .collect()
    }

    /// The navigator presses are sent to.
    pub fn navigator(&self) -> &N {
        self.trigger.navigator()
    }

    /// Handle a button press. Returns the string handed to the navigator.
    ///
    /// Failures are returned to the caller for display; nothing is retried.
    pub fn press(&self, action: SetupAction) -> Result<String> {
        with_trace_id(|| {
            tracing::debug!(action = %action, "Button pressed");
            self.trigger.activate(&action)
        })
    }

    /// Decode a host message (`{"action": "createAccount"}`) and press the
    /// button it names.
    pub fn dispatch_json(&self, message: &str) -> Result<String> {
        let message: SetupMessage = serde_json::from_str(message).map_err(|err| {
            tracing::warn!(error = %err, "Rejected host message");
            AppError::from(err)
        })?;
        self.press(message.action)
    }
}
