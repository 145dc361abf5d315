//! # Navigation Trigger
//!
//! Binds named actions to navigation targets and drives a [`Navigator`].
//!
//! An activation either composes its target and navigates exactly once, or
//! fails before the navigator is touched. Nothing is retained between
//! activations.

use std::fmt;

use lib_core::{AppError, Result};

use crate::navigator::Navigator;
use crate::sequence::NavTarget;

#[derive(Debug, Clone)]
struct Binding<A> {
    action: A,
    target: NavTarget,
}

/// Action-to-navigation dispatcher.
pub struct NavigationTrigger<A, N> {
    bindings: Vec<Binding<A>>,
    navigator: N,
}

impl<A, N> NavigationTrigger<A, N>
where
    A: PartialEq + fmt::Debug,
    N: Navigator,
{
    pub fn new(navigator: N) -> Self {
        Self {
            bindings: Vec::new(),
            navigator,
        }
    }

    /// Bind `action` to `target`. Rebinding an action replaces its target and
    /// keeps its position.
    pub fn bind(mut self, action: A, target: impl Into<NavTarget>) -> Self {
        let target = target.into();
        match self.bindings.iter_mut().find(|b| b.action == action) {
            Some(binding) => binding.target = target,
            None => self.bindings.push(Binding { action, target }),
        }
        self
    }

    /// Bound actions, in binding order.
    pub fn actions(&self) -> impl Iterator<Item = &A> + '_ {
        self.bindings.iter().map(|b| &b.action)
    }

    pub fn target(&self, action: &A) -> Option<&NavTarget> {
        self.bindings
            .iter()
            .find(|b| &b.action == action)
            .map(|b| &b.target)
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Activate `action`.
    ///
    /// Returns the string handed to the navigator. Unknown actions and
    /// composition failures return before any navigation; a navigator
    /// failure is returned as [`AppError::Navigation`] unchanged.
    pub fn activate(&self, action: &A) -> Result<String> {
        let target = self.target(action).ok_or_else(|| {
            tracing::warn!(action = ?action, "Activation of unbound action");
            AppError::UnknownAction(format!("{:?}", action))
        })?;

        let to = target.resolve().map_err(|err| {
            tracing::warn!(action = ?action, error = %err, "Navigation target could not be composed");
            err
        })?;

        self.navigator.navigate(&to).map_err(|failure| {
            tracing::warn!(action = ?action, to = %to, reason = %failure.reason, "Navigator reported failure");
            AppError::Navigation(failure)
        })?;

        tracing::info!(action = ?action, to = %to, "Navigated");
        Ok(to)
    }
}

impl<A: fmt::Debug, N> fmt::Debug for NavigationTrigger<A, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationTrigger")
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::{navigator_fn, MemoryRouter};
    use crate::route::{AccountCreationRoute, AccountImportRoute, TopLevelRoute};
    use crate::sequence::RouteSequence;
    use lib_core::NavigationFailure;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Create,
        Import,
        Ledger,
        Broken,
    }

    /// Records every navigation request.
    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, to: &str) -> std::result::Result<(), NavigationFailure> {
            self.calls.borrow_mut().push(to.to_string());
            Ok(())
        }
    }

    fn trigger<N: Navigator>(navigator: N) -> NavigationTrigger<Action, N> {
        NavigationTrigger::new(navigator)
            .bind(
                Action::Create,
                RouteSequence::new(TopLevelRoute::AccountCreation)
                    .then(AccountCreationRoute::SeedPhrase),
            )
            .bind(
                Action::Import,
                RouteSequence::new(TopLevelRoute::ImportAccount)
                    .then(AccountImportRoute::SeedPhrase),
            )
            .bind(Action::Ledger, TopLevelRoute::Ledger)
            .bind(
                Action::Broken,
                NavTarget::Segments(vec!["a".into(), "".into(), "b".into()]),
            )
    }

    #[test]
    fn test_composed_actions_navigate_once() {
        let navigator = RecordingNavigator::default();
        let trigger = trigger(&navigator);

        assert_eq!(trigger.activate(&Action::Create).unwrap(), "/accountCreation/seedPhrase");
        assert_eq!(trigger.activate(&Action::Import).unwrap(), "/importAccount/seedPhrase");
        assert_eq!(
            *navigator.calls.borrow(),
            vec!["/accountCreation/seedPhrase", "/importAccount/seedPhrase"]
        );
    }

    #[test]
    fn test_terminal_action_passes_identifier_unchanged() {
        let navigator = RecordingNavigator::default();
        let trigger = trigger(&navigator);

        trigger.activate(&Action::Ledger).unwrap();
        assert_eq!(*navigator.calls.borrow(), vec!["ledger"]);

        trigger.activate(&Action::Ledger).unwrap();
        assert_eq!(navigator.calls.borrow().len(), 2);
    }

    #[test]
    fn test_composition_failure_never_navigates() {
        let navigator = RecordingNavigator::default();
        let trigger = trigger(&navigator);

        let err = trigger.activate(&Action::Broken).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(navigator.calls.borrow().is_empty());
    }

    #[test]
    fn test_unbound_action_never_navigates() {
        let navigator = RecordingNavigator::default();
        let trigger = NavigationTrigger::new(&navigator).bind(Action::Ledger, TopLevelRoute::Ledger);

        let err = trigger.activate(&Action::Create).unwrap_err();
        assert_eq!(err, AppError::UnknownAction("Create".to_string()));
        assert!(navigator.calls.borrow().is_empty());
    }

    #[test]
    fn test_navigator_failure_surfaced_unchanged() {
        let attempts = RefCell::new(0);
        let navigator = navigator_fn(|to: &str| {
            *attempts.borrow_mut() += 1;
            Err(NavigationFailure::new(to, "router detached"))
        });
        let trigger = trigger(navigator);

        let err = trigger.activate(&Action::Ledger).unwrap_err();
        assert_eq!(
            err,
            AppError::Navigation(NavigationFailure::new("ledger", "router detached"))
        );
        assert_eq!(*attempts.borrow(), 1);
    }

    #[test]
    fn test_trigger_returns_to_idle_after_error() {
        let navigator = RecordingNavigator::default();
        let trigger = trigger(&navigator);

        assert!(trigger.activate(&Action::Broken).is_err());
        assert!(trigger.activate(&Action::Create).is_ok());
        assert_eq!(navigator.calls.borrow().len(), 1);
    }

    #[test]
    fn test_rebind_keeps_order() {
        let trigger = trigger(RecordingNavigator::default())
            .bind(Action::Create, TopLevelRoute::Setup);

        let actions: Vec<Action> = trigger.actions().copied().collect();
        assert_eq!(
            actions,
            vec![Action::Create, Action::Import, Action::Ledger, Action::Broken]
        );
        assert_eq!(
            trigger.target(&Action::Create),
            Some(&NavTarget::Terminal(TopLevelRoute::Setup))
        );
    }

    #[test]
    fn test_drives_memory_router() {
        let router = MemoryRouter::new("/").unwrap();
        let trigger = trigger(router.clone());

        trigger.activate(&Action::Ledger).unwrap();
        assert_eq!(router.location(), "/ledger");

        trigger.activate(&Action::Create).unwrap();
        assert_eq!(router.location(), "/accountCreation/seedPhrase");
    }
}
