//! Filter popover reducer.
//!
//! Owns the popover's open flag, the draft and the error list. The page
//! supplies the committed menu and receives the full draft through a
//! [`FilterSubmitHandler`] once it validates.

use crate::draft::{self, Validation};
use crate::error::FilterError;
use crate::types::{FilterElement, FilterMenu, FilterUpdate};
use dashboard_core::{SmallVec, callback_effect, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;

/// Receives the submitted draft.
///
/// The page typically persists it (as query parameters) and re-supplies an
/// updated menu with [`FilterSelectionAction::MenuReplaced`].
pub trait FilterSubmitHandler: Send + Sync {
    /// Called with every element of a draft that passed validation.
    fn filters_submitted(&self, filters: Vec<FilterElement>);
}

/// Filter popover environment
#[derive(Clone)]
pub struct FilterEnvironment {
    /// Where validated drafts go
    pub submit_handler: Arc<dyn FilterSubmitHandler>,
}

impl FilterEnvironment {
    /// Creates a new environment
    #[must_use]
    pub fn new(submit_handler: Arc<dyn FilterSubmitHandler>) -> Self {
        Self { submit_handler }
    }
}

/// Filter popover state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSelectionState {
    /// Committed menu supplied by the page
    pub menu: FilterMenu,
    /// Working copy edited in the popover
    pub draft: Vec<FilterElement>,
    /// Whether the popover is shown
    pub popover_open: bool,
    /// Names of filters that failed the last submit
    pub errors: Vec<String>,
    /// Last rejected update, kept for diagnostics
    pub last_error: Option<FilterError>,
}

impl FilterSelectionState {
    /// Closed popover with a draft initialized from `menu`.
    #[must_use]
    pub fn new(menu: FilterMenu) -> Self {
        Self {
            draft: draft::initialize(&menu),
            menu,
            popover_open: false,
            errors: Vec::new(),
            last_error: None,
        }
    }

    /// Number of menu filters active in the draft.
    #[must_use]
    pub fn active_count(&self) -> usize {
        draft::active_count(&self.menu, &self.draft)
    }

    /// The filter button is highlighted while open or while any filter applies.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.popover_open || self.menu.has_active()
    }

    /// The badge count, shown only when the committed menu has an active filter.
    #[must_use]
    pub fn badge(&self) -> Option<usize> {
        self.menu.has_active().then(|| self.active_count())
    }

    /// Validation of the current draft.
    #[must_use]
    pub fn validation(&self) -> Validation {
        draft::validate(&self.draft)
    }
}

/// Filter popover actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterSelectionAction {
    /// The filter button was clicked
    TogglePopover,
    /// A click landed outside the popover
    ClickAway {
        /// The click target was an option of an open select list
        on_option: bool,
    },
    /// A filter control changed
    PropertyChanged {
        /// Filter name
        name: String,
        /// The change
        update: FilterUpdate,
    },
    /// Discard all edits
    Clear,
    /// Confirm the draft
    Submit,
    /// The page committed a new menu
    MenuReplaced {
        /// The new committed menu
        menu: FilterMenu,
    },
}

/// Filter popover reducer
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterSelectionReducer;

impl FilterSelectionReducer {
    /// Creates a new filter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FilterSelectionReducer {
    type State = FilterSelectionState;
    type Action = FilterSelectionAction;
    type Environment = FilterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FilterSelectionAction::TogglePopover => {
                state.popover_open = !state.popover_open;
                tracing::debug!(open = state.popover_open, "filter popover toggled");
            },
            FilterSelectionAction::ClickAway { on_option } => {
                // Option lists render outside the popover; picking one is not a dismissal.
                if !on_option {
                    state.popover_open = false;
                }
            },
            FilterSelectionAction::PropertyChanged { name, update } => {
                match draft::dispatch(&state.draft, &name, update) {
                    Ok(next) => {
                        state.draft = next;
                        state.last_error = None;
                    },
                    Err(error) => {
                        tracing::error!(%error, "filter update rejected");
                        state.last_error = Some(error);
                    },
                }
            },
            FilterSelectionAction::Clear => {
                state.draft = draft::reset(&state.menu);
                tracing::debug!("filter draft reset");
            },
            FilterSelectionAction::Submit => {
                let validation = state.validation();
                if !validation.is_valid() {
                    tracing::debug!(invalid = ?validation.invalid_names, "filter submit blocked");
                    state.errors = validation.invalid_names;
                    return SmallVec::new();
                }

                state.errors.clear();
                state.popover_open = false;
                let filters = state.draft.clone();
                let handler = Arc::clone(&env.submit_handler);
                tracing::debug!(count = filters.len(), "filters submitted");
                return smallvec![callback_effect!(move || handler.filters_submitted(filters))];
            },
            FilterSelectionAction::MenuReplaced { menu } => {
                state.draft = draft::initialize(&menu);
                state.menu = menu;
                state.errors.clear();
                state.last_error = None;
            },
        }

        SmallVec::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::{FilterRange, FilterValue};
    use dashboard_testing::{ReducerTest, assertions};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        submitted: Mutex<Vec<Vec<FilterElement>>>,
    }

    impl FilterSubmitHandler for RecordingHandler {
        fn filters_submitted(&self, filters: Vec<FilterElement>) {
            self.submitted.lock().unwrap().push(filters);
        }
    }

    fn env() -> (FilterEnvironment, Arc<RecordingHandler>) {
        let handler = Arc::new(RecordingHandler::default());
        (FilterEnvironment::new(handler.clone()), handler)
    }

    fn menu() -> FilterMenu {
        FilterMenu::new(vec![
            FilterElement::new("price", FilterValue::PriceRange(FilterRange::unbounded())),
            FilterElement::new("paid", FilterValue::Boolean(None)),
        ])
        .unwrap()
    }

    fn open_state() -> FilterSelectionState {
        FilterSelectionState {
            popover_open: true,
            ..FilterSelectionState::new(menu())
        }
    }

    fn activate_price(min: Option<u64>, max: Option<u64>) -> FilterSelectionAction {
        FilterSelectionAction::PropertyChanged {
            name: "price".into(),
            update: FilterUpdate::activate_with(FilterValue::PriceRange(FilterRange::new(min, max))),
        }
    }

    #[test]
    fn toggle_opens_and_highlights() {
        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env().0)
            .given_state(FilterSelectionState::new(menu()))
            .when_action(FilterSelectionAction::TogglePopover)
            .then_state(|state| {
                assert!(state.popover_open);
                assert!(state.is_highlighted());
                assert_eq!(state.badge(), None);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn click_on_option_keeps_popover_open() {
        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env().0)
            .given_state(open_state())
            .when_action(FilterSelectionAction::ClickAway { on_option: true })
            .then_state(|state| assert!(state.popover_open))
            .run();
    }

    #[test]
    fn click_elsewhere_closes_but_keeps_draft() {
        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env().0)
            .given_state(open_state())
            .given_actions(vec![activate_price(Some(100), None)])
            .when_action(FilterSelectionAction::ClickAway { on_option: false })
            .then_state(|state| {
                assert!(!state.popover_open);
                assert!(state.draft[0].active);
            })
            .run();
    }

    #[test]
    fn submit_with_unbounded_range_is_blocked() {
        let (env, handler) = env();

        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env)
            .given_state(open_state())
            .given_actions(vec![activate_price(None, None)])
            .when_action(FilterSelectionAction::Submit)
            .then_state(|state| {
                assert!(state.popover_open);
                assert_eq!(state.errors, vec!["price".to_string()]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();

        assert!(handler.submitted.lock().unwrap().is_empty());
    }

    #[test]
    fn valid_submit_hands_over_full_draft_and_closes() {
        let (env, handler) = env();

        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env)
            .given_state(FilterSelectionState {
                errors: vec!["price".into()],
                ..open_state()
            })
            .given_actions(vec![activate_price(Some(100), Some(2_500))])
            .when_action(FilterSelectionAction::Submit)
            .then_state(|state| {
                assert!(!state.popover_open);
                assert!(state.errors.is_empty());
            })
            .then_effects(assertions::assert_has_future_effect)
            .then_feedback(|actions| assert!(actions.is_empty()))
            .run();

        let submitted = handler.submitted.lock().unwrap();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].len(), 2);
        assert!(submitted[0][0].active);
        assert!(!submitted[0][1].active);
    }

    #[test]
    fn unknown_filter_is_recorded_and_ignored() {
        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env().0)
            .given_state(open_state())
            .when_action(FilterSelectionAction::PropertyChanged {
                name: "channel".into(),
                update: FilterUpdate::active(true),
            })
            .then_state(|state| {
                assert_eq!(state.draft, draft::initialize(&menu()));
                assert_eq!(
                    state.last_error,
                    Some(FilterError::NotFound {
                        name: "channel".into()
                    })
                );
            })
            .run();
    }

    #[test]
    fn clear_restores_menu() {
        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env().0)
            .given_state(open_state())
            .given_actions(vec![activate_price(Some(1), None)])
            .when_action(FilterSelectionAction::Clear)
            .then_state(|state| assert_eq!(state.draft, draft::initialize(&menu())))
            .run();
    }

    #[test]
    fn replaced_menu_reinitializes_draft_and_badge() {
        let committed = FilterMenu::new(vec![
            FilterElement::new("price", FilterValue::PriceRange(FilterRange::new(Some(5), None)))
                .activated(),
            FilterElement::new("paid", FilterValue::Boolean(None)),
        ])
        .unwrap();

        ReducerTest::new(FilterSelectionReducer::new())
            .with_env(env().0)
            .given_state(FilterSelectionState {
                errors: vec!["paid".into()],
                ..open_state()
            })
            .when_action(FilterSelectionAction::MenuReplaced {
                menu: committed.clone(),
            })
            .then_state(move |state| {
                assert_eq!(state.draft, committed.elements());
                assert!(state.errors.is_empty());
                assert_eq!(state.badge(), Some(1));
            })
            .run();
    }
}
