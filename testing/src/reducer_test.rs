//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use crate::effects::drain_effects;
use dashboard_core::{effect::Effect, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for effect assertion functions
type EffectAssertion<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// Type alias for feedback assertion functions
type FeedbackAssertion<A> = Box<dyn FnOnce(&[A])>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// `given_actions` drives the machine into a situation first (their effects
/// are discarded); `when_action` is the action under test.
///
/// # Example
///
/// ```ignore
/// use dashboard_testing::ReducerTest;
///
/// ReducerTest::new(AddressEditReducer::new())
///     .with_env(test_environment())
///     .given_state(AddressEditState::default())
///     .given_actions(vec![AddressEditAction::SetBillingSameAsShipping(true)])
///     .when_action(AddressEditAction::Submit)
///     .then_state(|state| assert!(state.is_pending()))
///     .then_feedback(|actions| assert_eq!(actions.len(), 1))
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    given_actions: Vec<A>,
    action: Option<A>,
    state_assertions: Vec<StateAssertion<S>>,
    effect_assertions: Vec<EffectAssertion<A>>,
    feedback_assertions: Vec<FeedbackAssertion<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            given_actions: Vec::new(),
            action: None,
            state_assertions: Vec::new(),
            effect_assertions: Vec::new(),
            feedback_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Actions applied before the action under test (Given)
    #[must_use]
    pub fn given_actions(mut self, actions: Vec<A>) -> Self {
        self.given_actions = actions;
        self
    }

    /// Set the action to test (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the resulting effects (Then)
    #[must_use]
    pub fn then_effects<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[Effect<A>]) + 'static,
    {
        self.effect_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the actions the effects feed back (Then)
    ///
    /// The effects are executed with [`drain_effects`] after all effect
    /// assertions have run.
    #[must_use]
    pub fn then_feedback<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&[A]) + 'static,
    {
        self.feedback_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let action = self.action.expect("Action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        for given in self.given_actions {
            let _ = self.reducer.reduce(&mut state, given, &env);
        }

        let effects = self.reducer.reduce(&mut state, action, &env);

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.effect_assertions {
            assertion(&effects);
        }

        if !self.feedback_assertions.is_empty() {
            let feedback = drain_effects(effects);
            for assertion in self.feedback_assertions {
                assertion(&feedback);
            }
        }
    }
}

/// Helper assertions for effects
pub mod assertions {
    use dashboard_core::effect::Effect;

    /// Assert that there are no effects
    ///
    /// # Panics
    ///
    /// Panics if effects is not empty.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert the number of effects
    ///
    /// # Panics
    ///
    /// Panics if the number of effects doesn't match expected.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        assert_eq!(
            effects.len(),
            expected,
            "Expected {} effects, but found {}",
            expected,
            effects.len()
        );
    }

    /// Assert that effects contain at least one Future effect
    ///
    /// # Panics
    ///
    /// Panics if no Future effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }

    /// Assert that effects contain at least one Delay effect
    ///
    /// # Panics
    ///
    /// Panics if no Delay effect is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_delay_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Delay { .. })),
            "Expected at least one Delay effect, but none found"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::effect::Effect;
    use dashboard_core::reducer::Reducer;
    use dashboard_core::{SmallVec, smallvec};

    #[derive(Clone, Debug)]
    struct CheckboxState {
        checked: bool,
        toggles: u32,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum CheckboxAction {
        Toggle,
        Persist,
        Persisted(bool),
    }

    struct CheckboxReducer;

    impl Reducer for CheckboxReducer {
        type State = CheckboxState;
        type Action = CheckboxAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                CheckboxAction::Toggle => {
                    state.checked = !state.checked;
                    state.toggles += 1;
                    smallvec![Effect::None]
                },
                CheckboxAction::Persist => {
                    let checked = state.checked;
                    smallvec![Effect::Future(Box::pin(async move {
                        Some(CheckboxAction::Persisted(checked))
                    }))]
                },
                CheckboxAction::Persisted(_) => SmallVec::new(),
            }
        }
    }

    fn unchecked() -> CheckboxState {
        CheckboxState {
            checked: false,
            toggles: 0,
        }
    }

    #[test]
    fn test_reducer_test_toggle() {
        ReducerTest::new(CheckboxReducer)
            .with_env(())
            .given_state(unchecked())
            .when_action(CheckboxAction::Toggle)
            .then_state(|state| {
                assert!(state.checked);
            })
            .then_effects(|effects| {
                assertions::assert_no_effects(effects);
            })
            .run();
    }

    #[test]
    fn test_given_actions_apply_first() {
        ReducerTest::new(CheckboxReducer)
            .with_env(())
            .given_state(unchecked())
            .given_actions(vec![CheckboxAction::Toggle, CheckboxAction::Toggle])
            .when_action(CheckboxAction::Toggle)
            .then_state(|state| {
                assert!(state.checked);
                assert_eq!(state.toggles, 3);
            })
            .run();
    }

    #[test]
    fn test_feedback_collects_future_output() {
        ReducerTest::new(CheckboxReducer)
            .with_env(())
            .given_state(unchecked())
            .given_actions(vec![CheckboxAction::Toggle])
            .when_action(CheckboxAction::Persist)
            .then_effects(assertions::assert_has_future_effect)
            .then_feedback(|actions| {
                assert_eq!(actions, [CheckboxAction::Persisted(true)]);
            })
            .run();
    }

    #[test]
    fn test_assertions_no_effects() {
        assertions::assert_no_effects::<CheckboxAction>(&[Effect::None]);
        assertions::assert_no_effects::<CheckboxAction>(&[]);
    }

    #[test]
    fn test_assertions_effects_count() {
        assertions::assert_effects_count(&[Effect::<CheckboxAction>::None], 1);
        assertions::assert_effects_count::<CheckboxAction>(&[], 0);
    }
}
