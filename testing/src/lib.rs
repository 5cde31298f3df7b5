//! # Dashboard Testing
//!
//! Testing utilities and helpers for dashboard state machines.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Effect assertion helpers
//! - [`effects`]: Draining effects into the actions they feed back
//! - [`init_test_tracing`]: Opt-in log output for a failing test
//!
//! ## Example
//!
//! ```ignore
//! use dashboard_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(FilterSelectionReducer::new())
//!     .with_env(test_environment())
//!     .given_state(FilterSelectionState::new(menu))
//!     .when_action(FilterSelectionAction::TogglePopover)
//!     .then_state(|state| assert!(state.popover_open))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod effects;
mod reducer_test;

pub use effects::drain_effects;
pub use reducer_test::{ReducerTest, assertions};

/// Install a test-friendly tracing subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the subscriber.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
