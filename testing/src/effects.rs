//! Running effects without a Store
//!
//! Reducer tests usually want to know which actions a reducer's effects
//! would feed back (the result of a mocked mutation, a settle timer) without
//! spinning up a [`Store`](https://docs.rs/dashboard-runtime). [`drain_effects`]
//! executes the effect tree in order on a current-thread runtime and collects
//! those actions.
//!
//! Delays are not slept: their action is collected immediately.

use dashboard_core::effect::Effect;

/// Execute `effects` in order and return every action they produce.
///
/// `Parallel` and `Sequential` groups are flattened in declaration order.
#[must_use]
pub fn drain_effects<A>(effects: impl IntoIterator<Item = Effect<A>>) -> Vec<A> {
    let mut actions = Vec::new();
    for effect in effects {
        drain_into(effect, &mut actions);
    }
    actions
}

fn drain_into<A>(effect: Effect<A>, actions: &mut Vec<A>) {
    match effect {
        Effect::None => {},
        Effect::Parallel(effects) | Effect::Sequential(effects) => {
            for effect in effects {
                drain_into(effect, actions);
            }
        },
        Effect::Delay { action, .. } => actions.push(*action),
        Effect::Future(fut) => {
            if let Some(action) = tokio_test::block_on(fut) {
                actions.push(action);
            }
        },
    }
}
