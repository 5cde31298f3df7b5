//! Reducer composition utilities
//!
//! A page owns the machines of the dialogs it can open. While a dialog is
//! open its state lives inside the page state; when the dialog closes the
//! child state is dropped. [`scope_reducer`] embeds a child reducer into such
//! a parent:
//!
//! - the child runs on the child state, if the child state currently exists
//! - only parent actions that wrap a child action reach the child
//! - child effects are re-targeted at the parent action type
//!
//! # Example
//!
//! ```
//! use dashboard_core::composition::scope_reducer;
//! use dashboard_core::effect::Effect;
//! use dashboard_core::reducer::Reducer;
//! use dashboard_core::SmallVec;
//!
//! #[derive(Default)]
//! struct DialogState {
//!     edits: u32,
//! }
//!
//! enum DialogAction {
//!     Edit,
//! }
//!
//! struct DialogReducer;
//!
//! impl Reducer for DialogReducer {
//!     type State = DialogState;
//!     type Action = DialogAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut DialogState, _action: DialogAction, _env: &()) -> SmallVec<[Effect<DialogAction>; 4]> {
//!         state.edits += 1;
//!         SmallVec::new()
//!     }
//! }
//!
//! #[derive(Default)]
//! struct PageState {
//!     dialog: Option<DialogState>,
//! }
//!
//! enum PageAction {
//!     Dialog(DialogAction),
//!     Close,
//! }
//!
//! let scoped = scope_reducer(
//!     DialogReducer,
//!     |page: &mut PageState| page.dialog.as_mut(),
//!     |action: PageAction| match action {
//!         PageAction::Dialog(inner) => Some(inner),
//!         PageAction::Close => None,
//!     },
//!     PageAction::Dialog,
//! );
//!
//! let mut page = PageState { dialog: Some(DialogState::default()) };
//! let _ = scoped.reduce(&mut page, PageAction::Dialog(DialogAction::Edit), &());
//! assert_eq!(page.dialog.as_ref().map(|d| d.edits), Some(1));
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Scopes a child reducer to an optional slice of a parent state.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type
/// - `A`: The parent action type
/// - `SubA`: The child action type
/// - `E`: The environment type shared by parent and child
#[must_use]
pub fn scope_reducer<S, SubS, A, SubA, E, R>(
    reducer: R,
    state: fn(&mut S) -> Option<&mut SubS>,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
) -> ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    ScopedReducer {
        reducer,
        state,
        extract,
        embed,
        _phantom: std::marker::PhantomData,
    }
}

/// A child reducer embedded in a parent.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    reducer: R,
    state: fn(&mut S) -> Option<&mut SubS>,
    extract: fn(A) -> Option<SubA>,
    embed: fn(SubA) -> A,
    _phantom: std::marker::PhantomData<fn(S, A, E)>,
}

impl<S, SubS, A, SubA, E, R> ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
{
    /// Returns `true` when the child state currently exists in `state`.
    pub fn is_active(&self, state: &mut S) -> bool {
        (self.state)(state).is_some()
    }
}

impl<S, SubS, A, SubA, E, R> Reducer for ScopedReducer<S, SubS, A, SubA, E, R>
where
    R: Reducer<State = SubS, Action = SubA, Environment = E>,
    A: Send + 'static,
    SubA: Send + 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.extract)(action) else {
            return SmallVec::new();
        };
        let Some(child_state) = (self.state)(state) else {
            return SmallVec::new();
        };

        let embed = self.embed;
        self.reducer
            .reduce(child_state, child_action, env)
            .into_iter()
            .map(|effect| effect.map(embed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SmallVec, smallvec};
    use std::time::Duration;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct NoteState {
        text: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum NoteAction {
        Append(String),
        Saved,
    }

    struct NoteReducer;

    impl Reducer for NoteReducer {
        type State = NoteState;
        type Action = NoteAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                NoteAction::Append(text) => {
                    state.text.push_str(&text);
                    smallvec![Effect::Delay {
                        duration: Duration::from_millis(1),
                        action: Box::new(NoteAction::Saved),
                    }]
                },
                NoteAction::Saved => SmallVec::new(),
            }
        }
    }

    #[derive(Debug, Default)]
    struct PageState {
        note: Option<NoteState>,
        title: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum PageAction {
        Note(NoteAction),
        Rename(String),
    }

    fn scoped() -> ScopedReducer<PageState, NoteState, PageAction, NoteAction, (), NoteReducer> {
        scope_reducer(
            NoteReducer,
            |page: &mut PageState| page.note.as_mut(),
            |action| match action {
                PageAction::Note(inner) => Some(inner),
                PageAction::Rename(_) => None,
            },
            PageAction::Note,
        )
    }

    #[test]
    fn child_actions_reach_open_child() {
        let mut page = PageState {
            note: Some(NoteState::default()),
            title: "draft".to_string(),
        };

        let effects = scoped().reduce(&mut page, PageAction::Note(NoteAction::Append("hi".into())), &());

        assert_eq!(page.note.as_ref().map(|n| n.text.as_str()), Some("hi"));
        assert_eq!(page.title, "draft");
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::Delay { action, .. } => {
                assert_eq!(**action, PageAction::Note(NoteAction::Saved));
            },
            other => unreachable!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn closed_child_ignores_actions() {
        let mut page = PageState::default();
        let reducer = scoped();

        let effects = reducer.reduce(&mut page, PageAction::Note(NoteAction::Append("x".into())), &());

        assert!(effects.is_empty());
        assert!(!reducer.is_active(&mut page));
    }

    #[test]
    fn unrelated_parent_actions_are_skipped() {
        let mut page = PageState {
            note: Some(NoteState::default()),
            title: String::new(),
        };

        let effects = scoped().reduce(&mut page, PageAction::Rename("new".into()), &());

        assert!(effects.is_empty());
        assert_eq!(page.note, Some(NoteState::default()));
    }
}
