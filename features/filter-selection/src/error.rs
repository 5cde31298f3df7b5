//! Filter errors.
//!
//! All of these are programming errors on the caller's side (a menu built
//! with repeated names, an update for a filter that does not exist); none is
//! shown to the user.

use crate::types::FilterKind;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while building or updating a filter draft.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum FilterError {
    /// No draft element carries the requested name.
    #[error("no filter named `{name}`")]
    NotFound {
        /// Requested name
        name: String,
    },

    /// The update carries a value of another kind than the element.
    #[error("filter `{name}` holds {expected} values, not {actual}")]
    KindMismatch {
        /// Element name
        name: String,
        /// The element's kind
        expected: FilterKind,
        /// The kind of the rejected value
        actual: FilterKind,
    },

    /// Two menu elements share a name.
    #[error("filter `{name}` appears more than once in the menu")]
    DuplicateName {
        /// Repeated name
        name: String,
    },
}
