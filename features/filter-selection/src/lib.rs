//! # Filter Selection
//!
//! The filter popover of list pages as a reducer.
//!
//! The page supplies a committed [`FilterMenu`]. While the popover is open
//! the user edits a draft copy; [`FilterSelectionAction::Submit`] validates
//! it and, when every active filter has an acceptable value, hands the whole
//! draft to the page's [`FilterSubmitHandler`] and closes the popover.
//!
//! The draft operations in [`draft`] are plain functions over snapshots and
//! can be used without the reducer.
//!
//! ## Example
//!
//! ```
//! use filter_selection::draft;
//! use filter_selection::{FilterElement, FilterMenu, FilterRange, FilterUpdate, FilterValue};
//!
//! let menu = FilterMenu::new(vec![FilterElement::new(
//!     "price",
//!     FilterValue::PriceRange(FilterRange::unbounded()),
//! )])?;
//!
//! let edited = draft::dispatch(
//!     &draft::initialize(&menu),
//!     "price",
//!     FilterUpdate::activate_with(FilterValue::PriceRange(FilterRange::unbounded())),
//! )?;
//!
//! assert_eq!(draft::validate(&edited).invalid_names, vec!["price".to_string()]);
//! # Ok::<(), filter_selection::FilterError>(())
//! ```

pub mod draft;
pub mod error;
pub mod messages;
pub mod reducer;
pub mod types;

pub use error::FilterError;
pub use messages::FilterErrorMessages;
pub use reducer::{
    FilterEnvironment, FilterSelectionAction, FilterSelectionReducer, FilterSelectionState,
    FilterSubmitHandler,
};
pub use types::{FilterElement, FilterKind, FilterMenu, FilterRange, FilterUpdate, FilterValue};
