//! # Order Addresses
//!
//! The customer-addresses dialog of a draft order, the page-level dialog
//! routing that hosts it, and the alerts shown under order lines.
//!
//! ## Address dialog
//!
//! Shipping and billing each pick an input mode: one of the customer's saved
//! addresses, or a new address typed into a form. "Billing same as shipping"
//! makes the billing payload a copy of the resolved shipping address.
//! Submitting resolves both targets locally; only when both resolve is a
//! single [`AddressUpdateRequest`] sent through the injected
//! [`AddressUpdateMutation`].
//!
//! ```text
//!                  select / edit / setMode
//! Uninitialized ───────────────────────────▶ CustomerAddress ⇄ NewAddress
//!                                                    │
//!                                         dialog closed: state dropped
//! ```
//!
//! ## Draft order page
//!
//! [`OrderDraftPageReducer`] routes between the page's dialogs and embeds the
//! address dialog with [`dashboard_core::composition::scope_reducer`]. A
//! successful address update closes the dialog and replaces the page's
//! addresses; a result arriving after the dialog was closed is dropped.

pub mod draft_page;
pub mod error;
pub mod line_alerts;
pub mod messages;
pub mod mutation;
pub mod order_errors;
pub mod reducer;
pub mod state;
pub mod types;
pub mod validation;
pub mod view;

pub use draft_page::{
    CustomerChangeAction, OrderDialog, OrderDraftPageAction, OrderDraftPageReducer, OrderDraftPageState,
};
pub use error::{AddressError, AddressErrorCode, AddressFieldError, MutationError, OrderError, OrderErrorCode};
pub use line_alerts::{OrderLine, line_alerts};
pub use mutation::{AddressUpdateMutation, AddressUpdateRequest, MutationOutcome};
pub use order_errors::order_error_message;
pub use reducer::{AddressEditAction, AddressEditEnvironment, AddressEditReducer};
pub use state::{AddressEditState, ConfirmButtonState, SubmissionId};
pub use types::{
    AddressField, AddressId, AddressInput, AddressInputMode, AddressInputOption, AddressTarget, Country,
    CustomerAddress, CustomerAddressBook, OrderAddresses, OrderId,
};
pub use validation::{AddressValidator, RequiredFieldsValidator};
pub use view::{AddressDialogView, address_dialog_view};
