//! Render-ready view of the address dialog.
//!
//! All text is resolved here, through the caller's catalog, so the state
//! itself never holds display strings.

use crate::error::{AddressError, AddressErrorCode, AddressFieldError};
use crate::messages;
use crate::order_errors::order_error_message;
use crate::state::{AddressEditState, AttachedError, ConfirmButtonState, DialogError, TargetErrors};
use crate::types::{AddressField, AddressId, AddressInput, AddressInputMode, AddressTarget};
use dashboard_core::messages::MessageCatalog;
use serde::Serialize;

/// One saved address offered for selection
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddressChoiceView {
    /// Address id
    pub id: AddressId,
    /// The address
    pub address: AddressInput,
    /// Whether it is the current selection
    pub selected: bool,
}

/// One target's sub-form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TargetView {
    /// Which target
    pub target: AddressTarget,
    /// Visible sub-form
    pub mode: AddressInputMode,
    /// Controls are disabled
    pub disabled: bool,
    /// Label of the saved-address option
    pub customer_address_label: String,
    /// Label of the new-address option
    pub new_address_label: String,
    /// Saved addresses, when the saved-address option is shown
    pub choices: Vec<AddressChoiceView>,
    /// The new-address draft
    pub draft: AddressInput,
    /// Display name of the draft's country
    pub country_label: Option<String>,
    /// Errors per field, local first then server
    pub field_errors: Vec<(AddressField, String)>,
    /// Errors about the target as a whole
    pub errors: Vec<String>,
}

/// The whole dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddressDialogView {
    /// Header
    pub title: String,
    /// Shipping section description
    pub shipping_description: String,
    /// Shipping sub-form
    pub shipping: TargetView,
    /// Checkbox label
    pub billing_same_as_shipping_label: String,
    /// Checkbox value
    pub billing_same_as_shipping: bool,
    /// Billing section description; `None` while billing follows shipping
    pub billing_description: Option<String>,
    /// Billing sub-form; `None` while billing follows shipping
    pub billing: Option<TargetView>,
    /// Dialog-level errors
    pub errors: Vec<String>,
    /// Confirm button label
    pub confirm_label: String,
    /// Confirm button state
    pub confirm_state: ConfirmButtonState,
    /// Confirm button is disabled
    pub confirm_disabled: bool,
}

fn field_error_message(error: &AddressFieldError, catalog: &dyn MessageCatalog) -> String {
    match error.code {
        AddressErrorCode::Required => catalog.message(&messages::FIELD_REQUIRED),
        AddressErrorCode::UnknownCountry => catalog.message(&messages::UNKNOWN_COUNTRY),
    }
}

fn target_errors(
    errors: &TargetErrors,
    catalog: &dyn MessageCatalog,
) -> (Vec<(AddressField, String)>, Vec<String>) {
    let mut by_field = Vec::new();
    let mut whole = Vec::new();

    match &errors.local {
        Some(AddressError::NoSelection { .. }) => {
            whole.push(catalog.message(&messages::NO_ADDRESS_SELECTED));
        },
        Some(AddressError::Validation { errors, .. }) => {
            by_field.extend(
                errors
                    .iter()
                    .map(|error| (error.field, field_error_message(error, catalog))),
            );
        },
        None => {},
    }

    push_server_errors(&errors.server, catalog, &mut by_field, &mut whole);

    (by_field, whole)
}

fn push_server_errors(
    server: &[AttachedError],
    catalog: &dyn MessageCatalog,
    by_field: &mut Vec<(AddressField, String)>,
    whole: &mut Vec<String>,
) {
    for attached in server {
        let text = order_error_message(&attached.error, catalog);
        match attached.field {
            Some(field) => by_field.push((field, text)),
            None => whole.push(text),
        }
    }
}

fn target_view(
    state: &AddressEditState,
    target: AddressTarget,
    catalog: &dyn MessageCatalog,
) -> TargetView {
    let input = state.target(target);
    let choices = if input.mode == AddressInputMode::CustomerAddress {
        state
            .customer_addresses
            .iter()
            .flat_map(|book| &book.addresses)
            .map(|saved| AddressChoiceView {
                id: saved.id.clone(),
                address: saved.address.clone(),
                selected: input.selected_address_id.as_ref() == Some(&saved.id),
            })
            .collect()
    } else {
        Vec::new()
    };
    let (mut field_errors, mut errors) = target_errors(state.errors.target(target), catalog);
    // The billing payload is the shipping address, so its server errors show here.
    if target == AddressTarget::Shipping && state.billing_disabled() {
        push_server_errors(&state.errors.billing.server, catalog, &mut field_errors, &mut errors);
    }

    TargetView {
        target,
        mode: input.mode,
        disabled: state.is_pending(),
        customer_address_label: catalog.message(&messages::CUSTOMER_ADDRESS_OPTION),
        new_address_label: catalog.message(&messages::NEW_ADDRESS_OPTION),
        choices,
        draft: input.draft_address.clone(),
        country_label: state.country_label(target).map(str::to_string),
        field_errors,
        errors,
    }
}

/// Builds the dialog view.
#[must_use]
pub fn address_dialog_view(state: &AddressEditState, catalog: &dyn MessageCatalog) -> AddressDialogView {
    let billing_visible = !state.billing_disabled();
    let errors = state
        .errors
        .dialog
        .iter()
        .map(|error| match error {
            DialogError::Server(error) => order_error_message(error, catalog),
            DialogError::Transport(_) => catalog.message(&messages::TRANSPORT_ERROR),
        })
        .collect();

    AddressDialogView {
        title: catalog.message(&messages::DIALOG_TITLE),
        shipping_description: catalog.message(&messages::SHIPPING_ADDRESS_DESCRIPTION),
        shipping: target_view(state, AddressTarget::Shipping, catalog),
        billing_same_as_shipping_label: catalog.message(&messages::BILLING_SAME_AS_SHIPPING),
        billing_same_as_shipping: state.billing_same_as_shipping,
        billing_description: billing_visible
            .then(|| catalog.message(&messages::BILLING_ADDRESS_DESCRIPTION)),
        billing: billing_visible.then(|| target_view(state, AddressTarget::Billing, catalog)),
        errors,
        confirm_label: catalog.message(&messages::SELECT_BUTTON),
        confirm_state: state.confirm_state,
        confirm_disabled: state.is_pending(),
    }
}
