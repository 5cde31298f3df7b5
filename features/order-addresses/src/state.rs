//! Address dialog state.

use crate::error::{AddressError, MutationError, OrderError};
use crate::mutation::AddressUpdateRequest;
use crate::types::{
    AddressField, AddressId, AddressInput, AddressInputMode, AddressTarget, Country,
    CustomerAddressBook, OrderAddresses, OrderId,
};
use crate::validation::AddressValidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tags one submit so its completion can be matched to the dialog that sent it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(u64);

impl SubmissionId {
    /// Creates a new `SubmissionId`
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out submission ids that are unique across dialog instances.
#[derive(Clone, Debug, Default)]
pub struct SubmissionIds {
    next: Arc<AtomicU64>,
}

impl SubmissionIds {
    /// Creates a generator starting at 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The next id.
    #[must_use]
    pub fn next_id(&self) -> SubmissionId {
        SubmissionId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// Visual state of the dialog's confirm button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmButtonState {
    /// Idle
    #[default]
    Default,
    /// Request in flight; the button is disabled
    Loading,
    /// The last request succeeded
    Success,
    /// The last request failed
    Error,
}

/// Input state of one target
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetState {
    /// Which sub-form is shown
    pub mode: AddressInputMode,
    /// Chosen saved address
    pub selected_address_id: Option<AddressId>,
    /// New-address draft
    pub draft_address: AddressInput,
}

impl TargetState {
    fn existing(id: AddressId) -> Self {
        Self {
            mode: AddressInputMode::CustomerAddress,
            selected_address_id: Some(id),
            draft_address: AddressInput::default(),
        }
    }

    fn new_draft(address: AddressInput) -> Self {
        Self {
            mode: AddressInputMode::NewAddress,
            selected_address_id: None,
            draft_address: address,
        }
    }
}

/// A server error attached to a target, optionally to one of its fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachedError {
    /// Field the error is about; `None` for the address as a whole
    pub field: Option<AddressField>,
    /// The server error
    pub error: OrderError,
}

/// Errors shown next to one target's sub-form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetErrors {
    /// Result of the last local resolution, if it failed
    pub local: Option<AddressError>,
    /// Server errors from the last response
    pub server: Vec<AttachedError>,
}

impl TargetErrors {
    /// Returns `true` when nothing is shown for this target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.local.is_none() && self.server.is_empty()
    }

    /// Drops local errors for `field`.
    fn clear_local_field(&mut self, field: AddressField) {
        if let Some(AddressError::Validation { errors, .. }) = &mut self.local {
            errors.retain(|error| error.field != field);
            if errors.is_empty() {
                self.local = None;
            }
        }
    }
}

/// An error no target can claim
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogError {
    /// Server error without a recognizable address field
    Server(OrderError),
    /// The request itself failed
    Transport(MutationError),
}

/// Every error the dialog displays
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressEditErrors {
    /// Shipping sub-form errors
    pub shipping: TargetErrors,
    /// Billing sub-form errors
    pub billing: TargetErrors,
    /// Dialog-level errors
    pub dialog: Vec<DialogError>,
}

impl AddressEditErrors {
    /// Errors of one target
    #[must_use]
    pub const fn target(&self, target: AddressTarget) -> &TargetErrors {
        match target {
            AddressTarget::Shipping => &self.shipping,
            AddressTarget::Billing => &self.billing,
        }
    }

    /// Mutable errors of one target
    pub fn target_mut(&mut self, target: AddressTarget) -> &mut TargetErrors {
        match target {
            AddressTarget::Shipping => &mut self.shipping,
            AddressTarget::Billing => &mut self.billing,
        }
    }

    /// Returns `true` when nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shipping.is_empty() && self.billing.is_empty() && self.dialog.is_empty()
    }

    /// Drops every server and dialog-level error, keeping local ones.
    pub fn clear_server(&mut self) {
        self.shipping.server.clear();
        self.billing.server.clear();
        self.dialog.clear();
    }

    /// Files a server error under its target and field, or at dialog level.
    pub fn attach_server(&mut self, error: OrderError) {
        match error.attribution() {
            Some((target, field)) => self
                .target_mut(target)
                .server
                .push(AttachedError { field, error }),
            None => self.dialog.push(DialogError::Server(error)),
        }
    }

    /// Drops local errors of one field of one target.
    pub fn clear_local_field(&mut self, target: AddressTarget, field: AddressField) {
        self.target_mut(target).clear_local_field(field);
    }
}

/// A submit whose request is in flight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    /// Tag of the request
    pub id: SubmissionId,
    /// What was sent
    pub request: AddressUpdateRequest,
}

/// The customer-addresses dialog of a draft order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressEditState {
    /// Order being edited
    pub order_id: OrderId,
    /// Shipping input
    pub shipping: TargetState,
    /// Billing input
    pub billing: TargetState,
    /// When set, billing is derived from shipping on submit
    pub billing_same_as_shipping: bool,
    /// Saved addresses, once loaded
    pub customer_addresses: Option<CustomerAddressBook>,
    /// Countries the shop ships to
    pub countries: Vec<Country>,
    /// Displayed errors
    pub errors: AddressEditErrors,
    /// Confirm button state
    pub confirm_state: ConfirmButtonState,
    /// In-flight submit
    pub pending: Option<PendingSubmission>,
    /// Submit whose result the confirm button currently shows
    pub last_submission: Option<SubmissionId>,
    /// Addresses applied by the last successful submit
    pub saved: Option<AddressUpdateRequest>,
}

impl AddressEditState {
    /// Opens the dialog for an order.
    ///
    /// Per target: the customer's default address is preselected when known;
    /// otherwise the order's current address becomes a new-address draft;
    /// otherwise the target stays uninitialized. Billing starts as "same as
    /// shipping" when the order has no billing address or it equals shipping.
    #[must_use]
    pub fn from_order(
        order_id: OrderId,
        order: &OrderAddresses,
        customer_addresses: Option<CustomerAddressBook>,
        countries: Vec<Country>,
    ) -> Self {
        let initial = |target: AddressTarget| {
            let default = customer_addresses
                .as_ref()
                .and_then(|book| book.default_for(target));
            match (default, order.get(target)) {
                (Some(saved), _) => TargetState::existing(saved.id.clone()),
                (None, Some(address)) => TargetState::new_draft(address.clone()),
                (None, None) => TargetState::default(),
            }
        };
        let shipping = initial(AddressTarget::Shipping);
        let billing = initial(AddressTarget::Billing);
        let billing_same_as_shipping = order.billing.is_none() || order.billing == order.shipping;

        Self {
            order_id,
            shipping,
            billing,
            billing_same_as_shipping,
            customer_addresses,
            countries,
            errors: AddressEditErrors::default(),
            confirm_state: ConfirmButtonState::Default,
            pending: None,
            last_submission: None,
            saved: None,
        }
    }

    /// Input state of one target
    #[must_use]
    pub const fn target(&self, target: AddressTarget) -> &TargetState {
        match target {
            AddressTarget::Shipping => &self.shipping,
            AddressTarget::Billing => &self.billing,
        }
    }

    /// Mutable input state of one target
    pub fn target_mut(&mut self, target: AddressTarget) -> &mut TargetState {
        match target {
            AddressTarget::Shipping => &mut self.shipping,
            AddressTarget::Billing => &mut self.billing,
        }
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Billing controls are disabled while billing follows shipping.
    #[must_use]
    pub const fn billing_disabled(&self) -> bool {
        self.billing_same_as_shipping
    }

    /// Applies the customer's defaults to targets still uninitialized.
    pub fn apply_customer_defaults(&mut self) {
        let Some(book) = &self.customer_addresses else {
            return;
        };
        for target in AddressTarget::ALL {
            let Some(saved) = book.default_for(target) else {
                continue;
            };
            let state = match target {
                AddressTarget::Shipping => &mut self.shipping,
                AddressTarget::Billing => &mut self.billing,
            };
            if state.mode == AddressInputMode::Uninitialized {
                state.mode = AddressInputMode::CustomerAddress;
                state.selected_address_id = Some(saved.id.clone());
            }
        }
    }

    /// Turns one target into the address to send.
    ///
    /// # Errors
    ///
    /// - [`AddressError::NoSelection`] for an uninitialized target, or a
    ///   customer-address target whose selection is missing or unknown
    /// - [`AddressError::Validation`] when the new-address draft is rejected
    pub fn resolve(
        &self,
        target: AddressTarget,
        validator: &dyn AddressValidator,
    ) -> Result<AddressInput, AddressError> {
        let state = self.target(target);
        match state.mode {
            AddressInputMode::Uninitialized => Err(AddressError::NoSelection { target }),
            AddressInputMode::CustomerAddress => state
                .selected_address_id
                .as_ref()
                .and_then(|id| self.customer_addresses.as_ref()?.get(id))
                .map(|saved| saved.address.clone())
                .ok_or(AddressError::NoSelection { target }),
            AddressInputMode::NewAddress => validator
                .validate(&state.draft_address, &self.countries)
                .map_err(|errors| AddressError::Validation { target, errors }),
        }
    }

    /// Display name of a target's draft country, from the shop list.
    #[must_use]
    pub fn country_label(&self, target: AddressTarget) -> Option<&str> {
        let code = &self.target(target).draft_address.country;
        self.countries
            .iter()
            .find(|country| country.code.eq_ignore_ascii_case(code))
            .map(|country| country.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AddressErrorCode, OrderErrorCode};
    use crate::types::CustomerAddress;
    use crate::validation::RequiredFieldsValidator;

    fn address(street: &str) -> AddressInput {
        AddressInput::default()
            .with(AddressField::StreetAddress1, street)
            .with(AddressField::City, "Berlin")
            .with(AddressField::PostalCode, "10115")
            .with(AddressField::Country, "DE")
    }

    fn book() -> CustomerAddressBook {
        CustomerAddressBook {
            addresses: vec![CustomerAddress {
                id: AddressId::new("home"),
                address: address("Home St 1"),
            }],
            default_shipping: Some(AddressId::new("home")),
            default_billing: None,
        }
    }

    #[test]
    fn ids_are_unique_across_clones() {
        let ids = SubmissionIds::new();
        let other = ids.clone();

        assert_eq!(ids.next_id(), SubmissionId::new(1));
        assert_eq!(other.next_id(), SubmissionId::new(2));
    }

    #[test]
    fn from_order_prefers_customer_defaults() {
        let order = OrderAddresses {
            shipping: Some(address("Order St 2")),
            billing: Some(address("Billing St 3")),
        };

        let state = AddressEditState::from_order(OrderId::new("o1"), &order, Some(book()), vec![]);

        assert_eq!(state.shipping.mode, AddressInputMode::CustomerAddress);
        assert_eq!(state.shipping.selected_address_id, Some(AddressId::new("home")));
        assert_eq!(state.billing.mode, AddressInputMode::NewAddress);
        assert_eq!(state.billing.draft_address, address("Billing St 3"));
        assert!(!state.billing_same_as_shipping);
    }

    #[test]
    fn from_order_without_anything_is_uninitialized() {
        let state =
            AddressEditState::from_order(OrderId::new("o1"), &OrderAddresses::default(), None, vec![]);

        assert_eq!(state.shipping.mode, AddressInputMode::Uninitialized);
        assert_eq!(state.billing.mode, AddressInputMode::Uninitialized);
        assert!(state.billing_same_as_shipping);
    }

    #[test]
    fn equal_addresses_start_same_as_shipping() {
        let order = OrderAddresses {
            shipping: Some(address("Same St 1")),
            billing: Some(address("Same St 1")),
        };

        let state = AddressEditState::from_order(OrderId::new("o1"), &order, None, vec![]);

        assert!(state.billing_same_as_shipping);
    }

    #[test]
    fn resolve_unknown_selection_is_no_selection() {
        let mut state = AddressEditState::from_order(OrderId::new("o1"), &OrderAddresses::default(), Some(book()), vec![]);
        state.shipping.selected_address_id = Some(AddressId::new("deleted"));

        assert_eq!(
            state.resolve(AddressTarget::Shipping, &RequiredFieldsValidator),
            Err(AddressError::NoSelection {
                target: AddressTarget::Shipping
            })
        );
    }

    #[test]
    fn resolve_new_address_validates() {
        let mut state =
            AddressEditState::from_order(OrderId::new("o1"), &OrderAddresses::default(), None, vec![]);
        state.billing.mode = AddressInputMode::NewAddress;

        let result = state.resolve(AddressTarget::Billing, &RequiredFieldsValidator);

        assert!(matches!(
            result,
            Err(AddressError::Validation { target: AddressTarget::Billing, ref errors })
                if errors.iter().all(|e| e.code == AddressErrorCode::Required)
        ));
    }

    #[test]
    fn server_errors_are_filed_by_attribution() {
        let mut errors = AddressEditErrors::default();

        errors.attach_server(OrderError::new(OrderErrorCode::Invalid).with_field("shippingAddress.postalCode"));
        errors.attach_server(OrderError::new(OrderErrorCode::NotEditable));

        assert_eq!(errors.shipping.server[0].field, Some(AddressField::PostalCode));
        assert_eq!(errors.dialog.len(), 1);
        assert!(errors.billing.is_empty());
    }
}
