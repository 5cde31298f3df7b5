//! Dialog routing of the draft order page.
//!
//! The page shows at most one dialog at a time. Changing the order's
//! customer leads to a prompt asking whether to keep the current addresses;
//! choosing to change them opens the address dialog, whose state lives here
//! while it is open and is dropped when it closes.

use crate::reducer::{AddressEditAction, AddressEditEnvironment, AddressEditReducer};
use crate::state::AddressEditState;
use crate::types::{Country, CustomerAddressBook, OrderAddresses, OrderId};
use dashboard_core::composition::scope_reducer;
use dashboard_core::{SmallVec, effect::Effect, reducer::Reducer};
use serde::{Deserialize, Serialize};

/// Dialogs of the draft order page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderDialog {
    /// Delete the draft
    Cancel,
    /// Pick a shipping method
    EditShipping,
    /// Add products
    AddOrderLine,
    /// Keep or change addresses after a customer change
    CustomerChange,
    /// Pick the new customer's addresses
    EditCustomerAddresses,
    /// Edit the shipping address
    EditShippingAddress,
    /// Edit the billing address
    EditBillingAddress,
}

/// Answer to the customer-change prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerChangeAction {
    /// Keep the order's addresses
    KeepAddress,
    /// Pick addresses of the new customer
    ChangeAddress,
}

/// Draft order page state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderDraftPageState {
    /// The draft order
    pub order_id: OrderId,
    /// The order's current addresses
    pub addresses: OrderAddresses,
    /// Countries the shop ships to
    pub countries: Vec<Country>,
    /// The customer's saved addresses, once loaded
    pub customer_addresses: Option<CustomerAddressBook>,
    /// Open dialog
    pub dialog: Option<OrderDialog>,
    /// Address dialog state while it is open
    pub address_dialog: Option<AddressEditState>,
}

impl OrderDraftPageState {
    /// Page with no dialog open
    #[must_use]
    pub const fn new(order_id: OrderId, addresses: OrderAddresses, countries: Vec<Country>) -> Self {
        Self {
            order_id,
            addresses,
            countries,
            customer_addresses: None,
            dialog: None,
            address_dialog: None,
        }
    }

    fn open(&mut self, dialog: OrderDialog) {
        self.address_dialog = (dialog == OrderDialog::EditCustomerAddresses).then(|| {
            AddressEditState::from_order(
                self.order_id.clone(),
                &self.addresses,
                self.customer_addresses.clone(),
                self.countries.clone(),
            )
        });
        self.dialog = Some(dialog);
        tracing::debug!(?dialog, order = %self.order_id, "dialog opened");
    }

    fn close(&mut self) {
        if let Some(pending) = self.address_dialog.as_ref().and_then(|d| d.pending.as_ref()) {
            tracing::debug!(submission = %pending.id, "address dialog closed with a request in flight");
        }
        self.dialog = None;
        self.address_dialog = None;
    }
}

fn address_dialog(page: &mut OrderDraftPageState) -> Option<&mut AddressEditState> {
    page.address_dialog.as_mut()
}

/// Draft order page actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderDraftPageAction {
    /// Show a dialog
    OpenDialog(OrderDialog),
    /// Hide the open dialog
    CloseDialog,
    /// The customer update finished
    CustomerEdited {
        /// The update returned errors
        had_errors: bool,
    },
    /// The customer-change prompt was confirmed
    CustomerChangeConfirmed(CustomerChangeAction),
    /// Address dialog action
    Addresses(AddressEditAction),
}

impl OrderDraftPageAction {
    fn into_addresses(self) -> Option<AddressEditAction> {
        match self {
            Self::Addresses(action) => Some(action),
            _ => None,
        }
    }
}

/// Draft order page reducer
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderDraftPageReducer;

impl OrderDraftPageReducer {
    /// Creates a new page reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn addresses(
        state: &mut OrderDraftPageState,
        action: AddressEditAction,
        env: &AddressEditEnvironment,
    ) -> SmallVec<[Effect<OrderDraftPageAction>; 4]> {
        if let AddressEditAction::CustomerAddressesLoaded(book) = &action {
            state.customer_addresses = Some(book.clone());
        }
        if state.address_dialog.is_none() {
            if let AddressEditAction::SubmissionCompleted { submission, .. } = &action {
                tracing::debug!(%submission, "address update finished after its dialog closed");
            }
        }

        let dialog = scope_reducer(
            AddressEditReducer::new(),
            address_dialog,
            OrderDraftPageAction::into_addresses,
            OrderDraftPageAction::Addresses,
        );
        let effects = dialog.reduce(state, OrderDraftPageAction::Addresses(action), env);

        if let Some(saved) = state.address_dialog.as_mut().and_then(|d| d.saved.take()) {
            state.addresses = OrderAddresses {
                shipping: Some(saved.shipping_address),
                billing: Some(saved.billing_address),
            };
            tracing::debug!(order = %state.order_id, "order addresses updated");
            state.close();
        }

        effects
    }
}

impl Reducer for OrderDraftPageReducer {
    type State = OrderDraftPageState;
    type Action = OrderDraftPageAction;
    type Environment = AddressEditEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            OrderDraftPageAction::OpenDialog(dialog) => state.open(dialog),
            OrderDraftPageAction::CloseDialog => state.close(),
            OrderDraftPageAction::CustomerEdited { had_errors } => {
                if had_errors {
                    state.close();
                } else {
                    // The saved addresses belong to the previous customer.
                    state.customer_addresses = None;
                    state.open(OrderDialog::CustomerChange);
                }
            },
            OrderDraftPageAction::CustomerChangeConfirmed(choice) => match choice {
                CustomerChangeAction::ChangeAddress => state.open(OrderDialog::EditCustomerAddresses),
                CustomerChangeAction::KeepAddress => state.close(),
            },
            OrderDraftPageAction::Addresses(action) => return Self::addresses(state, action, env),
        }

        SmallVec::new()
    }
}
