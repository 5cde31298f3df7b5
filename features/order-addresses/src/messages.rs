//! Messages of the order address dialog and the draft order page.

use dashboard_core::messages::MessageDescriptor;

/// Dialog header
pub const DIALOG_TITLE: MessageDescriptor = MessageDescriptor::new(
    "orders.addressesEditDialog.title",
    "Shipping address for order",
    "dialog header",
);

/// Checkbox label
pub const BILLING_SAME_AS_SHIPPING: MessageDescriptor = MessageDescriptor::new(
    "orders.addressesEditDialog.billingSameAsShipping",
    "Billing address same as shipping address",
    "checkbox label",
);

/// Shipping section description
pub const SHIPPING_ADDRESS_DESCRIPTION: MessageDescriptor = MessageDescriptor::new(
    "orders.addressesEditDialog.shippingAddressDescription",
    "Which address would you like to use as shipping address for selected customer:",
    "dialog content",
);

/// Billing section description
pub const BILLING_ADDRESS_DESCRIPTION: MessageDescriptor = MessageDescriptor::new(
    "orders.addressesEditDialog.billingAddressDescription",
    "Select one of customer addresses or add a new address:",
    "dialog content",
);

/// "Use a saved address" option
pub const CUSTOMER_ADDRESS_OPTION: MessageDescriptor = MessageDescriptor::new(
    "orders.addressEdit.customerAddress",
    "Use one of customer addresses",
    "address type",
);

/// "Type a new address" option
pub const NEW_ADDRESS_OPTION: MessageDescriptor = MessageDescriptor::new(
    "orders.addressEdit.newAddress",
    "Add new address",
    "address type",
);

/// Confirm button
pub const SELECT_BUTTON: MessageDescriptor =
    MessageDescriptor::new("buttons.select", "Select", "button");

/// A customer-address target without a selection
pub const NO_ADDRESS_SELECTED: MessageDescriptor = MessageDescriptor::new(
    "orders.addressEdit.noSelection",
    "Select one of customer addresses",
    "address error",
);

/// Required field left empty
pub const FIELD_REQUIRED: MessageDescriptor = MessageDescriptor::new(
    "errors.fieldRequired",
    "This field is required",
    "form field error",
);

/// Country outside the shop list
pub const UNKNOWN_COUNTRY: MessageDescriptor = MessageDescriptor::new(
    "errors.unknownCountry",
    "This country is not available",
    "address country error",
);

/// Request failed without a server answer
pub const TRANSPORT_ERROR: MessageDescriptor = MessageDescriptor::new(
    "errors.transport",
    "Could not reach the server. Try again.",
    "network error",
);

/// Product on an order line can no longer be bought
pub const LINE_NOT_AVAILABLE: MessageDescriptor = MessageDescriptor::new(
    "orders.lineAlerts.notAvailable",
    "This product is no longer available for purchase",
    "order line alert",
);

/// Page title
pub const DRAFT_ORDER_WINDOW_TITLE: MessageDescriptor = MessageDescriptor::new(
    "orders.draftDetails.windowTitle",
    "Draft Order #{orderNumber}",
    "window title",
);
