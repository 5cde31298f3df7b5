//! Display text for order API errors.

use crate::error::{OrderError, OrderErrorCode};
use crate::messages::FIELD_REQUIRED;
use dashboard_core::messages::{MessageCatalog, MessageDescriptor};

const BILLING_NOT_SET: MessageDescriptor = MessageDescriptor::new(
    "errors.order.billingNotSet",
    "Billing address is not set",
    "error message",
);
const CANNOT_CANCEL_ORDER: MessageDescriptor = MessageDescriptor::new(
    "errors.order.cannotCancelOrder",
    "This order cannot be cancelled",
    "error message",
);
const CANNOT_DELETE: MessageDescriptor = MessageDescriptor::new(
    "errors.order.cannotDelete",
    "This order cannot be deleted",
    "error message",
);
const GRAPHQL_ERROR: MessageDescriptor =
    MessageDescriptor::new("errors.graphql", "An error occurred", "error message");
const INSUFFICIENT_STOCK: MessageDescriptor = MessageDescriptor::new(
    "errors.order.insufficientStock",
    "Insufficient stock",
    "error message",
);
const INVALID: MessageDescriptor =
    MessageDescriptor::new("errors.invalid", "Invalid value", "error message");
const NOT_EDITABLE: MessageDescriptor = MessageDescriptor::new(
    "errors.order.notEditable",
    "This order cannot be edited",
    "error message",
);
const NOT_FOUND: MessageDescriptor = MessageDescriptor::new(
    "errors.notFound",
    "Could not find the requested object",
    "error message",
);
const ORDER_NO_SHIPPING_ADDRESS: MessageDescriptor = MessageDescriptor::new(
    "errors.order.noShippingAddress",
    "Cannot choose a shipping method for an order without the shipping address",
    "error message",
);
const PRODUCT_NOT_PUBLISHED: MessageDescriptor = MessageDescriptor::new(
    "errors.order.productNotPublished",
    "Product is not published in this channel",
    "error message",
);
const PRODUCT_UNAVAILABLE: MessageDescriptor = MessageDescriptor::new(
    "errors.order.productUnavailable",
    "Product is not available for purchase",
    "error message",
);
const SHIPPING_NOT_APPLICABLE: MessageDescriptor = MessageDescriptor::new(
    "errors.order.shippingNotApplicable",
    "Shipping method is not valid for chosen shipping address",
    "error message",
);
const SHIPPING_REQUIRED: MessageDescriptor = MessageDescriptor::new(
    "errors.order.shippingRequired",
    "Shipping method is required for this order",
    "error message",
);
const UNKNOWN_ERROR: MessageDescriptor = MessageDescriptor::new(
    "errors.unknown",
    "Something went wrong",
    "error message",
);

/// The descriptor for a known code.
#[must_use]
pub const fn order_error_descriptor(code: OrderErrorCode) -> Option<&'static MessageDescriptor> {
    let message = match code {
        OrderErrorCode::BillingAddressNotSet => &BILLING_NOT_SET,
        OrderErrorCode::CannotCancelOrder => &CANNOT_CANCEL_ORDER,
        OrderErrorCode::CannotDelete => &CANNOT_DELETE,
        OrderErrorCode::GraphqlError => &GRAPHQL_ERROR,
        OrderErrorCode::InsufficientStock => &INSUFFICIENT_STOCK,
        OrderErrorCode::Invalid => &INVALID,
        OrderErrorCode::NotEditable => &NOT_EDITABLE,
        OrderErrorCode::NotFound => &NOT_FOUND,
        OrderErrorCode::OrderNoShippingAddress => &ORDER_NO_SHIPPING_ADDRESS,
        OrderErrorCode::ProductNotPublished => &PRODUCT_NOT_PUBLISHED,
        OrderErrorCode::ProductUnavailableForPurchase => &PRODUCT_UNAVAILABLE,
        OrderErrorCode::Required => &FIELD_REQUIRED,
        OrderErrorCode::ShippingMethodNotApplicable => &SHIPPING_NOT_APPLICABLE,
        OrderErrorCode::ShippingMethodRequired => &SHIPPING_REQUIRED,
        OrderErrorCode::Unknown => return None,
    };
    Some(message)
}

/// Text shown for an order API error.
///
/// Known codes map to their message; unknown ones show the server's text,
/// or a generic message when there is none.
#[must_use]
pub fn order_error_message(error: &OrderError, catalog: &dyn MessageCatalog) -> String {
    match (order_error_descriptor(error.code), &error.message) {
        (Some(message), _) => catalog.message(message),
        (None, Some(text)) => text.clone(),
        (None, None) => catalog.message(&UNKNOWN_ERROR),
    }
}
