//! Local, server and transport errors of the address dialog.

use crate::types::{AddressField, AddressTarget};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a local field check failed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressErrorCode {
    /// The field must not be empty
    Required,
    /// The country is not one the shop ships to
    UnknownCountry,
}

/// A failed local check on one address field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFieldError {
    /// Offending field
    pub field: AddressField,
    /// What is wrong with it
    pub code: AddressErrorCode,
}

impl AddressFieldError {
    /// Creates a new field error
    #[must_use]
    pub const fn new(field: AddressField, code: AddressErrorCode) -> Self {
        Self { field, code }
    }
}

/// A target that could not be turned into an address payload.
///
/// Never leaves the dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum AddressError {
    /// Customer-address mode without a (known) selected address
    #[error("no {target} address selected")]
    NoSelection {
        /// The target concerned
        target: AddressTarget,
    },

    /// The new-address draft failed validation
    #[error("{target} address has {} invalid field(s)", .errors.len())]
    Validation {
        /// The target concerned
        target: AddressTarget,
        /// Field errors, in form order
        errors: Vec<AddressFieldError>,
    },
}

impl AddressError {
    /// The target this error belongs to.
    #[must_use]
    pub const fn target(&self) -> AddressTarget {
        match self {
            Self::NoSelection { target } | Self::Validation { target, .. } => *target,
        }
    }

    /// Field errors for `field`; empty for a missing selection.
    pub fn field_errors(&self, field: AddressField) -> impl Iterator<Item = &AddressFieldError> {
        let errors: &[AddressFieldError] = match self {
            Self::NoSelection { .. } => &[],
            Self::Validation { errors, .. } => errors,
        };
        errors.iter().filter(move |error| error.field == field)
    }
}

/// Error codes the order API reports
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderErrorCode {
    /// Billing address missing
    BillingAddressNotSet,
    /// Order cannot be cancelled
    CannotCancelOrder,
    /// Order cannot be deleted
    CannotDelete,
    /// Unexpected API failure
    GraphqlError,
    /// Not enough stock
    InsufficientStock,
    /// Invalid value
    Invalid,
    /// Order is not a draft anymore
    NotEditable,
    /// Referenced object missing
    NotFound,
    /// Shipping method set without a shipping address
    OrderNoShippingAddress,
    /// Product not published in the order's channel
    ProductNotPublished,
    /// Product cannot be bought
    ProductUnavailableForPurchase,
    /// Value required
    Required,
    /// Shipping method does not match the address
    ShippingMethodNotApplicable,
    /// Shipping method required
    ShippingMethodRequired,
    /// Any code this dashboard does not know yet
    #[serde(other)]
    Unknown,
}

/// A server-side error returned by an order mutation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderError {
    /// Error code
    pub code: OrderErrorCode,
    /// Offending input field, possibly a path such as `shippingAddress.postalCode`
    pub field: Option<String>,
    /// Address the error is about
    pub address_type: Option<AddressTarget>,
    /// Server-provided text
    pub message: Option<String>,
}

impl OrderError {
    /// Creates an error with only a code
    #[must_use]
    pub const fn new(code: OrderErrorCode) -> Self {
        Self {
            code,
            field: None,
            address_type: None,
            message: None,
        }
    }

    /// Sets the offending field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the address type
    #[must_use]
    pub const fn with_address_type(mut self, target: AddressTarget) -> Self {
        self.address_type = Some(target);
        self
    }

    /// Sets the server message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Where this error belongs in the address dialog.
    ///
    /// A `shippingAddress.`/`billingAddress.` field path wins over
    /// `address_type`. Returns `None` for errors no target can claim.
    #[must_use]
    pub fn attribution(&self) -> Option<(AddressTarget, Option<AddressField>)> {
        let field = self.field.as_deref();

        if let Some(path) = field {
            let (head, rest) = path.split_once('.').map_or((path, None), |(h, r)| (h, Some(r)));
            let target = AddressTarget::ALL
                .into_iter()
                .find(|target| target.input_name() == head);
            if let Some(target) = target {
                return Some((target, rest.and_then(AddressField::from_api_name)));
            }
        }

        self.address_type
            .map(|target| (target, field.and_then(AddressField::from_api_name)))
    }
}

/// The address update could not be performed at all
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum MutationError {
    /// The request did not reach the API or its response was unusable
    #[error("address update failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_path_attributes_target_and_field() {
        let error = OrderError::new(OrderErrorCode::Invalid).with_field("shippingAddress.postalCode");

        assert_eq!(
            error.attribution(),
            Some((AddressTarget::Shipping, Some(AddressField::PostalCode)))
        );
    }

    #[test]
    fn address_type_attributes_plain_field() {
        let error = OrderError::new(OrderErrorCode::Required)
            .with_field("city")
            .with_address_type(AddressTarget::Billing);

        assert_eq!(
            error.attribution(),
            Some((AddressTarget::Billing, Some(AddressField::City)))
        );
    }

    #[test]
    fn whole_address_error_has_no_field() {
        let error = OrderError::new(OrderErrorCode::Invalid).with_field("billingAddress");

        assert_eq!(error.attribution(), Some((AddressTarget::Billing, None)));
    }

    #[test]
    fn unrelated_error_is_unattributed() {
        let error = OrderError::new(OrderErrorCode::NotEditable).with_field("id");

        assert_eq!(error.attribution(), None);
    }

    #[test]
    fn unknown_code_deserializes() {
        let error: OrderError =
            serde_json::from_str(r#"{"code":"VOUCHER_EXPIRED","field":null,"addressType":null,"message":"Voucher expired"}"#)
                .unwrap_or_else(|_| OrderError::new(OrderErrorCode::GraphqlError));

        assert_eq!(error.code, OrderErrorCode::Unknown);
        assert_eq!(error.message.as_deref(), Some("Voucher expired"));
    }

    #[test]
    fn validation_error_filters_by_field() {
        let error = AddressError::Validation {
            target: AddressTarget::Shipping,
            errors: vec![
                AddressFieldError::new(AddressField::City, AddressErrorCode::Required),
                AddressFieldError::new(AddressField::Country, AddressErrorCode::UnknownCountry),
            ],
        };

        assert_eq!(error.field_errors(AddressField::City).count(), 1);
        assert_eq!(error.field_errors(AddressField::Phone).count(), 0);
        assert_eq!(error.target(), AddressTarget::Shipping);
    }
}
