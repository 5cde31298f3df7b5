//! The address-update mutation collaborator.

use crate::error::{MutationError, OrderError};
use crate::types::{AddressInput, OrderId};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// One combined update of both order addresses
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdateRequest {
    /// Draft order to update
    pub order_id: OrderId,
    /// New shipping address
    pub shipping_address: AddressInput,
    /// New billing address
    pub billing_address: AddressInput,
}

/// Server errors of a completed request; empty means the update was applied.
pub type MutationOutcome = Result<Vec<OrderError>, MutationError>;

/// Performs the address update against the API.
///
/// Uses a boxed future so the mutation can be held as
/// `Arc<dyn AddressUpdateMutation>` and moved into effects.
pub trait AddressUpdateMutation: Send + Sync {
    /// Sends `request`.
    ///
    /// Resolves to the server's field errors (empty on success), or a
    /// [`MutationError`] when no usable response was received.
    fn update_addresses(&self, request: AddressUpdateRequest) -> BoxFuture<'_, MutationOutcome>;
}
