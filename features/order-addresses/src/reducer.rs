//! Address dialog reducer.
//!
//! Interaction actions edit the per-target input state. `Submit` resolves
//! both targets locally and, when both resolve, issues one combined
//! [`AddressUpdateRequest`] through the injected mutation. The request's
//! completion comes back as [`AddressEditAction::SubmissionCompleted`],
//! tagged with the [`SubmissionId`] it was sent under; completions for any
//! other submission are dropped.

use crate::error::AddressError;
use crate::mutation::{AddressUpdateMutation, AddressUpdateRequest, MutationOutcome};
use crate::state::{AddressEditState, ConfirmButtonState, DialogError, PendingSubmission, SubmissionId, SubmissionIds};
use crate::types::{
    AddressField, AddressId, AddressInputMode, AddressInputOption, AddressTarget, CustomerAddressBook,
};
use crate::validation::AddressValidator;
use dashboard_core::{SmallVec, async_effect, delay, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;
use std::time::Duration;

/// How long Success/Error stays on the confirm button by default.
pub const DEFAULT_CONFIRM_SETTLE: Duration = Duration::from_secs(3);

/// Address dialog environment
#[derive(Clone)]
pub struct AddressEditEnvironment {
    /// Local validation of new-address drafts
    pub validator: Arc<dyn AddressValidator>,
    /// The address update
    pub mutation: Arc<dyn AddressUpdateMutation>,
    /// Submission id source, shared by every dialog instance
    pub submissions: SubmissionIds,
    /// How long the confirm button shows a result
    pub confirm_settle: Duration,
}

impl AddressEditEnvironment {
    /// Creates a new environment with the default settle delay
    #[must_use]
    pub fn new(validator: Arc<dyn AddressValidator>, mutation: Arc<dyn AddressUpdateMutation>) -> Self {
        Self {
            validator,
            mutation,
            submissions: SubmissionIds::new(),
            confirm_settle: DEFAULT_CONFIRM_SETTLE,
        }
    }

    /// Overrides the confirm settle delay
    #[must_use]
    pub const fn with_confirm_settle(mut self, confirm_settle: Duration) -> Self {
        self.confirm_settle = confirm_settle;
        self
    }
}

/// Address dialog actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressEditAction {
    /// Choose which sub-form a target shows
    SetMode {
        /// Target
        target: AddressTarget,
        /// Option picked
        mode: AddressInputOption,
    },
    /// Pick a saved address
    SelectExistingAddress {
        /// Target
        target: AddressTarget,
        /// Saved address id
        id: AddressId,
    },
    /// Type into a new-address field
    EditDraftAddress {
        /// Target
        target: AddressTarget,
        /// Field edited
        field: AddressField,
        /// New value
        value: String,
    },
    /// Pick a country for a new address
    SelectCountry {
        /// Target
        target: AddressTarget,
        /// ISO country code
        code: String,
    },
    /// Toggle the "billing same as shipping" checkbox
    SetBillingSameAsShipping(bool),
    /// The customer's saved addresses arrived
    CustomerAddressesLoaded(CustomerAddressBook),
    /// Confirm the dialog
    Submit,
    /// The address update finished
    SubmissionCompleted {
        /// Submit this answers
        submission: SubmissionId,
        /// Server errors or transport failure
        outcome: MutationOutcome,
    },
    /// Time to return the confirm button to its idle look
    ConfirmSettled {
        /// Submit whose result was shown
        submission: SubmissionId,
    },
}

/// Address dialog reducer
#[derive(Clone, Copy, Debug, Default)]
pub struct AddressEditReducer;

impl AddressEditReducer {
    /// Creates a new address dialog reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves both targets and builds the request, or files local errors.
    fn prepare_request(
        state: &mut AddressEditState,
        validator: &dyn AddressValidator,
    ) -> Option<AddressUpdateRequest> {
        let shipping = state.resolve(AddressTarget::Shipping, validator);
        let billing = if state.billing_same_as_shipping {
            None
        } else {
            Some(state.resolve(AddressTarget::Billing, validator))
        };

        state.errors.shipping.local = shipping.as_ref().err().cloned();
        state.errors.billing.local = billing.as_ref().and_then(|b| b.as_ref().err().cloned());

        let shipping_address = shipping.ok()?;
        let billing_address = match billing {
            None => shipping_address.clone(),
            Some(resolved) => resolved.ok()?,
        };

        Some(AddressUpdateRequest {
            order_id: state.order_id.clone(),
            shipping_address,
            billing_address,
        })
    }

    fn submit(state: &mut AddressEditState, env: &AddressEditEnvironment) -> SmallVec<[Effect<AddressEditAction>; 4]> {
        if let Some(pending) = &state.pending {
            tracing::warn!(submission = %pending.id, "submit ignored while a request is in flight");
            return SmallVec::new();
        }

        state.errors.clear_server();
        let Some(request) = Self::prepare_request(state, env.validator.as_ref()) else {
            tracing::debug!(
                shipping = ?state.errors.shipping.local.as_ref().map(AddressError::to_string),
                billing = ?state.errors.billing.local.as_ref().map(AddressError::to_string),
                "address submit blocked by local errors"
            );
            return SmallVec::new();
        };

        let submission = env.submissions.next_id();
        state.pending = Some(PendingSubmission {
            id: submission,
            request: request.clone(),
        });
        state.last_submission = Some(submission);
        state.confirm_state = ConfirmButtonState::Loading;
        tracing::debug!(%submission, order = %request.order_id, "address update sent");

        let mutation = Arc::clone(&env.mutation);
        smallvec![async_effect! {
            let outcome = mutation.update_addresses(request).await;
            Some(AddressEditAction::SubmissionCompleted { submission, outcome })
        }]
    }

    fn complete(
        state: &mut AddressEditState,
        submission: SubmissionId,
        outcome: MutationOutcome,
        env: &AddressEditEnvironment,
    ) -> SmallVec<[Effect<AddressEditAction>; 4]> {
        let Some(pending) = state.pending.take_if(|pending| pending.id == submission) else {
            tracing::debug!(%submission, "stale address update result discarded");
            return SmallVec::new();
        };

        match outcome {
            Ok(errors) if errors.is_empty() => {
                tracing::debug!(%submission, "address update applied");
                state.confirm_state = ConfirmButtonState::Success;
                state.saved = Some(pending.request);
            },
            Ok(errors) => {
                tracing::debug!(%submission, count = errors.len(), "address update rejected");
                for error in errors {
                    state.errors.attach_server(error);
                }
                state.confirm_state = ConfirmButtonState::Error;
            },
            Err(error) => {
                tracing::warn!(%submission, %error, "address update failed");
                state.errors.dialog.push(DialogError::Transport(error));
                state.confirm_state = ConfirmButtonState::Error;
            },
        }

        smallvec![delay! {
            duration: env.confirm_settle,
            action: AddressEditAction::ConfirmSettled { submission }
        }]
    }

    fn edit_field(state: &mut AddressEditState, target: AddressTarget, field: AddressField, value: String) {
        let input = state.target_mut(target);
        input.draft_address.set(field, value);
        if input.mode == AddressInputMode::Uninitialized {
            input.mode = AddressInputMode::NewAddress;
        }
        state.errors.clear_local_field(target, field);
    }
}

impl Reducer for AddressEditReducer {
    type State = AddressEditState;
    type Action = AddressEditAction;
    type Environment = AddressEditEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AddressEditAction::SetMode { target, mode } => {
                state.target_mut(target).mode = mode.into();
            },
            AddressEditAction::SelectExistingAddress { target, id } => {
                let input = state.target_mut(target);
                input.selected_address_id = Some(id);
                if input.mode == AddressInputMode::Uninitialized {
                    input.mode = AddressInputMode::CustomerAddress;
                }
                let errors = state.errors.target_mut(target);
                if matches!(errors.local, Some(AddressError::NoSelection { .. })) {
                    errors.local = None;
                }
            },
            AddressEditAction::EditDraftAddress { target, field, value } => {
                Self::edit_field(state, target, field, value);
            },
            AddressEditAction::SelectCountry { target, code } => {
                Self::edit_field(state, target, AddressField::Country, code);
            },
            AddressEditAction::SetBillingSameAsShipping(same) => {
                state.billing_same_as_shipping = same;
            },
            AddressEditAction::CustomerAddressesLoaded(book) => {
                state.customer_addresses = Some(book);
                state.apply_customer_defaults();
            },
            AddressEditAction::Submit => return Self::submit(state, env),
            AddressEditAction::SubmissionCompleted { submission, outcome } => {
                return Self::complete(state, submission, outcome, env);
            },
            AddressEditAction::ConfirmSettled { submission } => {
                if state.pending.is_none() && state.last_submission == Some(submission) {
                    state.confirm_state = ConfirmButtonState::Default;
                }
            },
        }

        SmallVec::new()
    }
}
