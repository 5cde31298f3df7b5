//! Declarative macros for ergonomic effect construction
//!
//! These macros reduce boilerplate when a reducer describes a collaborator
//! call or a delayed follow-up action.

/// Create an `Effect::Future` from an async block
///
/// # Example
///
/// ```rust,ignore
/// use dashboard_core::async_effect;
///
/// let mutation = Arc::clone(&env.mutation);
/// async_effect! {
///     let outcome = mutation.update_addresses(request).await;
///     Some(AddressEditAction::SubmissionCompleted { submission, outcome })
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}

/// Create an `Effect::Delay` for scheduling delayed actions
///
/// # Example
///
/// ```rust,ignore
/// use dashboard_core::delay;
/// use std::time::Duration;
///
/// delay! {
///     duration: Duration::from_secs(3),
///     action: AddressEditAction::ConfirmSettled { submission }
/// }
/// ```
#[macro_export]
macro_rules! delay {
    (
        duration: $duration:expr,
        action: $action:expr
    ) => {
        $crate::effect::Effect::Delay {
            duration: $duration,
            action: ::std::boxed::Box::new($action),
        }
    };
}

/// Create an `Effect::Future` that runs a side-effecting callback and produces no action
///
/// # Example
///
/// ```rust,ignore
/// use dashboard_core::callback_effect;
///
/// let handler = Arc::clone(&env.submit_handler);
/// callback_effect!(move || handler.filters_submitted(filters))
/// ```
#[macro_export]
macro_rules! callback_effect {
    ($callback:expr) => {
        $crate::effect::Effect::Future(::std::boxed::Box::pin(async move {
            ($callback)();
            None
        }))
    };
}
