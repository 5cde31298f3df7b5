//! Filter popover messages and per-filter error labels.

use dashboard_core::messages::{MessageCatalog, MessageDescriptor};
use std::collections::HashMap;

/// Label of the button that opens the popover.
pub const FILTERS_BUTTON: MessageDescriptor =
    MessageDescriptor::new("filter.button.label", "Filters", "button");

/// Fallback error label for a filter without a dedicated message.
pub const INVALID_FILTER: MessageDescriptor = MessageDescriptor::new(
    "filter.error.invalid",
    "Invalid value for {name}",
    "filter error, generic",
);

/// Error messages keyed by filter name, supplied by the page.
#[derive(Clone, Debug, Default)]
pub struct FilterErrorMessages {
    by_name: HashMap<String, MessageDescriptor>,
}

impl FilterErrorMessages {
    /// Creates an empty set; every filter falls back to [`INVALID_FILTER`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the message shown when `name` is invalid.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, message: MessageDescriptor) -> Self {
        self.by_name.insert(name.into(), message);
        self
    }

    /// The descriptor for `name`, if the page provided one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MessageDescriptor> {
        self.by_name.get(name)
    }

    /// Resolves one label per invalid name, in order.
    ///
    /// Every message receives the filter name as the `{name}` argument.
    #[must_use]
    pub fn labels(&self, invalid_names: &[String], catalog: &dyn MessageCatalog) -> Vec<String> {
        invalid_names
            .iter()
            .map(|name| {
                let message = self.get(name).unwrap_or(&INVALID_FILTER);
                catalog.format(message, &[("name", name.clone())])
            })
            .collect()
    }
}
