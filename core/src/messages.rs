//! Message descriptors and the injected message catalog
//!
//! Labels shown by dialogs and popovers are declared as [`MessageDescriptor`]
//! constants next to the feature that uses them. They are resolved at render
//! time through a [`MessageCatalog`] passed in by the caller, so no feature
//! holds a process-wide registry.
//!
//! Templates use named `{placeholder}` arguments:
//!
//! ```
//! use dashboard_core::messages::{DefaultCatalog, MessageCatalog, MessageDescriptor};
//!
//! const TITLE: MessageDescriptor = MessageDescriptor::new(
//!     "plugins.channelConfig.title",
//!     "This plugin is active in {activeChannelsCount}/{allChannelsCount} channels",
//!     "channel configuration popup title",
//! );
//!
//! let title = DefaultCatalog.format(
//!     &TITLE,
//!     &[("activeChannelsCount", "2".to_string()), ("allChannelsCount", "3".to_string())],
//! );
//! assert_eq!(title, "This plugin is active in 2/3 channels");
//! ```

use serde::Serialize;
use std::collections::HashMap;

/// A translatable message: a stable id plus the default (source-language) text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct MessageDescriptor {
    /// Stable message id, used as the catalog key
    pub id: &'static str,
    /// Text used when the catalog has no translation
    pub default_message: &'static str,
    /// Context for translators
    pub description: &'static str,
}

impl MessageDescriptor {
    /// Declares a message.
    #[must_use]
    pub const fn new(
        id: &'static str,
        default_message: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            default_message,
            description,
        }
    }
}

/// Resolves messages to display strings.
pub trait MessageCatalog: Send + Sync {
    /// Resolve `message` with named arguments substituted into its template.
    fn format(&self, message: &MessageDescriptor, args: &[(&str, String)]) -> String;

    /// Resolve a message that takes no arguments.
    fn message(&self, message: &MessageDescriptor) -> String {
        self.format(message, &[])
    }
}

/// Catalog that always renders the default message.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn format(&self, message: &MessageDescriptor, args: &[(&str, String)]) -> String {
        interpolate(message.default_message, args)
    }
}

/// Catalog backed by a map of message id to translated template.
///
/// Ids missing from the map fall back to the descriptor's default message.
#[derive(Clone, Debug, Default)]
pub struct TranslationCatalog {
    templates: HashMap<String, String>,
}

impl TranslationCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the translated template for `id`.
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(id.into(), template.into());
        self
    }

    /// Number of translated templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns `true` when nothing is translated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<(String, String)> for TranslationCatalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl MessageCatalog for TranslationCatalog {
    fn format(&self, message: &MessageDescriptor, args: &[(&str, String)]) -> String {
        let template = self
            .templates
            .get(message.id)
            .map_or(message.default_message, String::as_str);
        interpolate(template, args)
    }
}

/// Substitutes `{name}` placeholders with the matching argument.
///
/// Placeholders without a matching argument are kept verbatim, as is an
/// unterminated `{`.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            },
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: MessageDescriptor =
        MessageDescriptor::new("test.greeting", "Draft Order #{orderNumber}", "window title");

    #[test]
    fn default_catalog_interpolates() {
        let text = DefaultCatalog.format(&GREETING, &[("orderNumber", "42".to_string())]);
        assert_eq!(text, "Draft Order #42");
    }

    #[test]
    fn missing_argument_is_left_in_place() {
        assert_eq!(DefaultCatalog.message(&GREETING), "Draft Order #{orderNumber}");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        assert_eq!(interpolate("a {b", &[("b", "x".into())]), "a {b");
        assert_eq!(interpolate("{a}{b}", &[("a", "1".into()), ("b", "2".into())]), "12");
    }

    #[test]
    fn translation_overrides_default() {
        let catalog = TranslationCatalog::new().with("test.greeting", "Szkic zamówienia #{orderNumber}");

        assert_eq!(
            catalog.format(&GREETING, &[("orderNumber", "7".to_string())]),
            "Szkic zamówienia #7"
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn translation_falls_back_to_default() {
        let catalog = TranslationCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.format(&GREETING, &[("orderNumber", "7".to_string())]),
            "Draft Order #7"
        );
    }
}
