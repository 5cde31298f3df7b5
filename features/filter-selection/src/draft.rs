//! Pure operations over a filter draft.
//!
//! The draft is the popover's working copy of the menu. Every operation
//! takes a snapshot and returns a new one; the reducer decides what to keep.

use crate::error::FilterError;
use crate::types::{FilterElement, FilterMenu, FilterUpdate};

/// Builds a draft with one element per menu entry, in menu order.
#[must_use]
pub fn initialize(menu: &FilterMenu) -> Vec<FilterElement> {
    menu.elements().to_vec()
}

/// Discards all edits: the draft becomes [`initialize`] of the menu again.
#[must_use]
pub fn reset(menu: &FilterMenu) -> Vec<FilterElement> {
    initialize(menu)
}

/// Applies `update` to the element called `name`.
///
/// Every other element is carried over unchanged and order is preserved.
///
/// # Errors
///
/// - [`FilterError::NotFound`] when no element has that name
/// - [`FilterError::KindMismatch`] when the update's value is of another kind
pub fn dispatch(
    draft: &[FilterElement],
    name: &str,
    update: FilterUpdate,
) -> Result<Vec<FilterElement>, FilterError> {
    let index = draft
        .iter()
        .position(|element| element.name == name)
        .ok_or_else(|| FilterError::NotFound {
            name: name.to_string(),
        })?;

    let current = &draft[index];
    if let Some(actual) = update.value.as_ref().map(crate::types::FilterValue::kind) {
        if actual != current.kind() {
            return Err(FilterError::KindMismatch {
                name: name.to_string(),
                expected: current.kind(),
                actual,
            });
        }
    }

    let mut next = draft.to_vec();
    let element = &mut next[index];
    if let Some(active) = update.active {
        element.active = active;
    }
    if let Some(value) = update.value {
        element.value = value;
    }
    Ok(next)
}

/// A draft partitioned by validity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// Elements that pass their kind's predicate, in draft order
    pub valid: Vec<FilterElement>,
    /// Names of the elements that do not, in draft order
    pub invalid_names: Vec<String>,
}

impl Validation {
    /// Returns `true` when nothing is invalid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_names.is_empty()
    }
}

/// Partitions the draft by [`FilterElement::is_valid`].
#[must_use]
pub fn validate(draft: &[FilterElement]) -> Validation {
    let mut validation = Validation::default();
    for element in draft {
        if element.is_valid() {
            validation.valid.push(element.clone());
        } else {
            validation.invalid_names.push(element.name.clone());
        }
    }
    validation
}

/// Counts the menu's filters that are active in the draft.
///
/// Menu names missing from the draft count as inactive.
#[must_use]
pub fn active_count(menu: &FilterMenu, draft: &[FilterElement]) -> usize {
    menu.elements()
        .iter()
        .filter(|entry| {
            draft
                .iter()
                .any(|element| element.name == entry.name && element.active)
        })
        .count()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::{FilterKind, FilterRange, FilterValue};

    fn menu() -> FilterMenu {
        FilterMenu::new(vec![
            FilterElement::new("price", FilterValue::PriceRange(FilterRange::unbounded())),
            FilterElement::new("query", FilterValue::Text(String::new())),
            FilterElement::new("status", FilterValue::Options(vec!["READY".into()])).activated(),
        ])
        .unwrap()
    }

    #[test]
    fn price_range_without_bounds_is_invalid() {
        let draft = initialize(&menu());
        let draft = dispatch(
            &draft,
            "price",
            FilterUpdate::activate_with(FilterValue::PriceRange(FilterRange::unbounded())),
        )
        .unwrap();

        let validation = validate(&draft);

        assert_eq!(validation.invalid_names, vec!["price".to_string()]);
        assert_eq!(validation.valid.len(), 2);
    }

    #[test]
    fn dispatch_unknown_name_fails() {
        let draft = initialize(&menu());

        let result = dispatch(&draft, "customer", FilterUpdate::active(true));

        assert_eq!(
            result,
            Err(FilterError::NotFound {
                name: "customer".into()
            })
        );
    }

    #[test]
    fn dispatch_rejects_other_kind() {
        let draft = initialize(&menu());

        let result = dispatch(
            &draft,
            "query",
            FilterUpdate::value(FilterValue::Boolean(Some(true))),
        );

        assert_eq!(
            result,
            Err(FilterError::KindMismatch {
                name: "query".into(),
                expected: FilterKind::Text,
                actual: FilterKind::Boolean,
            })
        );
    }

    #[test]
    fn value_only_update_keeps_flag() {
        let draft = initialize(&menu());

        let draft = dispatch(
            &draft,
            "status",
            FilterUpdate::value(FilterValue::Options(vec!["DRAFT".into()])),
        )
        .unwrap();

        assert!(draft[2].active);
        assert_eq!(draft[2].value, FilterValue::Options(vec!["DRAFT".into()]));
    }

    #[test]
    fn active_count_folds_over_menu_names() {
        let menu = menu();
        let draft = dispatch(&initialize(&menu), "query", FilterUpdate::active(true)).unwrap();

        assert_eq!(active_count(&menu, &draft), 2);
        assert_eq!(active_count(&menu, &[]), 0);
    }
}
