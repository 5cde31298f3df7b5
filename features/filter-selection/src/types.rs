//! Filter domain types.
//!
//! A [`FilterMenu`] is the committed filter set a page supplies; the popover
//! edits a draft copy of its [`FilterElement`]s and hands the draft back on
//! submit.

use crate::error::FilterError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Lower and upper bound of a range filter; either may be unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRange<T> {
    /// Inclusive lower bound
    pub min: Option<T>,
    /// Inclusive upper bound
    pub max: Option<T>,
}

impl<T: PartialOrd> FilterRange<T> {
    /// Creates a range from optional bounds.
    #[must_use]
    pub const fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    /// Creates a range with neither bound set.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// At least one bound is set, and `min <= max` when both are.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match (&self.min, &self.max) {
            (None, None) => false,
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }
}

/// The kind of a filter element, fixed by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// Free text
    Text,
    /// Multi-choice
    Options,
    /// Yes/no
    Boolean,
    /// Date range
    DateRange,
    /// Price range
    PriceRange,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Options => "options",
            Self::Boolean => "boolean",
            Self::DateRange => "date range",
            Self::PriceRange => "price range",
        };
        f.write_str(name)
    }
}

/// Value of a filter element, discriminated by kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    /// Free text; must not be blank
    Text(String),
    /// Selected choices; at least one
    Options(Vec<String>),
    /// Chosen flag; must be chosen
    Boolean(Option<bool>),
    /// Date bounds
    DateRange(FilterRange<NaiveDate>),
    /// Price bounds in minor currency units
    PriceRange(FilterRange<u64>),
}

impl FilterValue {
    /// The kind this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::Text(_) => FilterKind::Text,
            Self::Options(_) => FilterKind::Options,
            Self::Boolean(_) => FilterKind::Boolean,
            Self::DateRange(_) => FilterKind::DateRange,
            Self::PriceRange(_) => FilterKind::PriceRange,
        }
    }

    /// Whether this value is acceptable for an active filter.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::Options(choices) => !choices.is_empty(),
            Self::Boolean(choice) => choice.is_some(),
            Self::DateRange(range) => range.is_valid(),
            Self::PriceRange(range) => range.is_valid(),
        }
    }
}

/// One named filter with its on/off flag and current value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterElement {
    /// Unique key within a menu
    pub name: String,
    /// Whether the filter applies
    pub active: bool,
    /// Current value
    pub value: FilterValue,
}

impl FilterElement {
    /// Creates an inactive filter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: FilterValue) -> Self {
        Self {
            name: name.into(),
            active: false,
            value,
        }
    }

    /// Returns this filter switched on.
    #[must_use]
    pub fn activated(mut self) -> Self {
        self.active = true;
        self
    }

    /// The kind of this filter's value.
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        self.value.kind()
    }

    /// Inactive filters are always valid; active ones defer to their value.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.active || self.value.is_valid()
    }
}

/// The committed, name-unique, ordered filter set of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FilterElement>", into = "Vec<FilterElement>")]
pub struct FilterMenu {
    elements: Vec<FilterElement>,
}

impl FilterMenu {
    /// Builds a menu, rejecting repeated names.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::DuplicateName`] for the first name seen twice.
    pub fn new(elements: Vec<FilterElement>) -> Result<Self, FilterError> {
        let mut seen = HashSet::with_capacity(elements.len());
        for element in &elements {
            if !seen.insert(element.name.as_str()) {
                return Err(FilterError::DuplicateName {
                    name: element.name.clone(),
                });
            }
        }
        Ok(Self { elements })
    }

    /// The elements in menu order.
    #[must_use]
    pub fn elements(&self) -> &[FilterElement] {
        &self.elements
    }

    /// Looks up an element by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterElement> {
        self.elements.iter().find(|element| element.name == name)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` for a menu with no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether any committed filter is active.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.elements.iter().any(|element| element.active)
    }
}

impl TryFrom<Vec<FilterElement>> for FilterMenu {
    type Error = FilterError;

    fn try_from(elements: Vec<FilterElement>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl From<FilterMenu> for Vec<FilterElement> {
    fn from(menu: FilterMenu) -> Self {
        menu.elements
    }
}

/// A partial update for one draft element.
///
/// Unset fields are left as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    /// New on/off flag
    pub active: Option<bool>,
    /// New value; must match the element's kind
    pub value: Option<FilterValue>,
}

impl FilterUpdate {
    /// Switches the filter on or off.
    #[must_use]
    pub const fn active(active: bool) -> Self {
        Self {
            active: Some(active),
            value: None,
        }
    }

    /// Replaces the value only.
    #[must_use]
    pub const fn value(value: FilterValue) -> Self {
        Self {
            active: None,
            value: Some(value),
        }
    }

    /// Switches the filter on and replaces its value.
    #[must_use]
    pub const fn activate_with(value: FilterValue) -> Self {
        Self {
            active: Some(true),
            value: Some(value),
        }
    }
}
