//! Address domain types shared by the dialog, the page and the collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a draft order
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new `OrderId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a saved customer address
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(String);

impl AddressId {
    /// Creates a new `AddressId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the order's two addresses is meant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressTarget {
    /// Shipping address
    Shipping,
    /// Billing address
    Billing,
}

impl AddressTarget {
    /// Both targets, shipping first.
    pub const ALL: [Self; 2] = [Self::Shipping, Self::Billing];

    /// The mutation input field carrying this address.
    #[must_use]
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Shipping => "shippingAddress",
            Self::Billing => "billingAddress",
        }
    }
}

impl fmt::Display for AddressTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shipping => f.write_str("shipping"),
            Self::Billing => f.write_str("billing"),
        }
    }
}

/// The two ways of providing an address
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressInputOption {
    /// Use one of the customer's saved addresses
    CustomerAddress,
    /// Type a new address
    NewAddress,
}

/// Input mode of one target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressInputMode {
    /// Nothing chosen yet
    #[default]
    Uninitialized,
    /// A saved customer address is (to be) selected
    CustomerAddress,
    /// A new address is being typed
    NewAddress,
}

impl From<AddressInputOption> for AddressInputMode {
    fn from(option: AddressInputOption) -> Self {
        match option {
            AddressInputOption::CustomerAddress => Self::CustomerAddress,
            AddressInputOption::NewAddress => Self::NewAddress,
        }
    }
}

/// A single field of an address form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Company name
    CompanyName,
    /// First street line
    StreetAddress1,
    /// Second street line
    StreetAddress2,
    /// City
    City,
    /// City area / district
    CityArea,
    /// Postal code
    PostalCode,
    /// ISO country code
    Country,
    /// Country area / state
    CountryArea,
    /// Phone number
    Phone,
}

impl AddressField {
    /// Every field, in form order.
    pub const ALL: [Self; 11] = [
        Self::FirstName,
        Self::LastName,
        Self::CompanyName,
        Self::StreetAddress1,
        Self::StreetAddress2,
        Self::City,
        Self::CityArea,
        Self::PostalCode,
        Self::Country,
        Self::CountryArea,
        Self::Phone,
    ];

    /// The field name used by the API.
    #[must_use]
    pub const fn api_name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::CompanyName => "companyName",
            Self::StreetAddress1 => "streetAddress1",
            Self::StreetAddress2 => "streetAddress2",
            Self::City => "city",
            Self::CityArea => "cityArea",
            Self::PostalCode => "postalCode",
            Self::Country => "country",
            Self::CountryArea => "countryArea",
            Self::Phone => "phone",
        }
    }

    /// Parses an API field name.
    #[must_use]
    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.api_name() == name)
    }
}

/// An address as sent to and received from the API
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Company name
    pub company_name: String,
    /// First street line
    pub street_address_1: String,
    /// Second street line
    pub street_address_2: String,
    /// City
    pub city: String,
    /// City area / district
    pub city_area: String,
    /// Postal code
    pub postal_code: String,
    /// ISO country code
    pub country: String,
    /// Country area / state
    pub country_area: String,
    /// Phone number
    pub phone: String,
}

impl AddressInput {
    /// Reads one field.
    #[must_use]
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::FirstName => &self.first_name,
            AddressField::LastName => &self.last_name,
            AddressField::CompanyName => &self.company_name,
            AddressField::StreetAddress1 => &self.street_address_1,
            AddressField::StreetAddress2 => &self.street_address_2,
            AddressField::City => &self.city,
            AddressField::CityArea => &self.city_area,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Country => &self.country,
            AddressField::CountryArea => &self.country_area,
            AddressField::Phone => &self.phone,
        }
    }

    /// Mutable access to one field.
    pub fn field_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::FirstName => &mut self.first_name,
            AddressField::LastName => &mut self.last_name,
            AddressField::CompanyName => &mut self.company_name,
            AddressField::StreetAddress1 => &mut self.street_address_1,
            AddressField::StreetAddress2 => &mut self.street_address_2,
            AddressField::City => &mut self.city,
            AddressField::CityArea => &mut self.city_area,
            AddressField::PostalCode => &mut self.postal_code,
            AddressField::Country => &mut self.country,
            AddressField::CountryArea => &mut self.country_area,
            AddressField::Phone => &mut self.phone,
        }
    }

    /// Replaces one field.
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// Returns this address with one field replaced.
    #[must_use]
    pub fn with(mut self, field: AddressField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// A saved address of the order's customer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddress {
    /// Address id
    pub id: AddressId,
    /// The address itself
    pub address: AddressInput,
}

/// The customer's saved addresses and defaults
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressBook {
    /// Saved addresses
    pub addresses: Vec<CustomerAddress>,
    /// Default shipping address id
    pub default_shipping: Option<AddressId>,
    /// Default billing address id
    pub default_billing: Option<AddressId>,
}

impl CustomerAddressBook {
    /// Looks up a saved address.
    #[must_use]
    pub fn get(&self, id: &AddressId) -> Option<&CustomerAddress> {
        self.addresses.iter().find(|address| &address.id == id)
    }

    /// The default for `target`, if it names a saved address.
    #[must_use]
    pub fn default_for(&self, target: AddressTarget) -> Option<&CustomerAddress> {
        let id = match target {
            AddressTarget::Shipping => self.default_shipping.as_ref(),
            AddressTarget::Billing => self.default_billing.as_ref(),
        }?;
        self.get(id)
    }
}

/// A country the shop ships to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    /// Display name
    pub label: String,
}

impl Country {
    /// Creates a new country entry
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// The order's current addresses
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAddresses {
    /// Shipping address, if set
    pub shipping: Option<AddressInput>,
    /// Billing address, if set
    pub billing: Option<AddressInput>,
}

impl OrderAddresses {
    /// The address for `target`.
    #[must_use]
    pub const fn get(&self, target: AddressTarget) -> Option<&AddressInput> {
        match target {
            AddressTarget::Shipping => self.shipping.as_ref(),
            AddressTarget::Billing => self.billing.as_ref(),
        }
    }
}
