//! Local address validation.
//!
//! Runs synchronously on submit, before any request is made. The
//! [`RequiredFieldsValidator`] is the default; pages with stricter
//! per-country rules inject their own [`AddressValidator`].

use crate::error::{AddressErrorCode, AddressFieldError};
use crate::types::{AddressField, AddressInput, Country};

/// Checks a new-address draft and normalizes it for the API.
pub trait AddressValidator: Send + Sync {
    /// Returns the normalized address, or every field error found.
    ///
    /// # Errors
    ///
    /// Returns the failing fields, in form order.
    fn validate(
        &self,
        draft: &AddressInput,
        countries: &[Country],
    ) -> Result<AddressInput, Vec<AddressFieldError>>;
}

/// Requires street, city, postal code and a shop country.
///
/// Values are trimmed; country and postal code are upper-cased.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequiredFieldsValidator;

impl RequiredFieldsValidator {
    const REQUIRED: [AddressField; 4] = [
        AddressField::StreetAddress1,
        AddressField::City,
        AddressField::PostalCode,
        AddressField::Country,
    ];
}

impl AddressValidator for RequiredFieldsValidator {
    fn validate(
        &self,
        draft: &AddressInput,
        countries: &[Country],
    ) -> Result<AddressInput, Vec<AddressFieldError>> {
        let mut normalized = AddressInput::default();
        for field in AddressField::ALL {
            let value = draft.get(field).trim();
            let value = match field {
                AddressField::Country | AddressField::PostalCode => value.to_uppercase(),
                _ => value.to_string(),
            };
            normalized.set(field, value);
        }

        let mut errors: Vec<AddressFieldError> = Self::REQUIRED
            .into_iter()
            .filter(|field| normalized.get(*field).is_empty())
            .map(|field| AddressFieldError::new(field, AddressErrorCode::Required))
            .collect();

        let country = normalized.country.as_str();
        if !country.is_empty()
            && !countries.is_empty()
            && !countries.iter().any(|known| known.code.eq_ignore_ascii_case(country))
        {
            errors.push(AddressFieldError::new(
                AddressField::Country,
                AddressErrorCode::UnknownCountry,
            ));
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            errors.sort_by_key(|error| error.field);
            Err(errors)
        }
    }
}
