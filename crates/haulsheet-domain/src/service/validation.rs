//! Driver form validation

use std::sync::LazyLock;

use regex::Regex;

use haulsheet_types::ValidationError;

use crate::model::schema::DRIVER_FIELDS;
use crate::model::Driver;

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Check a driver record before it is saved to the roster.
///
/// Rules are checked in order and the first failure is returned.
pub fn validate_driver(driver: &Driver) -> Result<(), ValidationError> {
    for descriptor in DRIVER_FIELDS.iter().filter(|f| f.required) {
        let value = driver.field(descriptor.key).unwrap_or_default();
        if value.trim().is_empty() {
            return Err(ValidationError::MissingRequired(descriptor.label));
        }
    }

    if !PHONE_PATTERN.is_match(driver.phone.trim()) {
        return Err(ValidationError::InvalidPhone);
    }

    if let Some(email) = driver.email.as_deref() {
        let email = email.trim();
        if !email.is_empty() && !EMAIL_PATTERN.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
    }

    if !DATE_PATTERN.is_match(driver.birth_date.trim()) {
        return Err(ValidationError::InvalidBirthDate);
    }

    Ok(())
}
