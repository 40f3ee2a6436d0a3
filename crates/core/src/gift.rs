//! Gift field constants and validation.

use crate::error::CoreError;

/// Maximum length for a gift name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for a gift description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length for gift notes.
pub const MAX_NOTES_LENGTH: usize = 1000;

/// All valid gift status values.
pub const VALID_STATUSES: &[&str] = &["planned", "purchased", "wrapped", "delivered", "received"];

/// All valid gift currency codes.
pub const VALID_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD"];

/// All valid gift priority values.
pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];

/// Validate a gift name: required, non-blank, bounded length.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Gift name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Gift name cannot exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description cannot exceed {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_notes(notes: &str) -> Result<(), CoreError> {
    if notes.chars().count() > MAX_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "Notes cannot exceed {MAX_NOTES_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a gift price. Rejects negative and non-finite values.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::Validation("Price cannot be negative".to_string()));
    }
    Ok(())
}

/// Validate an external link: must be an http or https URL when present.
pub fn validate_link(link: &str) -> Result<(), CoreError> {
    let valid = (link.starts_with("http://") && link.len() > "http://".len())
        || (link.starts_with("https://") && link.len() > "https://".len());
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please provide a valid URL".to_string(),
        ))
    }
}

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid gift status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

pub fn validate_currency(currency: &str) -> Result<(), CoreError> {
    if VALID_CURRENCIES.contains(&currency) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid currency '{currency}'. Must be one of: {}",
            VALID_CURRENCIES.join(", ")
        )))
    }
}

pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid priority '{priority}'. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        )))
    }
}
