//! Event field constants and validation.
//!
//! Valid status/category values and length/range limits enforced at write
//! time. The migrations carry matching CHECK constraints; these functions
//! exist so violations surface as `Validation` errors with a field-level
//! message instead of opaque database errors.

use crate::error::CoreError;

/// Maximum length for an event name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for an event description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length for an event location.
pub const MAX_LOCATION_LENGTH: usize = 200;

/// All valid event status values.
pub const VALID_STATUSES: &[&str] = &["pending", "completed", "shared"];

/// All valid event category values.
pub const VALID_CATEGORIES: &[&str] = &[
    "birthday",
    "anniversary",
    "wedding",
    "graduation",
    "holiday",
    "other",
];

/// Validate an event name: required, non-blank, bounded length.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Event name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Event name cannot exceed {MAX_NAME_LENGTH} characters"
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

pub fn validate_location(location: &str) -> Result<(), CoreError> {
    if location.chars().count() > MAX_LOCATION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Location cannot exceed {MAX_LOCATION_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid event status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid event category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

/// Validate an event budget. Rejects negative and non-finite values.
pub fn validate_budget(budget: f64) -> Result<(), CoreError> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(CoreError::Validation(
            "Budget cannot be negative".to_string(),
        ));
    }
    Ok(())
}
