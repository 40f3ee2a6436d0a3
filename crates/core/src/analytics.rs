//! Analytics collector constants and validation.
//!
//! The collector is write-only: it records login/pageview counts for the
//! dashboard frontend. Aggregation queries are out of scope.

use crate::error::CoreError;

/// All valid analytics event types.
pub const VALID_EVENT_TYPES: &[&str] =
    &["login", "register", "demo_login", "logout", "page_view"];

/// All valid user type values.
pub const VALID_USER_TYPES: &[&str] = &["demo", "registered"];

pub fn validate_event_type(event_type: &str) -> Result<(), CoreError> {
    if VALID_EVENT_TYPES.contains(&event_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid analytics event type '{event_type}'. Must be one of: {}",
            VALID_EVENT_TYPES.join(", ")
        )))
    }
}

pub fn validate_user_type(user_type: &str) -> Result<(), CoreError> {
    if VALID_USER_TYPES.contains(&user_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid analytics user type '{user_type}'. Must be one of: {}",
            VALID_USER_TYPES.join(", ")
        )))
    }
}
