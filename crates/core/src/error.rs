//! Domain error taxonomy shared by the db and api crates.

use crate::types::DbId;

/// Error produced by domain validation and the event access evaluator.
///
/// Nothing in this crate knows about HTTP; the api crate maps each variant
/// onto a status code and a stable error code string.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An event, gift, or user addressed by id does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A field failed one of the `validate_*` rules (length, range, or a
    /// value outside a constant list).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write collides with existing state, e.g. a duplicate email or an
    /// event already shared with the target user.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The caller's identity could not be established (missing, invalid, or
    /// expired credentials).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is known but their grants do not cover the action; see
    /// [`crate::access::authorize`].
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invariant breakage that callers cannot act on, e.g. a stored share
    /// role outside the known set.
    #[error("Internal error: {0}")]
    Internal(String),
}
