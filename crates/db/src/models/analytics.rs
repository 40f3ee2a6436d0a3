//! Analytics collector model and DTO.

use heartboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A collector row from the `analytics_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnalyticsEvent {
    pub id: DbId,
    pub event_type: String,
    /// Absent for demo users.
    pub user_id: Option<DbId>,
    pub user_email: Option<String>,
    pub user_type: String,
    pub page: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording one collector event.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackEvent {
    pub event_type: String,
    pub user_id: Option<DbId>,
    pub user_email: Option<String>,
    pub user_type: String,
    pub page: Option<String>,
}

/// Internal insert shape: [`TrackEvent`] plus request-derived fields.
#[derive(Debug, Clone)]
pub struct CreateAnalyticsEvent {
    pub event_type: String,
    pub user_id: Option<DbId>,
    pub user_email: Option<String>,
    pub user_type: String,
    pub page: Option<String>,
    pub user_agent: Option<String>,
}
