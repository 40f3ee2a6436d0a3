//! Event entity models and DTOs.

use heartboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub date: Timestamp,
    pub description: Option<String>,
    pub status: String,
    pub category: String,
    pub is_public: bool,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    /// Uploaded attachment descriptors (`public_id`, `url`, `type`).
    pub attachments: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A share entry row from the `event_shares` table.
///
/// Entries are returned in insertion order; a user appears at most once per
/// event (unique constraint). The event owner is never a member.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventShare {
    pub id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
}

/// An event row with aggregated gift statistics, used by the list endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventWithStats {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub date: Timestamp,
    pub description: Option<String>,
    pub status: String,
    pub category: String,
    pub is_public: bool,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub attachments: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub gift_total: i64,
    pub gift_completed: i64,
    pub gift_pending: i64,
    pub total_spent: f64,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub date: Timestamp,
    pub description: Option<String>,
    /// Defaults to `pending` if omitted.
    pub status: Option<String>,
    /// Defaults to `other` if omitted.
    pub category: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    pub budget: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub date: Option<Timestamp>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub is_public: Option<bool>,
    pub budget: Option<f64>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Sort order accepted by the event list endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventSort {
    /// Event date ascending (soonest first).
    #[default]
    Date,
    /// Event name ascending.
    Name,
    /// Creation time descending (newest first).
    Created,
}

/// Filter applied by [`crate::repositories::EventRepo::list_owned`].
#[derive(Debug, Clone, Default)]
pub struct EventListFilter {
    pub status: Option<String>,
    pub category: Option<String>,
    /// Case-insensitive substring match against name OR description.
    pub search: Option<String>,
    pub sort: EventSort,
}
