//! Gift entity model and DTOs.

use heartboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A gift row from the `gifts` table.
///
/// `created_by` records the acting user at creation time for audit; it does
/// not confer extra rights beyond what the parent event's grants allow.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gift {
    pub id: DbId,
    pub event_id: DbId,
    pub created_by: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub currency: String,
    pub link: Option<String>,
    pub status: String,
    pub priority: String,
    pub is_done: bool,
    pub purchased_by: Option<DbId>,
    pub purchased_at: Option<Timestamp>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub recipient_name: Option<String>,
    pub recipient_relationship: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_tracking: Option<String>,
    pub shipping_estimated_delivery: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gift.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGift {
    pub event_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Defaults to `USD` if omitted.
    pub currency: Option<String>,
    pub link: Option<String>,
    /// Defaults to `planned` if omitted.
    pub status: Option<String>,
    /// Defaults to `medium` if omitted.
    pub priority: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub recipient_name: Option<String>,
    pub recipient_relationship: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_tracking: Option<String>,
    pub shipping_estimated_delivery: Option<Timestamp>,
}

/// DTO for updating an existing gift. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGift {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub link: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
    pub recipient_name: Option<String>,
    pub recipient_relationship: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_tracking: Option<String>,
    pub shipping_estimated_delivery: Option<Timestamp>,
}
