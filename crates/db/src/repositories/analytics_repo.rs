//! Repository for the `analytics_events` table.

use sqlx::PgPool;

use crate::models::analytics::{AnalyticsEvent, CreateAnalyticsEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_type, user_id, user_email, user_type, page, user_agent, created_at";

/// Write-only collector for login/pageview counts.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Record one collector event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnalyticsEvent,
    ) -> Result<AnalyticsEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO analytics_events
                (event_type, user_id, user_email, user_type, page, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnalyticsEvent>(&query)
            .bind(&input.event_type)
            .bind(input.user_id)
            .bind(&input.user_email)
            .bind(&input.user_type)
            .bind(&input.page)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }
}
